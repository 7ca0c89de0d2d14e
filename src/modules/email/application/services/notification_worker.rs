use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tracing::{error, info, warn};

use crate::email::application::domain::NotificationJob;
use crate::email::application::ports::outgoing::EmailSender;
use crate::submission::application::domain::entities::Submission;
use crate::submission::application::ports::outgoing::SubmissionNotifier;

pub const DEFAULT_QUEUE_CAPACITY: usize = 256;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_BACKOFF: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_IN_FLIGHT: usize = 16;

//
// ──────────────────────────────────────────────────────────
// Dispatcher (request side)
// ──────────────────────────────────────────────────────────
//

/// Cloneable handle used by request handlers. Never blocks and never fails the caller.
#[derive(Clone, Debug)]
pub struct NotificationDispatcher {
    tx: mpsc::Sender<NotificationJob>,
}

impl NotificationDispatcher {
    pub fn dispatch(&self, job: NotificationJob) {
        match self.tx.try_send(job) {
            Ok(()) => {}
            Err(TrySendError::Full(job)) => {
                warn!(to = %job.recipient(), "Notification queue full, dropping job");
            }
            Err(TrySendError::Closed(job)) => {
                error!(to = %job.recipient(), "Notification worker stopped, dropping job");
            }
        }
    }
}

impl SubmissionNotifier for NotificationDispatcher {
    fn submission_received(&self, submission: &Submission) {
        self.dispatch(NotificationJob::SubmissionConfirmation {
            to: submission.email.clone(),
            first_name: submission.first_name.clone(),
            submission_id: submission.id,
        });
    }
}

//
// ──────────────────────────────────────────────────────────
// Worker
// ──────────────────────────────────────────────────────────
//

pub struct NotificationWorker {
    rx: mpsc::Receiver<NotificationJob>,
    sender: Arc<dyn EmailSender>,
    max_attempts: u32,
    base_backoff: Duration,
    max_in_flight: usize,
}

impl NotificationWorker {
    pub fn new(sender: Arc<dyn EmailSender>, capacity: usize) -> (Self, NotificationDispatcher) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let worker = Self {
            rx,
            sender,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_backoff: DEFAULT_BASE_BACKOFF,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        };
        (worker, NotificationDispatcher { tx })
    }

    pub fn with_retry(mut self, max_attempts: u32, base_backoff: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.base_backoff = base_backoff;
        self
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Drains the queue until every dispatcher is dropped, then waits for
    /// deliveries still in flight. At most `max_in_flight` deliveries run at once.
    pub async fn run(mut self) {
        info!(max_in_flight = self.max_in_flight, "Notification worker started");

        let permits = Arc::new(Semaphore::new(self.max_in_flight));
        let mut deliveries = JoinSet::new();

        loop {
            tokio::select! {
                received = self.rx.recv() => {
                    let Some(job) = received else { break };

                    // Never closed, so acquiring only waits for a free slot.
                    let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
                        break;
                    };
                    let sender = self.sender.clone();
                    let (max_attempts, base_backoff) = (self.max_attempts, self.base_backoff);

                    deliveries.spawn(async move {
                        let _permit = permit;
                        deliver(sender, job, max_attempts, base_backoff).await
                    });
                }
                Some(finished) = deliveries.join_next(), if !deliveries.is_empty() => {
                    log_join_failure(finished);
                }
            }
        }

        while let Some(finished) = deliveries.join_next().await {
            log_join_failure(finished);
        }

        info!("Notification worker stopped");
    }
}

fn log_join_failure(finished: Result<bool, JoinError>) {
    if let Err(e) = finished {
        error!(error = %e, "Notification task aborted");
    }
}

async fn deliver(
    sender: Arc<dyn EmailSender>,
    job: NotificationJob,
    max_attempts: u32,
    base_backoff: Duration,
) -> bool {
    let message = job.to_message();

    for attempt in 1..=max_attempts {
        match sender
            .send_email(&message.to, &message.subject, &message.body)
            .await
        {
            Ok(()) => {
                info!(to = %message.to, attempt, "Notification sent");
                return true;
            }
            Err(e) => {
                warn!(to = %message.to, attempt, error = %e, "Notification attempt failed");
                if attempt < max_attempts {
                    tokio::time::sleep(base_backoff * 2u32.pow(attempt - 1)).await;
                }
            }
        }
    }

    error!(to = %message.to, max_attempts, "Giving up on notification");
    false
}
