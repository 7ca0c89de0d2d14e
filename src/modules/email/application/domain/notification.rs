use uuid::Uuid;

pub const CONFIRMATION_SUBJECT: &str = "Thanks for entering the contest!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Work handed to the notification worker after a request has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationJob {
    SubmissionConfirmation {
        to: String,
        first_name: String,
        submission_id: Uuid,
    },
}

impl NotificationJob {
    pub fn recipient(&self) -> &str {
        match self {
            NotificationJob::SubmissionConfirmation { to, .. } => to,
        }
    }

    pub fn to_message(&self) -> EmailMessage {
        match self {
            NotificationJob::SubmissionConfirmation {
                to,
                first_name,
                submission_id,
            } => EmailMessage {
                to: to.clone(),
                subject: CONFIRMATION_SUBJECT.to_string(),
                body: format!(
                    "Hi {first_name},\n\n\
                     Thanks for entering the contest. Your confirmation number is {submission_id}.\n\n\
                     Good luck!\n"
                ),
            },
        }
    }
}
