use async_trait::async_trait;

/// Rendered CSV download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionExport {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportSubmissionsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ExportSubmissionsUseCase: Send + Sync {
    async fn execute(&self, contest_slug: &str) -> Result<SubmissionExport, ExportSubmissionsError>;
}
