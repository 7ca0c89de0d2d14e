use async_trait::async_trait;

use crate::submission::application::domain::entities::SubmissionRow;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 500;

//
// ──────────────────────────────────────────────────────────
// Paging
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Lenient normalisation of caller input: a page below 1 becomes 1, an
    /// out-of-range page size falls back to the default instead of being clamped.
    pub fn normalized(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p.min(u32::MAX as i64) as u32,
            _ => 1,
        };

        let page_size = match page_size {
            Some(s) if s > 0 && s <= MAX_PAGE_SIZE as i64 => s as u32,
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.page_size as u64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Query port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubmissionQuery: Send + Sync {
    /// Newest first.
    async fn list_by_contest_slug(
        &self,
        contest_slug: &str,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionRow>, SubmissionQueryError>;

    /// Newest first, unpaged.
    async fn all_by_contest_slug(
        &self,
        contest_slug: &str,
    ) -> Result<Vec<SubmissionRow>, SubmissionQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_below_one_becomes_one() {
        assert_eq!(PageRequest::normalized(Some(0), Some(10)).page, 1);
        assert_eq!(PageRequest::normalized(Some(-3), Some(10)).page, 1);
        assert_eq!(PageRequest::normalized(None, None), PageRequest::default());
    }

    #[test]
    fn out_of_range_page_size_falls_back_to_default() {
        assert_eq!(PageRequest::normalized(Some(1), Some(0)).page_size, 50);
        assert_eq!(PageRequest::normalized(Some(1), Some(501)).page_size, 50);
        assert_eq!(PageRequest::normalized(Some(1), Some(500)).page_size, 500);
        assert_eq!(PageRequest::normalized(Some(1), Some(1)).page_size, 1);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::normalized(Some(1), Some(20)).offset(), 0);
        assert_eq!(PageRequest::normalized(Some(3), Some(20)).offset(), 40);
    }
}
