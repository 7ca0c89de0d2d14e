use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::submission::application::{
    domain::entities::SubmissionRow,
    ports::{
        incoming::use_cases::{
            ExportSubmissionsError, ExportSubmissionsUseCase, SubmissionExport,
        },
        outgoing::SubmissionQuery,
    },
};

pub const CSV_HEADER: &str =
    "FirstName,LastName,Email,Phone,ConsentGiven,ConsentVersion,CreatedAtUtc";

#[derive(Debug, Clone)]
pub struct ExportSubmissionsService<Q>
where
    Q: SubmissionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ExportSubmissionsService<Q>
where
    Q: SubmissionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ExportSubmissionsUseCase for ExportSubmissionsService<Q>
where
    Q: SubmissionQuery + Send + Sync,
{
    async fn execute(&self, contest_slug: &str) -> Result<SubmissionExport, ExportSubmissionsError> {
        let contest_slug = contest_slug.trim();

        let rows = self
            .query
            .all_by_contest_slug(contest_slug)
            .await
            .map_err(|e| ExportSubmissionsError::QueryError(e.to_string()))?;

        info!(contest = %contest_slug, rows = rows.len(), "Exporting submissions");

        Ok(SubmissionExport {
            file_name: export_file_name(contest_slug, Utc::now()),
            content: render_csv(&rows),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// CSV rendering
// ──────────────────────────────────────────────────────────
//

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn bool_cell(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

pub fn render_csv(rows: &[SubmissionRow]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + rows.len() * 96);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for row in rows {
        let cells = [
            quote(&row.first_name),
            quote(&row.last_name),
            quote(&row.email),
            quote(&row.phone),
            bool_cell(row.consent_given).to_string(),
            quote(&row.consent_version),
            row.created_at_utc.format("%Y-%m-%d %H:%M:%SZ").to_string(),
        ];
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

/// `submissions_{slug}_{yyyyMMddHHmmss}.csv`, slug restricted to header-safe characters.
pub fn export_file_name(contest_slug: &str, at: DateTime<Utc>) -> String {
    let slug: String = contest_slug
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("submissions_{}_{}.csv", slug, at.format("%Y%m%d%H%M%S"))
}
