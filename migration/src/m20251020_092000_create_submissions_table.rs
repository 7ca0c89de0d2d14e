use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create submissions table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Submissions::ContestId).integer().not_null())
                    .col(
                        ColumnDef::new(Submissions::FirstName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::LastName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Submissions::ConsentGiven)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Submissions::ConsentVersion)
                            .string_len(20)
                            .not_null()
                            .default("v1"),
                    )
                    .col(
                        ColumnDef::new(Submissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submissions_contest_id")
                            .from(Submissions::Table, Submissions::ContestId)
                            .to(Contests::Table, Contests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // One entry per email per contest (case-insensitive)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_submissions_contest_email_unique
                ON submissions (contest_id, lower(email));
                "#,
            )
            .await?;

        // Admin listing is always newest-first within a contest
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_submissions_contest_created_at
                ON submissions (contest_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_submissions_contest_email_unique;
                DROP INDEX IF EXISTS idx_submissions_contest_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Id,
    ContestId,
    FirstName,
    LastName,
    Email,
    ConsentGiven,
    ConsentVersion,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Contests {
    Table,
    Id,
}
