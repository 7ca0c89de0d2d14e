use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Submissions::Table)
                    .add_column(
                        ColumnDef::new(Submissions::Phone)
                            .string_len(40)
                            .not_null()
                            .default(""),
                    )
                    .add_column(ColumnDef::new(Submissions::BlobName).string_len(1024))
                    .add_column(ColumnDef::new(Submissions::ContentType).string_len(255))
                    .add_column(ColumnDef::new(Submissions::SizeBytes).big_integer())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Submissions::Table)
                    .drop_column(Submissions::Phone)
                    .drop_column(Submissions::BlobName)
                    .drop_column(Submissions::ContentType)
                    .drop_column(Submissions::SizeBytes)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Phone,
    BlobName,
    ContentType,
    SizeBytes,
}
