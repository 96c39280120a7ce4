use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LastSentAuthorsV1::Table)
                    .if_not_exists()
                    .col(string(LastSentAuthorsV1::AuthorId).primary_key())
                    .col(string(LastSentAuthorsV1::MessageId))
                    .col(timestamp(LastSentAuthorsV1::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LastSentAuthorsV1::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LastSentAuthorsV1 {
    #[sea_orm(iden = "last_sent_authors_v1")]
    Table,
    AuthorId,
    MessageId,
    UpdatedAt,
}
