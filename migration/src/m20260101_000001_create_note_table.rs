use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(string(Note::Id).primary_key())
                    .col(string(Note::Title))
                    .col(text(Note::Body))
                    .col(json(Note::Tags))
                    .col(timestamp_with_time_zone(Note::CreatedAt))
                    .col(timestamp_with_time_zone(Note::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_note_created_at")
                    .table(Note::Table)
                    .col(Note::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Note {
    Table,
    Id,
    Title,
    Body,
    Tags,
    CreatedAt,
    UpdatedAt,
}
