use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quotes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Quotes::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Quotes::Code).string().not_null())
                    .col(ColumnDef::new(Quotes::Codein).string().not_null())
                    .col(ColumnDef::new(Quotes::Name).string().not_null())
                    .col(ColumnDef::new(Quotes::High).text().not_null())
                    .col(ColumnDef::new(Quotes::Low).text().not_null())
                    .col(ColumnDef::new(Quotes::VarBid).text().not_null())
                    .col(ColumnDef::new(Quotes::PctChange).text().not_null())
                    .col(ColumnDef::new(Quotes::Bid).text().not_null())
                    .col(ColumnDef::new(Quotes::Ask).text().not_null())
                    .col(ColumnDef::new(Quotes::Timestamp).string().not_null())
                    .col(ColumnDef::new(Quotes::CreateDate).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Quotes {
    Table,
    Id,
    Code,
    Codein,
    Name,
    High,
    Low,
    VarBid,
    PctChange,
    Bid,
    Ask,
    Timestamp,
    CreateDate,
}
