use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Column names keep the spreadsheet's capitalization so the two
        // sources expose the same field names over the API.
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::Date).text().null())
                    .col(ColumnDef::new(Sales::Product).text().null())
                    .col(ColumnDef::new(Sales::Revenue).double().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Sales {
    Table,
    Id,
    #[sea_orm(iden = "Date")]
    Date,
    #[sea_orm(iden = "Product")]
    Product,
    #[sea_orm(iden = "Revenue")]
    Revenue,
}
