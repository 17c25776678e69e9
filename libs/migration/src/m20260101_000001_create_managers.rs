use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Managers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Managers::Id).text().not_null().primary_key())
                    .col(
                        ColumnDef::new(Managers::Email)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    // Argon2 PHC string, never plaintext
                    .col(ColumnDef::new(Managers::Password).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Managers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Managers {
    Table,
    Id,
    Email,
    Password,
}
