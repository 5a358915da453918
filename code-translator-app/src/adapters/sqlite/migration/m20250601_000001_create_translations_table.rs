use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const OWNER_CREATED_INDEX: &str = "idx_translations_owner_created_at";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // translations 表
        manager
            .create_table(
                Table::create()
                    .table(Translation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Translation::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Translation::OwnerId).string().not_null())
                    .col(
                        ColumnDef::new(Translation::SourceLanguage)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Translation::TargetLanguage)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Translation::InputCode).text().not_null())
                    .col(ColumnDef::new(Translation::OutputCode).text().not_null())
                    .col(ColumnDef::new(Translation::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 按用户列出历史（created_at 倒序）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(OWNER_CREATED_INDEX)
                    .table(Translation::Table)
                    .col(Translation::OwnerId)
                    .col(Translation::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(OWNER_CREATED_INDEX)
                    .table(Translation::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Translation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Translation {
    #[sea_orm(iden = "translations")]
    Table,
    Id,
    OwnerId,
    SourceLanguage,
    TargetLanguage,
    InputCode,
    OutputCode,
    CreatedAt,
}
