use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Abouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Abouts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Abouts::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Abouts::Headline).string_len(200).not_null())
                    .col(ColumnDef::new(Abouts::Description).text().not_null())
                    .col(ColumnDef::new(Abouts::ProfileImageUrl).text())
                    .col(ColumnDef::new(Abouts::ResumeUrl).text())
                    .col(
                        ColumnDef::new(Abouts::GithubUsername)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Abouts::TelegramUsername)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Abouts::BlogHandle)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Abouts::ChannelHandle)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Abouts::Skills).json_binary().not_null())
                    .col(
                        ColumnDef::new(Abouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Abouts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Abouts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Abouts {
    Table,
    Id,
    Name,
    Headline,
    Description,
    ProfileImageUrl,
    ResumeUrl,
    GithubUsername,
    TelegramUsername,
    BlogHandle,
    ChannelHandle,
    Skills,
    CreatedAt,
    UpdatedAt,
}
