//! Migration: Create users table.

use sea_orm_migration::prelude::*;

use crate::config::{
    MAX_COMPANY_LENGTH, MAX_COUNTRY_LENGTH, MAX_EMAIL_LENGTH, MAX_ENUM_LENGTH, MAX_NAME_LENGTH,
    MAX_PASSWORD_HASH_LENGTH,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::FirstName)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::LastName)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::Company).string_len(MAX_COMPANY_LENGTH))
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(MAX_EMAIL_LENGTH)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Password)
                            .string_len(MAX_PASSWORD_HASH_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(MAX_ENUM_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::Country).string_len(MAX_COUNTRY_LENGTH))
                    .col(
                        ColumnDef::new(Users::RegisteredDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Status)
                            .string_len(MAX_ENUM_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::AuditTimestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_status")
                    .table(Users::Table)
                    .col(Users::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Company,
    Email,
    Password,
    Role,
    Country,
    RegisteredDate,
    Status,
    AuditTimestamp,
}
