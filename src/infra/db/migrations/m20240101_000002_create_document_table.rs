//! Migration: Create document table.
//!
//! Documents keep an optional reference to the user who last touched them.
//! Deleting that user clears the reference instead of removing the document.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;
use crate::config::{
    MAX_CONTENT_PATH_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_DOCUMENT_NAME_LENGTH,
    MAX_DOC_TYPE_LENGTH, MAX_FILE_TYPE_LENGTH,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Document::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Document::Name)
                            .string_len(MAX_DOCUMENT_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Document::ContentPath).string_len(MAX_CONTENT_PATH_LENGTH))
                    .col(
                        ColumnDef::new(Document::DocType)
                            .string_len(MAX_DOC_TYPE_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Document::FileType)
                            .string_len(MAX_FILE_TYPE_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Document::Description).string_len(MAX_DESCRIPTION_LENGTH))
                    .col(ColumnDef::new(Document::AuditUserId).big_integer())
                    .col(
                        ColumnDef::new(Document::AuditTimestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_audit_user")
                            .from(Document::Table, Document::AuditUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_document_audit_user")
                    .table(Document::Table)
                    .col(Document::AuditUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Document {
    Table,
    Id,
    Name,
    ContentPath,
    DocType,
    FileType,
    Description,
    AuditUserId,
    AuditTimestamp,
}
