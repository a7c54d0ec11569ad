//! Document repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::document::{self, ActiveModel, Entity as DocumentEntity};
use crate::domain::{Document, NewDocument, UserId};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Document repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Insert a new document
    async fn insert(&self, document: NewDocument) -> AppResult<Document>;

    /// Documents last touched by the given user
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Document>>;

    /// Clear the user reference on every document of `user_id`.
    ///
    /// Returns the number of documents detached.
    async fn detach_user(&self, user_id: UserId) -> AppResult<u64>;
}

/// Concrete implementation of DocumentRepository
pub struct DocumentStore {
    db: DatabaseConnection,
}

impl DocumentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentRepository for DocumentStore {
    async fn insert(&self, document: NewDocument) -> AppResult<Document> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(document.name),
            content_path: Set(document.content_path),
            doc_type: Set(document.doc_type),
            file_type: Set(document.file_type),
            description: Set(document.description),
            audit_user_id: Set(document.audit_user_id),
            audit_timestamp: Set(document.audit_timestamp),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Document::from(model))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Document>> {
        let models = DocumentEntity::find()
            .filter(document::Column::AuditUserId.eq(user_id))
            .order_by_asc(document::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Document::from).collect())
    }

    async fn detach_user(&self, user_id: UserId) -> AppResult<u64> {
        let result = DocumentEntity::update_many()
            .col_expr(document::Column::AuditUserId, Expr::value(Option::<i64>::None))
            .filter(document::Column::AuditUserId.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
