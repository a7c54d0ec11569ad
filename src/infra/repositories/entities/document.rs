//! Document database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Document;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub content_path: Option<String>,
    pub doc_type: String,
    pub file_type: String,
    pub description: Option<String>,
    pub audit_user_id: Option<i64>,
    pub audit_timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuditUserId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    AuditUser,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuditUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Document {
    fn from(model: Model) -> Self {
        Document {
            id: model.id,
            name: model.name,
            content_path: model.content_path,
            doc_type: model.doc_type,
            file_type: model.file_type,
            description: model.description,
            audit_user_id: model.audit_user_id,
            audit_timestamp: model.audit_timestamp,
        }
    }
}
