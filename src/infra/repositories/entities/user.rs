//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Password, User};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: String,
    pub country: Option<String>,
    pub registered_date: DateTimeUtc,
    pub status: String,
    pub audit_timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::document::Entity")]
    Documents,
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fails only if the row holds a role or status this build does not know.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = model.role.parse().map_err(|_| {
            AppError::internal(format!("User {} has unknown role {}", model.id, model.role))
        })?;
        let status = model.status.parse().map_err(|_| {
            AppError::internal(format!("User {} has unknown status {}", model.id, model.status))
        })?;

        Ok(User {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            company: model.company,
            email: model.email,
            password: Password::from_hash(model.password),
            role,
            country: model.country,
            registered_date: model.registered_date,
            status,
            audit_timestamp: model.audit_timestamp,
        })
    }
}
