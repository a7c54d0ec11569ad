//! User repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User, UserId, UserStatus};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, ordered by id
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user; fails with `Conflict` if the email is taken
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Overwrite an existing user. `registered_date` is never written.
    async fn update(&self, user: User) -> AppResult<User>;

    /// Set `status` to `to` only if it currently equals `from`.
    ///
    /// Returns `None` when no row matched (missing id or status moved on).
    async fn update_status(
        &self,
        id: UserId,
        from: UserStatus,
        to: UserStatus,
        at: DateTime<Utc>,
    ) -> AppResult<Option<User>>;

    /// Delete user by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: UserId) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Convert an optional row into an optional domain user.
fn to_domain(model: Option<user::Model>) -> AppResult<Option<User>> {
    model.map(User::try_from).transpose()
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        to_domain(result)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        to_domain(result)
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            company: Set(user.company),
            email: Set(user.email),
            password: Set(user.password.into_string()),
            role: Set(user.role.as_str().to_string()),
            country: Set(user.country),
            registered_date: Set(user.registered_date),
            status: Set(user.status.as_str().to_string()),
            audit_timestamp: Set(user.audit_timestamp),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Email"))?;

        User::try_from(model)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Unchanged(user.id),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            company: Set(user.company),
            email: Set(user.email),
            password: Set(user.password.into_string()),
            role: Set(user.role.as_str().to_string()),
            country: Set(user.country),
            registered_date: NotSet,
            status: Set(user.status.as_str().to_string()),
            audit_timestamp: Set(user.audit_timestamp),
        };

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
            e => AppError::from_write(e, "Email"),
        })?;

        User::try_from(model)
    }

    async fn update_status(
        &self,
        id: UserId,
        from: UserStatus,
        to: UserStatus,
        at: DateTime<Utc>,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::update_many()
            .col_expr(user::Column::Status, Expr::value(to.as_str()))
            .col_expr(user::Column::AuditTimestamp, Expr::value(at))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::Status.eq(from.as_str()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: UserId) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
