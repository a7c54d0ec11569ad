//! User service - Registration, agent onboarding, approval and login.
//!
//! Orchestrates domain rules over the repositories exposed by the Unit of Work.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{
    CredentialHasher, NewUser, Role, User, UserDraft, UserForm, UserId, UserStatus,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Outcome of an approve or reject request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    /// The user moved to the requested status.
    Updated(User),
    /// No user has the requested id; nothing was written.
    NotFound,
}

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user
    async fn get_all_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Hash the draft's password and persist it.
    ///
    /// A draft without an id is inserted; one with an id overwrites that
    /// user while keeping its registration date. No validation happens here.
    async fn save_user(&self, draft: UserDraft) -> AppResult<User>;

    /// Self-registration: always a pending manufacturer.
    async fn register_manufacturer(&self, form: UserForm) -> AppResult<User>;

    /// Admin-created agent, approved immediately.
    async fn add_agent(&self, form: UserForm, role: Role, country: String) -> AppResult<User>;

    /// Replace a user's profile and password. Status is left untouched.
    async fn update_user(&self, id: UserId, form: UserForm) -> AppResult<Option<User>>;

    /// Delete a user, detaching any documents that reference them
    async fn delete_user(&self, id: UserId) -> AppResult<bool>;

    /// Move a pending manufacturer to APPROVED
    async fn approve_manufacturer(&self, id: UserId) -> AppResult<StatusChange>;

    /// Move a pending manufacturer to REJECTED
    async fn reject_manufacturer(&self, id: UserId) -> AppResult<StatusChange>;

    /// Return the user only if the email exists and the password matches.
    async fn login_user(&self, email: &str, password: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
    hasher: Arc<dyn CredentialHasher>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance
    pub fn new(uow: Arc<U>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { uow, hasher }
    }

    /// Write a draft, given the stored record it replaces (if any).
    async fn persist(&self, draft: UserDraft, existing: Option<User>) -> AppResult<User> {
        let password = self.hasher.hash(&draft.password)?;
        let now = Utc::now();

        match existing {
            None => {
                self.uow
                    .users()
                    .insert(NewUser {
                        first_name: draft.first_name,
                        last_name: draft.last_name,
                        company: draft.company,
                        email: draft.email,
                        password,
                        role: draft.role,
                        country: draft.country,
                        registered_date: now,
                        status: draft.status,
                        audit_timestamp: now,
                    })
                    .await
            }
            Some(current) => {
                self.uow
                    .users()
                    .update(User {
                        id: current.id,
                        first_name: draft.first_name,
                        last_name: draft.last_name,
                        company: draft.company,
                        email: draft.email,
                        password,
                        role: draft.role,
                        country: draft.country,
                        registered_date: current.registered_date,
                        status: draft.status,
                        audit_timestamp: now,
                    })
                    .await
            }
        }
    }

    async fn change_status(&self, id: UserId, target: UserStatus) -> AppResult<StatusChange> {
        let users = self.uow.users();

        let Some(user) = users.find_by_id(id).await? else {
            tracing::error!("Cannot set status {} for user {}: user not found", target, id);
            return Ok(StatusChange::NotFound);
        };

        if !user.status.can_transition_to(target) {
            tracing::warn!(
                "Rejected status change for user {}: {} -> {}",
                id,
                user.status,
                target
            );
            return Err(AppError::InvalidTransition {
                from: user.status,
                to: target,
            });
        }

        match users
            .update_status(id, user.status, target, Utc::now())
            .await?
        {
            Some(updated) => {
                tracing::info!("User {} is now {}", id, target);
                Ok(StatusChange::Updated(updated))
            }
            None => match users.find_by_id(id).await? {
                None => {
                    tracing::error!("User {} disappeared during status change", id);
                    Ok(StatusChange::NotFound)
                }
                Some(current) => {
                    tracing::warn!(
                        "Concurrent status change for user {}: now {}",
                        id,
                        current.status
                    );
                    Err(AppError::conflict("Status change"))
                }
            },
        }
    }
}

/// Agent accounts must carry a country.
fn require_country(role: Role, country: &Option<String>) -> AppResult<()> {
    if role.is_agent() && country.as_deref().map_or(true, |c| c.trim().is_empty()) {
        return Err(AppError::validation(format!("Country is mandatory for {}", role)));
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        tracing::debug!("Listing all users");
        self.uow.users().find_all().await
    }

    async fn get_user_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        tracing::debug!("Fetching user {}", id);
        self.uow.users().find_by_id(id).await
    }

    async fn save_user(&self, draft: UserDraft) -> AppResult<User> {
        tracing::debug!("Saving user {:?}", draft);

        let existing = match draft.id {
            Some(id) => Some(self.uow.users().find_by_id(id).await?.ok_or_not_found()?),
            None => None,
        };

        self.persist(draft, existing).await
    }

    async fn register_manufacturer(&self, form: UserForm) -> AppResult<User> {
        tracing::debug!("Registering manufacturer {}", form.email);

        let form = form.normalized();
        form.validate()?;

        let draft = form.into_draft(None, Role::Manufacturer, UserStatus::Pending);
        let user = self.save_user(draft).await?;

        tracing::info!("Registered manufacturer {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn add_agent(&self, form: UserForm, role: Role, country: String) -> AppResult<User> {
        tracing::debug!("Adding {} {}", role, form.email);

        if !role.is_agent() {
            return Err(AppError::validation(format!("{} is not an agent role", role)));
        }
        let country = country.trim().to_string();
        if country.is_empty() {
            return Err(AppError::validation("Country is mandatory for agents"));
        }

        let mut form = form.normalized();
        form.country = Some(country);
        form.validate()?;

        let draft = form.into_draft(None, role, UserStatus::Approved);
        let user = self.save_user(draft).await?;

        tracing::info!("Added {} {} ({})", role, user.id, user.email);
        Ok(user)
    }

    async fn update_user(&self, id: UserId, form: UserForm) -> AppResult<Option<User>> {
        tracing::debug!("Updating user {}", id);

        let form = form.normalized();
        form.validate()?;

        let Some(existing) = self.uow.users().find_by_id(id).await? else {
            return Ok(None);
        };

        let role = form.role.unwrap_or(existing.role);
        require_country(role, &form.country)?;

        let draft = form.into_draft(Some(id), role, existing.status);
        let user = self.persist(draft, Some(existing)).await?;

        tracing::info!("Updated user {}", id);
        Ok(Some(user))
    }

    async fn delete_user(&self, id: UserId) -> AppResult<bool> {
        tracing::debug!("Deleting user {}", id);

        let (detached, deleted) = with_transaction!(self.uow, |ctx| {
            let detached = ctx.documents().detach_user(id).await?;
            let deleted = ctx.users().delete_by_id(id).await?;
            Ok::<_, AppError>((detached, deleted))
        })?;

        if deleted {
            tracing::info!("Deleted user {} ({} documents detached)", id, detached);
        }
        Ok(deleted)
    }

    async fn approve_manufacturer(&self, id: UserId) -> AppResult<StatusChange> {
        tracing::debug!("Approving user {}", id);
        self.change_status(id, UserStatus::Approved).await
    }

    async fn reject_manufacturer(&self, id: UserId) -> AppResult<StatusChange> {
        tracing::debug!("Rejecting user {}", id);
        self.change_status(id, UserStatus::Rejected).await
    }

    async fn login_user(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        tracing::debug!("Login attempt for {}", email);

        match self.uow.users().find_by_email(email.trim()).await? {
            Some(user) if self.hasher.verify(password, &user.password) => Ok(Some(user)),
            Some(_) => Ok(None),
            None => {
                self.hasher.verify(password, self.hasher.decoy());
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_country_for_agents() {
        assert!(require_country(Role::OriginAgent, &None).is_err());
        assert!(require_country(Role::DestinationAgent, &Some("  ".into())).is_err());
        assert!(require_country(Role::OriginAgent, &Some("China".into())).is_ok());
        assert!(require_country(Role::Manufacturer, &None).is_ok());
    }
}
