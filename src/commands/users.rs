//! Users command - Operator access to the user lifecycle.

use serde::Serialize;

use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::{Config, DateFormats};
use crate::domain::{User, UserResponse, UserSummary};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::Database;
use crate::services::{ServiceContainer, Services, StatusChange};

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), &config)?;

    let output = run(&services, args.action, &config.formats, args.json).await?;
    println!("{}", output);
    Ok(())
}

/// Dispatch one action against the services and render its result.
pub async fn run(
    services: &dyn ServiceContainer,
    action: UsersAction,
    formats: &DateFormats,
    json: bool,
) -> AppResult<String> {
    let users = services.users();

    match action {
        UsersAction::List => {
            let summaries: Vec<UserSummary> = users
                .get_all_users()
                .await?
                .iter()
                .map(|u| UserSummary::new(u, formats))
                .collect();

            if json {
                return to_json(&summaries);
            }
            Ok(summaries
                .iter()
                .map(summary_line)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        UsersAction::Show { id } => {
            let user = users.get_user_by_id(id).await?.ok_or_not_found()?;
            render_detail(&user, formats, json)
        }
        UsersAction::Register { form, role } => {
            let user = users.register_manufacturer(form.into_form(role)).await?;
            render_summary(&user, formats, json)
        }
        UsersAction::AddAgent { form, role } => {
            let country = form.country.clone().unwrap_or_default();
            let user = users.add_agent(form.into_form(Some(role)), role, country).await?;
            render_summary(&user, formats, json)
        }
        UsersAction::Update { id, form, role } => {
            let user = users
                .update_user(id, form.into_form(role))
                .await?
                .ok_or_not_found()?;
            render_detail(&user, formats, json)
        }
        UsersAction::Approve { id } => {
            let user = updated(users.approve_manufacturer(id).await?)?;
            render_detail(&user, formats, json)
        }
        UsersAction::Reject { id } => {
            let user = updated(users.reject_manufacturer(id).await?)?;
            render_detail(&user, formats, json)
        }
        UsersAction::Login { email, password } => {
            let user = users
                .login_user(&email, &password)
                .await?
                .ok_or(AppError::InvalidCredentials)?;
            render_detail(&user, formats, json)
        }
        UsersAction::Delete { id } => {
            if !users.delete_user(id).await? {
                return Err(AppError::NotFound);
            }
            Ok(format!("Deleted user {}", id))
        }
    }
}

fn updated(change: StatusChange) -> AppResult<User> {
    match change {
        StatusChange::Updated(user) => Ok(user),
        StatusChange::NotFound => Err(AppError::NotFound),
    }
}

fn render_summary(user: &User, formats: &DateFormats, json: bool) -> AppResult<String> {
    let summary = UserSummary::new(user, formats);
    if json {
        return to_json(&summary);
    }
    Ok(summary_line(&summary))
}

fn render_detail(user: &User, formats: &DateFormats, json: bool) -> AppResult<String> {
    let detail = UserResponse::new(user, formats);
    if json {
        return to_json(&detail);
    }

    let s = &detail.summary;
    Ok([
        format!("id:         {}", s.id),
        format!("name:       {} {}", s.first_name, s.last_name),
        format!("company:    {}", s.company.as_deref().unwrap_or("-")),
        format!("email:      {}", s.email),
        format!("role:       {}", s.role),
        format!("country:    {}", s.country.as_deref().unwrap_or("-")),
        format!("registered: {}", s.registered_date),
        format!("status:     {}", detail.status),
        format!("updated:    {}", detail.audit_timestamp),
    ]
    .join("\n"))
}

fn summary_line(s: &UserSummary) -> String {
    format!(
        "{:>6}  {:<32} {:<18} {:<12} {}",
        s.id,
        s.email,
        s.role,
        s.country.as_deref().unwrap_or("-"),
        s.registered_date
    )
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render JSON: {}", e)))
}
