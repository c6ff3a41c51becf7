//! User commands

use pmcli::api::ApiClient;
use pmcli::auth::TokenStore;
use pmcli::models::{CreateUserRequest, User};
use pmcli::output::{OutputMode, UserRow};
use pmcli::services::UserService;

use crate::cli::app::UserAction;

/// Handle user subcommands
pub async fn user_cmd(action: UserAction, mode: OutputMode) -> anyhow::Result<()> {
    let client = ApiClient::new(TokenStore::new());
    let users = UserService::new(&client);

    match action {
        UserAction::List => list(users, mode).await,
        UserAction::Get { id } => get(users, id, mode).await,
        UserAction::Create {
            username,
            first_name,
            last_name,
            email,
            role,
            inactive,
        } => {
            let request = CreateUserRequest {
                username,
                first_name,
                last_name,
                email,
                role,
                active: !inactive,
            };
            let user = users.create(&request).await?;
            created(&user, mode)
        },
        UserAction::Update {
            id,
            username,
            first_name,
            last_name,
            email,
            role,
            inactive,
        } => {
            let request = CreateUserRequest {
                username,
                first_name,
                last_name,
                email,
                role,
                active: !inactive,
            };
            let user = users.update(id, &request).await?;
            updated(&user, mode)
        },
        UserAction::Delete { id } => {
            users.delete(id).await?;
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "success": true, "id": id }));
            } else {
                println!("Deleted user #{id}");
            }
            Ok(())
        },
    }
}

async fn list(users: UserService<'_>, mode: OutputMode) -> anyhow::Result<()> {
    let fetched = users.get_all().await?;

    if mode == OutputMode::Json {
        let rows: Vec<UserRow> = fetched.iter().map(UserRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if fetched.is_empty() {
        println!("No users.");
        return Ok(());
    }
    for user in &fetched {
        let state = if user.active { "" } else { " (inactive)" };
        println!(
            "#{:<4} {:<16} {:<24} {}{}",
            user.id,
            user.username,
            user.full_name(),
            user.role,
            state
        );
    }
    Ok(())
}

async fn get(users: UserService<'_>, id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let user = users.get_by_id(id).await?;

    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!("User #{}: {}", user.id, user.username);
    println!("  Name:   {}", user.full_name());
    println!("  Email:  {}", user.email);
    println!("  Role:   {}", user.role);
    println!("  Active: {}", user.active);
    Ok(())
}

fn created(user: &User, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(user)?);
    } else {
        println!("Created user #{}: {}", user.id, user.username);
    }
    Ok(())
}

fn updated(user: &User, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(user)?);
    } else {
        println!("Updated user #{}: {}", user.id, user.username);
    }
    Ok(())
}
