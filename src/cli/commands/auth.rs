//! Auth commands - manage the stored bearer token
//!
//! The token itself comes from an external login flow; these commands only
//! manage the local slot it lives in.

use pmcli::auth::TokenStore;
use pmcli::output::OutputMode;
use pmcli::paths;

use crate::cli::app::AuthAction;

/// Handle auth subcommands
pub async fn auth_cmd(action: AuthAction, mode: OutputMode) -> anyhow::Result<()> {
    let store = TokenStore::new();

    match action {
        AuthAction::Token { token } => {
            store.set(&token).await?;

            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "success": true }));
            } else {
                println!("Token stored at {}", paths::token_file().display());
            }
            Ok(())
        },
        AuthAction::Show => {
            match store.get().await? {
                Some(token) => {
                    let preview: String = token.chars().take(8).collect();
                    if mode == OutputMode::Json {
                        println!(
                            "{}",
                            serde_json::json!({ "stored": true, "preview": preview })
                        );
                    } else {
                        println!("Token stored: {preview}…");
                    }
                },
                None => {
                    if mode == OutputMode::Json {
                        println!("{}", serde_json::json!({ "stored": false }));
                    } else {
                        println!("No token stored.");
                        println!("Run 'pmcli auth token <TOKEN>' after logging in.");
                    }
                },
            }
            Ok(())
        },
        AuthAction::Clear => {
            store.delete().await?;

            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "success": true }));
            } else {
                println!("Token cleared.");
            }
            Ok(())
        },
    }
}
