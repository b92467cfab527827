use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crisper_core::catalog;
use crisper_core::seed::{SeedOptions, stock_fridge};

use crate::supabase::SupabaseClient;

use super::helpers::{parse_user_id, print_fridge_table, print_report};

/// `--user` wins when given; otherwise ask the auth endpoint who the
/// configured key belongs to.
async fn resolve_user(client: &SupabaseClient, user: Option<String>) -> Result<String> {
    match user {
        Some(s) => parse_user_id(&s),
        None => client.current_user_async().await,
    }
}

pub(crate) async fn cmd_fridge_stock(
    client: Arc<SupabaseClient>,
    user: Option<String>,
    dry_run: bool,
    delay_ms: u64,
    json: bool,
) -> Result<()> {
    let user_id = resolve_user(&client, user).await?;
    let opts = SeedOptions {
        dry_run,
        throttle: (delay_ms > 0).then(|| Duration::from_millis(delay_ms)),
    };

    let report = tokio::task::spawn_blocking(move || {
        stock_fridge(client.as_ref(), &user_id, catalog::FRIDGE_STARTER, &opts)
    })
    .await
    .context("Fridge stocking task failed")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, "items", dry_run);
    }
    Ok(())
}

pub(crate) async fn cmd_fridge_list(
    client: Arc<SupabaseClient>,
    user: Option<String>,
    json: bool,
) -> Result<()> {
    let user_id = resolve_user(&client, user).await?;
    let items = client.list_fridge_items_async(&user_id).await?;

    if items.is_empty() {
        if json {
            println!("[]");
        } else {
            eprintln!("Fridge is empty for user {user_id}");
        }
        process::exit(2);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_fridge_table(&items);
    }
    Ok(())
}
