use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crisper_core::catalog;
use crisper_core::seed::{
    SeedOptions, SeedReport, assign_aisles, retag_products, seed_products, seed_tags,
};

use crate::supabase::SupabaseClient;

use super::helpers::print_report;

fn seed_options(dry_run: bool, delay_ms: u64) -> SeedOptions {
    SeedOptions {
        dry_run,
        throttle: (delay_ms > 0).then(|| Duration::from_millis(delay_ms)),
    }
}

/// The engine blocks on each request, so it runs off the async worker
/// threads.
async fn run_seed<F>(client: Arc<SupabaseClient>, f: F) -> Result<SeedReport>
where
    F: FnOnce(&SupabaseClient) -> Result<SeedReport> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(client.as_ref()))
        .await
        .context("Seeding task failed")?
}

fn finish(report: &SeedReport, noun: &str, dry_run: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_report(report, noun, dry_run);
    }
    Ok(())
}

pub(crate) async fn cmd_seed_tags(
    client: Arc<SupabaseClient>,
    dry_run: bool,
    delay_ms: u64,
    json: bool,
) -> Result<()> {
    let opts = seed_options(dry_run, delay_ms);
    let report = run_seed(client, move |store| {
        seed_tags(store, catalog::STANDARD_TAGS, &opts)
    })
    .await?;
    finish(&report, "tags", dry_run, json)
}

pub(crate) async fn cmd_seed_products(
    client: Arc<SupabaseClient>,
    dry_run: bool,
    delay_ms: u64,
    json: bool,
) -> Result<()> {
    let opts = seed_options(dry_run, delay_ms);
    let report = run_seed(client, move |store| {
        seed_products(store, catalog::COMMON_GROCERIES, &opts)
    })
    .await?;
    finish(&report, "products", dry_run, json)
}

pub(crate) async fn cmd_seed_ingredients(
    client: Arc<SupabaseClient>,
    dry_run: bool,
    delay_ms: u64,
    json: bool,
) -> Result<()> {
    let opts = seed_options(dry_run, delay_ms);
    let report = run_seed(client, move |store| {
        let seeds: Vec<_> = catalog::INGREDIENT_SETS
            .iter()
            .flat_map(|set| set.iter().copied())
            .collect();
        seed_products(store, &seeds, &opts)
    })
    .await?;
    finish(&report, "ingredients", dry_run, json)
}

pub(crate) async fn cmd_assign_aisles(
    client: Arc<SupabaseClient>,
    dry_run: bool,
    delay_ms: u64,
    json: bool,
) -> Result<()> {
    let opts = seed_options(dry_run, delay_ms);
    let report = run_seed(client, move |store| {
        assign_aisles(store, catalog::AISLE_ASSIGNMENTS, &opts)
    })
    .await?;
    finish(&report, "products", dry_run, json)
}

pub(crate) async fn cmd_retag(
    client: Arc<SupabaseClient>,
    dry_run: bool,
    delay_ms: u64,
    json: bool,
) -> Result<()> {
    let opts = seed_options(dry_run, delay_ms);
    let report = run_seed(client, move |store| {
        retag_products(store, catalog::RETAG_MAPPINGS, &opts)
    })
    .await?;
    finish(&report, "products", dry_run, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_options_throttle() {
        assert!(seed_options(false, 0).throttle.is_none());
        assert_eq!(
            seed_options(false, 100).throttle,
            Some(Duration::from_millis(100))
        );
        assert!(seed_options(true, 0).dry_run);
    }
}
