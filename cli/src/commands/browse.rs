use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};

use crisper_core::models::TagType;
use crisper_core::store::category_view;

use crate::supabase::SupabaseClient;

use super::helpers::{print_product_table, print_recipe_table, print_tag_table};

pub(crate) async fn cmd_aisles(client: Arc<SupabaseClient>, json: bool) -> Result<()> {
    let aisles = client.list_tags_async(Some(TagType::Aisle)).await?;

    if aisles.is_empty() {
        if json {
            println!("[]");
        } else {
            eprintln!("No aisles found");
        }
        process::exit(2);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&aisles)?);
    } else {
        print_tag_table(&aisles);
    }
    Ok(())
}

/// Unknown slugs are not an error: they render the not-found view and the
/// command exits cleanly.
pub(crate) async fn cmd_category(
    client: Arc<SupabaseClient>,
    slug: String,
    json: bool,
) -> Result<()> {
    // category_view blocks on the store, so it runs off the async workers
    let view = tokio::task::spawn_blocking(move || category_view(client.as_ref(), &slug))
        .await
        .context("Category query task failed")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}\n", view.title);
    if view.products.is_empty() {
        println!("No products in this category.");
    } else {
        print_product_table(&view.products);
    }
    Ok(())
}

pub(crate) async fn cmd_cookbook(client: Arc<SupabaseClient>, json: bool) -> Result<()> {
    let recipes = client.favorite_recipes_async().await?;

    if recipes.is_empty() {
        if json {
            println!("[]");
        } else {
            eprintln!("No favorite recipes found");
        }
        process::exit(2);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else {
        print_recipe_table(&recipes);
    }
    Ok(())
}
