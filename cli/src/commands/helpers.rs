use anyhow::{Context, Result};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use crisper_core::models::{FridgeItem, Product, Recipe, Tag};
use crisper_core::seed::{RecordStatus, SeedReport};

pub(crate) fn print_product_table(products: &[Product]) {
    #[derive(Tabled)]
    struct ProductRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "Image")]
        image: String,
    }

    let rows: Vec<ProductRow> = products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            name: truncate(&p.name, 35),
            price: format!("${:.2}", p.price),
            image: if p.image_url.is_some() { "yes" } else { "-" }.to_string(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..3)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

pub(crate) fn print_tag_table(tags: &[Tag]) {
    #[derive(Tabled)]
    struct TagRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Slug")]
        slug: String,
        #[tabled(rename = "Type")]
        tag_type: String,
    }

    let rows: Vec<TagRow> = tags
        .iter()
        .map(|t| TagRow {
            id: t.id,
            name: t.name.clone(),
            slug: t.slug.clone(),
            tag_type: t.tag_type.to_string(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

pub(crate) fn print_fridge_table(items: &[FridgeItem]) {
    #[derive(Tabled)]
    struct FridgeTableRow {
        #[tabled(rename = "Product")]
        product: String,
        #[tabled(rename = "Qty")]
        quantity: i64,
    }

    let rows: Vec<FridgeTableRow> = items
        .iter()
        .map(|f| FridgeTableRow {
            product: f
                .product_name
                .clone()
                .unwrap_or_else(|| format!("product #{}", f.product_id)),
            quantity: f.quantity,
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..2)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

pub(crate) fn print_recipe_table(recipes: &[Recipe]) {
    #[derive(Tabled)]
    struct RecipeRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Description")]
        description: String,
    }

    let rows: Vec<RecipeRow> = recipes
        .iter()
        .map(|r| RecipeRow {
            id: r.id,
            name: truncate(&r.name, 35),
            description: r
                .description
                .as_deref()
                .map(|d| truncate(d, 45))
                .unwrap_or_default(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

/// Print per-record outcomes plus the summary block the seeding commands
/// share.
pub(crate) fn print_report(report: &SeedReport, noun: &str, dry_run: bool) {
    for record in &report.records {
        let marker = match record.status {
            RecordStatus::Added => "+",
            RecordStatus::Skipped => "=",
            RecordStatus::Missing => "?",
            RecordStatus::Failed => "!",
        };
        match &record.detail {
            Some(detail) => println!("{marker} {} ({detail})", record.name),
            None => println!("{marker} {}", record.name),
        }
    }

    println!("\n{}", "=".repeat(50));
    if dry_run {
        println!("Summary (dry run, nothing written):");
    } else {
        println!("Summary:");
    }
    println!("  Added:   {} {noun}", report.added());
    println!("  Skipped: {} {noun}", report.skipped());
    if report.missing() > 0 {
        println!("  Missing: {} {noun}", report.missing());
    }
    println!("  Failed:  {} {noun}", report.failed());
    println!("  Total:   {} {noun}", report.total());
    if report.relations_added + report.relations_skipped + report.relations_failed > 0
        || report.tags_missing > 0
    {
        println!(
            "  Tags assigned: {} (skipped {}, failed {}, unknown slugs {})",
            report.relations_added,
            report.relations_skipped,
            report.relations_failed,
            report.tags_missing
        );
    }
    println!("{}", "=".repeat(50));
}

/// Validate and canonicalize a user id argument.
pub(crate) fn parse_user_id(s: &str) -> Result<String> {
    let id = uuid::Uuid::parse_str(s.trim())
        .with_context(|| format!("Invalid user id '{s}': expected a UUID"))?;
    Ok(id.to_string())
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let end = s
            .char_indices()
            .nth(max.saturating_sub(3))
            .map_or(s.len(), |(i, _)| i);
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        let id = parse_user_id("11111111-2222-3333-4444-555555555555").unwrap();
        assert_eq!(id, "11111111-2222-3333-4444-555555555555");
        // Uppercase input is canonicalized
        let id = parse_user_id("11111111-2222-3333-4444-55555555555A").unwrap();
        assert_eq!(id, "11111111-2222-3333-4444-55555555555a");
    }

    #[test]
    fn test_parse_user_id_invalid() {
        assert!(parse_user_id("not-a-uuid").is_err());
        assert!(parse_user_id("").is_err());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("banana", 10), "banana");
        assert_eq!(truncate("frozen mixed vegetables", 10), "frozen ...");
    }

    #[test]
    fn test_truncate_tiny_max() {
        // No underflow for widths smaller than the ellipsis
        assert_eq!(truncate("banana", 2), "...");
        assert_eq!(truncate("banana", 0), "...");
        assert_eq!(truncate("ab", 1), "...");
    }

    #[test]
    fn test_truncate_utf8() {
        // Should not panic on multi-byte characters
        assert_eq!(truncate("crème fraîche", 10), "crème f...");
        assert_eq!(truncate("jalapeño", 10), "jalapeño");
    }
}
