use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::models::{NewProduct, NewTag, TagType, names_match};
use crate::store::Store;

/// A tag to seed, keyed on its slug.
#[derive(Debug, Clone, Copy)]
pub struct TagSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub tag_type: TagType,
}

impl TagSeed {
    fn to_new_tag(self) -> NewTag {
        NewTag {
            name: self.name.to_string(),
            slug: self.slug.to_string(),
            tag_type: self.tag_type,
        }
    }
}

/// A product to seed, keyed on its case-insensitive name, with the slugs of
/// tags to relate it to. Unknown slugs are logged skips, not errors.
#[derive(Debug, Clone, Copy)]
pub struct ProductSeed {
    pub name: &'static str,
    pub price: f64,
    pub tags: &'static [&'static str],
}

impl ProductSeed {
    fn to_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name.to_string(),
            price: self.price,
            image_url: None,
        }
    }
}

/// Products that belong under one aisle tag, matched by name.
#[derive(Debug, Clone, Copy)]
pub struct AisleAssignment {
    pub slug: &'static str,
    pub products: &'static [&'static str],
}

/// A product name and the full set of tag slugs it should carry.
#[derive(Debug, Clone, Copy)]
pub struct RetagMapping {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

/// A product name and the quantity to put in the fridge.
#[derive(Debug, Clone, Copy)]
pub struct FridgeSeed {
    pub name: &'static str,
    pub quantity: i64,
}

/// Knobs shared by every seeding operation. `throttle` inserts a fixed pause
/// after each record to stay under the remote rate limit; `dry_run` reports
/// what would change without writing.
#[derive(Debug, Clone, Default)]
pub struct SeedOptions {
    pub dry_run: bool,
    pub throttle: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Inserted (or would be, in a dry run).
    Added,
    /// Already present; nothing written.
    Skipped,
    /// A referenced entity was not found; nothing written.
    Missing,
    /// The store rejected the operation; the batch continued.
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordResult {
    pub name: String,
    pub status: RecordStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Per-record outcomes plus relation counters for the operations that also
/// write join rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub records: Vec<RecordResult>,
    pub relations_added: usize,
    pub relations_skipped: usize,
    pub relations_failed: usize,
    pub tags_missing: usize,
}

impl SeedReport {
    fn record(&mut self, name: &str, status: RecordStatus, detail: Option<String>) {
        self.records.push(RecordResult {
            name: name.to_string(),
            status,
            detail,
        });
    }

    fn fail(&mut self, name: &str, err: &anyhow::Error) {
        self.record(name, RecordStatus::Failed, Some(format!("{err:#}")));
    }

    #[must_use]
    pub fn count(&self, status: RecordStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    #[must_use]
    pub fn added(&self) -> usize {
        self.count(RecordStatus::Added)
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(RecordStatus::Skipped)
    }

    #[must_use]
    pub fn missing(&self) -> usize {
        self.count(RecordStatus::Missing)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(RecordStatus::Failed)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }
}

fn pause(opts: &SeedOptions) {
    if let Some(delay) = opts.throttle {
        std::thread::sleep(delay);
    }
}

/// Postgres unique-violation (23505). The join table's constraint arbitrates
/// races the read-then-write check cannot see, so this is a skip.
fn is_duplicate(err: &anyhow::Error) -> bool {
    let text = format!("{err:#}");
    text.contains("duplicate key") || text.contains("23505")
}

/// Insert-or-skip each tag, keyed on slug.
pub fn seed_tags(store: &dyn Store, seeds: &[TagSeed], opts: &SeedOptions) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for seed in seeds {
        match store.find_tag_by_slug(seed.slug) {
            Err(e) => report.fail(seed.name, &e),
            Ok(Some(_)) => report.record(
                seed.name,
                RecordStatus::Skipped,
                Some("already exists".to_string()),
            ),
            Ok(None) if opts.dry_run => report.record(seed.name, RecordStatus::Added, None),
            Ok(None) => match store.insert_tag(&seed.to_new_tag()) {
                Ok(_) => report.record(seed.name, RecordStatus::Added, None),
                Err(e) if is_duplicate(&e) => report.record(
                    seed.name,
                    RecordStatus::Skipped,
                    Some("already exists".to_string()),
                ),
                Err(e) => report.fail(seed.name, &e),
            },
        }
        pause(opts);
    }
    Ok(report)
}

/// Insert-or-skip each product by case-insensitive name, then relate it to
/// each listed tag that exists and is not already related.
pub fn seed_products(
    store: &dyn Store,
    seeds: &[ProductSeed],
    opts: &SeedOptions,
) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for seed in seeds {
        let product_id = match store.find_product_by_name(seed.name) {
            Err(e) => {
                report.fail(seed.name, &e);
                pause(opts);
                continue;
            }
            Ok(Some(existing)) => {
                report.record(
                    seed.name,
                    RecordStatus::Skipped,
                    Some("already exists".to_string()),
                );
                Some(existing.id)
            }
            Ok(None) if opts.dry_run => {
                report.record(seed.name, RecordStatus::Added, None);
                None
            }
            Ok(None) => match store.insert_product(&seed.to_new_product()) {
                Ok(product) => {
                    report.record(seed.name, RecordStatus::Added, None);
                    Some(product.id)
                }
                Err(e) => {
                    report.fail(seed.name, &e);
                    pause(opts);
                    continue;
                }
            },
        };

        for slug in seed.tags {
            relate(store, &mut report, product_id, slug, opts.dry_run);
        }
        pause(opts);
    }
    Ok(report)
}

/// Relate `product_id` to the tag at `slug` if both exist and the relation is
/// absent. `product_id` is `None` for a dry-run product that was never
/// inserted; the relation cannot exist yet, so it counts as a would-add.
fn relate(
    store: &dyn Store,
    report: &mut SeedReport,
    product_id: Option<i64>,
    slug: &str,
    dry_run: bool,
) {
    let tag = match store.find_tag_by_slug(slug) {
        Err(_) => {
            report.relations_failed += 1;
            return;
        }
        Ok(None) => {
            report.tags_missing += 1;
            return;
        }
        Ok(Some(tag)) => tag,
    };
    let Some(product_id) = product_id else {
        report.relations_added += 1;
        return;
    };
    match store.relation_exists(product_id, tag.id) {
        Err(_) => report.relations_failed += 1,
        Ok(true) => report.relations_skipped += 1,
        Ok(false) if dry_run => report.relations_added += 1,
        Ok(false) => match store.insert_relation(product_id, tag.id) {
            Ok(()) => report.relations_added += 1,
            Err(e) if is_duplicate(&e) => report.relations_skipped += 1,
            Err(_) => report.relations_failed += 1,
        },
    }
}

/// File every existing product under its aisle tag, per the static
/// name-to-aisle mapping. Products with no mapped aisle are skipped.
pub fn assign_aisles(
    store: &dyn Store,
    assignments: &[AisleAssignment],
    opts: &SeedOptions,
) -> Result<SeedReport> {
    let products = store.list_products()?;
    let mut report = SeedReport::default();

    for product in &products {
        let assignment = assignments
            .iter()
            .find(|a| a.products.iter().any(|name| names_match(name, &product.name)));
        let Some(assignment) = assignment else {
            report.record(
                &product.name,
                RecordStatus::Skipped,
                Some("no matching aisle".to_string()),
            );
            pause(opts);
            continue;
        };

        match store.find_tag_by_slug(assignment.slug) {
            Err(e) => report.fail(&product.name, &e),
            Ok(None) => {
                report.tags_missing += 1;
                report.record(
                    &product.name,
                    RecordStatus::Missing,
                    Some(format!("aisle tag '{}' not found", assignment.slug)),
                );
            }
            Ok(Some(tag)) => match store.relation_exists(product.id, tag.id) {
                Err(e) => report.fail(&product.name, &e),
                Ok(true) => {
                    report.relations_skipped += 1;
                    report.record(
                        &product.name,
                        RecordStatus::Skipped,
                        Some(format!("already tagged '{}'", tag.name)),
                    );
                }
                Ok(false) if opts.dry_run => {
                    report.relations_added += 1;
                    report.record(
                        &product.name,
                        RecordStatus::Added,
                        Some(format!("→ {}", tag.name)),
                    );
                }
                Ok(false) => match store.insert_relation(product.id, tag.id) {
                    Ok(()) => {
                        report.relations_added += 1;
                        report.record(
                            &product.name,
                            RecordStatus::Added,
                            Some(format!("→ {}", tag.name)),
                        );
                    }
                    Err(e) if is_duplicate(&e) => {
                        report.relations_skipped += 1;
                        report.record(
                            &product.name,
                            RecordStatus::Skipped,
                            Some(format!("already tagged '{}'", tag.name)),
                        );
                    }
                    Err(e) => report.fail(&product.name, &e),
                },
            },
        }
        pause(opts);
    }
    Ok(report)
}

/// Relate each mapped product to its full tag set. Inserts go straight to the
/// store; duplicate-key rejections count as skips.
pub fn retag_products(
    store: &dyn Store,
    mappings: &[RetagMapping],
    opts: &SeedOptions,
) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for mapping in mappings {
        let product = match store.find_product_by_name(mapping.name) {
            Err(e) => {
                report.fail(mapping.name, &e);
                pause(opts);
                continue;
            }
            Ok(None) => {
                report.record(
                    mapping.name,
                    RecordStatus::Missing,
                    Some("product not found".to_string()),
                );
                pause(opts);
                continue;
            }
            Ok(Some(product)) => product,
        };

        let mut added = 0usize;
        let mut failed = 0usize;
        for slug in mapping.tags {
            let tag = match store.find_tag_by_slug(slug) {
                Err(_) => {
                    report.relations_failed += 1;
                    failed += 1;
                    continue;
                }
                Ok(None) => {
                    report.tags_missing += 1;
                    continue;
                }
                Ok(Some(tag)) => tag,
            };
            if opts.dry_run {
                match store.relation_exists(product.id, tag.id) {
                    Ok(false) => {
                        report.relations_added += 1;
                        added += 1;
                    }
                    Ok(true) => report.relations_skipped += 1,
                    Err(_) => {
                        report.relations_failed += 1;
                        failed += 1;
                    }
                }
                continue;
            }
            match store.insert_relation(product.id, tag.id) {
                Ok(()) => {
                    report.relations_added += 1;
                    added += 1;
                }
                Err(e) if is_duplicate(&e) => report.relations_skipped += 1,
                Err(_) => {
                    report.relations_failed += 1;
                    failed += 1;
                }
            }
        }

        let (status, detail) = if failed > 0 {
            (RecordStatus::Failed, Some(format!("{failed} tag inserts failed")))
        } else if added > 0 {
            (RecordStatus::Added, Some(format!("{added} tags assigned")))
        } else {
            (RecordStatus::Skipped, Some("all tags already assigned".to_string()))
        };
        report.record(mapping.name, status, detail);
        pause(opts);
    }
    Ok(report)
}

/// Upsert each item into `user_id`'s fridge, resolving products by
/// case-insensitive name. Unknown products are logged skips.
pub fn stock_fridge(
    store: &dyn Store,
    user_id: &str,
    items: &[FridgeSeed],
    opts: &SeedOptions,
) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for item in items {
        match store.find_product_by_name(item.name) {
            Err(e) => report.fail(item.name, &e),
            Ok(None) => report.record(
                item.name,
                RecordStatus::Missing,
                Some("not found in catalog".to_string()),
            ),
            Ok(Some(product)) if opts.dry_run => {
                let _ = product;
                report.record(
                    item.name,
                    RecordStatus::Added,
                    Some(format!("quantity {}", item.quantity)),
                );
            }
            Ok(Some(product)) => {
                match store.upsert_fridge_item(user_id, product.id, item.quantity) {
                    Ok(()) => report.record(
                        item.name,
                        RecordStatus::Added,
                        Some(format!("quantity {}", item.quantity)),
                    ),
                    Err(e) => report.fail(item.name, &e),
                }
            }
        }
        pause(opts);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{FridgeItem, Product, Recipe, Tag};
    use crate::store::TaggedProducts;

    const TAGS: &[TagSeed] = &[
        TagSeed {
            name: "Produce",
            slug: "produce",
            tag_type: TagType::Aisle,
        },
        TagSeed {
            name: "Dairy & Eggs",
            slug: "dairy-and-eggs",
            tag_type: TagType::Aisle,
        },
        TagSeed {
            name: "Vegetarian",
            slug: "vegetarian",
            tag_type: TagType::Dietary,
        },
    ];

    const PRODUCTS: &[ProductSeed] = &[
        ProductSeed {
            name: "banana",
            price: 0.59,
            tags: &["produce"],
        },
        ProductSeed {
            name: "milk",
            price: 3.99,
            tags: &["dairy-and-eggs", "vegetarian"],
        },
        ProductSeed {
            name: "gochujang",
            price: 6.99,
            tags: &["international"],
        },
    ];

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        seed_tags(&store, TAGS, &SeedOptions::default()).unwrap();
        seed_products(&store, PRODUCTS, &SeedOptions::default()).unwrap();
        store
    }

    #[test]
    fn test_seed_tags_inserts_all() {
        let store = MemoryStore::new();
        let report = seed_tags(&store, TAGS, &SeedOptions::default()).unwrap();
        assert_eq!(report.added(), 3);
        assert_eq!(report.skipped(), 0);
        assert_eq!(report.failed(), 0);
        assert_eq!(store.list_tags(None).unwrap().len(), 3);
    }

    #[test]
    fn test_seed_tags_twice_is_idempotent() {
        let store = MemoryStore::new();
        seed_tags(&store, TAGS, &SeedOptions::default()).unwrap();
        let second = seed_tags(&store, TAGS, &SeedOptions::default()).unwrap();

        assert_eq!(second.added(), 0);
        assert_eq!(second.skipped(), 3);
        assert_eq!(store.list_tags(None).unwrap().len(), 3);
    }

    #[test]
    fn test_seed_tags_dry_run_writes_nothing() {
        let store = MemoryStore::new();
        let opts = SeedOptions {
            dry_run: true,
            throttle: None,
        };
        let report = seed_tags(&store, TAGS, &opts).unwrap();
        assert_eq!(report.added(), 3);
        assert!(store.list_tags(None).unwrap().is_empty());
    }

    #[test]
    fn test_seed_products_creates_products_and_relations() {
        let store = MemoryStore::new();
        seed_tags(&store, TAGS, &SeedOptions::default()).unwrap();
        let report = seed_products(&store, PRODUCTS, &SeedOptions::default()).unwrap();

        assert_eq!(report.added(), 3);
        // banana→produce, milk→dairy + vegetarian
        assert_eq!(report.relations_added, 3);
        // "international" is never seeded
        assert_eq!(report.tags_missing, 1);
        assert_eq!(store.relation_count(), 3);
    }

    #[test]
    fn test_seed_products_twice_is_idempotent() {
        let store = seeded_store();
        let second = seed_products(&store, PRODUCTS, &SeedOptions::default()).unwrap();

        assert_eq!(second.added(), 0);
        assert_eq!(second.skipped(), 3);
        assert_eq!(second.relations_added, 0);
        assert_eq!(second.relations_skipped, 3);
        assert_eq!(store.relation_count(), 3);
        assert_eq!(store.list_products().unwrap().len(), 3);
    }

    #[test]
    fn test_seed_products_matches_names_case_insensitively() {
        let store = MemoryStore::new();
        store
            .insert_product(&NewProduct {
                name: "Banana".to_string(),
                price: 0.49,
                image_url: None,
            })
            .unwrap();

        let report = seed_products(
            &store,
            &[ProductSeed {
                name: "banana",
                price: 0.59,
                tags: &[],
            }],
            &SeedOptions::default(),
        )
        .unwrap();

        assert_eq!(report.skipped(), 1);
        assert_eq!(store.list_products().unwrap().len(), 1);
    }

    #[test]
    fn test_seed_products_dry_run_writes_nothing() {
        let store = MemoryStore::new();
        seed_tags(&store, TAGS, &SeedOptions::default()).unwrap();
        let opts = SeedOptions {
            dry_run: true,
            throttle: None,
        };
        let report = seed_products(&store, PRODUCTS, &opts).unwrap();

        assert_eq!(report.added(), 3);
        assert_eq!(report.relations_added, 3);
        assert!(store.list_products().unwrap().is_empty());
        assert_eq!(store.relation_count(), 0);
    }

    #[test]
    fn test_assign_aisles() {
        let store = seeded_store();
        // An untagged product that the mapping covers
        store
            .insert_product(&NewProduct {
                name: "Avocado".to_string(),
                price: 1.99,
                image_url: None,
            })
            .unwrap();

        let assignments = &[AisleAssignment {
            slug: "produce",
            products: &["banana", "avocado"],
        }];
        let report = assign_aisles(&store, assignments, &SeedOptions::default()).unwrap();

        // avocado newly tagged; banana already related from seeding
        assert_eq!(report.added(), 1);
        assert_eq!(report.relations_added, 1);
        // milk and gochujang have no mapped aisle
        assert_eq!(report.skipped(), 3);

        let second = assign_aisles(&store, assignments, &SeedOptions::default()).unwrap();
        assert_eq!(second.added(), 0);
        assert_eq!(second.relations_added, 0);
    }

    #[test]
    fn test_assign_aisles_missing_tag() {
        let store = MemoryStore::new();
        store
            .insert_product(&NewProduct {
                name: "bread".to_string(),
                price: 3.49,
                image_url: None,
            })
            .unwrap();

        let assignments = &[AisleAssignment {
            slug: "bakery",
            products: &["bread"],
        }];
        let report = assign_aisles(&store, assignments, &SeedOptions::default()).unwrap();
        assert_eq!(report.missing(), 1);
        assert_eq!(report.tags_missing, 1);
        assert_eq!(store.relation_count(), 0);
    }

    #[test]
    fn test_retag_treats_duplicates_as_skips() {
        let store = seeded_store();
        let mappings = &[RetagMapping {
            name: "milk",
            tags: &["dairy-and-eggs", "vegetarian", "produce"],
        }];

        let report = retag_products(&store, mappings, &SeedOptions::default()).unwrap();
        assert_eq!(report.added(), 1);
        assert_eq!(report.relations_added, 1); // produce is new
        assert_eq!(report.relations_skipped, 2); // the rest already exist

        let second = retag_products(&store, mappings, &SeedOptions::default()).unwrap();
        assert_eq!(second.skipped(), 1);
        assert_eq!(second.relations_added, 0);
        assert_eq!(second.relations_skipped, 3);
    }

    #[test]
    fn test_retag_missing_product() {
        let store = seeded_store();
        let mappings = &[RetagMapping {
            name: "dragonfruit",
            tags: &["produce"],
        }];
        let report = retag_products(&store, mappings, &SeedOptions::default()).unwrap();
        assert_eq!(report.missing(), 1);
        assert_eq!(report.relations_added, 0);
    }

    #[test]
    fn test_retag_dry_run_writes_nothing() {
        let store = seeded_store();
        let before = store.relation_count();
        let mappings = &[RetagMapping {
            name: "banana",
            tags: &["produce", "vegetarian"],
        }];
        let opts = SeedOptions {
            dry_run: true,
            throttle: None,
        };
        let report = retag_products(&store, mappings, &opts).unwrap();
        assert_eq!(report.relations_added, 1); // vegetarian would be new
        assert_eq!(report.relations_skipped, 1);
        assert_eq!(store.relation_count(), before);
    }

    #[test]
    fn test_stock_fridge_upserts() {
        let store = seeded_store();
        let user = "11111111-2222-3333-4444-555555555555";

        let items = &[
            FridgeSeed {
                name: "milk",
                quantity: 2,
            },
            FridgeSeed {
                name: "banana",
                quantity: 6,
            },
            FridgeSeed {
                name: "buttermilk",
                quantity: 1,
            },
        ];
        let report = stock_fridge(&store, user, items, &SeedOptions::default()).unwrap();
        assert_eq!(report.added(), 2);
        assert_eq!(report.missing(), 1);
        assert_eq!(store.fridge_row_count(), 2);

        // Restocking with a new quantity replaces, never duplicates
        let restock = &[FridgeSeed {
            name: "milk",
            quantity: 5,
        }];
        stock_fridge(&store, user, restock, &SeedOptions::default()).unwrap();
        assert_eq!(store.fridge_row_count(), 2);
        let milk = store
            .list_fridge_items(user)
            .unwrap()
            .into_iter()
            .find(|f| f.product_name.as_deref() == Some("milk"))
            .unwrap();
        assert_eq!(milk.quantity, 5);
    }

    #[test]
    fn test_stock_fridge_dry_run_writes_nothing() {
        let store = seeded_store();
        let opts = SeedOptions {
            dry_run: true,
            throttle: None,
        };
        let report = stock_fridge(
            &store,
            "user-a",
            &[FridgeSeed {
                name: "milk",
                quantity: 2,
            }],
            &opts,
        )
        .unwrap();
        assert_eq!(report.added(), 1);
        assert_eq!(store.fridge_row_count(), 0);
    }

    /// Store whose product inserts always fail; everything else delegates.
    struct InsertFailStore {
        inner: MemoryStore,
    }

    impl Store for InsertFailStore {
        fn find_product_by_name(&self, name: &str) -> Result<Option<Product>> {
            self.inner.find_product_by_name(name)
        }
        fn insert_product(&self, _product: &NewProduct) -> Result<Product> {
            anyhow::bail!("permission denied for table products")
        }
        fn list_products(&self) -> Result<Vec<Product>> {
            self.inner.list_products()
        }
        fn find_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
            self.inner.find_tag_by_slug(slug)
        }
        fn list_tags(&self, tag_type: Option<TagType>) -> Result<Vec<Tag>> {
            self.inner.list_tags(tag_type)
        }
        fn insert_tag(&self, tag: &NewTag) -> Result<Tag> {
            self.inner.insert_tag(tag)
        }
        fn relation_exists(&self, product_id: i64, tag_id: i64) -> Result<bool> {
            self.inner.relation_exists(product_id, tag_id)
        }
        fn insert_relation(&self, product_id: i64, tag_id: i64) -> Result<()> {
            self.inner.insert_relation(product_id, tag_id)
        }
        fn products_for_tag(&self, slug: &str) -> Result<Option<TaggedProducts>> {
            self.inner.products_for_tag(slug)
        }
        fn upsert_fridge_item(&self, user_id: &str, product_id: i64, quantity: i64) -> Result<()> {
            self.inner.upsert_fridge_item(user_id, product_id, quantity)
        }
        fn list_fridge_items(&self, user_id: &str) -> Result<Vec<FridgeItem>> {
            self.inner.list_fridge_items(user_id)
        }
        fn favorite_recipes(&self) -> Result<Vec<Recipe>> {
            self.inner.favorite_recipes()
        }
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let store = InsertFailStore {
            inner: MemoryStore::new(),
        };
        let report = seed_products(&store, PRODUCTS, &SeedOptions::default()).unwrap();

        assert_eq!(report.failed(), 3);
        assert_eq!(report.total(), 3);
        assert!(
            report.records[0]
                .detail
                .as_deref()
                .unwrap()
                .contains("permission denied")
        );
    }

    #[test]
    fn test_is_duplicate() {
        assert!(is_duplicate(&anyhow::anyhow!(
            "duplicate key value violates unique constraint \"product_tags_pkey\""
        )));
        assert!(is_duplicate(&anyhow::anyhow!("error 23505")));
        assert!(!is_duplicate(&anyhow::anyhow!("connection refused")));
    }

    #[test]
    fn test_report_serializes_for_json_output() {
        let store = MemoryStore::new();
        let report = seed_tags(&store, TAGS, &SeedOptions::default()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"added\""));
        assert!(json.contains("\"relations_added\":0"));
    }
}
