use std::sync::Mutex;

use anyhow::{Result, bail};

use crate::models::{FridgeItem, NewProduct, NewTag, Product, Recipe, Tag, TagType, names_match};
use crate::store::{Store, TaggedProducts};

/// In-memory [`Store`] mirroring the hosted service's semantics: ilike name
/// matching, a unique key on tag slugs and on (product, tag) join rows, and
/// upsert on fridge rows. Products carry no uniqueness constraint; only the
/// seeding engine's read-then-write keeps them deduplicated, as in
/// production.
///
/// Used by the engine tests; never by the CLI.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    products: Vec<Product>,
    tags: Vec<Tag>,
    relations: Vec<(i64, i64)>,
    fridge: Vec<FridgeItem>,
    recipes: Vec<Recipe>,
    favorites: Vec<i64>,
    next_product_id: i64,
    next_tag_id: i64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of (product, tag) join rows. Test hook for uniqueness checks.
    pub fn relation_count(&self) -> usize {
        self.inner.lock().unwrap().relations.len()
    }

    /// Number of fridge rows across all users. Test hook.
    pub fn fridge_row_count(&self) -> usize {
        self.inner.lock().unwrap().fridge.len()
    }

    /// Register a recipe, optionally marking it as a user favorite.
    pub fn add_recipe(&self, recipe: Recipe, favorite: bool) {
        let mut inner = self.inner.lock().unwrap();
        if favorite {
            inner.favorites.push(recipe.id);
        }
        inner.recipes.push(recipe);
    }
}

impl Store for MemoryStore {
    fn find_product_by_name(&self, name: &str) -> Result<Option<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .products
            .iter()
            .find(|p| names_match(&p.name, name))
            .cloned())
    }

    fn insert_product(&self, product: &NewProduct) -> Result<Product> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_product_id += 1;
        let row = Product {
            id: inner.next_product_id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        };
        inner.products.push(row.clone());
        Ok(row)
    }

    fn list_products(&self) -> Result<Vec<Product>> {
        let inner = self.inner.lock().unwrap();
        let mut products = inner.products.clone();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    fn find_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.tags.iter().find(|t| t.slug == slug).cloned())
    }

    fn list_tags(&self, tag_type: Option<TagType>) -> Result<Vec<Tag>> {
        let inner = self.inner.lock().unwrap();
        let mut tags: Vec<Tag> = inner
            .tags
            .iter()
            .filter(|t| tag_type.is_none_or(|ty| t.tag_type == ty))
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    fn insert_tag(&self, tag: &NewTag) -> Result<Tag> {
        let mut inner = self.inner.lock().unwrap();
        if inner.tags.iter().any(|t| t.slug == tag.slug) {
            bail!("duplicate key value violates unique constraint \"tags_slug_key\"");
        }
        inner.next_tag_id += 1;
        let row = Tag {
            id: inner.next_tag_id,
            name: tag.name.clone(),
            slug: tag.slug.clone(),
            tag_type: tag.tag_type,
        };
        inner.tags.push(row.clone());
        Ok(row)
    }

    fn relation_exists(&self, product_id: i64, tag_id: i64) -> Result<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.relations.contains(&(product_id, tag_id)))
    }

    fn insert_relation(&self, product_id: i64, tag_id: i64) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.relations.contains(&(product_id, tag_id)) {
            bail!("duplicate key value violates unique constraint \"product_tags_pkey\"");
        }
        if !inner.products.iter().any(|p| p.id == product_id) {
            bail!("insert or update on table \"product_tags\" violates foreign key constraint");
        }
        if !inner.tags.iter().any(|t| t.id == tag_id) {
            bail!("insert or update on table \"product_tags\" violates foreign key constraint");
        }
        inner.relations.push((product_id, tag_id));
        Ok(())
    }

    fn products_for_tag(&self, slug: &str) -> Result<Option<TaggedProducts>> {
        let inner = self.inner.lock().unwrap();
        let Some(tag) = inner.tags.iter().find(|t| t.slug == slug).cloned() else {
            return Ok(None);
        };
        let products = inner
            .relations
            .iter()
            .filter(|(_, tag_id)| *tag_id == tag.id)
            .filter_map(|(product_id, _)| {
                inner.products.iter().find(|p| p.id == *product_id).cloned()
            })
            .collect();
        Ok(Some(TaggedProducts { tag, products }))
    }

    fn upsert_fridge_item(&self, user_id: &str, product_id: i64, quantity: i64) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let product_name = inner
            .products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.name.clone());
        if let Some(existing) = inner
            .fridge
            .iter_mut()
            .find(|f| f.user_id == user_id && f.product_id == product_id)
        {
            existing.quantity = quantity;
        } else {
            inner.fridge.push(FridgeItem {
                user_id: user_id.to_string(),
                product_id,
                quantity,
                product_name,
            });
        }
        Ok(())
    }

    fn list_fridge_items(&self, user_id: &str) -> Result<Vec<FridgeItem>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .fridge
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    fn favorite_recipes(&self) -> Result<Vec<Recipe>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .recipes
            .iter()
            .filter(|r| inner.favorites.contains(&r.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
            image_url: None,
        }
    }

    fn tag(name: &str, slug: &str, tag_type: TagType) -> NewTag {
        NewTag {
            name: name.to_string(),
            slug: slug.to_string(),
            tag_type,
        }
    }

    #[test]
    fn test_find_product_case_insensitive() {
        let store = MemoryStore::new();
        store.insert_product(&product("Bell Pepper", 2.29)).unwrap();

        assert!(
            store
                .find_product_by_name("bell pepper")
                .unwrap()
                .is_some()
        );
        assert!(
            store
                .find_product_by_name("BELL PEPPER")
                .unwrap()
                .is_some()
        );
        assert!(store.find_product_by_name("bell").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_tag_slug_rejected() {
        let store = MemoryStore::new();
        store
            .insert_tag(&tag("Produce", "produce", TagType::Aisle))
            .unwrap();
        let err = store
            .insert_tag(&tag("Fresh Produce", "produce", TagType::Aisle))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate key"));
    }

    #[test]
    fn test_duplicate_relation_rejected() {
        let store = MemoryStore::new();
        let p = store.insert_product(&product("milk", 3.99)).unwrap();
        let t = store
            .insert_tag(&tag("Dairy & Eggs", "dairy-and-eggs", TagType::Aisle))
            .unwrap();

        store.insert_relation(p.id, t.id).unwrap();
        let err = store.insert_relation(p.id, t.id).unwrap_err();
        assert!(err.to_string().contains("duplicate key"));
        assert_eq!(store.relation_count(), 1);
    }

    #[test]
    fn test_relation_requires_existing_rows() {
        let store = MemoryStore::new();
        let p = store.insert_product(&product("milk", 3.99)).unwrap();
        assert!(store.insert_relation(p.id, 99).is_err());
        assert!(store.insert_relation(99, 1).is_err());
    }

    #[test]
    fn test_list_tags_filters_and_sorts() {
        let store = MemoryStore::new();
        store
            .insert_tag(&tag("Snacks", "snacks", TagType::Aisle))
            .unwrap();
        store
            .insert_tag(&tag("Vegan", "vegan", TagType::Dietary))
            .unwrap();
        store
            .insert_tag(&tag("Bakery", "bakery", TagType::Aisle))
            .unwrap();

        let aisles = store.list_tags(Some(TagType::Aisle)).unwrap();
        assert_eq!(aisles.len(), 2);
        assert_eq!(aisles[0].name, "Bakery");
        assert_eq!(aisles[1].name, "Snacks");

        assert_eq!(store.list_tags(None).unwrap().len(), 3);
    }

    #[test]
    fn test_fridge_upsert_replaces_quantity() {
        let store = MemoryStore::new();
        let p = store.insert_product(&product("egg", 4.99)).unwrap();
        let user = "11111111-2222-3333-4444-555555555555";

        store.upsert_fridge_item(user, p.id, 12).unwrap();
        store.upsert_fridge_item(user, p.id, 6).unwrap();

        let items = store.list_fridge_items(user).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 6);
        assert_eq!(items[0].product_name.as_deref(), Some("egg"));
        assert_eq!(store.fridge_row_count(), 1);
    }

    #[test]
    fn test_fridge_rows_scoped_per_user() {
        let store = MemoryStore::new();
        let p = store.insert_product(&product("milk", 3.99)).unwrap();
        store.upsert_fridge_item("user-a", p.id, 1).unwrap();
        store.upsert_fridge_item("user-b", p.id, 2).unwrap();

        assert_eq!(store.list_fridge_items("user-a").unwrap().len(), 1);
        assert_eq!(store.list_fridge_items("user-b").unwrap().len(), 1);
        assert_eq!(store.fridge_row_count(), 2);
    }

    #[test]
    fn test_favorite_recipes_only_returns_favorites() {
        let store = MemoryStore::new();
        store.add_recipe(
            Recipe {
                id: 1,
                name: "Buffalo Wings".to_string(),
                description: None,
                image_url: None,
                source_url: None,
            },
            true,
        );
        store.add_recipe(
            Recipe {
                id: 2,
                name: "Cucumber Salad".to_string(),
                description: None,
                image_url: None,
                source_url: None,
            },
            false,
        );

        let favorites = store.favorite_recipes().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "Buffalo Wings");
    }
}
