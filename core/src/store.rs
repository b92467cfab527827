use anyhow::Result;

use crate::models::{
    CategoryView, FridgeItem, NewProduct, NewTag, Product, Recipe, Tag, TagType,
};

/// A tag together with the products filed under it, as returned by the
/// category query's embedded join.
#[derive(Debug, Clone)]
pub struct TaggedProducts {
    pub tag: Tag,
    pub products: Vec<Product>,
}

/// The table-style operations the seeding commands and storefront queries
/// perform against the hosted backend.
///
/// The CLI implements this with a reqwest client over the service's REST
/// endpoints; tests use [`crate::memory::MemoryStore`]. Methods are
/// synchronous; network implementations bridge onto their own runtime.
pub trait Store: Send + Sync {
    /// Look up a product by exact name, case-insensitively.
    fn find_product_by_name(&self, name: &str) -> Result<Option<Product>>;
    fn insert_product(&self, product: &NewProduct) -> Result<Product>;
    fn list_products(&self) -> Result<Vec<Product>>;

    fn find_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>>;
    /// List tags ordered by name, optionally restricted to one type.
    fn list_tags(&self, tag_type: Option<TagType>) -> Result<Vec<Tag>>;
    fn insert_tag(&self, tag: &NewTag) -> Result<Tag>;

    fn relation_exists(&self, product_id: i64, tag_id: i64) -> Result<bool>;
    /// Insert a (product, tag) join row. Fails with a duplicate-key error if
    /// the pair already exists.
    fn insert_relation(&self, product_id: i64, tag_id: i64) -> Result<()>;
    /// Resolve a tag slug to the tag and its products, or `None` for an
    /// unknown slug.
    fn products_for_tag(&self, slug: &str) -> Result<Option<TaggedProducts>>;

    /// Insert or replace the (user, product) fridge row with the given
    /// quantity.
    fn upsert_fridge_item(&self, user_id: &str, product_id: i64, quantity: i64) -> Result<()>;
    fn list_fridge_items(&self, user_id: &str) -> Result<Vec<FridgeItem>>;

    /// The current user's favorited recipes.
    fn favorite_recipes(&self) -> Result<Vec<Recipe>>;
}

/// Build the category listing for a slug. Unknown slugs render as
/// "Category Not Found" with no products rather than erroring.
pub fn category_view(store: &dyn Store, slug: &str) -> Result<CategoryView> {
    Ok(match store.products_for_tag(slug)? {
        Some(tagged) => CategoryView {
            title: tagged.tag.name,
            products: tagged.products,
        },
        None => CategoryView::not_found(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::CATEGORY_NOT_FOUND;

    #[test]
    fn test_category_view_known_slug() {
        let store = MemoryStore::new();
        let tag = store
            .insert_tag(&NewTag {
                name: "Produce".to_string(),
                slug: "produce".to_string(),
                tag_type: TagType::Aisle,
            })
            .unwrap();
        let banana = store
            .insert_product(&NewProduct {
                name: "banana".to_string(),
                price: 0.59,
                image_url: None,
            })
            .unwrap();
        store.insert_relation(banana.id, tag.id).unwrap();

        let view = category_view(&store, "produce").unwrap();
        assert_eq!(view.title, "Produce");
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].name, "banana");
    }

    #[test]
    fn test_category_view_unknown_slug() {
        let store = MemoryStore::new();
        let view = category_view(&store, "no-such-aisle").unwrap();
        assert_eq!(view.title, CATEGORY_NOT_FOUND);
        assert!(view.products.is_empty());
    }

    #[test]
    fn test_category_view_tag_with_no_products() {
        let store = MemoryStore::new();
        store
            .insert_tag(&NewTag {
                name: "Bakery".to_string(),
                slug: "bakery".to_string(),
                tag_type: TagType::Aisle,
            })
            .unwrap();

        let view = category_view(&store, "bakery").unwrap();
        assert_eq!(view.title, "Bakery");
        assert!(view.products.is_empty());
    }
}
