use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crisper_core::models::{FridgeItem, NewProduct, NewTag, Product, Recipe, Tag, TagType};
use crisper_core::store::{Store, TaggedProducts};

/// Client for the hosted backend's REST and auth endpoints.
///
/// Table access goes through PostgREST (`/rest/v1/`): filters are query
/// parameters (`slug=eq.produce`, `name=ilike.banana`), embedded joins go in
/// `select=`, and inserts return the created row when asked to with
/// `Prefer: return=representation`.
pub struct SupabaseClient {
    client: reqwest::Client,
    base: String,
    rt: tokio::runtime::Handle,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key_value =
            HeaderValue::from_str(api_key).context("API key is not a valid header value")?;
        headers.insert("apikey", key_value);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .context("API key is not a valid header value")?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .user_agent(format!(
                "crisper-cli/{} (grocery seeding tool)",
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(15))
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
            rt: tokio::runtime::Handle::current(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base)
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let resp = self
            .client
            .get(self.table_url(table))
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to reach Supabase ({table})"))?;
        let resp = check_status(resp).await?;
        resp.json()
            .await
            .with_context(|| format!("Failed to parse Supabase response ({table})"))
    }

    async fn insert_row<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&[body])
            .send()
            .await
            .with_context(|| format!("Failed to reach Supabase ({table})"))?;
        let resp = check_status(resp).await?;
        let rows: Vec<T> = resp
            .json()
            .await
            .with_context(|| format!("Failed to parse Supabase insert response ({table})"))?;
        rows.into_iter()
            .next()
            .with_context(|| format!("Supabase returned no row for insert into {table}"))
    }

    pub async fn find_product_by_name_async(&self, name: &str) -> Result<Option<Product>> {
        let rows: Vec<Product> = self
            .get_rows(
                "products",
                &[
                    ("select", "id,name,price,image_url".to_string()),
                    ("name", format!("ilike.{name}")),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn insert_product_async(&self, product: &NewProduct) -> Result<Product> {
        self.insert_row("products", product).await
    }

    pub async fn list_products_async(&self) -> Result<Vec<Product>> {
        self.get_rows(
            "products",
            &[
                ("select", "id,name,price,image_url".to_string()),
                ("order", "name.asc".to_string()),
            ],
        )
        .await
    }

    pub async fn find_tag_by_slug_async(&self, slug: &str) -> Result<Option<Tag>> {
        let rows: Vec<Tag> = self
            .get_rows(
                "tags",
                &[
                    ("select", "id,name,slug,type".to_string()),
                    ("slug", format!("eq.{slug}")),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn list_tags_async(&self, tag_type: Option<TagType>) -> Result<Vec<Tag>> {
        let mut query = vec![
            ("select", "id,name,slug,type".to_string()),
            ("order", "name.asc".to_string()),
        ];
        if let Some(ty) = tag_type {
            query.push(("type", format!("eq.{ty}")));
        }
        self.get_rows("tags", &query).await
    }

    pub async fn insert_tag_async(&self, tag: &NewTag) -> Result<Tag> {
        self.insert_row("tags", tag).await
    }

    pub async fn relation_exists_async(&self, product_id: i64, tag_id: i64) -> Result<bool> {
        let rows: Vec<RelationRow> = self
            .get_rows(
                "product_tags",
                &[
                    ("select", "product_id,tag_id".to_string()),
                    ("product_id", format!("eq.{product_id}")),
                    ("tag_id", format!("eq.{tag_id}")),
                ],
            )
            .await?;
        Ok(!rows.is_empty())
    }

    pub async fn insert_relation_async(&self, product_id: i64, tag_id: i64) -> Result<()> {
        let resp = self
            .client
            .post(self.table_url("product_tags"))
            .header("Prefer", "return=minimal")
            .json(&RelationRow { product_id, tag_id })
            .send()
            .await
            .context("Failed to reach Supabase (product_tags)")?;
        check_status(resp).await?;
        Ok(())
    }

    pub async fn products_for_tag_async(&self, slug: &str) -> Result<Option<TaggedProducts>> {
        let rows: Vec<TagProductsRow> = self
            .get_rows(
                "tags",
                &[
                    (
                        "select",
                        "id,name,slug,type,products(id,name,price,image_url)".to_string(),
                    ),
                    ("slug", format!("eq.{slug}")),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().map(TagProductsRow::into_tagged))
    }

    /// Calls the `upsert_fridge_item` database function, which inserts or
    /// replaces the (user, product) row atomically.
    pub async fn upsert_fridge_item_async(
        &self,
        user_id: &str,
        product_id: i64,
        quantity: i64,
    ) -> Result<()> {
        let url = format!("{}/rest/v1/rpc/upsert_fridge_item", self.base);
        let resp = self
            .client
            .post(url)
            .json(&UpsertFridgeArgs {
                p_user_id: user_id,
                p_product_id: product_id,
                p_quantity: quantity,
            })
            .send()
            .await
            .context("Failed to reach Supabase (upsert_fridge_item)")?;
        check_status(resp).await?;
        Ok(())
    }

    pub async fn list_fridge_items_async(&self, user_id: &str) -> Result<Vec<FridgeItem>> {
        let rows: Vec<FridgeRow> = self
            .get_rows(
                "fridge_items",
                &[
                    ("select", "user_id,product_id,quantity,products(name)".to_string()),
                    ("user_id", format!("eq.{user_id}")),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(FridgeRow::into_item).collect())
    }

    /// Favorite recipes for the key's user, via the join table's embedded
    /// select. Rows whose recipe was deleted come back null and are dropped.
    pub async fn favorite_recipes_async(&self) -> Result<Vec<Recipe>> {
        let rows: Vec<FavoriteRow> = self
            .get_rows(
                "user_favorite_recipes",
                &[(
                    "select",
                    "recipes(id,name,description,image_url,source_url)".to_string(),
                )],
            )
            .await?;
        Ok(rows.into_iter().filter_map(|row| row.recipes).collect())
    }

    /// The user the configured key authenticates as.
    pub async fn current_user_async(&self) -> Result<String> {
        let url = format!("{}/auth/v1/user", self.base);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to reach Supabase auth endpoint")?;
        let resp = check_status(resp)
            .await
            .context("Not authenticated; pass --user or configure a user-scoped key")?;
        let user: AuthUser = resp
            .json()
            .await
            .context("Failed to parse Supabase auth response")?;
        Ok(user.id)
    }
}

/// Surface non-2xx responses as errors carrying the body, so duplicate-key
/// rejections (code 23505) stay recognizable upstream.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    anyhow::bail!("Supabase returned {status}: {body}")
}

#[derive(Serialize, serde::Deserialize)]
struct RelationRow {
    product_id: i64,
    tag_id: i64,
}

#[derive(Serialize)]
struct UpsertFridgeArgs<'a> {
    p_user_id: &'a str,
    p_product_id: i64,
    p_quantity: i64,
}

#[derive(serde::Deserialize)]
struct TagProductsRow {
    id: i64,
    name: String,
    slug: String,
    #[serde(rename = "type")]
    tag_type: TagType,
    #[serde(default)]
    products: Vec<Product>,
}

impl TagProductsRow {
    fn into_tagged(self) -> TaggedProducts {
        TaggedProducts {
            tag: Tag {
                id: self.id,
                name: self.name,
                slug: self.slug,
                tag_type: self.tag_type,
            },
            products: self.products,
        }
    }
}

#[derive(serde::Deserialize)]
struct FridgeRow {
    user_id: String,
    product_id: i64,
    quantity: i64,
    products: Option<JoinedProductName>,
}

#[derive(serde::Deserialize)]
struct JoinedProductName {
    name: String,
}

impl FridgeRow {
    fn into_item(self) -> FridgeItem {
        FridgeItem {
            user_id: self.user_id,
            product_id: self.product_id,
            quantity: self.quantity,
            product_name: self.products.map(|p| p.name),
        }
    }
}

#[derive(serde::Deserialize)]
struct FavoriteRow {
    recipes: Option<Recipe>,
}

#[derive(serde::Deserialize)]
struct AuthUser {
    id: String,
}

impl Store for SupabaseClient {
    fn find_product_by_name(&self, name: &str) -> Result<Option<Product>> {
        self.rt.block_on(self.find_product_by_name_async(name))
    }

    fn insert_product(&self, product: &NewProduct) -> Result<Product> {
        self.rt.block_on(self.insert_product_async(product))
    }

    fn list_products(&self) -> Result<Vec<Product>> {
        self.rt.block_on(self.list_products_async())
    }

    fn find_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
        self.rt.block_on(self.find_tag_by_slug_async(slug))
    }

    fn list_tags(&self, tag_type: Option<TagType>) -> Result<Vec<Tag>> {
        self.rt.block_on(self.list_tags_async(tag_type))
    }

    fn insert_tag(&self, tag: &NewTag) -> Result<Tag> {
        self.rt.block_on(self.insert_tag_async(tag))
    }

    fn relation_exists(&self, product_id: i64, tag_id: i64) -> Result<bool> {
        self.rt
            .block_on(self.relation_exists_async(product_id, tag_id))
    }

    fn insert_relation(&self, product_id: i64, tag_id: i64) -> Result<()> {
        self.rt
            .block_on(self.insert_relation_async(product_id, tag_id))
    }

    fn products_for_tag(&self, slug: &str) -> Result<Option<TaggedProducts>> {
        self.rt.block_on(self.products_for_tag_async(slug))
    }

    fn upsert_fridge_item(&self, user_id: &str, product_id: i64, quantity: i64) -> Result<()> {
        self.rt
            .block_on(self.upsert_fridge_item_async(user_id, product_id, quantity))
    }

    fn list_fridge_items(&self, user_id: &str) -> Result<Vec<FridgeItem>> {
        self.rt.block_on(self.list_fridge_items_async(user_id))
    }

    fn favorite_recipes(&self) -> Result<Vec<Recipe>> {
        self.rt.block_on(self.favorite_recipes_async())
    }
}
