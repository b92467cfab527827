use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Tag categories: `aisle` maps to a physical store section, `dietary` and
/// `special` are filter labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Aisle,
    Dietary,
    Special,
}

pub const TAG_TYPES: &[&str] = &["aisle", "dietary", "special"];

impl TagType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TagType::Aisle => "aisle",
            TagType::Dietary => "dietary",
            TagType::Special => "special",
        }
    }
}

impl std::fmt::Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate_tag_type(s: &str) -> Result<TagType> {
    match s.to_lowercase().as_str() {
        "aisle" => Ok(TagType::Aisle),
        "dietary" => Ok(TagType::Dietary),
        "special" => Ok(TagType::Special),
        _ => bail!(
            "Invalid tag type '{s}'. Must be one of: {}",
            TAG_TYPES.join(", ")
        ),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
}

/// A quantity of a product a user has on hand. Unique on (user, product);
/// writes go through an upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeItem {
    pub user_id: String,
    pub product_id: i64,
    pub quantity: i64,
    // Joined field for display
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub product_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_url: Option<String>,
}

pub const CATEGORY_NOT_FOUND: &str = "Category Not Found";

/// What a category listing renders: the tag's display name and its products.
/// An unknown slug yields [`CATEGORY_NOT_FOUND`] and an empty product list.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub title: String,
    pub products: Vec<Product>,
}

impl CategoryView {
    #[must_use]
    pub fn not_found() -> Self {
        CategoryView {
            title: CATEGORY_NOT_FOUND.to_string(),
            products: Vec::new(),
        }
    }
}

/// Normalize a product name for case-insensitive matching.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive name equality, the lookup the seeding scripts rely on.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        bail!("Price must be a finite number");
    }
    if price <= 0.0 {
        bail!("Price must be greater than 0");
    }
    Ok(())
}

/// A slug is lowercase alphanumeric words joined by single hyphens.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        bail!("Slug must not be empty");
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        bail!("Invalid slug '{slug}': hyphens must separate words");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!("Invalid slug '{slug}': only lowercase letters, digits, and hyphens are allowed");
    }
    Ok(())
}

/// Derive a slug from a display name ("Meat & Seafood" → "meat-and-seafood").
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_hyphen = true;
    for word in name.to_lowercase().split_whitespace() {
        let word = if word == "&" { "and" } else { word };
        for c in word.chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                slug.push(c);
                last_hyphen = false;
            } else if !last_hyphen {
                slug.push('-');
                last_hyphen = true;
            }
        }
        if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tag_type() {
        assert_eq!(validate_tag_type("aisle").unwrap(), TagType::Aisle);
        assert_eq!(validate_tag_type("Dietary").unwrap(), TagType::Dietary);
        assert_eq!(validate_tag_type("SPECIAL").unwrap(), TagType::Special);
        assert!(validate_tag_type("seasonal").is_err());
        assert!(validate_tag_type("").is_err());
    }

    #[test]
    fn test_tag_type_display() {
        assert_eq!(TagType::Aisle.to_string(), "aisle");
        assert_eq!(TagType::Special.to_string(), "special");
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("Banana", "banana"));
        assert!(names_match(" bell pepper ", "Bell Pepper"));
        assert!(!names_match("banana", "bananas"));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.59).is_ok());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-1.99).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("produce").is_ok());
        assert!(validate_slug("meat-and-seafood").is_ok());
        assert!(validate_slug("aisle-9").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("-produce").is_err());
        assert!(validate_slug("produce-").is_err());
        assert!(validate_slug("meat--seafood").is_err());
        assert!(validate_slug("Meat").is_err());
        assert!(validate_slug("dairy eggs").is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Produce"), "produce");
        assert_eq!(slugify("Meat & Seafood"), "meat-and-seafood");
        assert_eq!(slugify("Dairy & Eggs"), "dairy-and-eggs");
        assert_eq!(slugify("Gluten-Free"), "gluten-free");
        assert_eq!(slugify("  Frozen   Foods  "), "frozen-foods");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_output_is_valid() {
        for name in ["Condiments & Sauces", "Canned Goods", "Dairy-Free"] {
            assert!(validate_slug(&slugify(name)).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_category_view_not_found() {
        let view = CategoryView::not_found();
        assert_eq!(view.title, "Category Not Found");
        assert!(view.products.is_empty());
    }

    #[test]
    fn test_tag_serde_roundtrip() {
        let json = r#"{"id":3,"name":"Produce","slug":"produce","type":"aisle"}"#;
        let tag: Tag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.tag_type, TagType::Aisle);
        assert_eq!(tag.slug, "produce");
    }
}
