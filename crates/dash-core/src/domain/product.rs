// ============================================================================
// Dash Core - Product Entity
// File: crates/dash-core/src/domain/product.rs
// Description: Catalogue product with price, stock and a free-form status
// ============================================================================

use dash_shared::EntityId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::{Validate, ValidationError};

use crate::store::Record;
use crate::validation::{field_error, is_blank, parse_price, parse_stock, FieldErrors};

/// Stock status as chosen on the form. It is never derived from the stock
/// count, and values outside the three known ones are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductStatus {
    InStock,
    OutOfStock,
    LowStock,
    Other(String),
}

impl ProductStatus {
    pub const KNOWN: [ProductStatus; 3] = [
        ProductStatus::InStock,
        ProductStatus::OutOfStock,
        ProductStatus::LowStock,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProductStatus::InStock => "In Stock",
            ProductStatus::OutOfStock => "Out of Stock",
            ProductStatus::LowStock => "Low Stock",
            ProductStatus::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "In Stock" => ProductStatus::InStock,
            "Out of Stock" => ProductStatus::OutOfStock,
            "Low Stock" => ProductStatus::LowStock,
            other => ProductStatus::Other(other.to_string()),
        }
    }

    /// Badge style; unknown statuses get none.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "success",
            ProductStatus::OutOfStock => "inactive",
            ProductStatus::LowStock => "warning",
            ProductStatus::Other(_) => "",
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::InStock
    }
}

impl Serialize for ProductStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProductStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ProductStatus::parse(&raw))
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
}

impl Product {
    /// Price as shown in tables, e.g. `$49.99`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
}

/// Fields to overwrite on an existing product; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
}

impl Record for Product {
    type Draft = NewProduct;
    type Changes = ProductChanges;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            status: draft.status,
        }
    }

    fn merge(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(stock) = changes.stock {
            self.stock = stock;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
    }
}

/// Raw product form. Price and stock arrive as text from the page, and may
/// arrive as numbers from the JSON API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProductForm {
    pub id: String,

    #[validate(custom(function = "validate_product_name"))]
    pub name: String,

    #[validate(custom(function = "validate_category"))]
    pub category: String,

    #[serde(deserialize_with = "text_or_number")]
    #[validate(custom(function = "validate_price"))]
    pub price: String,

    #[serde(deserialize_with = "text_or_number")]
    #[validate(custom(function = "validate_stock"))]
    pub stock: String,

    pub status: Option<String>,
}

const PRODUCT_FIELD_ORDER: [&str; 4] = ["name", "category", "price", "stock"];

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    if is_blank(name) {
        return Err(field_error("required", "Product name is required"));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if is_blank(category) {
        return Err(field_error("required", "Category is required"));
    }
    Ok(())
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    if parse_price(price).is_none() {
        return Err(field_error("price", "Valid price is required"));
    }
    Ok(())
}

fn validate_stock(stock: &str) -> Result<(), ValidationError> {
    if parse_stock(stock).is_none() {
        return Err(field_error("stock", "Valid stock quantity is required"));
    }
    Ok(())
}

/// A product form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: Option<ProductStatus>,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            status: Some(product.status.as_str().to_string()),
        }
    }

    pub fn target_id(&self) -> Option<EntityId> {
        self.id.trim().parse().ok()
    }

    pub fn parse(&self) -> Result<ProductInput, FieldErrors> {
        if let Err(errors) = self.validate() {
            return Err(FieldErrors::from_validation(&errors, &PRODUCT_FIELD_ORDER));
        }

        // Both parse after a passing validate(); the fallbacks are unreachable.
        let price = parse_price(&self.price).unwrap_or_default();
        let stock = parse_stock(&self.stock).unwrap_or_default();

        Ok(ProductInput {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price,
            stock,
            status: self
                .status
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(ProductStatus::parse),
        })
    }
}

impl ProductInput {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            category: self.category,
            price: self.price,
            stock: self.stock,
            status: self.status.unwrap_or_default(),
        }
    }

    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: Some(self.name),
            category: Some(self.category),
            price: Some(self.price),
            stock: Some(self.stock),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, category: &str, price: &str, stock: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            category: category.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_widget_parses() {
        let input = form("Widget", "Tools", "10", "5").parse().unwrap();
        assert_eq!(input.price, 10.0);
        assert_eq!(input.stock, 5);
        assert_eq!(input.status, None);
    }

    #[test]
    fn test_empty_name_and_negative_price_are_two_errors() {
        let errors = form("", "Tools", "-5", "3").parse().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Product name is required"));
        assert_eq!(errors.get("price"), Some("Valid price is required"));
    }

    #[test]
    fn test_all_fields_fail_in_form_order() {
        let errors = form(" ", "", "x", "-1").parse().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "category", "price", "stock"]);
        assert_eq!(errors.get("stock"), Some("Valid stock quantity is required"));
    }

    #[test]
    fn test_status_is_kept_verbatim() {
        let mut f = form("Widget", "Tools", "10", "5");
        f.status = Some("Discontinued".to_string());
        let status = f.parse().unwrap().status.unwrap();
        assert_eq!(status.as_str(), "Discontinued");
        assert_eq!(status.badge_class(), "");
        assert_eq!(ProductStatus::parse("Low Stock").badge_class(), "warning");
        assert_eq!(ProductStatus::parse("Out of Stock").badge_class(), "inactive");
    }

    #[test]
    fn test_json_numbers_accepted() {
        let f: ProductForm = serde_json::from_str(
            r#"{"name":"Widget","category":"Tools","price":10.5,"stock":5}"#,
        )
        .unwrap();
        let input = f.parse().unwrap();
        assert_eq!(input.price, 10.5);
        assert_eq!(input.stock, 5);
    }

    #[test]
    fn test_display_price() {
        let product = Product {
            id: 1,
            name: "Premium Widget".to_string(),
            category: "Electronics".to_string(),
            price: 49.99,
            stock: 156,
            status: ProductStatus::InStock,
        };
        assert_eq!(product.display_price(), "$49.99");
    }
}
