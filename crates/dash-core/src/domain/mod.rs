//! # Dash Core - Domain Module
//! 
//! Domain entities for the admin and consumer dashboards.

pub mod user;
pub mod product;
pub mod retailer;
pub mod order;
pub mod payment;
pub mod invoice;
pub mod ledger;

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export all entities and enums
pub use user::{User, UserRole, UserStatus, UserForm, UserInput, NewUser, UserChanges};
pub use product::{Product, ProductStatus, ProductForm, ProductInput, NewProduct, ProductChanges};
pub use retailer::Retailer;
pub use order::{Order, DeliveryStatus};
pub use payment::Payment;
pub use invoice::Invoice;
pub use ledger::{ConsumerLedger, ActivityTrends, CategoryShare};

/// The record types managed through the admin CRUD forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Product,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Product => "product",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Some(EntityKind::User),
            "product" | "products" => Some(EntityKind::Product),
            _ => None,
        }
    }

    /// Capitalised name used in titles and notices.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Product => "Product",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
