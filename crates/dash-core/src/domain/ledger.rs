// ============================================================================
// Dash Core - Consumer Ledger
// File: crates/dash-core/src/domain/ledger.rs
// Description: Everything the consumer dashboard reads, in one snapshot
// ============================================================================

use serde::{Deserialize, Serialize};

use super::{Invoice, Order, Payment, Retailer};

/// Share of purchases per category, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub share: u32,
}

/// Month-by-month series behind the consumer charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTrends {
    pub months: Vec<String>,
    pub orders: Vec<u32>,
    pub payments: Vec<u32>,
    pub outstanding: Vec<u32>,
    pub categories: Vec<CategoryShare>,
}

/// Read-only view of one retailer's account. Lists are newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerLedger {
    pub retailer: Retailer,
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub invoices: Vec<Invoice>,
    pub offers: Vec<String>,
    pub trends: ActivityTrends,
}
