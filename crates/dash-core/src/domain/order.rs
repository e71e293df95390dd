//! Consumer order (read-only)

use serde::{Deserialize, Serialize};

/// Delivery progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Placed,
    Confirmed,
    Dispatched,
    Delivered,
    Cancelled,
    Returned,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Placed => "Placed",
            DeliveryStatus::Confirmed => "Confirmed",
            DeliveryStatus::Dispatched => "Dispatched",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
            DeliveryStatus::Returned => "Returned",
        }
    }

    /// Still on its way to the retailer.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            DeliveryStatus::Placed | DeliveryStatus::Confirmed | DeliveryStatus::Dispatched
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub items: u32,
    pub amount: u64,
    pub pay_type: String,
    pub pay_status: String,
    pub delivery: DeliveryStatus,
}
