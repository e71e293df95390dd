//! Retailer account shown on the consumer dashboard

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retailer {
    pub id: String,
    pub shop_name: String,
    pub owner: String,
    pub phone: String,
    pub city: String,
    pub status: String,
    pub credit_limit: u64,
    pub used_credit: u64,
    pub outstanding: u64,
    pub last_payment_date: String,
    pub next_due_date: String,
}

impl Retailer {
    pub fn available_credit(&self) -> u64 {
        self.credit_limit.saturating_sub(self.used_credit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_credit() {
        let mut retailer = Retailer {
            id: "RT-1".to_string(),
            shop_name: "Shop".to_string(),
            owner: "Owner".to_string(),
            phone: "000".to_string(),
            city: "City".to_string(),
            status: "Active".to_string(),
            credit_limit: 200_000,
            used_credit: 85_000,
            outstanding: 32_000,
            last_payment_date: "2024-12-02".to_string(),
            next_due_date: "2024-12-15".to_string(),
        };
        assert_eq!(retailer.available_credit(), 115_000);

        retailer.used_credit = 250_000;
        assert_eq!(retailer.available_credit(), 0);
    }
}
