// ============================================================================
// Dash Infrastructure - Seed Data
// File: crates/dash-infrastructure/src/seed.rs
// Description: Records every new session starts from
// ============================================================================

use dash_core::{
    ActivityTrends, CategoryShare, ConsumerLedger, DeliveryStatus, EntityStore, Invoice, Order,
    Payment, Product, ProductStatus, Retailer, User, UserRole, UserStatus,
};

fn user(id: u64, name: &str, email: &str, role: UserRole, join_date: &str, status: UserStatus) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        join_date: join_date.to_string(),
        status,
    }
}

fn product(id: u64, name: &str, category: &str, price: f64, stock: u32, status: ProductStatus) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
        status,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(1, "Rajesh Kumar", "rajesh@example.com", UserRole::Admin, "Nov 15, 2024", UserStatus::Active),
        user(2, "Priya Sharma", "priya@example.com", UserRole::Manager, "Oct 22, 2024", UserStatus::Active),
        user(3, "Amit Patel", "amit@example.com", UserRole::User, "Sep 30, 2024", UserStatus::Inactive),
        user(4, "Neha Singh", "neha@example.com", UserRole::User, "Dec 1, 2024", UserStatus::Active),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Premium Widget", "Electronics", 49.99, 156, ProductStatus::InStock),
        product(2, "Smart Device", "Technology", 299.99, 45, ProductStatus::InStock),
        product(3, "Pro Kit", "Tools", 79.99, 0, ProductStatus::OutOfStock),
        product(4, "Ultra Monitor", "Electronics", 399.99, 12, ProductStatus::LowStock),
        product(5, "Ergonomic Chair", "Furniture", 249.99, 88, ProductStatus::InStock),
    ]
}

pub fn user_store() -> EntityStore<User> {
    EntityStore::seeded(users())
}

pub fn product_store() -> EntityStore<Product> {
    EntityStore::seeded(products())
}

fn order(
    id: &str,
    date: &str,
    items: u32,
    amount: u64,
    pay_type: &str,
    pay_status: &str,
    delivery: DeliveryStatus,
) -> Order {
    Order {
        id: id.to_string(),
        date: date.to_string(),
        items,
        amount,
        pay_type: pay_type.to_string(),
        pay_status: pay_status.to_string(),
        delivery,
    }
}

fn payment(id: &str, date: &str, mode: &str, amount: u64) -> Payment {
    Payment {
        id: id.to_string(),
        date: date.to_string(),
        mode: mode.to_string(),
        amount,
        status: "Paid".to_string(),
    }
}

fn invoice(id: &str, due: &str, amount: u64, status: &str) -> Invoice {
    Invoice {
        id: id.to_string(),
        due: due.to_string(),
        amount,
        status: status.to_string(),
    }
}

/// The demo retailer account behind the consumer dashboard.
pub fn consumer_ledger() -> ConsumerLedger {
    use DeliveryStatus::*;

    ConsumerLedger {
        retailer: Retailer {
            id: "RT-2048".to_string(),
            shop_name: "Sharma Provisions".to_string(),
            owner: "Amit Sharma".to_string(),
            phone: "+91 98765 43210".to_string(),
            city: "Jaipur".to_string(),
            status: "Active".to_string(),
            credit_limit: 200_000,
            used_credit: 85_000,
            outstanding: 32_000,
            last_payment_date: "2024-12-02".to_string(),
            next_due_date: "2024-12-15".to_string(),
        },
        orders: vec![
            order("ORD-1009", "2024-12-07", 12, 18_500, "Credit", "Unpaid", Placed),
            order("ORD-1008", "2024-12-06", 8, 9_200, "Online", "Paid", Delivered),
            order("ORD-1007", "2024-12-05", 5, 6_400, "Credit", "Partial", Dispatched),
            order("ORD-1006", "2024-12-04", 11, 14_200, "Online", "Paid", Delivered),
            order("ORD-1005", "2024-12-03", 6, 7_800, "Credit", "Unpaid", Confirmed),
            order("ORD-1004", "2024-12-02", 9, 10_200, "Credit", "Paid", Cancelled),
        ],
        payments: vec![
            payment("PAY-301", "2024-12-02", "UPI", 15_000),
            payment("PAY-300", "2024-11-26", "Credit Adj.", 12_000),
            payment("PAY-299", "2024-11-18", "UPI", 8_000),
            payment("PAY-298", "2024-11-10", "Cash", 6_000),
        ],
        invoices: vec![
            invoice("INV-410", "2024-12-15", 12_000, "Pending"),
            invoice("INV-409", "2024-12-10", 8_500, "Pending"),
            invoice("INV-408", "2024-12-05", 11_500, "Partial"),
        ],
        offers: vec![
            "2% discount on payments before due date.".to_string(),
            "Free delivery on orders above ₹15,000 this week.".to_string(),
            "Extra credit review available on request.".to_string(),
        ],
        trends: ActivityTrends {
            months: ["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            orders: vec![14, 16, 18, 20, 22, 26],
            payments: vec![42, 36, 38, 45, 50, 54],
            outstanding: vec![24, 28, 26, 22, 20, 18],
            categories: [("Groceries", 35), ("Beverages", 25), ("Personal Care", 20), ("Snacks", 20)]
                .iter()
                .map(|(category, share)| CategoryShare {
                    category: category.to_string(),
                    share: *share,
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dash_core::services::consumer_summary;
    use dash_core::store::Record;

    #[test]
    fn test_seeded_stores_continue_after_max_id() {
        assert_eq!(user_store().next_id(), 5);
        assert_eq!(product_store().next_id(), 6);
        assert_eq!(users()[2].id(), 3);
    }

    #[test]
    fn test_seed_ledger_has_three_pending_orders() {
        let ledger = consumer_ledger();
        let today = NaiveDate::from_ymd_opt(2024, 12, 9).unwrap();
        let stats = consumer_summary::stats(&ledger, today);
        assert_eq!(stats.pending_orders, 3);
        assert_eq!(stats.available_credit, "₹1,15,000");
        assert_eq!(ledger.trends.categories.len(), 4);
    }

    #[test]
    fn test_unpaid_order_gets_info_badge() {
        let rows = consumer_summary::order_rows(&consumer_ledger());
        let unpaid = rows.iter().find(|r| r.id == "ORD-1009").unwrap();
        assert_eq!(unpaid.pay_status.label, "Unpaid");
        assert_eq!(unpaid.pay_status.class, "info");
        assert_eq!(unpaid.delivery.class, "warning");
    }
}
