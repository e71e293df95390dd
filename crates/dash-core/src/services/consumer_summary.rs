// ============================================================================
// Dash Core - Consumer Summary
// File: crates/dash-core/src/services/consumer_summary.rs
// Description: Aggregates, lists and badges derived from a consumer ledger
// ============================================================================

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::{ConsumerLedger, DeliveryStatus};

static SUCCESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("Delivered|Paid|Active").expect("success pattern is valid"));
static WARNING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("Pending|Partial|Placed|Confirmed|Dispatched").expect("warning pattern is valid")
});
static DANGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("Cancelled|Returned|Blocked").expect("danger pattern is valid"));

/// Badge class for a consumer status label. The first matching group wins.
pub fn badge_class(label: &str) -> &'static str {
    if SUCCESS_RE.is_match(label) {
        "success"
    } else if WARNING_RE.is_match(label) {
        "warning"
    } else if DANGER_RE.is_match(label) {
        "danger"
    } else {
        "info"
    }
}

/// Rupee amount with Indian digit grouping: the last three digits, then
/// groups of two. `200000` becomes `₹2,00,000`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsumerStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub delivered_orders: usize,
    pub cancelled_orders: usize,
    pub orders_today: usize,
    pub outstanding: String,
    pub last_payment: String,
    pub available_credit: String,
}

/// One line of a dashboard list, with an optional amount on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub label: String,
    pub amount: Option<String>,
}

impl ListEntry {
    fn plain(label: String) -> Self {
        Self { label, amount: None }
    }

    fn with_amount(label: String, amount: u64) -> Self {
        Self {
            label,
            amount: Some(format_inr(amount)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoPair {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditSummary {
    pub credit_limit: String,
    pub used_credit: String,
    pub available_credit: String,
    pub outstanding: String,
    pub last_payment_date: String,
    pub next_due_date: String,
}

/// A status cell rendered as a badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let class = badge_class(&label);
        Self { label, class }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub id: String,
    pub date: String,
    pub items: u32,
    pub amount: String,
    pub pay_type: String,
    pub pay_status: Badge,
    pub delivery: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRow {
    pub id: String,
    pub date: String,
    pub mode: String,
    pub amount: String,
    pub status: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRow {
    pub id: String,
    pub due: String,
    pub amount: String,
    pub status: Badge,
}

pub fn stats(ledger: &ConsumerLedger, today: NaiveDate) -> ConsumerStats {
    let today = today.format("%Y-%m-%d").to_string();
    let with_delivery = |status: DeliveryStatus| {
        ledger.orders.iter().filter(|o| o.delivery == status).count()
    };

    ConsumerStats {
        total_orders: ledger.orders.len(),
        pending_orders: ledger.orders.iter().filter(|o| o.delivery.is_pending()).count(),
        delivered_orders: with_delivery(DeliveryStatus::Delivered),
        cancelled_orders: with_delivery(DeliveryStatus::Cancelled),
        orders_today: ledger.orders.iter().filter(|o| o.date == today).count(),
        outstanding: format_inr(ledger.retailer.outstanding),
        last_payment: ledger
            .payments
            .first()
            .map(|p| p.date.clone())
            .unwrap_or_else(|| "—".to_string()),
        available_credit: format_inr(ledger.retailer.available_credit()),
    }
}

pub fn recent_orders(ledger: &ConsumerLedger) -> Vec<ListEntry> {
    ledger
        .orders
        .iter()
        .take(5)
        .map(|o| ListEntry::plain(format!("{} • {}", o.id, o.date)))
        .collect()
}

/// Every invoice, as the amount still due.
pub fn pending_payments(ledger: &ConsumerLedger) -> Vec<ListEntry> {
    ledger
        .invoices
        .iter()
        .map(|i| ListEntry::with_amount(format!("{} due {}", i.id, i.due), i.amount))
        .collect()
}

pub fn last_payments(ledger: &ConsumerLedger) -> Vec<ListEntry> {
    ledger
        .payments
        .iter()
        .take(3)
        .map(|p| ListEntry::with_amount(format!("{} • {}", p.id, p.date), p.amount))
        .collect()
}

pub fn offers(ledger: &ConsumerLedger) -> Vec<ListEntry> {
    ledger.offers.iter().cloned().map(ListEntry::plain).collect()
}

/// Reminder for the first listed invoice.
pub fn due_reminder(ledger: &ConsumerLedger) -> Option<String> {
    ledger
        .invoices
        .first()
        .map(|i| format!("{} • {} due", i.due, format_inr(i.amount)))
}

pub fn profile_info(ledger: &ConsumerLedger) -> Vec<InfoPair> {
    let r = &ledger.retailer;
    vec![
        InfoPair { label: "Retailer ID", value: r.id.clone() },
        InfoPair { label: "Shop Name", value: r.shop_name.clone() },
        InfoPair { label: "Owner Name", value: r.owner.clone() },
        InfoPair { label: "Phone Number", value: r.phone.clone() },
        InfoPair { label: "City / Area", value: r.city.clone() },
        InfoPair { label: "Account Status", value: r.status.clone() },
    ]
}

pub fn credit_summary(ledger: &ConsumerLedger) -> CreditSummary {
    let r = &ledger.retailer;
    CreditSummary {
        credit_limit: format_inr(r.credit_limit),
        used_credit: format_inr(r.used_credit),
        available_credit: format_inr(r.available_credit()),
        outstanding: format_inr(r.outstanding),
        last_payment_date: r.last_payment_date.clone(),
        next_due_date: r.next_due_date.clone(),
    }
}

pub fn order_rows(ledger: &ConsumerLedger) -> Vec<OrderRow> {
    ledger
        .orders
        .iter()
        .map(|o| OrderRow {
            id: o.id.clone(),
            date: o.date.clone(),
            items: o.items,
            amount: format_inr(o.amount),
            pay_type: o.pay_type.clone(),
            pay_status: Badge::new(o.pay_status.clone()),
            delivery: Badge::new(o.delivery.as_str()),
        })
        .collect()
}

/// Payment history; anything not fully paid shows as `Partial`.
pub fn payment_rows(ledger: &ConsumerLedger) -> Vec<PaymentRow> {
    ledger
        .payments
        .iter()
        .map(|p| PaymentRow {
            id: p.id.clone(),
            date: p.date.clone(),
            mode: p.mode.clone(),
            amount: format_inr(p.amount),
            status: Badge::new(if p.is_paid() { "Paid" } else { "Partial" }),
        })
        .collect()
}

pub fn invoice_rows(ledger: &ConsumerLedger) -> Vec<InvoiceRow> {
    ledger
        .invoices
        .iter()
        .map(|i| InvoiceRow {
            id: i.id.clone(),
            due: i.due.clone(),
            amount: format_inr(i.amount),
            status: Badge::new(i.status.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityTrends, Invoice, Order, Payment, Retailer};

    fn order(id: &str, date: &str, amount: u64, delivery: DeliveryStatus) -> Order {
        Order {
            id: id.to_string(),
            date: date.to_string(),
            items: 3,
            amount,
            pay_type: "Credit".to_string(),
            pay_status: "Unpaid".to_string(),
            delivery,
        }
    }

    fn ledger() -> ConsumerLedger {
        ConsumerLedger {
            retailer: Retailer {
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
            },
            orders: vec![
                order("ORD-6", "2024-12-07", 18_500, DeliveryStatus::Placed),
                order("ORD-5", "2024-12-06", 9_200, DeliveryStatus::Delivered),
                order("ORD-4", "2024-12-05", 6_400, DeliveryStatus::Dispatched),
                order("ORD-3", "2024-12-04", 14_200, DeliveryStatus::Delivered),
                order("ORD-2", "2024-12-03", 7_800, DeliveryStatus::Confirmed),
                order("ORD-1", "2024-12-02", 10_200, DeliveryStatus::Cancelled),
            ],
            payments: vec![
                Payment {
                    id: "PAY-2".to_string(),
                    date: "2024-12-02".to_string(),
                    mode: "UPI".to_string(),
                    amount: 15_000,
                    status: "Paid".to_string(),
                },
                Payment {
                    id: "PAY-1".to_string(),
                    date: "2024-11-26".to_string(),
                    mode: "Cash".to_string(),
                    amount: 6_000,
                    status: "Failed".to_string(),
                },
            ],
            invoices: vec![Invoice {
                id: "INV-2".to_string(),
                due: "2024-12-15".to_string(),
                amount: 12_000,
                status: "Pending".to_string(),
            }],
            offers: vec!["Free delivery".to_string()],
            trends: ActivityTrends {
                months: vec![],
                orders: vec![],
                payments: vec![],
                outstanding: vec![],
                categories: vec![],
            },
        }
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(950), "₹950");
        assert_eq!(format_inr(18_500), "₹18,500");
        assert_eq!(format_inr(200_000), "₹2,00,000");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(badge_class("Delivered"), "success");
        assert_eq!(badge_class("Paid"), "success");
        assert_eq!(badge_class("Partial"), "warning");
        assert_eq!(badge_class("Dispatched"), "warning");
        assert_eq!(badge_class("Returned"), "danger");
        assert_eq!(badge_class("Unpaid"), "info");
        assert_eq!(badge_class("Refunded"), "info");
    }

    #[test]
    fn test_stats() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 7).unwrap();
        let stats = stats(&ledger(), today);
        assert_eq!(stats.total_orders, 6);
        assert_eq!(stats.pending_orders, 3);
        assert_eq!(stats.delivered_orders, 2);
        assert_eq!(stats.cancelled_orders, 1);
        assert_eq!(stats.orders_today, 1);
        assert_eq!(stats.outstanding, "₹32,000");
        assert_eq!(stats.last_payment, "2024-12-02");
        assert_eq!(stats.available_credit, "₹1,15,000");
    }

    #[test]
    fn test_empty_payments_show_dash() {
        let mut ledger = ledger();
        ledger.payments.clear();
        ledger.invoices.clear();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(stats(&ledger, today).last_payment, "—");
        assert_eq!(due_reminder(&ledger), None);
    }

    #[test]
    fn test_lists() {
        let ledger = ledger();
        let recent = recent_orders(&ledger);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].label, "ORD-6 • 2024-12-07");

        let pending = pending_payments(&ledger);
        assert_eq!(pending[0].label, "INV-2 due 2024-12-15");
        assert_eq!(pending[0].amount.as_deref(), Some("₹12,000"));

        assert_eq!(due_reminder(&ledger).unwrap(), "2024-12-15 • ₹12,000 due");
        assert_eq!(last_payments(&ledger).len(), 2);
    }

    #[test]
    fn test_unpaid_payment_shows_partial() {
        let rows = payment_rows(&ledger());
        assert_eq!(rows[0].status.label, "Paid");
        assert_eq!(rows[1].status.label, "Partial");
        assert_eq!(rows[1].status.class, "warning");
    }
}
