//! Consumer page view

use chrono::NaiveDate;
use dash_core::services::consumer_summary::{
    self, ConsumerStats, CreditSummary, InfoPair, InvoiceRow, ListEntry, OrderRow, PaymentRow,
};
use dash_core::services::navigation::{NavItem, Section};
use dash_core::services::{ConsumerConsole, ProfileTab, Theme};
use serde::Serialize;

use super::charts::consumer_charts;
use super::{HeaderView, ThemeOption};
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct TabView {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Chart configs as JSON text, placed in `data-config` attributes.
#[derive(Debug, Serialize)]
pub struct ChartJson {
    pub orders: String,
    pub payments: String,
    pub categories: String,
}

#[derive(Debug, Serialize)]
pub struct ConsumerPage {
    pub header: HeaderView,
    pub page_title: &'static str,
    pub section: &'static str,
    pub nav: Vec<NavItem>,
    pub sidebar_open: bool,
    pub themes: Vec<ThemeOption>,
    pub stats: ConsumerStats,
    pub recent_orders: Vec<ListEntry>,
    pub pending_payments: Vec<ListEntry>,
    pub last_payments: Vec<ListEntry>,
    pub offers: Vec<ListEntry>,
    pub due_reminder: Option<String>,
    pub profile_info: Vec<InfoPair>,
    pub credit: CreditSummary,
    pub orders: Vec<OrderRow>,
    pub payments: Vec<PaymentRow>,
    pub invoices: Vec<InvoiceRow>,
    pub tabs: Vec<TabView>,
    pub profile_tab: &'static str,
    pub charts: ChartJson,
}

fn tab_label(tab: ProfileTab) -> &'static str {
    match tab {
        ProfileTab::Orders => "Orders",
        ProfileTab::Payments => "Payments",
        ProfileTab::Invoices => "Invoices",
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::InternalError(e.to_string()))
}

impl ConsumerPage {
    pub fn build(
        console: &ConsumerConsole,
        header: HeaderView,
        theme: Theme,
        today: NaiveDate,
    ) -> Result<Self, ApiError> {
        let ledger = console.ledger();
        let charts = consumer_charts(&ledger.trends);
        let charts = ChartJson {
            orders: to_json(&charts.orders)?,
            payments: to_json(&charts.payments)?,
            categories: to_json(&charts.categories)?,
        };

        Ok(Self {
            header,
            page_title: console.navigation.page_title(),
            section: console.navigation.active().id(),
            nav: console.navigation.items(),
            sidebar_open: console.sidebar.open,
            themes: ThemeOption::all(theme),
            stats: consumer_summary::stats(ledger, today),
            recent_orders: consumer_summary::recent_orders(ledger),
            pending_payments: consumer_summary::pending_payments(ledger),
            last_payments: consumer_summary::last_payments(ledger),
            offers: consumer_summary::offers(ledger),
            due_reminder: consumer_summary::due_reminder(ledger),
            profile_info: consumer_summary::profile_info(ledger),
            credit: consumer_summary::credit_summary(ledger),
            orders: consumer_summary::order_rows(ledger),
            payments: consumer_summary::payment_rows(ledger),
            invoices: consumer_summary::invoice_rows(ledger),
            tabs: ProfileTab::ALL
                .into_iter()
                .map(|tab| TabView {
                    id: tab.id(),
                    label: tab_label(tab),
                    active: tab == console.profile_tab,
                })
                .collect(),
            profile_tab: console.profile_tab.id(),
            charts,
        })
    }
}
