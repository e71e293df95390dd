//! Per-session state of the consumer (retailer) dashboard. The ledger is
//! shared read-only; only navigation state belongs to the session.

use std::sync::Arc;

use crate::domain::ConsumerLedger;
use crate::services::navigation::{ConsumerSection, Navigator, ProfileTab, SidebarCommand, SidebarState};

#[derive(Debug, Clone)]
pub struct ConsumerConsole {
    ledger: Arc<ConsumerLedger>,
    pub navigation: Navigator<ConsumerSection>,
    pub sidebar: SidebarState,
    pub profile_tab: ProfileTab,
}

impl ConsumerConsole {
    pub fn new(ledger: Arc<ConsumerLedger>) -> Self {
        Self {
            ledger,
            navigation: Navigator::default(),
            sidebar: SidebarState::default(),
            profile_tab: ProfileTab::default(),
        }
    }

    pub fn ledger(&self) -> &ConsumerLedger {
        &self.ledger
    }

    pub fn navigate(&mut self, section: ConsumerSection) {
        self.navigation.switch(section);
        self.sidebar.close();
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.profile_tab = tab;
    }

    pub fn sidebar(&mut self, command: SidebarCommand) {
        self.sidebar.apply(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityTrends, Retailer};
    use crate::services::navigation::Section;

    fn console() -> ConsumerConsole {
        ConsumerConsole::new(Arc::new(ConsumerLedger {
            retailer: Retailer {
                id: "RT-1".to_string(),
                shop_name: "Shop".to_string(),
                owner: "Owner".to_string(),
                phone: "000".to_string(),
                city: "City".to_string(),
                status: "Active".to_string(),
                credit_limit: 10,
                used_credit: 5,
                outstanding: 5,
                last_payment_date: "2024-12-02".to_string(),
                next_due_date: "2024-12-15".to_string(),
            },
            orders: vec![],
            payments: vec![],
            invoices: vec![],
            offers: vec![],
            trends: ActivityTrends {
                months: vec![],
                orders: vec![],
                payments: vec![],
                outstanding: vec![],
                categories: vec![],
            },
        }))
    }

    #[test]
    fn test_navigate_sets_title_and_closes_sidebar() {
        let mut console = console();
        console.sidebar(SidebarCommand::Open);
        console.navigate(ConsumerSection::from_id("payments"));
        assert_eq!(console.navigation.page_title(), "Payments");
        assert!(!console.sidebar.open);
    }

    #[test]
    fn test_profile_tab_defaults_to_orders() {
        let mut console = console();
        assert_eq!(console.profile_tab, ProfileTab::Orders);
        console.select_tab(ProfileTab::from_id("invoices"));
        assert_eq!(console.profile_tab, ProfileTab::Invoices);
    }
}
