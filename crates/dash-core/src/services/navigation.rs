//! Section navigation, sidebar and profile menu state

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A page section reachable from the sidebar.
pub trait Section: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;

    /// Unknown ids fall back to the first section.
    fn from_id(id: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.id() == id.trim())
            .unwrap_or(Self::ALL[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Overview,
    Users,
    Products,
    Settings,
    Reports,
}

impl Section for AdminSection {
    const ALL: &'static [Self] = &[
        AdminSection::Overview,
        AdminSection::Users,
        AdminSection::Products,
        AdminSection::Settings,
        AdminSection::Reports,
    ];

    fn id(&self) -> &'static str {
        match self {
            AdminSection::Overview => "overview",
            AdminSection::Users => "users",
            AdminSection::Products => "products",
            AdminSection::Settings => "settings",
            AdminSection::Reports => "reports",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AdminSection::Overview => "Dashboard",
            AdminSection::Users => "User Management",
            AdminSection::Products => "Product Management",
            AdminSection::Settings => "Settings",
            AdminSection::Reports => "Reports & Analytics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerSection {
    Dashboard,
    Orders,
    Payments,
    Profile,
    Offers,
}

impl Section for ConsumerSection {
    const ALL: &'static [Self] = &[
        ConsumerSection::Dashboard,
        ConsumerSection::Orders,
        ConsumerSection::Payments,
        ConsumerSection::Profile,
        ConsumerSection::Offers,
    ];

    fn id(&self) -> &'static str {
        match self {
            ConsumerSection::Dashboard => "dashboard",
            ConsumerSection::Orders => "orders",
            ConsumerSection::Payments => "payments",
            ConsumerSection::Profile => "profile",
            ConsumerSection::Offers => "offers",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ConsumerSection::Dashboard => "Dashboard",
            ConsumerSection::Orders => "Orders",
            ConsumerSection::Payments => "Payments",
            ConsumerSection::Profile => "Profile",
            ConsumerSection::Offers => "Offers",
        }
    }
}

/// Tabs on the consumer profile section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Orders,
    Payments,
    Invoices,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Orders, ProfileTab::Payments, ProfileTab::Invoices];

    pub fn id(&self) -> &'static str {
        match self {
            ProfileTab::Orders => "orders",
            ProfileTab::Payments => "payments",
            ProfileTab::Invoices => "invoices",
        }
    }

    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == id.trim())
            .unwrap_or_default()
    }
}

/// Sidebar entry as the renderer needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Navigator<S: Section> {
    active: S,
}

impl<S: Section> Default for Navigator<S> {
    fn default() -> Self {
        Self { active: S::ALL[0] }
    }
}

impl<S: Section> Navigator<S> {
    pub fn active(&self) -> S {
        self.active
    }

    pub fn switch(&mut self, section: S) {
        debug!("Switching to section {}", section.id());
        self.active = section;
    }

    pub fn page_title(&self) -> &'static str {
        self.active.title()
    }

    pub fn items(&self) -> Vec<NavItem> {
        S::ALL
            .iter()
            .map(|s| NavItem {
                id: s.id(),
                title: s.title(),
                active: *s == self.active,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarCommand {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub open: bool,
    pub profile_menu_open: bool,
}

impl SidebarState {
    pub fn apply(&mut self, command: SidebarCommand) {
        self.open = matches!(command, SidebarCommand::Open);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    /// A click anywhere outside the profile menu.
    pub fn close_profile_menu(&mut self) {
        self.profile_menu_open = false;
    }

    /// Wide viewports show the sidebar inline, so the drawer closes.
    pub fn on_resize(&mut self, width_px: u32, breakpoint_px: u32) {
        if width_px > breakpoint_px {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_titles() {
        assert_eq!(AdminSection::from_id("users").title(), "User Management");
        assert_eq!(AdminSection::from_id("reports").title(), "Reports & Analytics");
        assert_eq!(AdminSection::from_id("nope").title(), "Dashboard");
    }

    #[test]
    fn test_navigator_items_mark_active() {
        let mut nav = Navigator::<ConsumerSection>::default();
        assert_eq!(nav.page_title(), "Dashboard");
        nav.switch(ConsumerSection::Orders);
        let active: Vec<_> = nav.items().into_iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "orders");
        assert_eq!(nav.page_title(), "Orders");
    }

    #[test]
    fn test_sidebar_resize() {
        let mut sidebar = SidebarState::default();
        sidebar.apply(SidebarCommand::Open);
        sidebar.on_resize(800, 992);
        assert!(sidebar.open);
        sidebar.on_resize(993, 992);
        assert!(!sidebar.open);
    }

    #[test]
    fn test_profile_tab_fallback() {
        assert_eq!(ProfileTab::from_id("invoices"), ProfileTab::Invoices);
        assert_eq!(ProfileTab::from_id("bogus"), ProfileTab::Orders);
    }
}
