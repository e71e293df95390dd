// ============================================================================
// Dash API - Page Renderer
// File: crates/dash-api/src/render/mod.rs
// Description: Handlebars templates for the login, admin and consumer pages
// ============================================================================
//! Every template interpolates with `{{ }}`, which HTML-escapes the value.
//! Record fields typed by users are never emitted with triple braces.

pub mod admin;
pub mod charts;
pub mod consumer;

use dash_core::services::Theme;
use dash_shared::utils::{avatar_letter, display_name};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;

pub use admin::AdminPage;
pub use consumer::ConsumerPage;

const TEMPLATES: [(&str, &str); 3] = [
    ("login", include_str!("../../templates/login.hbs")),
    ("admin", include_str!("../../templates/admin.hbs")),
    ("consumer", include_str!("../../templates/consumer.hbs")),
];

const PARTIALS: [(&str, &str); 3] = [
    ("head", include_str!("../../templates/partials/head.hbs")),
    ("notices", include_str!("../../templates/partials/notices.hbs")),
    ("modal", include_str!("../../templates/partials/modal.hbs")),
];

/// Name and avatar shown in the page header.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderView {
    pub user_name: String,
    pub avatar: String,
}

impl HeaderView {
    pub fn from_email(email: &str) -> Self {
        let user_name = display_name(email);
        let avatar = avatar_letter(&user_name);
        Self { user_name, avatar }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeOption {
    pub value: &'static str,
    pub active: bool,
}

impl ThemeOption {
    pub fn all(current: Theme) -> Vec<Self> {
        Theme::ALL
            .into_iter()
            .map(|theme| ThemeOption {
                value: theme.as_str(),
                active: theme == current,
            })
            .collect()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct LoginPage {
    pub email: String,
    pub error: Option<String>,
}

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, ApiError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        for (name, source) in PARTIALS {
            registry
                .register_partial(name, source)
                .map_err(|e| ApiError::RenderError(e.to_string()))?;
        }
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .map_err(|e| ApiError::RenderError(e.to_string()))?;
        }

        info!("Registered {} page templates", TEMPLATES.len());
        Ok(Self { registry })
    }

    pub fn login(&self, page: &LoginPage) -> Result<String, ApiError> {
        Ok(self.registry.render("login", page)?)
    }

    pub fn admin(&self, page: &AdminPage) -> Result<String, ApiError> {
        Ok(self.registry.render("admin", page)?)
    }

    pub fn consumer(&self, page: &ConsumerPage) -> Result<String, ApiError> {
        Ok(self.registry.render("consumer", page)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::services::navigation::SidebarCommand;
    use dash_core::services::{AdminConsole, RowAction};
    use dash_core::{
        EntityKind, EntityStore, Product, ProductStatus, User, UserForm, UserRole, UserStatus,
    };

    fn console() -> AdminConsole {
        let users = EntityStore::seeded(vec![User {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
            email: "x@example.com".to_string(),
            role: UserRole::Admin,
            join_date: "Nov 15, 2024".to_string(),
            status: UserStatus::Inactive,
        }]);
        AdminConsole::new(users, EntityStore::new())
    }

    fn render(console: &mut AdminConsole) -> String {
        let renderer = Renderer::new().unwrap();
        let page = AdminPage::build(
            console,
            HeaderView::from_email("rajesh@example.com"),
            Theme::Dark,
            3000,
            992,
        );
        renderer.admin(&page).unwrap()
    }

    #[test]
    fn test_user_fields_are_escaped() {
        let html = render(&mut console());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("badge inactive"));
    }

    #[test]
    fn test_header_and_theme() {
        let mut console = console();
        console.sidebar(SidebarCommand::Open);
        let html = render(&mut console);
        assert!(html.contains("data-theme=\"dark\""));
        assert!(html.contains("rajesh"));
        assert!(html.contains("sidebar open"));
    }

    #[test]
    fn test_confirm_message_is_escaped() {
        let mut console = console();
        console.row_action(EntityKind::User, RowAction::Delete, 1);
        let html = render(&mut console);
        assert!(html.contains("Are you sure you want to delete &lt;script&gt;"));
        assert!(html.contains("Delete User"));
    }

    #[test]
    fn test_form_errors_render_inline() {
        let mut console = console();
        console.open_create(EntityKind::User);
        let form = UserForm {
            name: "Test".to_string(),
            email: "bad-email".to_string(),
            role: "User".to_string(),
            ..Default::default()
        };
        console.save_user(form, chrono::NaiveDate::from_ymd_opt(2024, 12, 9).unwrap());
        let html = render(&mut console);
        assert!(html.contains("Invalid email format"));
        assert!(html.contains("value=\"bad-email\""));
    }

    #[test]
    fn test_custom_product_status_stays_selected_on_edit() {
        let products = EntityStore::seeded(vec![Product {
            id: 1,
            name: "Legacy Kit".to_string(),
            category: "Tools".to_string(),
            price: 12.5,
            stock: 3,
            status: ProductStatus::parse("Discontinued"),
        }]);
        let mut console = AdminConsole::new(EntityStore::new(), products);
        assert!(console.open_edit(EntityKind::Product, 1));

        let html = render(&mut console);
        assert!(html.contains("<option value=\"Discontinued\" selected>"));
        assert!(html.contains("<option value=\"In Stock\">"));
        assert!(!html.contains("<option value=\"In Stock\" selected>"));
    }

    #[test]
    fn test_notices_drain_on_render() {
        let mut console = console();
        console.notices.success("User added successfully");
        let first = render(&mut console);
        assert!(first.contains("User added successfully"));
        let second = render(&mut console);
        assert!(!second.contains("User added successfully"));
    }

    #[test]
    fn test_header_fallback_letter() {
        let header = HeaderView::from_email("");
        assert_eq!(header.avatar, "U");
    }
}
