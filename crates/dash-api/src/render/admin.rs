// ============================================================================
// Dash API - Admin Page View
// File: crates/dash-api/src/render/admin.rs
// Description: Turns an admin console into the data the template renders
// ============================================================================

use std::collections::BTreeMap;

use dash_core::services::modal::{FormMode, FormState, FormValues, Modal};
use dash_core::services::navigation::{NavItem, Section};
use dash_core::services::{AdminConsole, Notice, RowAction, Theme};
use dash_core::{FieldErrors, Product, ProductStatus, User, UserRole, UserStatus};
use serde::Serialize;

use super::{HeaderView, ThemeOption};

#[derive(Debug, Serialize)]
pub struct AdminPage {
    pub header: HeaderView,
    pub page_title: &'static str,
    pub section: &'static str,
    pub nav: Vec<NavItem>,
    pub sidebar_open: bool,
    pub profile_menu_open: bool,
    pub themes: Vec<ThemeOption>,
    pub stats: AdminStats,
    pub users: Vec<UserRow>,
    pub products: Vec<ProductRow>,
    pub row_actions: [&'static str; 3],
    pub modal: Option<ModalView>,
    pub notices: Vec<Notice>,
    pub dismiss_ms: u64,
    pub breakpoint_px: u32,
}

#[derive(Debug, Serialize)]
pub struct AdminStats {
    pub total_users: usize,
    pub active_users: usize,
    pub total_products: usize,
    pub low_stock: usize,
}

#[derive(Debug, Serialize)]
pub struct UserRow {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub join_date: String,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str(),
            join_date: user.join_date.clone(),
            status: user.status.as_str(),
            status_class: user.status.badge_class(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductRow {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: u32,
    pub status: String,
    pub status_class: &'static str,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.display_price(),
            stock: product.stock,
            status: product.status.as_str().to_string(),
            status_class: product.status.badge_class(),
        }
    }
}

/// An option of a `<select>`.
#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

fn options<'a>(values: impl IntoIterator<Item = &'a str>, current: &str) -> Vec<SelectOption> {
    values
        .into_iter()
        .map(|value| SelectOption {
            value: value.to_string(),
            selected: value == current,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct FormView {
    pub action: &'static str,
    pub id: String,
    pub fields: BTreeMap<&'static str, String>,
    pub errors: BTreeMap<String, String>,
    pub role_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub is_user: bool,
}

#[derive(Debug, Serialize)]
pub struct DetailRowView {
    pub label: String,
    pub value: String,
    pub badge_class: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModalView {
    pub kind: &'static str,
    pub title: String,
    pub form: Option<FormView>,
    pub rows: Vec<DetailRowView>,
    pub message: Option<String>,
}

fn error_map(errors: &FieldErrors) -> BTreeMap<String, String> {
    errors
        .iter()
        .map(|e| (e.field.clone(), e.message.clone()))
        .collect()
}

fn form_view(state: &FormState) -> FormView {
    let id = match state.mode {
        FormMode::Create => String::new(),
        FormMode::Edit(id) => id.to_string(),
    };
    let errors = error_map(&state.errors);

    match &state.values {
        FormValues::User(form) => {
            let status = form.status.clone().unwrap_or_default();
            let status = if status.is_empty() {
                UserStatus::default().as_str().to_string()
            } else {
                status
            };
            FormView {
                action: "/admin/users/save",
                id,
                fields: BTreeMap::from([
                    ("name", form.name.clone()),
                    ("email", form.email.clone()),
                ]),
                errors,
                role_options: options(UserRole::ALL.iter().map(|r| r.as_str()), &form.role),
                status_options: options(UserStatus::ALL.iter().map(|s| s.as_str()), &status),
                is_user: true,
            }
        }
        FormValues::Product(form) => {
            let status = form
                .status
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| ProductStatus::default().as_str().to_string());
            let mut status_options =
                options(ProductStatus::KNOWN.iter().map(|s| s.as_str()), status.trim());
            // A stored status outside the known three is offered as its own option.
            if !status_options.iter().any(|o| o.selected) {
                status_options.push(SelectOption {
                    value: status.trim().to_string(),
                    selected: true,
                });
            }
            FormView {
                action: "/admin/products/save",
                id,
                fields: BTreeMap::from([
                    ("name", form.name.clone()),
                    ("category", form.category.clone()),
                    ("price", form.price.clone()),
                    ("stock", form.stock.clone()),
                ]),
                errors,
                role_options: Vec::new(),
                status_options,
                is_user: false,
            }
        }
    }
}

fn modal_view(modal: &Modal) -> ModalView {
    let kind = modal.kind().as_str();
    match modal {
        Modal::Form(state) => ModalView {
            kind,
            title: state.title(),
            form: Some(form_view(state)),
            rows: Vec::new(),
            message: None,
        },
        Modal::View(view) => ModalView {
            kind,
            title: view.title.clone(),
            form: None,
            rows: view
                .rows
                .iter()
                .map(|row| DetailRowView {
                    label: row.label.clone(),
                    value: row.value.clone(),
                    badge_class: row.badge_class.clone(),
                })
                .collect(),
            message: None,
        },
        Modal::Confirm(dialog) => ModalView {
            kind,
            title: dialog.title.clone(),
            form: None,
            rows: Vec::new(),
            message: Some(dialog.message.clone()),
        },
    }
}

impl AdminPage {
    /// Snapshot of the console. Pending notices move onto the page.
    pub fn build(
        console: &mut AdminConsole,
        header: HeaderView,
        theme: Theme,
        dismiss_ms: u64,
        breakpoint_px: u32,
    ) -> Self {
        let users = console.users().list();
        let products = console.products().list();
        let stats = AdminStats {
            total_users: users.len(),
            active_users: users.iter().filter(|u| u.status == UserStatus::Active).count(),
            total_products: products.len(),
            low_stock: products
                .iter()
                .filter(|p| p.status != ProductStatus::InStock)
                .count(),
        };

        Self {
            header,
            page_title: console.navigation.page_title(),
            section: console.navigation.active().id(),
            nav: console.navigation.items(),
            sidebar_open: console.sidebar.open,
            profile_menu_open: console.sidebar.profile_menu_open,
            themes: ThemeOption::all(theme),
            stats,
            users: users.iter().map(UserRow::from).collect(),
            products: products.iter().map(ProductRow::from).collect(),
            row_actions: [RowAction::View, RowAction::Edit, RowAction::Delete].map(|a| a.as_str()),
            modal: console.modals.current().map(modal_view),
            notices: console.notices.drain(),
            dismiss_ms,
            breakpoint_px,
        }
    }
}
