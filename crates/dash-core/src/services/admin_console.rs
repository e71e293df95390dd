// ============================================================================
// Dash Core - Admin Console
// File: crates/dash-core/src/services/admin_console.rs
// Description: CRUD controller for users and products plus page UI state
// ============================================================================
//! One console per session. Each method is one user event: it validates,
//! mutates the stores and queues notices before returning, so the next event
//! always sees a settled state.

use chrono::NaiveDate;
use dash_shared::EntityId;
use tracing::{debug, info, warn};

use crate::domain::user::format_join_date;
use crate::domain::{EntityKind, Product, ProductForm, User, UserForm};
use crate::error::DomainError;
use crate::services::modal::{
    ConfirmAction, ConfirmDialog, DetailRow, DetailView, FormMode, FormState, FormValues,
    Modal, ModalKind, ModalManager, PendingAction,
};
use crate::services::navigation::{AdminSection, Navigator, SidebarCommand, SidebarState};
use crate::services::notification::NoticeQueue;
use crate::store::EntityStore;

/// Row buttons of the user and product tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "view" => Some(RowAction::View),
            "edit" => Some(RowAction::Edit),
            "delete" => Some(RowAction::Delete),
            _ => None,
        }
    }
}

/// Outcome of a form submit from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(EntityId),
    Updated(EntityId),
    /// Edit of an id that is no longer in the store; nothing changed.
    Missing(EntityId),
    /// Validation failed; the form stays open with its errors.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct AdminConsole {
    users: EntityStore<User>,
    products: EntityStore<Product>,
    pub modals: ModalManager,
    pub navigation: Navigator<AdminSection>,
    pub sidebar: SidebarState,
    pub notices: NoticeQueue,
}

impl AdminConsole {
    pub fn new(users: EntityStore<User>, products: EntityStore<Product>) -> Self {
        Self {
            users,
            products,
            modals: ModalManager::new(),
            navigation: Navigator::default(),
            sidebar: SidebarState::default(),
            notices: NoticeQueue::default(),
        }
    }

    pub fn users(&self) -> &EntityStore<User> {
        &self.users
    }

    pub fn products(&self) -> &EntityStore<Product> {
        &self.products
    }

    // ------------------------------------------------------------------
    // Store operations shared by the page flow and the JSON API
    // ------------------------------------------------------------------

    pub fn create_user(&mut self, form: &UserForm, today: NaiveDate) -> Result<EntityId, DomainError> {
        let input = form.parse().map_err(DomainError::Validation)?;
        let id = self.users.create(input.into_new_user(format_join_date(today)));
        info!("User {} created", id);
        Ok(id)
    }

    /// Shallow-merges the form into user `id`. The join date is never touched.
    pub fn update_user(&mut self, id: EntityId, form: &UserForm) -> Result<(), DomainError> {
        let input = form.parse().map_err(DomainError::Validation)?;
        if !self.users.update(id, input.into_changes()) {
            return Err(DomainError::NotFound {
                entity: EntityKind::User,
                id,
            });
        }
        info!("User {} updated", id);
        Ok(())
    }

    pub fn create_product(&mut self, form: &ProductForm) -> Result<EntityId, DomainError> {
        let input = form.parse().map_err(DomainError::Validation)?;
        let id = self.products.create(input.into_new_product());
        info!("Product {} created", id);
        Ok(id)
    }

    pub fn update_product(&mut self, id: EntityId, form: &ProductForm) -> Result<(), DomainError> {
        let input = form.parse().map_err(DomainError::Validation)?;
        if !self.products.update(id, input.into_changes()) {
            return Err(DomainError::NotFound {
                entity: EntityKind::Product,
                id,
            });
        }
        info!("Product {} updated", id);
        Ok(())
    }

    /// Returns whether a record was removed.
    pub fn delete(&mut self, entity: EntityKind, id: EntityId) -> bool {
        let removed = match entity {
            EntityKind::User => self.users.delete(id),
            EntityKind::Product => self.products.delete(id),
        };
        if removed {
            info!("{} {} deleted", entity, id);
        }
        removed
    }

    pub fn contains(&self, entity: EntityKind, id: EntityId) -> bool {
        match entity {
            EntityKind::User => self.users.find(id).is_some(),
            EntityKind::Product => self.products.find(id).is_some(),
        }
    }

    fn display_name(&self, entity: EntityKind, id: EntityId) -> Option<String> {
        match entity {
            EntityKind::User => self.users.find(id).map(|u| u.name.clone()),
            EntityKind::Product => self.products.find(id).map(|p| p.name.clone()),
        }
    }

    // ------------------------------------------------------------------
    // Page events
    // ------------------------------------------------------------------

    /// "Add User" / "Add Product": empty form in create mode.
    pub fn open_create(&mut self, entity: EntityKind) -> bool {
        let values = match entity {
            EntityKind::User => FormValues::User(UserForm::default()),
            EntityKind::Product => FormValues::Product(ProductForm::default()),
        };
        self.modals.open(Modal::Form(FormState::create(values)))
    }

    /// Delegated row click. Unknown ids are ignored.
    pub fn row_action(&mut self, entity: EntityKind, action: RowAction, id: EntityId) -> bool {
        match action {
            RowAction::View => self.open_view(entity, id),
            RowAction::Edit => self.open_edit(entity, id),
            RowAction::Delete => self.request_delete(entity, id),
        }
    }

    pub fn open_edit(&mut self, entity: EntityKind, id: EntityId) -> bool {
        let values = match entity {
            EntityKind::User => self.users.find(id).map(|u| FormValues::User(UserForm::from_user(u))),
            EntityKind::Product => self
                .products
                .find(id)
                .map(|p| FormValues::Product(ProductForm::from_product(p))),
        };
        match values {
            Some(values) => self.modals.open(Modal::Form(FormState::edit(id, values))),
            None => {
                debug!("Edit ignored, {} {} not found", entity, id);
                false
            }
        }
    }

    pub fn open_view(&mut self, entity: EntityKind, id: EntityId) -> bool {
        let view = match entity {
            EntityKind::User => self.users.find(id).map(user_details),
            EntityKind::Product => self.products.find(id).map(product_details),
        };
        match view {
            Some(view) => self.modals.open(Modal::View(view)),
            None => {
                debug!("View ignored, {} {} not found", entity, id);
                false
            }
        }
    }

    /// Opens the confirm dialog holding a delete of `id`.
    pub fn request_delete(&mut self, entity: EntityKind, id: EntityId) -> bool {
        let Some(name) = self.display_name(entity, id) else {
            debug!("Delete ignored, {} {} not found", entity, id);
            return false;
        };
        self.modals.open(Modal::Confirm(ConfirmDialog {
            title: format!("Delete {}", entity.label()),
            message: format!(
                "Are you sure you want to delete {}? This action cannot be undone.",
                name
            ),
            pending: Some(PendingAction {
                action: ConfirmAction::Delete,
                entity,
                id,
            }),
        }))
    }

    /// Confirm button. Runs the pending action once and closes the dialog.
    /// The success notice is queued whether or not the record still existed.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        let pending = self.modals.confirm()?;
        match pending.action {
            ConfirmAction::Delete => {
                self.delete(pending.entity, pending.id);
                self.notices
                    .success(format!("{} deleted successfully", pending.entity.label()));
            }
        }
        Some(pending)
    }

    pub fn save_user(&mut self, form: UserForm, today: NaiveDate) -> SaveOutcome {
        let result = match form.target_id() {
            Some(id) => self.update_user(id, &form).map(|_| SaveOutcome::Updated(id)),
            None => self.create_user(&form, today).map(SaveOutcome::Created),
        };
        self.finish_save(EntityKind::User, FormValues::User(form), result)
    }

    pub fn save_product(&mut self, form: ProductForm) -> SaveOutcome {
        let result = match form.target_id() {
            Some(id) => self.update_product(id, &form).map(|_| SaveOutcome::Updated(id)),
            None => self.create_product(&form).map(SaveOutcome::Created),
        };
        self.finish_save(EntityKind::Product, FormValues::Product(form), result)
    }

    fn finish_save(
        &mut self,
        entity: EntityKind,
        values: FormValues,
        result: Result<SaveOutcome, DomainError>,
    ) -> SaveOutcome {
        let form_kind = match entity {
            EntityKind::User => ModalKind::UserForm,
            EntityKind::Product => ModalKind::ProductForm,
        };
        match result {
            Ok(outcome) => {
                let verb = match outcome {
                    SaveOutcome::Created(_) => "added",
                    _ => "updated",
                };
                self.notices
                    .success(format!("{} {} successfully", entity.label(), verb));
                self.modals.close(form_kind);
                outcome
            }
            Err(DomainError::Validation(errors)) => {
                debug!("{} form rejected: {}", entity, errors);
                match self.modals.form_mut(entity) {
                    Some(form) => {
                        form.values = values;
                        form.errors = errors;
                    }
                    None => {
                        let target = match &values {
                            FormValues::User(f) => f.target_id(),
                            FormValues::Product(f) => f.target_id(),
                        };
                        let mut state = FormState::create(values);
                        if let Some(id) = target {
                            state.mode = FormMode::Edit(id);
                        }
                        state.errors = errors;
                        // The submit wins over a view or confirm modal left open.
                        if let Some(displaced) = self.modals.replace(Modal::Form(state)) {
                            warn!(
                                "{} form errors replaced the open {} modal",
                                entity,
                                displaced.kind().as_str()
                            );
                        }
                    }
                }
                SaveOutcome::Rejected
            }
            Err(DomainError::NotFound { id, .. }) => {
                debug!("{} {} vanished before save", entity, id);
                self.modals.close(form_kind);
                SaveOutcome::Missing(id)
            }
            Err(other) => {
                warn!("{} save failed: {}", entity, other);
                SaveOutcome::Rejected
            }
        }
    }

    pub fn close_modal(&mut self, kind: ModalKind) -> bool {
        self.modals.close(kind)
    }

    /// Escape key: every modal and the sidebar close.
    pub fn escape(&mut self) {
        self.modals.close_all();
        self.sidebar.close();
    }

    pub fn navigate(&mut self, section: AdminSection) {
        self.navigation.switch(section);
        self.sidebar.close();
    }

    pub fn sidebar(&mut self, command: SidebarCommand) {
        self.sidebar.apply(command);
    }
}

fn user_details(user: &User) -> DetailView {
    DetailView {
        title: "User Details".to_string(),
        rows: vec![
            DetailRow::text("Name:", user.name.clone()),
            DetailRow::text("Email:", user.email.clone()),
            DetailRow::text("Role:", user.role.as_str()),
            DetailRow::text("Join Date:", user.join_date.clone()),
            DetailRow::badge("Status:", user.status.as_str(), user.status.badge_class()),
        ],
    }
}

fn product_details(product: &Product) -> DetailView {
    DetailView {
        title: "Product Details".to_string(),
        rows: vec![
            DetailRow::text("Product Name:", product.name.clone()),
            DetailRow::text("Category:", product.category.clone()),
            DetailRow::text("Price:", product.display_price()),
            DetailRow::text("Stock:", format!("{} units", product.stock)),
            DetailRow::badge(
                "Status:",
                product.status.as_str(),
                product.status.badge_class(),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProductStatus, UserRole, UserStatus};
    use crate::services::navigation::Section;

    fn user(id: EntityId, name: &str, role: UserRole, status: UserStatus) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role,
            join_date: "Nov 15, 2024".to_string(),
            status,
        }
    }

    fn console() -> AdminConsole {
        let users = EntityStore::seeded(vec![
            user(1, "Rajesh", UserRole::Admin, UserStatus::Active),
            user(2, "Priya", UserRole::Manager, UserStatus::Active),
            user(3, "Amit", UserRole::User, UserStatus::Inactive),
            user(4, "Neha", UserRole::User, UserStatus::Active),
        ]);
        let products = EntityStore::seeded(vec![Product {
            id: 1,
            name: "Pro Kit".to_string(),
            category: "Tools".to_string(),
            price: 79.99,
            stock: 0,
            status: ProductStatus::OutOfStock,
        }]);
        AdminConsole::new(users, products)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 9).unwrap()
    }

    fn user_form(name: &str, email: &str, role: &str) -> UserForm {
        UserForm {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_bad_email_rejected_store_unchanged() {
        let mut console = console();
        console.open_create(EntityKind::User);
        let outcome = console.save_user(user_form("Test", "bad-email", "User"), today());
        assert_eq!(outcome, SaveOutcome::Rejected);
        assert_eq!(console.users().len(), 4);

        match console.modals.current() {
            Some(Modal::Form(form)) => {
                assert_eq!(form.errors.len(), 1);
                assert_eq!(form.errors.get("email"), Some("Invalid email format"));
            }
            other => panic!("expected open user form, got {:?}", other),
        }
        assert!(console.notices.peek().is_empty());
    }

    #[test]
    fn test_create_user_gets_next_id_and_join_date() {
        let mut console = console();
        console.open_create(EntityKind::User);
        let outcome = console.save_user(user_form("Test", "test@example.com", "User"), today());
        assert_eq!(outcome, SaveOutcome::Created(5));

        let created = console.users().find(5).unwrap();
        assert_eq!(created.join_date, "Dec 9, 2024");
        assert_eq!(created.status, UserStatus::Active);
        assert!(!console.modals.is_any_open());
        assert_eq!(console.notices.peek()[0].message, "User added successfully");
    }

    #[test]
    fn test_edit_preserves_join_date() {
        let mut console = console();
        assert!(console.row_action(EntityKind::User, RowAction::Edit, 3));
        let mut form = match console.modals.current() {
            Some(Modal::Form(state)) => match &state.values {
                FormValues::User(f) => f.clone(),
                _ => panic!("expected user values"),
            },
            _ => panic!("expected form"),
        };
        assert_eq!(form.name, "Amit");
        form.name = "Amit Patel".to_string();
        form.status = None;

        assert_eq!(console.save_user(form, today()), SaveOutcome::Updated(3));
        let updated = console.users().find(3).unwrap();
        assert_eq!(updated.name, "Amit Patel");
        assert_eq!(updated.join_date, "Nov 15, 2024");
        assert_eq!(updated.status, UserStatus::Inactive);
        assert_eq!(console.notices.peek()[0].message, "User updated successfully");
    }

    #[test]
    fn test_delete_flow() {
        let mut console = console();
        assert!(console.row_action(EntityKind::User, RowAction::Delete, 2));
        assert!(console.modals.is_open(ModalKind::Confirm));
        assert_eq!(console.users().len(), 4);

        let pending = console.confirm().unwrap();
        assert_eq!(pending.id, 2);
        let ids: Vec<_> = console.users().list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(console.notices.peek()[0].message, "User deleted successfully");

        let id = console
            .create_user(&user_form("New", "new@example.com", "User"), today())
            .unwrap();
        assert_eq!(id, 5);
    }

    #[test]
    fn test_cancelled_delete_keeps_record() {
        let mut console = console();
        console.request_delete(EntityKind::Product, 1);
        assert!(console.close_modal(ModalKind::Confirm));
        assert!(console.confirm().is_none());
        assert_eq!(console.products().len(), 1);
    }

    #[test]
    fn test_delete_unknown_id_opens_nothing() {
        let mut console = console();
        assert!(!console.row_action(EntityKind::User, RowAction::Delete, 99));
        assert!(!console.modals.is_any_open());
        assert!(!console.delete(EntityKind::User, 99));
        assert_eq!(console.users().len(), 4);
    }

    #[test]
    fn test_confirm_notices_even_when_record_gone() {
        let mut console = console();
        console.request_delete(EntityKind::User, 4);
        console.delete(EntityKind::User, 4);
        console.confirm();
        assert_eq!(console.users().len(), 3);
        assert_eq!(console.notices.peek().len(), 1);
    }

    #[test]
    fn test_product_widget_accepted() {
        let mut console = console();
        let form = ProductForm {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: "10".to_string(),
            stock: "5".to_string(),
            status: Some("Low Stock".to_string()),
            ..Default::default()
        };
        assert_eq!(console.save_product(form), SaveOutcome::Created(2));
        let widget = console.products().find(2).unwrap();
        assert_eq!(widget.status, ProductStatus::LowStock);
        assert_eq!(widget.stock, 5);
    }

    #[test]
    fn test_rejected_save_without_open_modal_opens_form() {
        let mut console = console();
        let form = ProductForm {
            id: "1".to_string(),
            price: "-1".to_string(),
            ..Default::default()
        };
        assert_eq!(console.save_product(form), SaveOutcome::Rejected);
        match console.modals.current() {
            Some(Modal::Form(state)) => {
                assert_eq!(state.title(), "Edit Product");
                assert_eq!(state.errors.len(), 4);
            }
            other => panic!("expected product form, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_save_replaces_open_view() {
        let mut console = console();
        assert!(console.open_view(EntityKind::User, 2));

        let outcome = console.save_user(user_form("", "bad-email", "User"), today());
        assert_eq!(outcome, SaveOutcome::Rejected);
        match console.modals.current() {
            Some(Modal::Form(form)) => {
                assert_eq!(form.title(), "Add User");
                let fields: Vec<_> = form.errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "email"]);
            }
            other => panic!("expected the user form, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_save_drops_pending_delete() {
        let mut console = console();
        assert!(console.request_delete(EntityKind::User, 3));

        let mut form = user_form("Amit", "", "User");
        form.id = "3".to_string();
        assert_eq!(console.save_user(form, today()), SaveOutcome::Rejected);
        assert!(console.modals.is_open(ModalKind::UserForm));

        assert!(console.confirm().is_none());
        assert_eq!(console.users().len(), 4);
    }

    #[test]
    fn test_row_action_names() {
        assert_eq!(RowAction::parse(" edit "), Some(RowAction::Edit));
        assert_eq!(RowAction::parse("archive"), None);
        assert_eq!(ModalKind::parse("product_form"), Some(ModalKind::ProductForm));
        assert_eq!(EntityKind::parse("Users"), Some(EntityKind::User));
    }

    #[test]
    fn test_second_modal_refused() {
        let mut console = console();
        assert!(console.row_action(EntityKind::User, RowAction::View, 1));
        assert!(!console.row_action(EntityKind::User, RowAction::Delete, 1));
        assert!(console.modals.is_open(ModalKind::View));
    }

    #[test]
    fn test_view_rows() {
        let mut console = console();
        console.open_view(EntityKind::Product, 1);
        match console.modals.current() {
            Some(Modal::View(view)) => {
                assert_eq!(view.title, "Product Details");
                assert_eq!(view.rows[2].value, "$79.99");
                assert_eq!(view.rows[3].value, "0 units");
                assert_eq!(view.rows[4].badge_class.as_deref(), Some("inactive"));
            }
            other => panic!("expected view modal, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_closes_modal_and_sidebar() {
        let mut console = console();
        console.sidebar(SidebarCommand::Open);
        console.request_delete(EntityKind::User, 1);
        console.escape();
        assert!(!console.sidebar.open);
        assert!(console.confirm().is_none());
        assert_eq!(console.users().len(), 4);
    }

    #[test]
    fn test_navigate_closes_sidebar() {
        let mut console = console();
        console.sidebar(SidebarCommand::Open);
        console.navigate(AdminSection::from_id("products"));
        assert_eq!(console.navigation.page_title(), "Product Management");
        assert!(!console.sidebar.open);
    }
}
