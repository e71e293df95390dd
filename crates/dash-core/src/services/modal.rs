// ============================================================================
// Dash Core - Modal Manager
// File: crates/dash-core/src/services/modal.rs
// Description: Single-slot modal lifecycle with a one-shot confirm action
// ============================================================================

use dash_shared::EntityId;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{EntityKind, ProductForm, UserForm};
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    UserForm,
    ProductForm,
    View,
    Confirm,
}

impl ModalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::UserForm => "user_form",
            ModalKind::ProductForm => "product_form",
            ModalKind::View => "view",
            ModalKind::Confirm => "confirm",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "user_form" => Some(ModalKind::UserForm),
            "product_form" => Some(ModalKind::ProductForm),
            "view" => Some(ModalKind::View),
            "confirm" => Some(ModalKind::Confirm),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

#[derive(Debug, Clone)]
pub enum FormValues {
    User(UserForm),
    Product(ProductForm),
}

impl FormValues {
    pub fn entity(&self) -> EntityKind {
        match self {
            FormValues::User(_) => EntityKind::User,
            FormValues::Product(_) => EntityKind::Product,
        }
    }
}

/// An open create/edit form with whatever the user last submitted.
#[derive(Debug, Clone)]
pub struct FormState {
    pub mode: FormMode,
    pub values: FormValues,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn create(values: FormValues) -> Self {
        Self {
            mode: FormMode::Create,
            values,
            errors: FieldErrors::new(),
        }
    }

    pub fn edit(id: EntityId, values: FormValues) -> Self {
        Self {
            mode: FormMode::Edit(id),
            values,
            errors: FieldErrors::new(),
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.values.entity()
    }

    pub fn title(&self) -> String {
        let verb = match self.mode {
            FormMode::Create => "Add",
            FormMode::Edit(_) => "Edit",
        };
        format!("{} {}", verb, self.entity().label())
    }
}

/// One label/value line of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
    /// Set when the value renders as a badge.
    pub badge_class: Option<String>,
}

impl DetailRow {
    pub fn text(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            badge_class: None,
        }
    }

    pub fn badge(label: &str, value: impl Into<String>, class: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            badge_class: Some(class.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmAction {
    Delete,
}

/// What the confirm button will do, consumed at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAction {
    pub action: ConfirmAction,
    pub entity: EntityKind,
    pub id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub pending: Option<PendingAction>,
}

#[derive(Debug, Clone)]
pub enum Modal {
    Form(FormState),
    View(DetailView),
    Confirm(ConfirmDialog),
}

impl Modal {
    pub fn kind(&self) -> ModalKind {
        match self {
            Modal::Form(form) => match form.entity() {
                EntityKind::User => ModalKind::UserForm,
                EntityKind::Product => ModalKind::ProductForm,
            },
            Modal::View(_) => ModalKind::View,
            Modal::Confirm(_) => ModalKind::Confirm,
        }
    }
}

/// Holds at most one open modal. Opening while another modal is showing is
/// refused; every closing path drops a pending confirm action unexecuted.
#[derive(Debug, Clone, Default)]
pub struct ModalManager {
    open: Option<Modal>,
}

impl ModalManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and leaves state alone if a modal is already open.
    pub fn open(&mut self, modal: Modal) -> bool {
        if let Some(current) = &self.open {
            warn!(
                "Refusing to open {} modal while {} modal is open",
                modal.kind().as_str(),
                current.kind().as_str()
            );
            return false;
        }
        debug!("Opening {} modal", modal.kind().as_str());
        self.open = Some(modal);
        true
    }

    /// Shows `modal` whatever is open, handing back the displaced one. Any
    /// pending confirm action of the displaced modal is dropped unexecuted.
    pub fn replace(&mut self, modal: Modal) -> Option<Modal> {
        let displaced = self.open.replace(modal);
        if let Some(old) = &displaced {
            debug!("{} modal replaced", old.kind().as_str());
        }
        displaced
    }

    pub fn current(&self) -> Option<&Modal> {
        self.open.as_ref()
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.open.as_ref().is_some_and(|m| m.kind() == kind)
    }

    pub fn is_any_open(&self) -> bool {
        self.open.is_some()
    }

    /// The open form, if the open modal is a form for `entity`.
    pub fn form_mut(&mut self, entity: EntityKind) -> Option<&mut FormState> {
        match self.open.as_mut() {
            Some(Modal::Form(form)) if form.entity() == entity => Some(form),
            _ => None,
        }
    }

    /// Closes the modal if it is of `kind`. Cancel, close button and overlay
    /// click all land here.
    pub fn close(&mut self, kind: ModalKind) -> bool {
        if self.is_open(kind) {
            debug!("Closing {} modal", kind.as_str());
            self.open = None;
            true
        } else {
            false
        }
    }

    /// Escape: closes whatever is open.
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Confirm button: takes the pending action, closes the dialog and hands
    /// the action back for execution. Nothing is returned twice.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        let pending = match self.open.as_mut() {
            Some(Modal::Confirm(dialog)) => dialog.pending.take(),
            _ => return None,
        };
        self.open = None;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm_modal(id: EntityId) -> Modal {
        Modal::Confirm(ConfirmDialog {
            title: "Delete User".to_string(),
            message: "Are you sure?".to_string(),
            pending: Some(PendingAction {
                action: ConfirmAction::Delete,
                entity: EntityKind::User,
                id,
            }),
        })
    }

    fn view_modal() -> Modal {
        Modal::View(DetailView {
            title: "User Details".to_string(),
            rows: vec![DetailRow::text("Name:", "Test")],
        })
    }

    #[test]
    fn test_confirm_consumes_once() {
        let mut modals = ModalManager::new();
        assert!(modals.open(confirm_modal(2)));

        let pending = modals.confirm().unwrap();
        assert_eq!(pending.id, 2);
        assert_eq!(pending.entity, EntityKind::User);
        assert!(!modals.is_any_open());
        assert!(modals.confirm().is_none());
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut modals = ModalManager::new();
        modals.open(confirm_modal(3));
        assert!(modals.close(ModalKind::Confirm));
        assert!(modals.confirm().is_none());
    }

    #[test]
    fn test_escape_drops_pending() {
        let mut modals = ModalManager::new();
        modals.open(confirm_modal(3));
        modals.close_all();
        assert!(modals.confirm().is_none());
    }

    #[test]
    fn test_reentrant_open_refused() {
        let mut modals = ModalManager::new();
        assert!(modals.open(view_modal()));
        assert!(!modals.open(confirm_modal(1)));
        assert!(modals.is_open(ModalKind::View));
        assert!(modals.confirm().is_none());
    }

    #[test]
    fn test_replace_drops_pending_confirm() {
        let mut modals = ModalManager::new();
        modals.open(confirm_modal(2));
        let displaced = modals.replace(view_modal()).unwrap();
        assert_eq!(displaced.kind(), ModalKind::Confirm);
        assert!(modals.is_open(ModalKind::View));
        assert!(modals.confirm().is_none());
    }

    #[test]
    fn test_close_wrong_kind_is_ignored() {
        let mut modals = ModalManager::new();
        modals.open(view_modal());
        assert!(!modals.close(ModalKind::Confirm));
        assert!(modals.is_open(ModalKind::View));
    }

    #[test]
    fn test_form_titles() {
        let create = FormState::create(FormValues::User(UserForm::default()));
        assert_eq!(create.title(), "Add User");
        let edit = FormState::edit(4, FormValues::Product(ProductForm::default()));
        assert_eq!(edit.title(), "Edit Product");
        assert_eq!(Modal::Form(edit).kind(), ModalKind::ProductForm);
    }
}
