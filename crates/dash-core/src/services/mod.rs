//! Dashboard services: the admin and consumer consoles and the UI state
//! machines they are built from.

pub mod admin_console;
pub mod consumer_console;
pub mod consumer_summary;
pub mod modal;
pub mod navigation;
pub mod notification;
pub mod session_guard;
pub mod theme;

pub use admin_console::{AdminConsole, RowAction, SaveOutcome};
pub use consumer_console::ConsumerConsole;
pub use modal::{Modal, ModalKind, ModalManager, PendingAction};
pub use navigation::{AdminSection, ConsumerSection, ProfileTab, Section, SidebarCommand, SidebarState};
pub use notification::{Notice, NoticeLevel, NoticeQueue};
pub use session_guard::{Access, SessionGuard, Viewer};
pub use theme::{Theme, ThemeController};
