//! Utility functions

use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Name shown in the header: the local part of the signed-in email.
pub fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Upper-cased first letter of the display name, `U` when there is none.
pub fn avatar_letter(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}
