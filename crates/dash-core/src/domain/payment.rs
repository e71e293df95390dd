//! Consumer payment (read-only)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub date: String,
    pub mode: String,
    pub amount: u64,
    pub status: String,
}

impl Payment {
    pub fn is_paid(&self) -> bool {
        self.status == "Paid"
    }
}
