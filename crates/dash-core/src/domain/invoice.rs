//! Consumer invoice (read-only)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub due: String,
    pub amount: u64,
    pub status: String,
}
