//! API Response wrapper

use chrono::Utc;
use dash_core::FieldErrors;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    /// Per-field messages of a rejected form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
                fields: None,
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: "VALIDATION_ERROR".to_string(),
                message: errors.to_string(),
                fields: Some(errors),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
