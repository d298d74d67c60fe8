use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Generic message returned for any fault the client cannot act upon
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor.";

/// Message returned when the gateway answers with something that is not JSON
pub const MALFORMED_UPSTREAM_MESSAGE: &str =
    "Resposta inválida da API externa (não é JSON). Verifique os logs do servidor para detalhes.";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Missing or malformed client input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Gateway answered with a non-success status; forwarded to the client as-is
    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Gateway body could not be understood
    #[error("Malformed upstream response: {0}")]
    MalformedUpstream(String),

    /// Local state contradicts what the gateway reports
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Tracking service rejected a notification
    #[error("Tracking error: {0}")]
    Tracking(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self, status = status_code.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status_code.as_u16(), "Request rejected");
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "message": self.client_message(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::MalformedUpstream(_)
            | AppError::DataIntegrity(_)
            | AppError::Tracking(_)
            | AppError::HttpClient(_)
            | AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        AppError::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn data_integrity(msg: impl Into<String>) -> Self {
        AppError::DataIntegrity(msg.into())
    }

    /// Message safe to expose to the storefront. Only client errors and
    /// forwarded gateway errors carry their own text.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Upstream { message, .. } => message.clone(),
            AppError::MalformedUpstream(_) => MALFORMED_UPSTREAM_MESSAGE.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
