use serde::Serialize;
use utoipa::ToSchema;

/// Listing metadata; `total` is omitted for single-resource responses.
#[derive(Debug, Serialize, ToSchema, Clone, Default)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl Meta {
    pub fn new(total: usize) -> Self {
        Self { total: Some(total) }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// `{ message, data, meta }` envelope shared by successes and errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
