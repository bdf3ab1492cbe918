// validation/mod.rs - Request body validation
//
// Handlers receive the raw JSON body through `JsonBody` and hand it to one of
// the schemas in `schemas`, which produce typed inputs or field-level errors.

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ApiError;

pub mod fields;
pub mod schemas;

pub use schemas::{LoginInput, ReadingInput, ShopInput, SignupInput};

/// Field name → message. The first message recorded for a field wins.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationErrors {
    fields: HashMap<String, String>,
}

impl ValidationErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_field_errors(self) -> HashMap<String, String> {
        self.fields
    }
}

/// JSON body extractor whose rejections use the API error format.
pub struct JsonBody(pub Value);

#[axum::async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => ApiError::payload_too_large(rejection.body_text()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                    ApiError::unsupported_media_type(rejection.body_text())
                }
                _ => ApiError::invalid_json(rejection.body_text()),
            }),
        }
    }
}
