use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::types::Role;

/// Exact role match. No role implies another; admin cannot act as manager.
pub fn authorize(user: &AuthUser, required: Role) -> Result<(), ApiError> {
    if user.user_type == required {
        return Ok(());
    }

    tracing::warn!(
        user_id = user.user_id,
        role = %user.user_type,
        required = %required,
        "role check failed"
    );
    Err(ApiError::forbidden(denial_message(required)))
}

fn denial_message(required: Role) -> String {
    match required {
        Role::Manager => "Only managers can access this endpoint".to_string(),
        Role::Customer => "Only customers can access this endpoint".to_string(),
        Role::Admin => "Only admins can access this endpoint".to_string(),
    }
}
