use chrono::{DateTime, Utc};
use serde_json::Value;

use super::fields::{FieldReader, EMPTY};
use super::ValidationErrors;
use crate::types::Role;

pub const USERNAME_MAX_CHARS: usize = 80;
/// bcrypt ignores input past 72 bytes
pub const PASSWORD_MAX_BYTES: usize = 72;
pub const SHOP_TEXT_MAX_CHARS: usize = 120;
pub const PART_MAX_CHARS: usize = 80;

const ROLE_CHOICES: &str = "Must be one of: manager, customer, admin.";

#[derive(Debug, Clone, PartialEq)]
pub struct SignupInput {
    pub username: String,
    pub password: String,
    pub user_type: Role,
}

impl SignupInput {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(body, &["username", "password", "user_type"])?;

        let username = reader.required_text("username", USERNAME_MAX_CHARS);
        let password = reader.required_string("password");
        let user_type = reader.required_string("user_type");

        if let Some(password) = &password {
            if let Err(message) = check_password(password) {
                reader.reject("password", message);
            }
        }
        let role = match user_type.map(|t| t.parse::<Role>()) {
            Some(Ok(role)) => Some(role),
            Some(Err(_)) => {
                reader.reject("user_type", ROLE_CHOICES);
                None
            }
            None => None,
        };
        reader.finish()?;

        let (Some(username), Some(password), Some(user_type)) = (username, password, role) else {
            return Err(ValidationErrors::single("_schema", "Invalid input."));
        };
        Ok(Self { username, password, user_type })
    }

    /// Same rules for accounts created outside HTTP (the `create-user` command).
    pub fn new(username: String, password: String, user_type: Role) -> Result<Self, ValidationErrors> {
        Self::from_json(&serde_json::json!({
            "username": username,
            "password": password,
            "user_type": user_type.as_str(),
        }))
    }
}

fn check_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err(EMPTY.to_string());
    }
    if password.len() > PASSWORD_MAX_BYTES {
        return Err(format!("Longer than maximum length {} bytes.", PASSWORD_MAX_BYTES));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl LoginInput {
    /// `user_type` is tolerated for older clients that send the signup shape,
    /// but never read: credentials alone decide the outcome.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(body, &["username", "password", "user_type"])?;
        let username = reader.required_string("username");
        let password = reader.required_string("password");
        reader.finish()?;

        let (Some(username), Some(password)) = (username, password) else {
            return Err(ValidationErrors::single("_schema", "Invalid input."));
        };
        Ok(Self { username, password })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopInput {
    pub name: String,
    pub location: String,
    pub contact: Option<String>,
    /// Accepted for compatibility; ownership comes from the caller's token.
    pub manager_id: Option<i64>,
}

impl ShopInput {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(body, &["name", "location", "contact", "manager_id"])?;
        let name = reader.required_text("name", SHOP_TEXT_MAX_CHARS);
        let location = reader.required_text("location", SHOP_TEXT_MAX_CHARS);
        let contact = reader.optional_text("contact", SHOP_TEXT_MAX_CHARS);
        let manager_id = reader.optional_integer("manager_id");
        reader.finish()?;

        let (Some(name), Some(location)) = (name, location) else {
            return Err(ValidationErrors::single("_schema", "Invalid input."));
        };
        Ok(Self { name, location, contact, manager_id })
    }
}

/// Body of both `/meat_data` and `/calculate_quality`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingInput {
    pub impedance: f64,
    pub purchase_date: DateTime<Utc>,
    pub butcher_shop_id: i64,
    pub part: String,
}

impl ReadingInput {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut reader =
            FieldReader::new(body, &["impedance", "purchase_date", "butcher_shop_id", "part"])?;
        let impedance = reader.required_float("impedance");
        let purchase_date = reader.required_datetime("purchase_date");
        let butcher_shop_id = reader.required_integer("butcher_shop_id");
        let part = reader.required_text("part", PART_MAX_CHARS);
        reader.finish()?;

        let (Some(impedance), Some(purchase_date), Some(butcher_shop_id), Some(part)) =
            (impedance, purchase_date, butcher_shop_id, part)
        else {
            return Err(ValidationErrors::single("_schema", "Invalid input."));
        };
        Ok(Self { impedance, purchase_date, butcher_shop_id, part })
    }
}
