use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ButcherShop {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub contact: Option<String>,
    pub manager_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewButcherShop {
    pub name: String,
    pub location: String,
    pub contact: Option<String>,
    pub manager_id: i64,
}
