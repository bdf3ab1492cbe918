use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One impedance measurement of a cut, owned by the customer who took it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MeatReading {
    pub id: i64,
    pub user_id: i64,
    pub butcher_shop_id: i64,
    pub impedance: f64,
    pub purchase_date: DateTime<Utc>,
    pub part: String,
    pub store_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMeatReading {
    pub user_id: i64,
    pub butcher_shop_id: i64,
    pub impedance: f64,
    pub purchase_date: DateTime<Utc>,
    pub part: String,
    pub store_date: DateTime<Utc>,
}
