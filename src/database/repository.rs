use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{
    ButcherShop, MeatReading, NewButcherShop, NewMeatReading, NewUser, User,
};

/// Translate constraint violations on INSERT into domain errors.
fn map_write_error(err: sqlx::Error, what: &str) -> DatabaseError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DatabaseError::Conflict(format!("{} already exists", what));
        }
        if db_err.is_foreign_key_violation() {
            return DatabaseError::MissingReference(what.to_string());
        }
    }
    DatabaseError::Sqlx(err)
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. A taken username surfaces as `DatabaseError::Conflict`.
    pub async fn create(&self, user: &NewUser) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, user_type) VALUES (?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.user_type)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "username"))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, user_type FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list_all(&self) -> Result<Vec<User>, DatabaseError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, user_type FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}

pub struct ShopRepository {
    pool: SqlitePool,
}

impl ShopRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, shop: &NewButcherShop) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO butcher_shops (name, location, contact, manager_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&shop.name)
        .bind(&shop.location)
        .bind(&shop.contact)
        .bind(shop.manager_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "manager"))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DatabaseError> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM butcher_shops WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    pub async fn list_all(&self) -> Result<Vec<ButcherShop>, DatabaseError> {
        let shops = sqlx::query_as::<_, ButcherShop>(
            "SELECT id, name, location, contact, manager_id FROM butcher_shops ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(shops)
    }
}

pub struct ReadingRepository {
    pool: SqlitePool,
}

impl ReadingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, reading: &NewMeatReading) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO meat_readings
                (user_id, butcher_shop_id, impedance, purchase_date, part, store_date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(reading.user_id)
        .bind(reading.butcher_shop_id)
        .bind(reading.impedance)
        .bind(reading.purchase_date)
        .bind(&reading.part)
        .bind(reading.store_date)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "butcher shop or user"))?;

        Ok(result.last_insert_rowid())
    }

    /// Most recent reading the customer stored for this shop and cut.
    /// Ties on `store_date` resolve to the highest id.
    pub async fn latest_for(
        &self,
        user_id: i64,
        butcher_shop_id: i64,
        part: &str,
    ) -> Result<Option<MeatReading>, DatabaseError> {
        let reading = sqlx::query_as::<_, MeatReading>(
            r#"
            SELECT id, user_id, butcher_shop_id, impedance, purchase_date, part, store_date
            FROM meat_readings
            WHERE user_id = ? AND butcher_shop_id = ? AND part = ?
            ORDER BY store_date DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(butcher_shop_id)
        .bind(part)
        .fetch_optional(&self.pool)
        .await?;
        Ok(reading)
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<MeatReading>, DatabaseError> {
        let readings = sqlx::query_as::<_, MeatReading>(
            r#"
            SELECT id, user_id, butcher_shop_id, impedance, purchase_date, part, store_date
            FROM meat_readings
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(readings)
    }
}
