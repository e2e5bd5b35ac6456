use crate::error::{Result, StorageError};
use crate::now_millis;
use musichub_core::types::UserId;
use sqlx::{Row, SqlitePool};

/// Stored account
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
}

/// Insert a new account; a taken email is `StorageError::Duplicate`
pub async fn create(pool: &SqlitePool, email: &str, password_hash: &str) -> Result<UserId> {
    let id = UserId::generate();

    let result = sqlx::query(
        r#"
        INSERT INTO users (id, email, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(id.as_str())
    .bind(email)
    .bind(password_hash)
    .bind(now_millis())
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(id),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(StorageError::Duplicate(email.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserRecord>> {
    let row = sqlx::query("SELECT id, email, password_hash FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| UserRecord {
        id: UserId::new(row.get::<String, _>("id")),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
    }))
}
