use sqlx::{
    AnyConnection,
    Row,
};

use crate::db::user::User;

pub async fn insert_user(conn: &mut AnyConnection, name: &str, email: &str) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(&mut *conn)
        .await?;

    row.try_get("id")
}

/// Fails with `sqlx::Error::RowNotFound` when no user has `id`.
pub async fn get_user(conn: &mut AnyConnection, id: i64) -> Result<User, sqlx::Error> {
    let row = sqlx::query("SELECT id, name, email FROM users WHERE id = $1")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

    User::from_row(&row)
}

// Returns rows affected, zero when the id does not exist.
pub async fn update_user(
    conn: &mut AnyConnection,
    id: i64,
    name: &str,
    email: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
        .bind(name)
        .bind(email)
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_user(conn: &mut AnyConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}
