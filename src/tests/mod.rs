use tempfile::NamedTempFile;

use crate::db::{
    conn::{
        connect,
        release,
    },
    crud::insert_user,
};

/// Temporary SQLite database with an empty `users` table.
/// Keep the returned file alive for as long as the url is used.
pub async fn get_test_db() -> (String, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let db_url = format!("sqlite://{}", temp_file.path().to_str().unwrap());
    let mut conn = connect(&db_url).await.unwrap();
    sqlx::query(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )",
    )
    .execute(&mut conn)
    .await
    .unwrap();
    release(conn).await;
    (db_url, temp_file)
}

pub async fn insert_test_user(db_url: &str, name: &str, email: &str) -> i64 {
    let mut conn = connect(db_url).await.unwrap();
    let id = insert_user(&mut conn, name, email).await.unwrap();
    release(conn).await;
    id
}
