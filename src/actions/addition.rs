use crate::{
    actions::open,
    args::parser::CreateCommand,
    db::{
        conn::release,
        crud::insert_user,
    },
    error::Result,
};

pub async fn handle_createcmd(db_url: &str, cmd: &CreateCommand) -> Result<String> {
    let mut conn = open(db_url).await?;
    let inserted = insert_user(&mut conn, &cmd.name, &cmd.email).await;
    release(conn).await;

    let id = inserted?;
    tracing::info!(id, "inserted user");
    Ok("User created successfully!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actions::open,
        db::crud::get_user,
        tests::get_test_db,
    };

    #[tokio::test]
    async fn test_create_then_read_back() {
        let (db_url, _temp_file) = get_test_db().await;
        let cmd = CreateCommand {
            name: String::from("Ann"),
            email: String::from("ann@x.com"),
            extra: Vec::new(),
        };
        let output = handle_createcmd(&db_url, &cmd).await.unwrap();
        assert_eq!(output, "User created successfully!");

        let mut conn = open(&db_url).await.unwrap();
        let user = get_user(&mut conn, 1).await.unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@x.com");
        release(conn).await;
    }

    #[tokio::test]
    async fn test_create_keeps_raw_values() {
        let (db_url, _temp_file) = get_test_db().await;
        // no validation beyond what the table enforces
        let cmd = CreateCommand {
            name: String::from("  O'Brien; DROP TABLE users --"),
            email: String::from("not-an-email"),
            extra: Vec::new(),
        };
        handle_createcmd(&db_url, &cmd).await.unwrap();

        let mut conn = open(&db_url).await.unwrap();
        let user = get_user(&mut conn, 1).await.unwrap();
        assert_eq!(user.name, "  O'Brien; DROP TABLE users --");
        assert_eq!(user.email, "not-an-email");
        release(conn).await;
    }

    #[tokio::test]
    async fn test_create_without_table() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let db_url = format!("sqlite://{}", temp_file.path().to_str().unwrap());
        let cmd = CreateCommand {
            name: String::from("Ann"),
            email: String::from("ann@x.com"),
            extra: Vec::new(),
        };
        let err = handle_createcmd(&db_url, &cmd).await.unwrap_err();
        assert!(err.to_string().contains("no such table"));
    }
}
