use crate::{
    actions::open,
    args::parser::ReadCommand,
    db::{
        conn::release,
        crud::get_user,
        user::User,
    },
    error::Result,
};

pub async fn handle_readcmd(db_url: &str, cmd: &ReadCommand) -> Result<String> {
    let mut conn = open(db_url).await?;
    let fetched = get_user(&mut conn, cmd.id).await;
    release(conn).await;

    let user = fetched?;
    tracing::debug!(id = user.id, "fetched user");
    Ok(format_user(&user))
}

fn format_user(user: &User) -> String {
    format!("User: {}, Email: {}", user.name, user.email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::CrudError,
        tests::{
            get_test_db,
            insert_test_user,
        },
    };

    #[test]
    fn test_format_user() {
        let user = User {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        };
        assert_eq!(format_user(&user), "User: Ann, Email: ann@x.com");
    }

    #[tokio::test]
    async fn test_read_existing() {
        let (db_url, _temp_file) = get_test_db().await;
        let id = insert_test_user(&db_url, "Ann", "ann@x.com").await;
        let cmd = ReadCommand { id, extra: Vec::new() };
        assert_eq!(
            handle_readcmd(&db_url, &cmd).await.unwrap(),
            "User: Ann, Email: ann@x.com"
        );
    }

    #[tokio::test]
    async fn test_read_missing() {
        let (db_url, _temp_file) = get_test_db().await;
        insert_test_user(&db_url, "Ann", "ann@x.com").await;

        let cmd = ReadCommand { id: 42, extra: Vec::new() };
        let err = handle_readcmd(&db_url, &cmd).await.unwrap_err();
        assert!(matches!(err, CrudError::Database(sqlx::Error::RowNotFound)));
        assert!(err.to_string().contains("no rows"));
    }
}
