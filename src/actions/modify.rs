use crate::{
    actions::open,
    args::parser::{
        DeleteCommand,
        UpdateCommand,
    },
    db::{
        conn::release,
        crud::{
            delete_user,
            update_user,
        },
    },
    error::Result,
};

/// Reports success even when no row matched `cmd.id`, the zero-row case is only logged.
pub async fn handle_updatecmd(db_url: &str, cmd: &UpdateCommand) -> Result<String> {
    let mut conn = open(db_url).await?;
    let updated = update_user(&mut conn, cmd.id, &cmd.name, &cmd.email).await;
    release(conn).await;

    let rows = updated?;
    tracing::debug!(id = cmd.id, rows, "updated user");
    if rows == 0 {
        tracing::warn!(id = cmd.id, "update matched no user");
    }
    Ok("User updated successfully!".to_string())
}

/// Reports success even when no row matched `cmd.id`, the zero-row case is only logged.
pub async fn handle_deletecmd(db_url: &str, cmd: &DeleteCommand) -> Result<String> {
    let mut conn = open(db_url).await?;
    let deleted = delete_user(&mut conn, cmd.id).await;
    release(conn).await;

    let rows = deleted?;
    tracing::debug!(id = cmd.id, rows, "deleted user");
    if rows == 0 {
        tracing::warn!(id = cmd.id, "delete matched no user");
    }
    Ok("User deleted successfully!".to_string())
}
