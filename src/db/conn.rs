use sqlx::{
    AnyConnection,
    Connection,
};

/// Open a fresh connection to `url`. Every command gets its own,
/// there is no pooling or reuse.
pub async fn connect(url: &str) -> Result<AnyConnection, sqlx::Error> {
    sqlx::any::install_default_drivers();
    AnyConnection::connect(url).await
}

/// Close a connection. A failure to close is logged, never returned,
/// so that it cannot mask the statement result.
pub async fn release(conn: AnyConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close database connection");
    }
}
