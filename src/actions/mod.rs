pub mod addition;
pub mod handler;
pub mod modify;
pub mod show;

use sqlx::AnyConnection;

use crate::{
    db::conn,
    error::{
        CrudError,
        Result,
    },
};

pub(super) async fn open(db_url: &str) -> Result<AnyConnection> {
    conn::connect(db_url).await.map_err(CrudError::Connect)
}
