pub mod conn;
pub mod crud;
pub mod user;
