use clap::{
    ArgAction,
    Args,
    Parser,
    Subcommand,
};

/// A simple CLI to perform CRUD operations on the users table
///
/// connection settings are read from config.yaml (or config.yml)
/// in the current working directory
#[derive(Debug, Parser)]
#[command(name = "usercrud", author, version)]
pub struct CliArgs {
    /// increase log verbosity on stderr, can be repeated
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub arguments: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Create a new user
    Create(CreateCommand),
    /// Read user information
    Read(ReadCommand),
    /// Update user information
    Update(UpdateCommand),
    /// Delete a user
    Delete(DeleteCommand),
}

#[derive(Debug, Args)]
pub struct CreateCommand {
    /// name of the user
    pub name: String,
    /// email of the user
    pub email: String,
    /// extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ReadCommand {
    /// id of the user
    #[arg(value_parser = parse_user_id, allow_negative_numbers = true)]
    pub id: i64,
    /// extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// id of the user
    #[arg(value_parser = parse_user_id, allow_negative_numbers = true)]
    pub id: i64,
    /// new name of the user
    pub name: String,
    /// new email of the user
    pub email: String,
    /// extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// id of the user
    #[arg(value_parser = parse_user_id, allow_negative_numbers = true)]
    pub id: i64,
    /// extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

pub fn parse_user_id(s: &str) -> Result<i64, String> {
    s.parse::<i64>().map_err(|_| "invalid user ID".to_string())
}
