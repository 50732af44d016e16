use crate::{
    actions::{
        addition,
        modify,
        show,
    },
    args::parser::{
        Action,
        CliArgs,
    },
    error::Result,
};

/// Run one subcommand and print its result line on stdout.
pub async fn handle_commands(db_url: &str, args: CliArgs) -> Result<()> {
    let output = dispatch(db_url, args.arguments).await?;
    println!("{}", output);
    Ok(())
}

async fn dispatch(db_url: &str, action: Action) -> Result<String> {
    match action {
        Action::Create(cmd) => {
            tracing::debug!(?cmd, "handling create command");
            warn_ignored("create", &cmd.extra);
            addition::handle_createcmd(db_url, &cmd).await
        }
        Action::Read(cmd) => {
            tracing::debug!(?cmd, "handling read command");
            warn_ignored("read", &cmd.extra);
            show::handle_readcmd(db_url, &cmd).await
        }
        Action::Update(cmd) => {
            tracing::debug!(?cmd, "handling update command");
            warn_ignored("update", &cmd.extra);
            modify::handle_updatecmd(db_url, &cmd).await
        }
        Action::Delete(cmd) => {
            tracing::debug!(?cmd, "handling delete command");
            warn_ignored("delete", &cmd.extra);
            modify::handle_deletecmd(db_url, &cmd).await
        }
    }
}

fn warn_ignored(command: &str, extra: &[String]) {
    if !extra.is_empty() {
        tracing::warn!(command, ?extra, "ignoring extra arguments");
    }
}
