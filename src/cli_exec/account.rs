use drycc::cmd::auth::LoginArgs as Login;

use crate::cli_commands::account::LoginArgs;

use super::*;

pub(super) fn handle_login_command(r: &Runner, args: LoginArgs) -> Result<()> {
    cmd::auth::login(
        r,
        Login {
            controller: &args.controller,
            username: args.username.as_deref(),
            password: args.password.as_deref(),
            ssl_verify: args.ssl_verify,
            limit: args.limit,
        },
    )
}

pub(super) fn handle_auth_command(r: &Runner, command: AuthCommands) -> Result<()> {
    match command {
        AuthCommands::Login(args) => handle_login_command(r, args),
        AuthCommands::Logout => cmd::auth::logout(r),
        AuthCommands::Whoami(args) => cmd::auth::whoami(r, args.all),
    }
}

pub(super) fn handle_keys_command(r: &Runner, command: KeysCommands) -> Result<()> {
    match command {
        KeysCommands::List { limit } => cmd::keys::list(r, limit.limit),
        KeysCommands::Add { path, name } => cmd::keys::add(r, name.as_deref(), path.as_deref()),
        KeysCommands::Remove { id } => cmd::keys::remove(r, &id),
    }
}

pub(super) fn handle_perms_command(r: &Runner, command: PermsCommands) -> Result<()> {
    match command {
        PermsCommands::List { app, limit } => cmd::perms::list(r, app.get(), limit.limit),
        PermsCommands::Create {
            app,
            username,
            permissions,
        } => cmd::perms::create(r, app.get(), &username, &permissions),
        PermsCommands::Update {
            app,
            username,
            permissions,
        } => cmd::perms::update(r, app.get(), &username, &permissions),
        PermsCommands::Delete { app, username } => cmd::perms::delete(r, app.get(), &username),
    }
}

pub(super) fn handle_tokens_command(r: &Runner, command: TokensCommands) -> Result<()> {
    match command {
        TokensCommands::List { limit } => cmd::tokens::list(r, limit.limit),
        TokensCommands::Remove { id, confirm } => cmd::tokens::remove(r, &id, &confirm),
    }
}

pub(super) fn handle_users_command(r: &Runner, command: UsersCommands) -> Result<()> {
    match command {
        UsersCommands::List { limit } => cmd::users::list(r, limit.limit),
        UsersCommands::Enable { username } => cmd::users::enable(r, &username),
        UsersCommands::Disable { username } => cmd::users::disable(r, &username),
    }
}
