//! Failure kinds raised by the client itself (as opposed to the controller).

/// Errors that originate locally: session state, the VCS bridge, prompts and
/// user input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No profile file, or a profile without a controller.
    #[error("Not logged in. Use 'drycc login' to get started.")]
    NotLoggedIn,

    /// The profile exists but cannot be used as-is.
    #[error("invalid profile {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("could not find remote {0}")]
    RemoteNotFound(String),

    #[error("could not determine the application name; pass --app or set DRYCC_APP")]
    AppNameUnresolved,

    /// A confirmation was refused or did not match.
    #[error("{0}")]
    UserCanceled(String),

    /// A positional argument or flag did not match its grammar.
    #[error("{0}")]
    InputMalformed(String),
}

impl CliError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::InputMalformed(msg.into())
    }

    pub fn canceled(msg: impl Into<String>) -> Self {
        Self::UserCanceled(msg.into())
    }
}
