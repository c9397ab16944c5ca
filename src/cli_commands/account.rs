use clap::Args;

#[derive(Args)]
pub(crate) struct LoginArgs {
    /// Controller URL, e.g. http://drycc.example.com
    pub(crate) controller: String,
    #[arg(short = 'u', long)]
    pub(crate) username: Option<String>,
    #[arg(short = 'p', long)]
    pub(crate) password: Option<String>,
    /// Verify the controller's TLS certificate
    #[arg(long = "ssl-verify", default_value_t = true, action = clap::ArgAction::Set)]
    pub(crate) ssl_verify: bool,
    /// Default page size for list commands
    #[arg(short = 'l', long, default_value_t = 0)]
    pub(crate) limit: i64,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Show the full user record
    #[arg(long)]
    pub(crate) all: bool,
}
