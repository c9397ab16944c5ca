use clap::Args;
use clap_complete::Shell;

use drycc::completion::CompletionKind;
use drycc::stream::DEFAULT_BASE_URL;

use super::AppArg;

#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// Report the newer version without installing it
    #[arg(long)]
    pub(crate) dry_run: bool,
    #[arg(long, hide = true, default_value = DEFAULT_BASE_URL)]
    pub(crate) base_url: String,
}

#[derive(Args)]
pub(crate) struct VersionArgs {
    /// Also show the API and controller versions
    #[arg(long)]
    pub(crate) all: bool,
}

#[derive(Args)]
pub(crate) struct CompletionArgs {
    pub(crate) shell: Shell,
}

#[derive(Args)]
pub(crate) struct CompleteArgs {
    pub(crate) kind: CompletionKind,
    #[arg(default_value = "")]
    pub(crate) prefix: String,
    #[command(flatten)]
    pub(crate) app: AppArg,
    /// Service whose plans to list
    #[arg(long)]
    pub(crate) service: Option<String>,
}
