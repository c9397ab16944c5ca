use clap::Args;

use super::AppArg;

#[derive(Args)]
pub(crate) struct ExecArgs {
    #[command(flatten)]
    pub(crate) app: AppArg,
    /// Pass stdin to the container
    #[arg(short = 'i', long)]
    pub(crate) stdin: bool,
    /// Allocate a TTY
    #[arg(short = 't', long)]
    pub(crate) tty: bool,
    pub(crate) pod: String,
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) command: Vec<String>,
}

#[derive(Args)]
pub(crate) struct ScaleArgs {
    #[command(flatten)]
    pub(crate) app: AppArg,
    /// Targets as ptype=num, e.g. web=2
    #[arg(required = true)]
    pub(crate) targets: Vec<String>,
}
