//! Long-running operations: log follow, interactive exec, the WebDAV
//! gateway session and self-update.
//!
//! Each operation owns a current-thread tokio runtime for its lifetime; the
//! rest of the client stays blocking.

use anyhow::{Context, Result};

mod exec;
pub use self::exec::{ExecOptions, Frame, exec, exec_url};

mod logs;
pub use self::logs::{LogOptions, follow_logs, logs_query};

mod update;
pub use self::update::{
    DEFAULT_BASE_URL, Published, UpdateOutcome, install, parse_index, platform_suffix, self_update,
    update_to,
};

mod webdav;
pub use self::webdav::{SessionEnd, serve_volume};

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub(crate) async fn interrupted() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!("cannot listen for SIGTERM: {}", err);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
