use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use futures::StreamExt;
use reqwest::Method;

use super::{interrupted, runtime};
use crate::api::{ApiError, Client};

pub const DEFAULT_LINES: u32 = 300;
pub const DEFAULT_TIMEOUT: u64 = 300;

#[derive(Clone, Debug)]
pub struct LogOptions {
    pub lines: u32,
    pub follow: bool,
    /// Seconds before a followed stream is closed.
    pub timeout: u64,
    pub ptype: Option<String>,
    pub pod: Option<String>,
    pub container: Option<String>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES,
            follow: false,
            timeout: DEFAULT_TIMEOUT,
            ptype: None,
            pod: None,
            container: None,
        }
    }
}

pub fn logs_query(opts: &LogOptions) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("lines", opts.lines.to_string()),
        ("follow", opts.follow.to_string()),
        ("timeout", opts.timeout.to_string()),
    ];
    if let Some(ptype) = &opts.ptype {
        query.push(("ptype", ptype.clone()));
    }
    if let Some(pod) = &opts.pod {
        query.push(("pod_id", pod.clone()));
    }
    if let Some(container) = &opts.container {
        query.push(("container", container.clone()));
    }
    query
}

/// Copy the app's log stream into `out`.
///
/// Returns `Ok` on end of stream, when the timeout expires, and on
/// interrupt.
pub fn follow_logs(client: &Client, app: &str, opts: &LogOptions, out: &mut dyn Write) -> Result<()> {
    let rt = runtime()?;
    let res = rt.block_on(async {
        let http = client.async_http()?;
        let path = format!("/v2/apps/{}/logs/", crate::api::segment(app));
        let req = client
            .async_request(&http, Method::GET, &path)
            .query(&logs_query(opts));
        let resp = client.send_async(req).await?;
        let mut body = resp.bytes_stream();

        let deadline = tokio::time::sleep(Duration::from_secs(opts.timeout));
        tokio::pin!(deadline);
        let interrupt = interrupted();
        tokio::pin!(interrupt);

        loop {
            tokio::select! {
                chunk = body.next() => match chunk {
                    Some(Ok(bytes)) => {
                        out.write_all(&bytes).context("write log output")?;
                        out.flush().context("flush log output")?;
                    }
                    Some(Err(err)) => return Err(ApiError::Transport(err).into()),
                    None => {
                        tracing::debug!("log stream ended");
                        break;
                    }
                },
                _ = &mut deadline => {
                    tracing::debug!(timeout = opts.timeout, "log stream timed out");
                    break;
                }
                _ = &mut interrupt => {
                    tracing::debug!("log stream interrupted");
                    break;
                }
            }
        }
        anyhow::Ok(())
    });
    rt.shutdown_background();
    res
}

#[cfg(test)]
#[path = "../tests/stream/logs_tests.rs"]
mod tests;
