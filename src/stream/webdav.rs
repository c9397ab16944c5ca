use std::time::Duration;

use anyhow::Result;
use reqwest::{Method, StatusCode};

use super::runtime;
use crate::api::{ApiError, Client, FilerSession};

const DEFAULT_KEEPALIVE: u64 = 10;

/// Why a gateway session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// A local shutdown signal arrived.
    Signal,
    /// The controller no longer knows the session.
    Closed,
}

struct Gateway<'a> {
    client: &'a Client,
    http: reqwest::Client,
    path: String,
    id: String,
    closed: bool,
}

impl Gateway<'_> {
    /// `false` once the controller has dropped the session.
    async fn keepalive(&self) -> Result<bool> {
        let req = self
            .client
            .async_request(&self.http, Method::GET, &self.path)
            .query(&[("session", self.id.as_str())]);
        match self.client.send_async(req).await {
            Ok(_) => Ok(true),
            Err(err) if session_gone(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let req = self
            .client
            .async_request(&self.http, Method::DELETE, &self.path)
            .query(&[("session", self.id.as_str())]);
        match self.client.send_async(req).await {
            Ok(_) => tracing::debug!(session = %self.id, "gateway session closed"),
            Err(err) if session_gone(&err) => {}
            Err(err) => tracing::warn!("failed to close gateway session: {}", err),
        }
    }
}

fn session_gone(err: &ApiError) -> bool {
    matches!(err.status(), Some(StatusCode::NOT_FOUND | StatusCode::GONE))
}

/// Keep the WebDAV session for `volume` alive until a shutdown signal or
/// until the controller ends it. The session is released exactly once.
pub fn serve_volume(
    client: &Client,
    app: &str,
    volume: &str,
    session: &FilerSession,
) -> Result<SessionEnd> {
    let rt = runtime()?;
    let res = rt.block_on(async {
        let mut gateway = Gateway {
            client,
            http: client.async_http()?,
            path: Client::serve_session_path(app, volume),
            id: session.id.clone(),
            closed: false,
        };
        let secs = if session.keepalive == 0 {
            DEFAULT_KEEPALIVE
        } else {
            session.keepalive
        };
        let mut ticker = tokio::time::interval(Duration::from_secs(secs));
        ticker.tick().await;

        let signals = shutdown_signals();
        tokio::pin!(signals);

        let end = loop {
            tokio::select! {
                res = &mut signals => {
                    res?;
                    break SessionEnd::Signal;
                }
                _ = ticker.tick() => {
                    match gateway.keepalive().await {
                        Ok(true) => {}
                        Ok(false) => {
                            gateway.closed = true;
                            break SessionEnd::Closed;
                        }
                        Err(err) => {
                            gateway.close().await;
                            return Err(err);
                        }
                    }
                }
            }
        };
        gateway.close().await;
        anyhow::Ok(end)
    });
    rt.shutdown_background();
    res
}

#[cfg(unix)]
async fn shutdown_signals() -> Result<()> {
    use anyhow::Context;
    use tokio::signal::unix::{SignalKind, signal};

    let kinds = [
        SignalKind::interrupt(),
        SignalKind::terminate(),
        SignalKind::quit(),
        SignalKind::hangup(),
        SignalKind::user_defined1(),
        SignalKind::user_defined2(),
    ];
    let mut streams = Vec::with_capacity(kinds.len());
    for kind in kinds {
        streams.push(signal(kind).context("register signal handler")?);
    }
    let waits = streams.iter_mut().map(|s| Box::pin(s.recv()));
    futures::future::select_all(waits).await;
    Ok(())
}

#[cfg(not(unix))]
async fn shutdown_signals() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
