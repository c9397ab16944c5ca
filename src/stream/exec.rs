use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{Connector, connect_async_tls_with_config};

use super::{interrupted, runtime};
use crate::api::{Client, segment};

const STDIN: u8 = 0;
const STDOUT: u8 = 1;
const STDERR: u8 = 2;
const STATUS: u8 = 3;
const RESIZE: u8 = 4;
const CLOSE: u8 = 255;

#[derive(Clone, Debug, Default)]
pub struct ExecOptions {
    pub command: Vec<String>,
    pub stdin: bool,
    pub tty: bool,
}

/// A channel-prefixed binary message on the exec socket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Stdin(Vec<u8>),
    Stdout(Vec<u8>),
    Stderr(Vec<u8>),
    /// Final status document for the remote command.
    Status(Vec<u8>),
    Resize { width: u16, height: u16 },
    /// No more data will be written on the given channel.
    Close(u8),
}

impl Frame {
    pub fn encode(&self) -> Vec<u8> {
        let (channel, payload) = match self {
            Self::Stdin(b) => (STDIN, b.clone()),
            Self::Stdout(b) => (STDOUT, b.clone()),
            Self::Stderr(b) => (STDERR, b.clone()),
            Self::Status(b) => (STATUS, b.clone()),
            Self::Resize { width, height } => (
                RESIZE,
                serde_json::json!({ "Width": width, "Height": height })
                    .to_string()
                    .into_bytes(),
            ),
            Self::Close(channel) => (CLOSE, vec![*channel]),
        };
        let mut out = Vec::with_capacity(payload.len() + 1);
        out.push(channel);
        out.extend_from_slice(&payload);
        out
    }

    pub fn decode(data: &[u8]) -> Option<Self> {
        let (&channel, payload) = data.split_first()?;
        let payload = payload.to_vec();
        match channel {
            STDIN => Some(Self::Stdin(payload)),
            STDOUT => Some(Self::Stdout(payload)),
            STDERR => Some(Self::Stderr(payload)),
            STATUS => Some(Self::Status(payload)),
            RESIZE => {
                #[derive(Deserialize)]
                struct Size {
                    #[serde(rename = "Width")]
                    width: u16,
                    #[serde(rename = "Height")]
                    height: u16,
                }
                let size: Size = serde_json::from_slice(&payload).ok()?;
                Some(Self::Resize {
                    width: size.width,
                    height: size.height,
                })
            }
            CLOSE => match payload.as_slice() {
                [channel] => Some(Self::Close(*channel)),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct Status {
    status: String,
    reason: String,
    details: Option<StatusDetails>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct StatusDetails {
    causes: Vec<StatusCause>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct StatusCause {
    reason: String,
    message: String,
}

/// Exit code carried by a status frame. Unreadable failures map to 1.
pub fn exit_code(status: &[u8]) -> i32 {
    let Ok(status) = serde_json::from_slice::<Status>(status) else {
        return 1;
    };
    if status.status == "Success" {
        return 0;
    }
    if status.reason == "NonZeroExitCode" {
        let code = status
            .details
            .iter()
            .flat_map(|d| d.causes.iter())
            .find(|c| c.reason == "ExitCode")
            .and_then(|c| c.message.trim().parse().ok());
        if let Some(code) = code {
            return code;
        }
    }
    1
}

/// The exec endpoint for `pod`, on the websocket scheme matching the controller.
pub fn exec_url(base_url: &str, app: &str, pod: &str) -> Result<String> {
    let mut url = url::Url::parse(base_url).with_context(|| format!("parse {}", base_url))?;
    let scheme = match url.scheme() {
        "https" => "wss",
        _ => "ws",
    };
    url.set_scheme(scheme)
        .map_err(|_| anyhow::anyhow!("cannot use {} for {}", scheme, base_url))?;
    let path = format!(
        "{}/v2/apps/{}/pods/{}/exec/",
        url.path().trim_end_matches('/'),
        segment(app),
        segment(pod)
    );
    url.set_path(&path);
    Ok(url.to_string())
}

struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        crossterm::terminal::enable_raw_mode().context("enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

fn terminal_size() -> Option<Frame> {
    crossterm::terminal::size()
        .ok()
        .map(|(width, height)| Frame::Resize { width, height })
}

/// Run `opts.command` in `pod`, wiring the local terminal to it.
///
/// Returns the remote exit code, or 0 when the session closes without one.
pub fn exec(client: &Client, app: &str, pod: &str, opts: &ExecOptions) -> Result<i32> {
    let rt = runtime()?;
    let res = rt.block_on(session(client, app, pod, opts));
    // stdin reads park a blocking thread; do not wait for it
    rt.shutdown_background();
    res
}

async fn session(client: &Client, app: &str, pod: &str, opts: &ExecOptions) -> Result<i32> {
    let url = exec_url(client.base_url(), app, pod)?;
    let mut request = url
        .as_str()
        .into_client_request()
        .context("build exec request")?;
    for (name, value) in client.default_headers() {
        let value = HeaderValue::from_str(&value).context("invalid header value")?;
        request.headers_mut().insert(name, value);
    }
    let connector = if client.ssl_verify() {
        None
    } else {
        let tls = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .context("build tls connector")?;
        Some(Connector::NativeTls(tls))
    };

    tracing::debug!(%url, "opening exec session");
    let (ws, _) = connect_async_tls_with_config(request, None, false, connector)
        .await
        .with_context(|| format!("connect to {}", url))?;
    let (mut sink, mut stream) = ws.split();

    let init = serde_json::json!({
        "command": opts.command,
        "stdin": opts.stdin,
        "tty": opts.tty,
    });
    sink.send(Message::Text(init.to_string()))
        .await
        .context("send exec request")?;

    // raw mode only makes sense when our own stdin is a terminal
    let _raw = if opts.stdin && crate::console::stdin_is_terminal() {
        Some(RawMode::enable()?)
    } else {
        None
    };

    let (tx, mut rx) = mpsc::channel::<Frame>(16);
    if opts.tty
        && let Some(size) = terminal_size()
    {
        let _ = tx.send(size).await;
    }
    if opts.stdin {
        tokio::spawn(pump_input(tokio::io::stdin(), tx.clone()));
    }
    #[cfg(unix)]
    {
        if opts.tty {
            tokio::spawn(forward_resizes(tx.clone()));
        }
    }
    drop(tx);

    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();
    let mut code = 0;
    let mut outgoing = true;
    let interrupt = interrupted();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            msg = stream.next() => match msg {
                Some(Ok(Message::Binary(data))) => match Frame::decode(&data) {
                    Some(Frame::Stdout(b)) => {
                        stdout.write_all(&b).await?;
                        stdout.flush().await?;
                    }
                    Some(Frame::Stderr(b)) => {
                        stderr.write_all(&b).await?;
                        stderr.flush().await?;
                    }
                    Some(Frame::Status(b)) => code = exit_code(&b),
                    _ => {}
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err).context("exec stream"),
            },
            frame = rx.recv(), if outgoing => match frame {
                Some(frame) => sink
                    .send(Message::Binary(frame.encode()))
                    .await
                    .context("send exec input")?,
                None => outgoing = false,
            },
            _ = &mut interrupt => {
                tracing::debug!("exec interrupted");
                break;
            }
        }
    }
    let _ = sink.close().await;
    tracing::debug!(code, "exec session closed");
    Ok(code)
}

/// Forward `input` as stdin frames, then close the channel at end of input.
async fn pump_input(mut input: impl AsyncRead + Unpin, tx: mpsc::Sender<Frame>) {
    let mut buf = vec![0u8; 4096];
    loop {
        match input.read(&mut buf).await {
            Ok(0) => {
                let _ = tx.send(Frame::Close(STDIN)).await;
                break;
            }
            Ok(n) => {
                if tx.send(Frame::Stdin(buf[..n].to_vec())).await.is_err() {
                    break;
                }
            }
            Err(err) => {
                tracing::debug!("stdin closed: {}", err);
                break;
            }
        }
    }
}

#[cfg(unix)]
async fn forward_resizes(tx: mpsc::Sender<Frame>) {
    use tokio::signal::unix::{SignalKind, signal};
    let Ok(mut winch) = signal(SignalKind::window_change()) else {
        return;
    };
    while winch.recv().await.is_some() {
        if let Some(size) = terminal_size()
            && tx.send(size).await.is_err()
        {
            break;
        }
    }
}

#[cfg(test)]
#[path = "../tests/stream/exec_tests.rs"]
mod tests;
