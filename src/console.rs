//! Output streams and confirmation input for a single command.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;

pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// A cloneable handle that serializes writes to a shared stream.
#[derive(Clone)]
pub struct Writer(SharedWriter);

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .0
            .lock()
            .map_err(|_| io::Error::other("output stream poisoned"))?;
        inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .0
            .lock()
            .map_err(|_| io::Error::other("output stream poisoned"))?;
        inner.flush()
    }
}

pub struct Console {
    out: SharedWriter,
    err: SharedWriter,
    input: Mutex<Option<Box<dyn BufRead + Send>>>,
}

impl Console {
    pub fn stdio() -> Self {
        Self {
            out: Arc::new(Mutex::new(io::stdout())),
            err: Arc::new(Mutex::new(io::stderr())),
            input: Mutex::new(None),
        }
    }

    /// A console writing into in-memory buffers.
    pub fn captured() -> (Self, Capture) {
        let out = Arc::new(Mutex::new(Vec::new()));
        let err = Arc::new(Mutex::new(Vec::new()));
        let console = Self {
            out: out.clone(),
            err: err.clone(),
            input: Mutex::new(None),
        };
        (console, Capture { out, err })
    }

    /// Answer prompts from `input` instead of the terminal.
    pub fn with_input(self, input: impl BufRead + Send + 'static) -> Self {
        Self {
            input: Mutex::new(Some(Box::new(input))),
            ..self
        }
    }

    pub fn out(&self) -> Writer {
        Writer(self.out.clone())
    }

    pub fn err(&self) -> Writer {
        Writer(self.err.clone())
    }

    /// Whether prompts can be answered: injected input, or a terminal on stdin.
    pub fn interactive(&self) -> bool {
        let injected = self.input.lock().map(|i| i.is_some()).unwrap_or(false);
        injected || stdin_is_terminal()
    }

    /// Read a secret without echoing it.
    ///
    /// Injected input is read as a plain line.
    pub fn read_password(&self, prompt: &str) -> Result<String> {
        {
            let mut injected = self
                .input
                .lock()
                .map_err(|_| anyhow::anyhow!("console input poisoned"))?;
            if let Some(input) = injected.as_mut() {
                let mut line = String::new();
                input.read_line(&mut line).context("read password")?;
                return Ok(line.trim_end_matches(['\r', '\n']).to_string());
            }
        }
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()
            .context("read password")
    }

    /// Read one line of confirmation, without the trailing newline.
    ///
    /// Reads the controlling terminal when there is one so that redirected
    /// stdin does not answer prompts.
    pub fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        let mut injected = self
            .input
            .lock()
            .map_err(|_| anyhow::anyhow!("console input poisoned"))?;
        if let Some(input) = injected.as_mut() {
            input.read_line(&mut line).context("read confirmation")?;
        } else {
            read_terminal_line(&mut line)?;
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(unix)]
fn read_terminal_line(line: &mut String) -> Result<()> {
    match std::fs::File::open("/dev/tty") {
        Ok(tty) => {
            io::BufReader::new(tty)
                .read_line(line)
                .context("read confirmation from /dev/tty")?;
        }
        Err(_) => {
            io::stdin()
                .lock()
                .read_line(line)
                .context("read confirmation")?;
        }
    }
    Ok(())
}

#[cfg(not(unix))]
fn read_terminal_line(line: &mut String) -> Result<()> {
    io::stdin()
        .lock()
        .read_line(line)
        .context("read confirmation")?;
    Ok(())
}

pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

/// Buffers behind a captured console.
#[derive(Clone)]
pub struct Capture {
    out: Arc<Mutex<Vec<u8>>>,
    err: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    pub fn stdout(&self) -> String {
        self.out
            .lock()
            .map(|b| String::from_utf8_lossy(&b).to_string())
            .unwrap_or_default()
    }

    pub fn stderr(&self) -> String {
        self.err
            .lock()
            .map(|b| String::from_utf8_lossy(&b).to_string())
            .unwrap_or_default()
    }
}
