//! Background "still working" ticker shown during blocking requests.

use std::io::Write;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::thread::JoinHandle;
use std::time::Duration;

pub const TICK: Duration = Duration::from_millis(400);

const FRAMES: [&str; 4] = ["...", "o..", ".o.", "..o"];
const ERASE: &str = "\x08\x08\x08";
const BLANK: &str = "   \x08\x08\x08";

/// Handle to a running ticker. Stopping waits for the ticker to clear its
/// frame, so anything written afterwards lands on a clean line.
pub struct Progress {
    stop: Option<SyncSender<()>>,
    ack: Receiver<()>,
    handle: Option<JoinHandle<()>>,
}

/// Start a ticker writing frames to `writer` every [`TICK`].
pub fn progress<W: Write + Send + 'static>(writer: W) -> Progress {
    progress_every(writer, TICK)
}

pub(crate) fn progress_every<W: Write + Send + 'static>(mut writer: W, tick: Duration) -> Progress {
    let (stop_tx, stop_rx) = mpsc::sync_channel::<()>(1);
    let (ack_tx, ack_rx) = mpsc::sync_channel::<()>(1);

    let handle = std::thread::spawn(move || {
        let mut frame = 0usize;
        let mut drawn = false;
        loop {
            match stop_rx.recv_timeout(tick) {
                Err(RecvTimeoutError::Timeout) => {
                    let _ = write!(writer, "{}{}", FRAMES[frame % FRAMES.len()], ERASE);
                    let _ = writer.flush();
                    drawn = true;
                    frame += 1;
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        if drawn {
            let _ = write!(writer, "{}", BLANK);
            let _ = writer.flush();
        }
        let _ = ack_tx.send(());
    });

    Progress {
        stop: Some(stop_tx),
        ack: ack_rx,
        handle: Some(handle),
    }
}

impl Progress {
    /// Stop the ticker and wait until it has erased its last frame.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(stop) = self.stop.take() else {
            return;
        };
        let _ = stop.send(());
        let _ = self.ack.recv();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        tracing::trace!("progress ticker stopped");
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
