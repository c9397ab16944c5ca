use std::io::Write;
use std::time::Duration;

use super::*;
use crate::console::Console;

#[test]
fn stopping_before_the_first_tick_writes_nothing() {
    let (console, capture) = Console::captured();
    let ticker = progress_every(console.out(), Duration::from_secs(60));
    ticker.stop();
    assert_eq!(capture.stdout(), "");
}

#[test]
fn frames_are_erased_before_stop_returns() {
    let (console, capture) = Console::captured();
    let mut out = console.out();
    write!(out, "Creating app... ").unwrap();

    let ticker = progress_every(console.out(), Duration::from_millis(5));
    std::thread::sleep(Duration::from_millis(60));
    ticker.stop();
    writeln!(out, "done").unwrap();

    let text = capture.stdout();
    assert!(text.starts_with("Creating app... "));
    assert!(text.ends_with(&format!("{}done\n", BLANK)), "{text:?}");
    assert!(text.contains(FRAMES[0]));
    // nothing from the ticker lands after the status line
    let done_at = text.rfind("done").unwrap();
    assert!(!text[done_at..].contains('\x08'));
}

#[test]
fn dropping_the_handle_stops_the_ticker() {
    let (console, capture) = Console::captured();
    {
        let _ticker = progress_every(console.out(), Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(30));
    }
    let before = capture.stdout();
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(capture.stdout(), before);
}
