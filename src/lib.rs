//! Client library behind the `drycc` command-line tool.

pub mod api;
pub mod app_context;
pub mod cmd;
pub mod completion;
pub mod console;
pub mod error;
pub mod git;
pub mod parse;
pub mod progress;
pub mod runner;
pub mod settings;
pub mod stream;
pub mod table;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
