#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod cli;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod session;
pub mod tools;
pub mod types;

pub use error::{Result, SeoscopeError};
pub use session::Session;
pub use tools::scrape::{extract, extract_html, ExtractOptions};
pub use types::*;
