// src/lib.rs

#[macro_use]
pub mod macros;

#[doc(hidden)]
pub use ::log as __log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod sic;
pub mod specs;

pub use error::{Result, ScrapeError};
pub use sic::{Node, Record, flatten};
