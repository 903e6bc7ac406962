// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for the OSHA SIC manual. Each spec
//! focuses on a single page and encodes *where the classification lives in
//! the HTML* and *how to read it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing**: no fetching, no flattening, no export.
//! - **Tolerant extraction**: elements are recognized by their text through
//!   [`crate::sic::classify`], not by exact markup, and placed by their codes.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::collect → PageSource::fetch → specs::<page>::parse
//!                            ↘ sic::flatten → records → csv / file export
//! ```
//!
//! ## Current specs
//! - `major` – one Major Group page → `Node` tree (Major → Industry Group → SIC4).
//! - `manual` – the manual index → Divisions with links to their Major Groups.
//!
//! Specs are tested offline against captured fixtures in `tests/fixtures/`.
pub mod major;
pub mod manual;
