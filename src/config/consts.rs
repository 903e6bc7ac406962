// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.osha.gov/pls/imis/";
pub const BASE_URL_ENV: &str = "SIC_SCRAPE_BASE_URL";
pub const MANUAL_INDEX_PATH: &str = "sic_manual.html";
pub const MAJOR_PATH_PREFIX: &str = "sic_manual.display?id=";
pub const MAJOR_PATH_SUFFIX: &str = "&tab=group";
pub const USER_AGENT: &str = concat!("sic_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Major Group codes run 01..=99
pub const MAX_MAJOR_ID: u32 = 99;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "sic";

// Sequential scrape
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
