// src/core/net.rs
// Blocking HTTP GET against the manual host.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Anything that can hand back the HTML of a manual page by its path
/// (relative to the manual base, e.g. `sic_manual.display?id=1&tab=group`).
pub trait PageSource {
    fn fetch(&self, path: &str) -> Result<String>;
}

pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        // Url::join drops the last segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = join!(base.path(), "/");
            base.set_path(&path);
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base })
    }

    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path)?;
        logd!("GET {url}");

        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { status: status.as_u16(), url: url.into() });
        }
        Ok(resp.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_paths_onto_base_directory() {
        let src = HttpSource::new("https://www.osha.gov/pls/imis").unwrap();
        let url = src.url_for("sic_manual.display?id=1&tab=group").unwrap();
        assert_eq!(url.as_str(), "https://www.osha.gov/pls/imis/sic_manual.display?id=1&tab=group");
    }
}
