use crate::capabilities::HttpClient;
use crate::config::HttpConfig;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Builds its client on first use only, so commands that never touch the
/// network never start reqwest's blocking runtime.
pub struct ReqwestClient {
    cfg: HttpConfig,
}

impl ReqwestClient {
    pub fn new(cfg: HttpConfig) -> Self {
        Self { cfg }
    }

    fn client(&self) -> Result<Client> {
        let redirect = if self.cfg.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };
        // No request timeout: a stalled server blocks until it answers.
        let mut builder = Client::builder()
            .redirect(redirect)
            .timeout(None::<Duration>);
        if let Some(ua) = &self.cfg.user_agent {
            builder = builder.user_agent(ua.as_str());
        }
        builder.build().context("building HTTP client")
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let client = self.client()?;
        let resp = client
            .get(url)
            .send()
            .with_context(|| format!("GET {url}"))?;
        tracing::debug!(url, status = %resp.status(), "response received");
        let body = resp.bytes().with_context(|| "reading body")?;
        Ok(body.to_vec())
    }
}
