// src/core/net.rs
//
// Single blocking HTTP GET. The body is returned whatever the status code;
// callers that care can look at `RawPage::status`.

use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Response body of one fetch, plus where it came from.
#[derive(Clone, Debug)]
pub struct RawPage {
    /// Final URL after redirects.
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl RawPage {
    /// Wrap markup that did not come off the network (fixtures, cached pages).
    pub fn from_html(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self { url: url.into(), status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GET `url` and return the decoded body.
///
/// No request headers are added and no status check is made. Transport
/// faults (DNS, refused connection, broken body) come back as `Error::Fetch`.
pub fn fetch(url: &str) -> Result<RawPage> {
    let wrap = |source: reqwest::Error| Error::Fetch { url: s!(url), source };

    let client = Client::builder().build().map_err(wrap)?;

    logd!("GET {url}");
    let resp = client.get(url).send().map_err(wrap)?;

    let status = resp.status();
    let final_url = resp.url().to_string();
    let body = resp.text().map_err(wrap)?;

    let page = RawPage { url: final_url, status: status.as_u16(), body };
    if page.is_success() {
        logd!("{} {} ({} bytes)", page.status, page.url, page.body.len());
    } else {
        logw!("{} {} ({} bytes), continuing anyway", page.status, page.url, page.body.len());
    }
    Ok(page)
}
