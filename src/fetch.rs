use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::test_util::{FAILURE, SUCCESS};

/// Result of a single fetch: the body text (or the transport error's
/// message) and the helper's status sentinel.
#[derive(Clone, Debug)]
pub struct FetchOutcome {
    pub output: String,
    pub status: i32,
}

/// HTTP-fetch helper with the zero-means-success sentinel convention.
///
/// The helper owns the request timeout; callers never see a `Result` from
/// [`Fetcher::get`] because every transport fault is folded into a nonzero
/// status sentinel, keeping the seam shaped as `(output, status)`.
#[derive(Clone, Debug)]
pub struct Fetcher {
    http_client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self { http_client })
    }

    /// Performs a GET against `url`.
    ///
    /// An exchange that completes yields the body and [`SUCCESS`], whatever
    /// the HTTP status was. A connection failure, timeout or body-read
    /// error yields the error's display string and [`FAILURE`].
    pub async fn get(&self, url: &Url) -> FetchOutcome {
        match self.try_get(url).await {
            Ok(output) => FetchOutcome {
                output,
                status: SUCCESS,
            },
            Err(e) => {
                tracing::warn!("fetching {url} failed: {e}");

                FetchOutcome {
                    output: e.to_string(),
                    status: FAILURE,
                }
            }
        }
    }

    async fn try_get(&self, url: &Url) -> Result<String, reqwest::Error> {
        self.http_client
            .get(url.clone())
            .send()
            .await?
            .text()
            .await
    }
}
