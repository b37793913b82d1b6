use url::Url;

use crate::fetch::{FetchOutcome, Fetcher};
use crate::test_util::{join_url, ROOT_ENDPOINT, ROOT_EXPECTED_OUTPUT, SUCCESS};

#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("invalid base url {base:?}: {source}")]
    InvalidBaseUrl {
        base: String,
        source: url::ParseError,
    },
    #[error("cannot connect to sample application at {url}: {detail}")]
    Unreachable { url: Url, detail: String },
    #[error("unexpected output: expected {expected:?}, received {received:?}")]
    OutputMismatch { expected: String, received: String },
}

/// Checks that the sample application's root endpoint serves the expected
/// body.
///
/// Execution is a single linear sequence: build the target URL, fetch it,
/// compare the sentinel, compare the body. The check never retries; a
/// connectivity fault is reported through [`CheckError::Unreachable`] with
/// the fetch helper's own error message as detail.
#[derive(Debug)]
pub struct RootEndpointCheck {
    target_url: Url,
    fetcher: Fetcher,
}

impl RootEndpointCheck {
    /// Joins `base_url` with the root endpoint path. A malformed base URL
    /// is a construction error, not a check failure.
    pub fn new(base_url: &str, fetcher: Fetcher) -> Result<Self, CheckError> {
        let target_url =
            join_url(base_url, ROOT_ENDPOINT).map_err(|source| CheckError::InvalidBaseUrl {
                base: base_url.to_owned(),
                source,
            })?;

        Ok(Self {
            target_url,
            fetcher,
        })
    }

    pub fn target_url(&self) -> &Url {
        &self.target_url
    }

    pub async fn run(&self) -> Result<(), CheckError> {
        tracing::debug!("hitting endpoint: {}", self.target_url);

        let FetchOutcome { output, status } = self.fetcher.get(&self.target_url).await;

        tracing::info!("output is: {output}");

        if status != SUCCESS {
            return Err(CheckError::Unreachable {
                url: self.target_url.clone(),
                detail: output,
            });
        }

        if output != ROOT_EXPECTED_OUTPUT {
            return Err(CheckError::OutputMismatch {
                expected: ROOT_EXPECTED_OUTPUT.to_owned(),
                received: output,
            });
        }

        Ok(())
    }
}
