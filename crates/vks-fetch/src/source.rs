use std::time::Duration;

use crate::FetchError;

/// Default timeout for establishing a connection.
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default timeout for a whole download. HDR maps are large.
const READ_TIMEOUT_SECS: u64 = 300;

/// Where asset bytes come from.
pub trait AssetSource {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP downloads.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

impl AssetSource for HttpSource {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let http_err = |source: reqwest::Error| FetchError::Http {
            url: url.into(),
            source,
        };

        let response = self.client.get(url).send().map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.into(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().map_err(http_err)?.to_vec())
    }
}
