use super::Client;
use crate::Error;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use std::env;
use tracing::instrument;

pub const ELASTICSEARCH_URL_ENV: &str = "ELASTICSEARCH_URL";
pub const JSON_ACCEPT: HeaderValue = HeaderValue::from_static("application/json");

#[derive(Debug)]
pub struct ClientBuilder {
    hostname: Option<String>,
    reqwest_builder: Option<reqwest::ClientBuilder>,
    headers: Vec<(String, String)>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            reqwest_builder: None,
            hostname: env::var(ELASTICSEARCH_URL_ENV).ok(),
            headers: Vec::new(),
        }
    }

    pub fn hostname(mut self, hostname: impl ToString) -> Self {
        self.hostname.replace(hostname.to_string());
        self
    }

    /// Adds a header sent with every request. Validated in [`build`](Self::build).
    pub fn header(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn reqwest_builder(mut self, builder: reqwest::ClientBuilder) -> Self {
        self.reqwest_builder.replace(builder);
        self
    }

    #[instrument]
    pub fn build(self) -> Result<Client, Error> {
        let hostname = self.hostname.ok_or(Error::HostnameNotFound)?;
        let hostname = hostname.trim_end_matches('/').to_owned();

        let mut builder = self.reqwest_builder.unwrap_or_default();

        let mut header_map = HeaderMap::new();
        header_map.insert(ACCEPT, JSON_ACCEPT);
        for (name, value) in self.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| Error::InvalidHeaderName {
                    name: name.to_owned(),
                    source: e,
                })?;
            let header_value =
                HeaderValue::from_str(&value).map_err(|e| Error::InvalidHeaderValue {
                    name: name.to_owned(),
                    source: e,
                })?;
            header_map.insert(header_name, header_value);
        }
        builder = builder.default_headers(header_map);

        let reqwest = builder.build().map_err(Error::ReqwestBuilderFailed)?;

        Ok(Client {
            reqwest,
            hostname: hostname.into(),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
