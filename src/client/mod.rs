use crate::{api::aliases::Aliases, Error};
use bytes::Bytes;
use reqwest::Client as Reqwest;
use std::sync::Arc;
use tracing::instrument;

pub mod builder;
mod dump;
pub use builder::*;

#[derive(Debug, Clone)]
pub struct Client {
    pub reqwest: Reqwest,
    hostname: Arc<String>,
}

impl Client {
    pub fn new(hostname: &str) -> Self {
        Self::builder()
            .hostname(hostname)
            .build()
            .expect("Default Reqwest Client should build successfully")
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Starts an alias listing request against this cluster.
    pub fn aliases(&self) -> Aliases<'_> {
        Aliases::new(self)
    }
}

impl Client {
    /// Sends a bodiless GET to `target` (path plus optional query string) and
    /// returns the full response body.
    ///
    /// Any non-success status is an error. When `debug` is set, the outgoing
    /// request and the incoming response are dumped on the
    /// `elastic_aliases::dump` tracing target.
    #[instrument(skip(self, debug))]
    pub async fn get_raw(&self, target: &str, debug: bool) -> Result<Bytes, Error> {
        let url = format!("{}{}", self.hostname, target);

        let req = self
            .reqwest
            .get(url)
            .build()
            .map_err(Error::RequestConstruction)?;

        if debug {
            dump::request(&req);
        }

        let res = self
            .reqwest
            .execute(req)
            .await
            .map_err(Error::from_reqwest)?;

        let failed = res.error_for_status_ref().err();
        let status = res.status();
        let headers = res.headers().clone();

        // consumes the response, so the body is released on every path below
        let body = res.bytes().await.map_err(Error::Transport)?;

        if debug {
            dump::response(status, &headers, &body);
        }

        match failed {
            Some(err) => Err(Error::Transport(err)),
            None => Ok(body),
        }
    }
}
