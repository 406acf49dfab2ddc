mod client;

pub mod api;

pub use api::aliases::{AliasEntry, Aliases, AliasesQuery, AliasesResult, IndexEntry};
pub use client::*;
pub use error::Error;
pub use reqwest::{Client as Reqwest, ClientBuilder as ReqwestBuilder};

mod error {
    use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum Error {
        #[error("Failed to construct request")]
        RequestConstruction(#[source] reqwest::Error),
        #[error("Request failed to Elasticsearch")]
        Transport(#[source] reqwest::Error),
        #[error("Failed to deserialize text {body} as json")]
        MalformedResponse {
            body: String,
            source: serde_json::Error,
        },
        #[error("Expected a json object at the top level, found {found}")]
        UnexpectedShape { found: &'static str },
        #[error("Hostname not found")]
        HostnameNotFound,
        #[error("Header name ({name}) is invalid")]
        InvalidHeaderName {
            name: String,
            source: InvalidHeaderName,
        },
        #[error("Header value for {name} is invalid")]
        InvalidHeaderValue {
            name: String,
            source: InvalidHeaderValue,
        },
        #[error("ReqwestBuilder failed to build")]
        ReqwestBuilderFailed(#[source] reqwest::Error),
    }

    impl Error {
        /// Sorts a reqwest failure into construction or transport.
        pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
            if err.is_builder() {
                Self::RequestConstruction(err)
            } else {
                Self::Transport(err)
            }
        }
    }
}
