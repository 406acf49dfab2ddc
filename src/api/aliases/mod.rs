use crate::{Client, Error};
use tracing::instrument;

mod query;
mod response;
mod result;

pub use query::*;
pub use response::decode;
pub use result::*;

/// Lists the aliases of some or all indices.
///
/// ```no_run
/// # async fn run() -> Result<(), elastic_aliases::Error> {
/// let client = elastic_aliases::Client::new("http://127.0.0.1:9200");
/// let result = client
///     .aliases()
///     .indices(["logs-2023", "logs-2024"])
///     .execute()
///     .await?;
///
/// for index in result.indices_by_alias("logs-current") {
///     println!("{index}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Aliases<'a> {
    client: &'a Client,
    query: AliasesQuery,
}

impl<'a> Aliases<'a> {
    pub(crate) fn new(client: &'a Client) -> Aliases<'a> {
        Self {
            client,
            query: AliasesQuery::new(),
        }
    }

    pub fn with_query(mut self, query: AliasesQuery) -> Self {
        self.query = query;
        self
    }

    pub fn index(mut self, name: impl ToString) -> Self {
        self.query = self.query.index(name);
        self
    }

    pub fn indices(mut self, names: impl IntoIterator<Item = impl ToString>) -> Self {
        self.query = self.query.indices(names);
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.query = self.query.pretty(pretty);
        self
    }

    /// Dumps the request and response on the `elastic_aliases::dump` target.
    pub fn debug(mut self, debug: bool) -> Self {
        self.query = self.query.debug(debug);
        self
    }

    pub fn query(&self) -> &AliasesQuery {
        &self.query
    }

    pub fn build_path(&self) -> String {
        self.query.build_path()
    }

    pub fn build_query_string(&self) -> String {
        self.query.build_query_string()
    }

    #[instrument(skip(self), fields(query = ?self.query))]
    pub async fn execute(&self) -> Result<AliasesResult, Error> {
        let target = self.query.build_target();
        let body = self.client.get_raw(&target, self.query.is_debug()).await?;

        decode(&body)
    }
}
