use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_with::skip_serializing_none;

const PATH: &str = "_aliases";

/// Characters escaped in each index name: the url path-segment set plus `,`,
/// which separates names in the request path, and `\`, which the url parser
/// reads as `/` in http paths.
const INDEX_NAME: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'\\')
    .add(b',');

#[skip_serializing_none]
#[derive(Debug, Default, Clone, Serialize)]
struct QueryParams {
    pretty: Option<bool>,
}

/// Target indices and formatting options for one alias listing request.
///
/// No names means every index on the cluster.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AliasesQuery {
    indices: Vec<String>,
    pretty: bool,
    debug: bool,
}

impl AliasesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one index name. Empty and duplicate names are kept as given.
    pub fn index(mut self, name: impl ToString) -> Self {
        self.indices.push(name.to_string());
        self
    }

    pub fn indices(mut self, names: impl IntoIterator<Item = impl ToString>) -> Self {
        self.indices
            .extend(names.into_iter().map(|n| n.to_string()));
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn target_indices(&self) -> &[String] {
        &self.indices
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// `/{index,...}/_aliases`, or `/_aliases` when no index was added.
    ///
    /// A name of `.` or `..` is passed through, and url normalization then
    /// drops it (or the name before it) from the request path. A lone `..`
    /// therefore lists the aliases of every index.
    pub fn build_path(&self) -> String {
        if self.indices.is_empty() {
            return format!("/{PATH}");
        }

        let indices = self
            .indices
            .iter()
            .map(|name| utf8_percent_encode(name, INDEX_NAME))
            .join(",");

        format!("/{indices}/{PATH}")
    }

    /// `pretty=true` when requested, otherwise empty.
    pub fn build_query_string(&self) -> String {
        let params = QueryParams {
            pretty: self.pretty.then_some(true),
        };

        // a flat struct of scalars always serializes
        serde_urlencoded::to_string(&params).unwrap_or_default()
    }

    /// Path and query string joined into one request target.
    pub fn build_target(&self) -> String {
        let path = self.build_path();
        let query = self.build_query_string();

        if query.is_empty() {
            path
        } else {
            format!("{path}?{query}")
        }
    }
}
