use super::result::{AliasEntry, AliasesResult, IndexEntry};
use crate::Error;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Decodes an `_aliases` response body.
///
/// ```json
/// {
///   "index1": { "aliases": { "alias1": {}, "alias2": {} } },
///   "index2": { "aliases": {} }
/// }
/// ```
///
/// The body must be a json object. Below the top level the decode is
/// lenient: an index whose value is not an object, or that has no `aliases`
/// object, is recorded without aliases and counted in
/// [`AliasesResult::tolerated_anomalies`]. Per-alias values (filters,
/// routing) are ignored.
pub fn decode(body: &[u8]) -> Result<AliasesResult, Error> {
    let json: Value = serde_json::from_slice(body).map_err(|e| Error::MalformedResponse {
        body: String::from_utf8_lossy(body).into_owned(),
        source: e,
    })?;

    let indices = match json {
        Value::Object(indices) => indices,
        other => {
            return Err(Error::UnexpectedShape {
                found: kind(&other),
            })
        }
    };

    let mut tolerated = 0;
    let indices = indices
        .into_iter()
        .map(|(index, value)| {
            let aliases = match value.get("aliases") {
                Some(Value::Object(aliases)) => Some(
                    aliases
                        .keys()
                        .map(AliasEntry::new)
                        .collect::<Vec<_>>(),
                ),
                Some(other) => {
                    debug!(%index, found = kind(other), "`aliases` is not an object");
                    None
                }
                None if value.is_object() => {
                    debug!(%index, "no `aliases` in index entry");
                    None
                }
                None => {
                    debug!(%index, found = kind(&value), "index entry is not an object");
                    None
                }
            };

            if aliases.is_none() {
                tolerated += 1;
            }

            (index, IndexEntry::new(aliases.unwrap_or_default()))
        })
        .collect::<BTreeMap<_, _>>();

    Ok(AliasesResult::new(indices, tolerated))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
