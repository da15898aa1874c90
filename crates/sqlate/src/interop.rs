//! Driver-facing query object.
//!
//! Some drivers (node-postgres style JSON bridges, HTTP SQL gateways) expect a
//! `{ "text": ..., "values": [...] }` payload. [`QueryObject`] is that shape,
//! kept apart from [`Fragment`] so the fragment itself stays driver-agnostic.

use crate::fragment::Fragment;
use crate::value::Value;
use serde::Serialize;

/// Numbered SQL text plus its parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryObject {
    pub text: String,
    pub values: Vec<Value>,
}

impl From<&Fragment> for QueryObject {
    fn from(fragment: &Fragment) -> Self {
        Self {
            text: fragment.text(),
            values: fragment.to_parameters(),
        }
    }
}

impl From<Fragment> for QueryObject {
    fn from(fragment: Fragment) -> Self {
        let (text, values) = fragment.into_query();
        Self { text, values }
    }
}

impl Fragment {
    /// Build the `{ text, values }` query object for this fragment.
    pub fn to_query_object(&self) -> QueryObject {
        #[cfg(feature = "tracing")]
        trace_handoff(self);

        QueryObject::from(self)
    }
}

#[cfg(feature = "tracing")]
const MAX_LOGGED_SQL: usize = 200;

/// Truncate to at most `max_bytes` without splitting a UTF-8 char.
#[cfg(feature = "tracing")]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_handoff(fragment: &Fragment) {
    if !tracing::enabled!(target: "sqlate.sql", tracing::Level::DEBUG) {
        return;
    }
    let sql = fragment.text();
    tracing::debug!(
        target: "sqlate.sql",
        param_count = fragment.parameters().len(),
        sql = %truncate_sql_bytes(&sql, MAX_LOGGED_SQL),
        "fragment handed to driver"
    );
}
