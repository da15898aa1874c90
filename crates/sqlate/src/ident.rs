//! SQL identifier quoting.
//!
//! [`quote_identifier`] (also exported as [`table`](crate::table) and
//! [`column`](crate::column)) wraps any name in double quotes, doubling
//! embedded `"`, and returns a zero-parameter fragment. It never fails, and a
//! dotted name stays a single identifier.
//!
//! # Example
//! ```ignore
//! use sqlate::{sql, table};
//!
//! let q = sql!("SELECT * FROM ", table("Models")); // SELECT * FROM "Models"
//! ```

use crate::fragment::Fragment;

/// Quote `name` as a SQL identifier: `a"b` becomes `"a""b"`.
pub fn quote_identifier(name: &str) -> Fragment {
    let mut out = String::with_capacity(name.len() + 2);
    write_quoted(name, &mut out);
    Fragment::new(out)
}

fn write_quoted(name: &str, out: &mut String) {
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}
