//! List-shaped helpers built on [`FragmentBuilder`].
//!
//! Unlike plain interpolation, these expand their input: every element gets its
//! own placeholder, or is spliced when it is a [`Fragment`]. Elements that are
//! themselves arrays stay one parameter.
//!
//! ```ignore
//! use sqlate::{column, csv, sql, tuple};
//!
//! let columns = tuple(["name", "age"].map(column));
//! let values = csv([tuple(sqlate::args!["John", 42]), tuple(sqlate::args!["Mike", 13])]);
//! let q = sql!("INSERT INTO models ", columns, " VALUES ", values);
//! // INSERT INTO models ("name", "age") VALUES (?, ?), (?, ?)
//! ```

use crate::error::{SqlError, SqlResult};
use crate::fragment::{Fragment, FragmentBuilder, IntoArg};
use crate::value::Value;

/// `(v0, v1, ...)`; an empty input renders `()`.
pub fn tuple<I>(values: I) -> Fragment
where
    I: IntoIterator,
    I::Item: IntoArg,
{
    let mut b = FragmentBuilder::new("(");
    b.push_separated(values, ", ").push(")");
    b.finish()
}

/// `v0, v1, ...` without parentheses; an empty input renders `""`.
pub fn csv<I>(values: I) -> Fragment
where
    I: IntoIterator,
    I::Item: IntoArg,
{
    let mut b = FragmentBuilder::default();
    b.push_separated(values, ", ");
    b.finish()
}

/// Like [`tuple`], but an empty input renders `(NULL)` so that `x IN (NULL)`
/// stays valid SQL and matches nothing.
pub fn in_list<I>(values: I) -> Fragment
where
    I: IntoIterator,
    I::Item: IntoArg,
{
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return Fragment::new("(NULL)");
    }
    tuple(values)
}

/// Join fragments left to right with no separator.
///
/// The last segment of each fragment merges with the first segment of the
/// next. An empty input yields an empty fragment.
///
/// A [`Fragment::raw`] carrying parameters has no slots of its own, so
/// numbered output after it drifts from the parameter list. Check the result
/// with [`Fragment::validate`] when raw fragments are mixed in.
pub fn concat<I>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = Fragment>,
{
    let mut b = FragmentBuilder::default();
    for f in fragments {
        b.push_fragment(f);
    }
    b.finish()
}

fn into_array(value: Value) -> SqlResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(SqlError::not_an_array(other)),
    }
}

/// [`tuple`] for dynamically typed input; fails unless `value` is an array.
pub fn try_tuple(value: Value) -> SqlResult<Fragment> {
    Ok(tuple(into_array(value)?))
}

/// [`csv`] for dynamically typed input; fails unless `value` is an array.
pub fn try_csv(value: Value) -> SqlResult<Fragment> {
    Ok(csv(into_array(value)?))
}

/// [`in_list`] for dynamically typed input; fails unless `value` is an array.
pub fn try_in_list(value: Value) -> SqlResult<Fragment> {
    Ok(in_list(into_array(value)?))
}
