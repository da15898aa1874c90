//! # sqlate
//!
//! Build parameterized SQL by composition instead of string concatenation.
//!
//! ## Features
//!
//! - **Values are always bound**: interpolated values become placeholders, never text
//! - **Fragments compose**: nesting a fragment splices its SQL and parameters in place
//! - **Two placeholder styles**: positional `?` or numbered `$1, $2, ...`
//! - **Common shapes**: [`tuple`], [`csv`], [`in_list`], [`concat`], identifier quoting
//! - **Driver interop**: `{ text, values }` query objects and `tokio-postgres` binding
//!
//! ## Example
//!
//! ```ignore
//! use sqlate::{PlaceholderStyle, sql, table, tuple};
//!
//! let q = sql!(
//!     "SELECT * FROM ", table("Models"),
//!     " WHERE name = ", "John",
//!     " AND id IN ", tuple([1, 2, 3]),
//! );
//!
//! assert_eq!(q.to_string(), r#"SELECT * FROM "Models" WHERE name = ? AND id IN (?, ?, ?)"#);
//! assert_eq!(
//!     q.render(PlaceholderStyle::Numbered),
//!     r#"SELECT * FROM "Models" WHERE name = $1 AND id IN ($2, $3, $4)"#
//! );
//! assert_eq!(q.parameters().len(), 4);
//! ```

mod macros;

pub mod compose;
pub mod error;
pub mod fragment;
pub mod ident;
pub mod interop;
pub mod value;

pub use compose::{concat, csv, in_list, try_csv, try_in_list, try_tuple, tuple};
pub use error::{SqlError, SqlResult};
pub use fragment::{Arg, Fragment, FragmentBuilder, IntoArg, PlaceholderStyle, arg, literal, sql};
pub use ident::quote_identifier;
pub use interop::QueryObject;
pub use value::Value;

/// Quote a column name. Same function as [`table`] and [`quote_identifier`].
pub use ident::quote_identifier as column;

/// Quote a table name. Same function as [`column`] and [`quote_identifier`].
pub use ident::quote_identifier as table;
