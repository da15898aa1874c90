//! The fragment model.
//!
//! A [`Fragment`] is SQL text with parameter slots: an ordered list of literal
//! segments and an ordered list of bound [`Value`]s. Segment *i* is the text
//! before slot *i*, so a well-formed fragment always has one more segment than
//! it has parameters.
//!
//! ```ignore
//! use sqlate::{sql, PlaceholderStyle};
//!
//! let q = sql!("SELECT * FROM models WHERE id = ", 42, " AND name = ", "John");
//! assert_eq!(q.to_string(), "SELECT * FROM models WHERE id = ? AND name = ?");
//! assert_eq!(q.text(), "SELECT * FROM models WHERE id = $1 AND name = $2");
//! ```

mod builder;


pub use builder::{Arg, FragmentBuilder, IntoArg, arg, sql};

use crate::error::{SqlError, SqlResult};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Placeholder syntax used when rendering a [`Fragment`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlaceholderStyle {
    /// `?` markers, order-dependent.
    #[default]
    Positional,
    /// `$1`, `$2`, ... markers, 1-indexed.
    Numbered,
}

impl FromStr for PlaceholderStyle {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        match s {
            "?" => Ok(Self::Positional),
            "$" => Ok(Self::Numbered),
            other => Err(SqlError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for PlaceholderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional => f.write_str("?"),
            Self::Numbered => f.write_str("$"),
        }
    }
}

/// An immutable piece of SQL with its bound parameters.
///
/// Build one with [`sql!`](crate::sql!), [`sql()`], [`FragmentBuilder`] or the
/// helpers ([`tuple`](crate::tuple), [`csv`](crate::csv), ...). Nesting a
/// fragment inside another splices its text and parameters in place.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    segments: Vec<String>,
    params: Vec<Value>,
}

/// Wrap already-complete SQL text verbatim: no escaping, no parameters.
pub fn literal(text: impl Into<String>) -> Fragment {
    Fragment::new(text)
}

impl Fragment {
    /// Create a fragment from raw SQL text with no parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            params: Vec::new(),
        }
    }

    /// Create an empty fragment (`""`, no parameters).
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Create a fragment from raw SQL text and an explicit parameter list.
    ///
    /// The text is not scanned for slots, so it renders verbatim; callers are
    /// responsible for the placeholders already written in `text`. Such a
    /// fragment can fail [`Fragment::validate`].
    pub fn raw<I>(text: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            segments: vec![text.into()],
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// [`Fragment::raw`] for dynamically typed input: `text` must be
    /// [`Value::Text`].
    pub fn try_raw<I>(text: Value, params: I) -> SqlResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        match text {
            Value::Text(text) => Ok(Self::raw(text, params)),
            other => Err(SqlError::not_text(other)),
        }
    }

    pub(crate) fn from_parts(segments: Vec<String>, params: Vec<Value>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments, params }
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Value>) {
        (self.segments, self.params)
    }

    /// Literal text segments, one more than [`Fragment::slot_count`].
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Bound parameters in placeholder order.
    ///
    /// This is a shared borrow; use [`Fragment::to_parameters`] for an owned
    /// copy that can be modified freely.
    pub fn parameters(&self) -> &[Value] {
        &self.params
    }

    /// An owned copy of the parameters.
    pub fn to_parameters(&self) -> Vec<Value> {
        self.params.clone()
    }

    /// Consume the fragment, returning its numbered SQL and parameters.
    pub fn into_query(self) -> (String, Vec<Value>) {
        let text = self.render(PlaceholderStyle::Numbered);
        (text, self.params)
    }

    /// Number of placeholders the fragment renders.
    pub fn slot_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// `true` when the fragment renders to an empty string and binds nothing.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
            && self.slot_count() == 0
            && self.segments.iter().all(String::is_empty)
    }

    /// Check that every placeholder has exactly one parameter.
    pub fn validate(&self) -> SqlResult<()> {
        let slots = self.slot_count();
        if slots != self.params.len() {
            return Err(SqlError::ParameterMismatch {
                slots,
                parameters: self.params.len(),
            });
        }
        Ok(())
    }

    /// Render with the given placeholder style.
    ///
    /// Numbered placeholders count slots from 1 in text order.
    pub fn render(&self, style: PlaceholderStyle) -> String {
        // Fast integer digit count.
        #[inline]
        fn decimal_digits(n: usize) -> usize {
            if n < 10 {
                1
            } else if n < 100 {
                2
            } else if n < 1000 {
                3
            } else {
                (n.ilog10() as usize) + 1
            }
        }

        #[inline]
        fn push_usize(out: &mut String, mut n: usize) {
            let mut buf = [0u8; 20];
            let mut pos = buf.len();
            loop {
                pos -= 1;
                buf[pos] = b'0' + (n % 10) as u8;
                n /= 10;
                if n == 0 {
                    break;
                }
            }
            for &b in &buf[pos..] {
                out.push(b as char);
            }
        }

        // Pre-size to avoid repeated reallocations (hot path).
        let mut cap: usize = self.segments.iter().map(String::len).sum();
        cap += match style {
            PlaceholderStyle::Positional => self.slot_count(),
            PlaceholderStyle::Numbered => (1..=self.slot_count())
                .map(|i| 1 /* '$' */ + decimal_digits(i))
                .sum(),
        };

        let mut out = String::with_capacity(cap);
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                match style {
                    PlaceholderStyle::Positional => out.push('?'),
                    PlaceholderStyle::Numbered => {
                        out.push('$');
                        push_usize(&mut out, idx);
                    }
                }
            }
            out.push_str(segment);
        }
        out
    }

    /// Render with a style token: `"?"` for positional, `"$"` for numbered.
    pub fn render_with(&self, token: &str) -> SqlResult<String> {
        Ok(self.render(token.parse()?))
    }

    /// Numbered SQL (`$1`, `$2`, ...), the PostgreSQL query-object `text`.
    pub fn text(&self) -> String {
        self.render(PlaceholderStyle::Numbered)
    }

    /// Alias of [`Fragment::parameters`], the query-object `values`.
    pub fn values(&self) -> &[Value] {
        self.parameters()
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}

/// Positional rendering (`?` placeholders).
impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(PlaceholderStyle::Positional))
    }
}
