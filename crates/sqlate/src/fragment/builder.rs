use super::Fragment;
use crate::error::{SqlError, SqlResult};
use crate::value::Value;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One interpolated argument, classified once.
///
/// Fragments are spliced into the surrounding text; values always become a
/// single bound placeholder, arrays included.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Fragment(Fragment),
    Value(Value),
}

impl From<Fragment> for Arg {
    fn from(f: Fragment) -> Self {
        Self::Fragment(f)
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

/// Convert an input into an [`Arg`].
///
/// This is mainly for ergonomics in the builder APIs and the `sql!` macro.
pub trait IntoArg {
    fn into_arg(self) -> Arg;
}

/// Classify `value` as an [`Arg`], for heterogeneous lists passed to
/// [`tuple`](crate::tuple), [`csv`](crate::csv) and friends.
pub fn arg(value: impl IntoArg) -> Arg {
    value.into_arg()
}

impl IntoArg for Arg {
    fn into_arg(self) -> Arg {
        self
    }
}

impl IntoArg for Fragment {
    fn into_arg(self) -> Arg {
        Arg::Fragment(self)
    }
}

impl IntoArg for &Fragment {
    fn into_arg(self) -> Arg {
        Arg::Fragment(self.clone())
    }
}

impl IntoArg for Value {
    fn into_arg(self) -> Arg {
        Arg::Value(self)
    }
}

impl<T: Into<Value>> IntoArg for Vec<T> {
    fn into_arg(self) -> Arg {
        Arg::Value(self.into())
    }
}

impl<T: Into<Value>> IntoArg for Option<T> {
    fn into_arg(self) -> Arg {
        Arg::Value(self.into())
    }
}

macro_rules! impl_into_arg_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoArg for $ty {
                fn into_arg(self) -> Arg {
                    Arg::Value(Value::from(self))
                }
            }
        )*
    };
}

impl_into_arg_value!(
    bool,
    i16,
    i32,
    i64,
    f32,
    f64,
    String,
    &str,
    &String,
    &[u8],
    serde_json::Value,
    Uuid,
    DateTime<Utc>,
);

/// Append-only accumulator behind every fragment constructor.
///
/// Keeps the segment/parameter invariant while appending: [`push`] extends the
/// last segment, [`push_bind`] opens a new slot, [`push_fragment`] splices.
///
/// [`push`]: FragmentBuilder::push
/// [`push_bind`]: FragmentBuilder::push_bind
/// [`push_fragment`]: FragmentBuilder::push_fragment
#[must_use]
#[derive(Debug, Clone)]
pub struct FragmentBuilder {
    segments: Vec<String>,
    params: Vec<Value>,
}

impl FragmentBuilder {
    /// Start with an initial literal segment.
    pub fn new(initial_sql: impl Into<String>) -> Self {
        Self {
            segments: vec![initial_sql.into()],
            params: Vec::new(),
        }
    }

    /// Start with room for `slots` parameters.
    pub fn with_capacity(initial_sql: impl Into<String>, slots: usize) -> Self {
        let mut segments = Vec::with_capacity(slots + 1);
        segments.push(initial_sql.into());
        Self {
            segments,
            params: Vec::with_capacity(slots),
        }
    }

    /// Append raw SQL (no parameters) to the current segment.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if sql.is_empty() {
            return self;
        }

        match self.segments.last_mut() {
            Some(last) => last.push_str(sql),
            None => self.segments.push(sql.to_string()),
        }
        self
    }

    /// Append a placeholder and bind its value.
    pub fn push_bind(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_bind_value(value.into())
    }

    fn push_bind_value(&mut self, value: Value) -> &mut Self {
        self.params.push(value);
        self.segments.push(String::new());
        self
    }

    /// Splice another fragment in place: its first segment joins the current
    /// one, the rest follow, and its parameters are appended in order.
    ///
    /// Numbered placeholders count slots, not parameters. Splicing a
    /// [`Fragment::raw`] that carries parameters therefore leaves later
    /// numbers out of step with the parameter list;
    /// [`Fragment::validate`] reports the mismatch.
    pub fn push_fragment(&mut self, fragment: Fragment) -> &mut Self {
        let (segments, params) = fragment.into_parts();
        let mut segments = segments.into_iter();
        if let Some(first) = segments.next() {
            self.push(&first);
        }
        self.segments.extend(segments);
        self.params.extend(params);
        self
    }

    /// Append an argument: fragments are spliced, values bound.
    pub fn push_arg(&mut self, arg: impl IntoArg) -> &mut Self {
        match arg.into_arg() {
            Arg::Fragment(f) => self.push_fragment(f),
            Arg::Value(v) => self.push_bind_value(v),
        }
    }

    /// Fill one template slot with `arg`, then append the following literal.
    pub fn slot(&mut self, arg: impl IntoArg, text: impl AsRef<str>) -> &mut Self {
        self.push_arg(arg).push(text.as_ref())
    }

    /// Append `args` separated by `separator`.
    pub fn push_separated<I>(&mut self, args: I, separator: &str) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        for (i, arg) in args.into_iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            self.push_arg(arg);
        }
        self
    }

    /// Number of parameters bound so far.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Finish building.
    pub fn finish(self) -> Fragment {
        Fragment::from_parts(self.segments, self.params)
    }
}

impl Default for FragmentBuilder {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Interpolate `args` into the slots between `segments`.
///
/// `segments` must hold exactly one more entry than `args`. Prefer the
/// [`sql!`](crate::sql!) macro when the argument list is known statically.
///
/// ```ignore
/// let q = sqlate::sql(&["SELECT * FROM t WHERE id = ", ""], [sqlate::arg(42)])?;
/// assert_eq!(q.to_string(), "SELECT * FROM t WHERE id = ?");
/// ```
pub fn sql<I>(segments: &[&str], args: I) -> SqlResult<Fragment>
where
    I: IntoIterator,
    I::Item: IntoArg,
{
    let args: Vec<Arg> = args.into_iter().map(IntoArg::into_arg).collect();
    let Some((first, rest)) = segments.split_first() else {
        return Err(SqlError::TemplateArity {
            segments: 0,
            args: args.len(),
        });
    };
    if rest.len() != args.len() {
        return Err(SqlError::TemplateArity {
            segments: segments.len(),
            args: args.len(),
        });
    }

    let mut builder = FragmentBuilder::with_capacity(*first, args.len());
    for (arg, text) in args.into_iter().zip(rest) {
        builder.slot(arg, text);
    }
    let fragment = builder.finish();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "sqlate.sql",
        segments = segments.len(),
        param_count = fragment.parameters().len(),
        "interpolated template"
    );

    Ok(fragment)
}
