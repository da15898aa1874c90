/// Build a [`Fragment`](crate::Fragment) from alternating literal text and
/// arguments.
///
/// The list starts with text and alternates `text, arg, text, arg, ...`. A
/// trailing argument without text after it leaves an empty final segment.
/// Fragment arguments are spliced in place; everything else is bound as one
/// parameter.
///
/// ```ignore
/// use sqlate::sql;
///
/// let filter = sql!("(id, name) = (", 42, ", ", "John", ")");
/// let q = sql!("SELECT * FROM models WHERE ", filter, " AND age > ", 9);
/// assert_eq!(q.to_string(), "SELECT * FROM models WHERE (id, name) = (?, ?) AND age > ?");
/// ```
#[macro_export]
macro_rules! sql {
    ($head:expr $(, $($rest:tt)*)?) => {{
        let mut builder = $crate::FragmentBuilder::new($head);
        $crate::__sql_slots!(builder; $($($rest)*)?);
        builder.finish()
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sql_slots {
    ($builder:ident;) => {};
    ($builder:ident; $arg:expr $(,)?) => {
        $builder.push_arg($arg);
    };
    ($builder:ident; $arg:expr, $text:expr $(, $($rest:tt)*)?) => {
        $builder.slot($arg, $text);
        $crate::__sql_slots!($builder; $($($rest)*)?);
    };
}

/// Classify a heterogeneous list of arguments into an array of
/// [`Arg`](crate::Arg)s, for [`tuple`](crate::tuple), [`csv`](crate::csv) and
/// [`in_list`](crate::in_list).
///
/// ```ignore
/// let q = sqlate::tuple(sqlate::args![sqlate::sql!("now()"), "Mike", 42]);
/// assert_eq!(q.to_string(), "(now(), ?, ?)");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::arg($arg)),*]
    };
}
