use sqlate::{
    Fragment, SqlError, Value, args, column, concat, csv, in_list, quote_identifier, sql, table,
    try_csv, try_in_list, try_tuple, tuple,
};

fn params(f: &Fragment) -> Vec<Value> {
    f.to_parameters()
}

fn embedded() -> [sqlate::Arg; 3] {
    args![
        sql!("('John', ", "Smith", ")"),
        "Mike",
        sql!("('Rob', ", "McBob", ")"),
    ]
}

// ==================== identifiers ====================

#[test]
fn column_escapes_name() {
    let q = column(r#"petite"Lingerie"Models"#);
    assert_eq!(q, Fragment::new(r#""petite""Lingerie""Models""#));
    assert!(q.parameters().is_empty());
}

#[test]
fn table_is_column() {
    let table_fn: fn(&str) -> Fragment = table;
    let column_fn: fn(&str) -> Fragment = column;
    assert_eq!(table_fn("a\"b"), column_fn("a\"b"));
    assert_eq!(quote_identifier("a\"b").to_string(), r#""a""b""#);
}

// ==================== csv ====================

#[test]
fn csv_comma_separates_values() {
    let q = csv(args!["John", 42]);
    assert_eq!(q.to_string(), "?, ?");
    assert_eq!(params(&q), vec![Value::from("John"), Value::from(42)]);
}

#[test]
fn csv_empty_is_empty_string() {
    let q = csv(Vec::<i32>::new());
    assert_eq!(q.to_string(), "");
    assert!(q.parameters().is_empty());
}

#[test]
fn csv_splices_embedded_sql() {
    let q = csv(embedded());
    assert_eq!(q.to_string(), "('John', ?), ?, ('Rob', ?)");
    assert_eq!(
        params(&q),
        vec![Value::from("Smith"), Value::from("Mike"), Value::from("McBob")]
    );
}

#[test]
fn csv_does_not_expand_nested_arrays() {
    let q = csv(args!["John", vec![1, 2]]);
    assert_eq!(q.to_string(), "?, ?");
    assert_eq!(params(&q), vec![Value::from("John"), Value::from(vec![1, 2])]);
}

// ==================== tuple ====================

#[test]
fn tuple_wraps_in_parentheses() {
    let q = tuple(args!["John", 42]);
    assert_eq!(q.to_string(), "(?, ?)");
    assert_eq!(params(&q), vec![Value::from("John"), Value::from(42)]);
}

#[test]
fn tuple_empty_is_empty_parentheses() {
    let q = tuple(Vec::<i32>::new());
    assert_eq!(q.to_string(), "()");
    assert!(q.parameters().is_empty());
}

#[test]
fn tuple_splices_embedded_sql() {
    let q = tuple(embedded());
    assert_eq!(q.to_string(), "(('John', ?), ?, ('Rob', ?))");
    assert_eq!(
        params(&q),
        vec![Value::from("Smith"), Value::from("Mike"), Value::from("McBob")]
    );
}

#[test]
fn tuple_does_not_expand_nested_arrays() {
    let q = tuple(args!["John", vec![1, 2]]);
    assert_eq!(q.to_string(), "(?, ?)");
    assert_eq!(params(&q), vec![Value::from("John"), Value::from(vec![1, 2])]);
}

// ==================== in_list ====================

#[test]
fn in_list_wraps_in_parentheses() {
    let q = in_list(args!["John", 42]);
    assert_eq!(q.to_string(), "(?, ?)");
    assert_eq!(params(&q), vec![Value::from("John"), Value::from(42)]);
}

#[test]
fn in_list_empty_is_null_tuple() {
    let q = in_list(Vec::<i32>::new());
    assert_eq!(q.to_string(), "(NULL)");
    assert!(q.parameters().is_empty());
}

#[test]
fn in_list_splices_embedded_sql() {
    let q = in_list(embedded());
    assert_eq!(q.to_string(), "(('John', ?), ?, ('Rob', ?))");
    assert_eq!(
        params(&q),
        vec![Value::from("Smith"), Value::from("Mike"), Value::from("McBob")]
    );
}

#[test]
fn in_list_does_not_expand_nested_arrays() {
    let q = in_list(args!["John", vec![1, 2]]);
    assert_eq!(q.to_string(), "(?, ?)");
    assert_eq!(params(&q), vec![Value::from("John"), Value::from(vec![1, 2])]);
}

#[test]
fn in_list_in_where_clause() {
    let q = sql!("SELECT * FROM users WHERE id IN ", in_list(Vec::<i64>::new()));
    assert_eq!(q.text(), "SELECT * FROM users WHERE id IN (NULL)");

    let q = sql!("SELECT * FROM users WHERE id IN ", in_list([1_i64, 2, 3]));
    assert_eq!(q.text(), "SELECT * FROM users WHERE id IN ($1, $2, $3)");
}

// ==================== dynamic input ====================

#[test]
fn try_helpers_accept_arrays() {
    let v = Value::from(serde_json::json!(["John", 42]));
    assert_eq!(try_tuple(v.clone()).unwrap().to_string(), "(?, ?)");
    assert_eq!(try_csv(v.clone()).unwrap().to_string(), "?, ?");
    assert_eq!(try_in_list(v).unwrap().to_string(), "(?, ?)");
}

#[test]
fn try_helpers_reject_non_arrays() {
    for f in [try_tuple, try_csv, try_in_list] {
        let err = f(Value::from(42)).unwrap_err();
        assert_eq!(err, SqlError::NotAnArray("42".to_string()));
        assert!(err.is_type_error());
    }
}

// ==================== concat ====================

#[test]
fn concat_empty() {
    let q = concat(Vec::<Fragment>::new());
    assert_eq!(q.to_string(), "");
    assert!(q.parameters().is_empty());
}

#[test]
fn concat_one_without_params() {
    let q = concat([Fragment::new("SELECT 42")]);
    assert_eq!(q.to_string(), "SELECT 42");
    assert!(q.parameters().is_empty());
}

#[test]
fn concat_one_raw_with_params() {
    let q = concat([Fragment::raw("SELECT ", [42])]);
    assert_eq!(q.to_string(), "SELECT ");
    assert_eq!(params(&q), vec![Value::from(42)]);
}

#[test]
fn concat_many_without_params() {
    let q = concat([sql!("SELECT 13"), sql!(", 37, 42"), sql!(", 69")]);
    assert_eq!(q.to_string(), "SELECT 13, 37, 42, 69");
    assert!(q.parameters().is_empty());
}

#[test]
fn concat_many_with_params() {
    let q = concat([sql!("SELECT ", 13), sql!(", ", 37, ", ", 42), sql!(", ", 69)]);
    assert_eq!(q.to_string(), "SELECT ?, ?, ?, ?");
    assert_eq!(q.text(), "SELECT $1, $2, $3, $4");
    assert_eq!(
        params(&q),
        vec![Value::from(13), Value::from(37), Value::from(42), Value::from(69)]
    );
}

// ==================== composition ====================

#[test]
fn insert_with_columns_and_rows() {
    let columns = tuple(["name", "age"].map(column));
    let values = csv([tuple(args!["John", 42]), tuple(args!["Mike", 13])]);
    let q = sql!("INSERT INTO models ", columns, " VALUES ", values);

    assert_eq!(
        q.to_string(),
        r#"INSERT INTO models ("name", "age") VALUES (?, ?), (?, ?)"#
    );
    assert_eq!(
        q.text(),
        r#"INSERT INTO models ("name", "age") VALUES ($1, $2), ($3, $4)"#
    );
    assert_eq!(
        params(&q),
        vec![
            Value::from("John"),
            Value::from(42),
            Value::from("Mike"),
            Value::from(13)
        ]
    );
    assert!(q.validate().is_ok());
}

#[test]
fn table_name_interpolation() {
    let q = sql!("SELECT * FROM ", table("Models"), " WHERE id = ", 42);
    assert_eq!(q.to_string(), r#"SELECT * FROM "Models" WHERE id = ?"#);
    assert_eq!(params(&q), vec![Value::from(42)]);
}

#[test]
fn fragments_shared_across_threads() {
    let q = std::sync::Arc::new(sql!("SELECT ", 1, ", ", 2));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let q = q.clone();
            std::thread::spawn(move || q.text())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "SELECT $1, $2");
    }
}
