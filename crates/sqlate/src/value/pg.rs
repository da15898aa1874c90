//! `tokio-postgres` binding for [`Value`] and [`Fragment`].

use super::Value;
use crate::fragment::Fragment;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        // Each variant delegates with its own type check, so a mismatch reports
        // the concrete Rust type instead of `Value`.
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            Value::SmallInt(v) => v.to_sql_checked(ty, out),
            Value::Int(v) => v.to_sql_checked(ty, out),
            Value::BigInt(v) => v.to_sql_checked(ty, out),
            Value::Real(v) => v.to_sql_checked(ty, out),
            Value::Double(v) => v.to_sql_checked(ty, out),
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Bytes(v) => v.as_slice().to_sql_checked(ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(v) => v.to_sql_checked(ty, out),
            Value::Array(items) => items.to_sql_checked(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

impl Fragment {
    /// Parameter refs compatible with `tokio-postgres`, in placeholder order.
    ///
    /// ```ignore
    /// let q = sqlate::sql!("SELECT * FROM users WHERE id = ", 42);
    /// let rows = client.query(&q.text(), &q.params_ref()).await?;
    /// ```
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        #[cfg(feature = "tracing")]
        crate::interop::trace_handoff(self);

        self.parameters()
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }
}
