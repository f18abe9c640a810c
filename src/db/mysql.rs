//! MySQL/MariaDB backend implementation.

use std::sync::Mutex;

use log::debug;
use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder};

use super::backend::{ChangeSummary, Database, Row};
use super::config::MySqlConfig;
use super::value::Value;
use super::DbError;

/// MySQL backend holding a single connection.
///
/// `Conn` needs `&mut self` for every call, so it sits behind a `Mutex`;
/// statements on one `MySqlDatabase` run serially.
pub struct MySqlDatabase {
    conn: Mutex<Conn>,
    dsn: String,
}

impl MySqlDatabase {
    /// Open a connection to the configured server.
    ///
    /// # Errors
    /// Returns `DbError::ConnectFailed` when the server is unreachable or
    /// rejects the credentials.
    pub fn connect(config: &MySqlConfig) -> Result<Self, DbError> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(config.server.as_str()))
            .tcp_port(config.port)
            .db_name(Some(config.database.as_str()))
            .user(Some(config.username.as_str()))
            .pass(Some(config.password.as_str()));

        let conn = Conn::new(opts).map_err(|e| DbError::ConnectFailed {
            target: config.dsn(),
            message: e.to_string(),
        })?;

        debug!("Connected to {}", config.dsn());
        Ok(Self {
            conn: Mutex::new(conn),
            dsn: config.dsn(),
        })
    }

    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&mut Conn) -> Result<T, mysql::Error>,
    ) -> Result<T, DbError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DbError::query(format!("connection lock poisoned: {}", e)))?;
        f(&mut conn).map_err(DbError::query)
    }
}

impl Database for MySqlDatabase {
    fn query(&self, statement: &str) -> Result<Vec<Row>, DbError> {
        let rows = self.with_conn(|conn| conn.query::<mysql::Row, _>(statement))?;
        Ok(rows.into_iter().map(convert_row).collect())
    }

    fn query_prepared(&self, statement: &str, params: &[Value]) -> Result<Vec<Row>, DbError> {
        let params = to_params(params);
        let rows = self.with_conn(|conn| conn.exec::<mysql::Row, _, _>(statement, params))?;
        Ok(rows.into_iter().map(convert_row).collect())
    }

    fn execute(&self, statement: &str) -> Result<ChangeSummary, DbError> {
        self.with_conn(|conn| {
            conn.query_drop(statement)?;
            Ok(summary(conn))
        })
    }

    fn execute_prepared(
        &self,
        statement: &str,
        params: &[Value],
    ) -> Result<ChangeSummary, DbError> {
        let params = to_params(params);
        self.with_conn(|conn| {
            conn.exec_drop(statement, params)?;
            Ok(summary(conn))
        })
    }

    fn backend_name(&self) -> &'static str {
        "MySql"
    }
}

fn summary(conn: &Conn) -> ChangeSummary {
    let last_insert_id = conn.last_insert_id();
    ChangeSummary {
        last_insert_id: (last_insert_id != 0).then_some(last_insert_id),
        row_count: conn.affected_rows(),
    }
}

fn to_params(params: &[Value]) -> mysql::Params {
    if params.is_empty() {
        return mysql::Params::Empty;
    }
    mysql::Params::Positional(params.iter().map(to_mysql_value).collect())
}

fn to_mysql_value(value: &Value) -> mysql::Value {
    match value {
        Value::Null => mysql::Value::NULL,
        Value::Int(i) => mysql::Value::Int(*i),
        Value::UInt(u) => mysql::Value::UInt(*u),
        Value::Float(f) => mysql::Value::Double(*f),
        Value::Text(s) => mysql::Value::Bytes(s.as_bytes().to_vec()),
        Value::Bytes(b) => mysql::Value::Bytes(b.clone()),
    }
}

fn from_mysql_value(value: mysql::Value) -> Value {
    match value {
        mysql::Value::NULL => Value::Null,
        mysql::Value::Int(i) => Value::Int(i),
        mysql::Value::UInt(u) => Value::UInt(u),
        mysql::Value::Float(f) => Value::Float(f64::from(f)),
        mysql::Value::Double(f) => Value::Float(f),
        mysql::Value::Bytes(b) => match String::from_utf8(b) {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Bytes(e.into_bytes()),
        },
        mysql::Value::Date(y, m, d, h, i, s, us) => {
            let mut text = format!("{:04}-{:02}-{:02} {:02}:{:02}:{:02}", y, m, d, h, i, s);
            if us > 0 {
                text.push_str(&format!(".{:06}", us));
            }
            Value::Text(text)
        }
        mysql::Value::Time(neg, d, h, i, s, us) => {
            let hours = u32::from(h) + d * 24;
            let mut text = format!("{}{:02}:{:02}:{:02}", if neg { "-" } else { "" }, hours, i, s);
            if us > 0 {
                text.push_str(&format!(".{:06}", us));
            }
            Value::Text(text)
        }
    }
}

fn convert_row(row: mysql::Row) -> Row {
    let columns: Vec<String> = row
        .columns_ref()
        .iter()
        .map(|c| c.name_str().into_owned())
        .collect();
    let values = row.unwrap();
    Row::new(
        columns
            .into_iter()
            .zip(values.into_iter().map(from_mysql_value))
            .collect(),
    )
}
