use crate::{CBox, error_message_from_ptr, text_length};
use libsqlite3_sys::*;
use sqlwrap_core::{Context, Error, Prepared, Result, truncate_long};
use std::{
    ffi::{CStr, c_char, c_int},
    fmt::{self, Display},
    sync::Arc,
};

/// A compiled SQLite statement.
///
/// Keeps the connection alive: the statement is finalized first, then the
/// connection is closed once nothing else refers to it.
pub struct SqlitePrepared {
    pub(crate) statement: CBox<*mut sqlite3_stmt>,
    pub(crate) connection: Arc<CBox<*mut sqlite3>>,
}

impl SqlitePrepared {
    pub(crate) fn new(
        statement: CBox<*mut sqlite3_stmt>,
        connection: Arc<CBox<*mut sqlite3>>,
    ) -> Self {
        unsafe {
            sqlite3_clear_bindings(*statement);
        }
        Self {
            statement,
            connection,
        }
    }

    /// Number of `?` placeholders in the statement.
    pub fn parameter_count(&self) -> u64 {
        unsafe { sqlite3_bind_parameter_count(*self.statement) as u64 }
    }

    fn sql(&self) -> String {
        unsafe {
            let sql = sqlite3_sql(*self.statement);
            if sql.is_null() {
                return String::new();
            }
            CStr::from_ptr(sql).to_string_lossy().into_owned()
        }
    }

    fn error(&self, rc: c_int) -> Error {
        let message = error_message_from_ptr(unsafe { sqlite3_errmsg(**self.connection) });
        Error::msg(format!("{} (error code {})", message, rc))
    }

    fn check_bind(&self, rc: c_int, index: u64) -> Result<()> {
        if rc == SQLITE_OK {
            return Ok(());
        }
        let sql = self.sql();
        let error = self.error(rc).context(format!(
            "Cannot bind parameter {} to query:\n{}",
            index,
            truncate_long!(sql)
        ));
        log::error!("{:#}", error);
        Err(error)
    }

    fn index(index: u64) -> Result<c_int> {
        c_int::try_from(index)
            .map_err(|_| Error::msg(format!("Parameter index {} is out of range", index)))
    }
}

impl Prepared for SqlitePrepared {
    fn set_int(&mut self, index: u64, value: i64) -> Result<()> {
        let rc = unsafe { sqlite3_bind_int64(*self.statement, Self::index(index)?, value) };
        self.check_bind(rc, index)
    }

    fn set_double(&mut self, index: u64, value: f64) -> Result<()> {
        let rc = unsafe { sqlite3_bind_double(*self.statement, Self::index(index)?, value) };
        self.check_bind(rc, index)
    }

    fn set_string(&mut self, index: u64, value: &str) -> Result<()> {
        let length = text_length(value.len())
            .with_context(|| format!("Cannot bind parameter {}", index))?;
        let rc = unsafe {
            sqlite3_bind_text(
                *self.statement,
                Self::index(index)?,
                value.as_ptr() as *const c_char,
                length,
                SQLITE_TRANSIENT(),
            )
        };
        self.check_bind(rc, index)
    }

    fn set_boolean(&mut self, index: u64, value: bool) -> Result<()> {
        let rc = unsafe { sqlite3_bind_int(*self.statement, Self::index(index)?, value as c_int) };
        self.check_bind(rc, index)
    }

    fn execute(&mut self) -> Result<()> {
        unsafe {
            sqlite3_reset(*self.statement);
            let result = loop {
                match sqlite3_step(*self.statement) {
                    SQLITE_ROW => continue,
                    SQLITE_DONE => break Ok(()),
                    rc => {
                        let sql = self.sql();
                        let error = self.error(rc).context(format!(
                            "While executing the query:\n{}",
                            truncate_long!(sql)
                        ));
                        log::error!("{:#}", error);
                        break Err(error);
                    }
                }
            };
            sqlite3_reset(*self.statement);
            result
        }
    }
}

impl Display for SqlitePrepared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sql = self.sql();
        write!(f, "{}", truncate_long!(sql))
    }
}
