use crate::{
    SqliteConnection,
    connection::prepare,
    error_message_from_ptr,
    extract::{extract_name, extract_value},
};
use libsqlite3_sys::{
    SQLITE_DONE, SQLITE_OK, SQLITE_ROW, sqlite3_column_count, sqlite3_errmsg,
    sqlite3_exec, sqlite3_free, sqlite3_step,
};
use sqlwrap_core::{Error, RawStatement, Result, RowLabeled, truncate_long};
use std::{
    ffi::{CString, c_void},
    ptr,
    sync::Arc,
};

/// Runs SQL text on a [`SqliteConnection`] without keeping a prepared handle.
pub struct SqliteRawStatement<'c> {
    connection: &'c mut SqliteConnection,
}

impl<'c> SqliteRawStatement<'c> {
    pub(crate) fn new(connection: &'c mut SqliteConnection) -> Self {
        Self { connection }
    }
}

impl RawStatement for SqliteRawStatement<'_> {
    /// Runs every statement in `sql`, one after the other.
    fn execute(&mut self, sql: &str) -> Result<()> {
        let query = CString::new(sql)?;
        let mut message = ptr::null_mut();
        let rc = unsafe {
            sqlite3_exec(
                **self.connection.connection,
                query.as_ptr(),
                None,
                ptr::null_mut(),
                &mut message,
            )
        };
        if rc != SQLITE_OK {
            let text = error_message_from_ptr(message);
            unsafe { sqlite3_free(message as *mut c_void) };
            let error = Error::msg(text).context(format!(
                "While executing the query:\n{}",
                truncate_long!(sql)
            ));
            log::error!("{:#}", error);
            return Err(error);
        }
        log::debug!("Executed:\n{}", truncate_long!(sql));
        Ok(())
    }

    fn fetch<F>(&mut self, sql: &str, mut f: F) -> Result<()>
    where
        F: FnMut(RowLabeled) -> Result<()>,
    {
        let connection = **self.connection.connection;
        let statement = prepare(connection, sql)?;
        unsafe {
            let count = sqlite3_column_count(*statement);
            let labels = (0..count)
                .map(|i| extract_name(*statement, i))
                .collect::<Result<Arc<[_]>>>()?;
            loop {
                match sqlite3_step(*statement) {
                    SQLITE_DONE => break,
                    SQLITE_ROW => {
                        let values = (0..count)
                            .map(|i| extract_value(*statement, i))
                            .collect::<Result<_>>()?;
                        f(RowLabeled::new(labels.clone(), values))?;
                    }
                    _ => {
                        let error = Error::msg(error_message_from_ptr(sqlite3_errmsg(connection)))
                            .context(format!(
                                "While fetching the rows of the query:\n{}",
                                truncate_long!(sql)
                            ));
                        log::error!("{:#}", error);
                        return Err(error);
                    }
                }
            }
        }
        Ok(())
    }
}
