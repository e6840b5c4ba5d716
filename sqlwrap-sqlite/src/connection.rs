use crate::{
    CBox, SqliteDriver, SqlitePrepared, SqliteRawStatement, error_message_from_ptr, text_length,
};
use libsqlite3_sys::{
    SQLITE_OK, SQLITE_OPEN_CREATE, SQLITE_OPEN_READWRITE, SQLITE_OPEN_URI, sqlite3,
    sqlite3_busy_timeout, sqlite3_close, sqlite3_errmsg, sqlite3_finalize, sqlite3_open_v2,
    sqlite3_prepare_v2, sqlite3_stmt,
};
use sqlwrap_core::{
    Connection, Context, Driver, Error, RawStatement, Result, Statement, Value, truncate_long,
};
use std::{
    ffi::{CStr, CString, c_int},
    ptr,
    sync::Arc,
};

/// How long a statement waits on a locked database before failing with `SQLITE_BUSY`.
pub const BUSY_TIMEOUT_MS: c_int = 5_000;

/// A connection to a SQLite database.
///
/// The url has the form `sqlite://<file>[?<uri parameters>]`, for example
/// `sqlite://data.sqlite?mode=rwc` or `sqlite://:memory:`. Schemas are the
/// SQLite database names: `main`, `temp` and every attached database.
///
/// SQLite has no per session default schema. [`Connection::set_schema`] only
/// checks that the database exists and records its name, unqualified table
/// names keep resolving through `temp`, `main` and then the attached databases.
/// Qualify them (`other.users`) to target a specific schema.
#[derive(Debug)]
pub struct SqliteConnection {
    pub(crate) connection: Arc<CBox<*mut sqlite3>>,
    pub(crate) schema: String,
}

impl SqliteConnection {
    /// The schema last selected with [`Connection::set_schema`], `main` initially.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Names of the databases currently visible from this connection.
    pub fn schemas(&mut self) -> Result<Vec<String>> {
        let mut result = Vec::new();
        self.create_statement()?
            .fetch("PRAGMA database_list", |row| {
                if let Some(Some(Value::Varchar(name))) = row.get_column("name") {
                    result.push(name.clone());
                }
                Ok(())
            })?;
        Ok(result)
    }
}

impl Connection for SqliteConnection {
    type Prepared = SqlitePrepared;
    type RawStatement<'c> = SqliteRawStatement<'c>;

    fn connect(url: &str) -> Result<Self> {
        let prefix = format!("{}://", SqliteDriver::NAME);
        let Some(path) = url.strip_prefix(&prefix) else {
            let error = Error::msg(format!(
                "Expected sqlite connection url to start with `{}`",
                &prefix
            ));
            log::error!("{:#}", error);
            return Err(error);
        };
        let context = || format!("Error while decoding connection URL: `{}`", url);
        let path = if path.starts_with("file:") {
            CString::new(path)
        } else {
            CString::new(format!("file:{}", path))
        }
        .with_context(context)?;
        let mut connection = CBox::new(ptr::null_mut(), |p| unsafe {
            sqlite3_close(p);
        });
        let rc = unsafe {
            sqlite3_open_v2(
                path.as_ptr(),
                &mut *connection,
                SQLITE_OPEN_URI | SQLITE_OPEN_READWRITE | SQLITE_OPEN_CREATE,
                ptr::null(),
            )
        };
        if rc != SQLITE_OK {
            let message = if connection.is_null() {
                format!("Could not allocate the connection (error code {})", rc)
            } else {
                error_message_from_ptr(unsafe { sqlite3_errmsg(*connection) })
            };
            let error = Error::msg(message).context(format!("Could not open `{}`", url));
            log::error!("{:#}", error);
            return Err(error);
        }
        let rc = unsafe { sqlite3_busy_timeout(*connection, BUSY_TIMEOUT_MS) };
        if rc != SQLITE_OK {
            let error = Error::msg(error_message_from_ptr(unsafe { sqlite3_errmsg(*connection) }))
                .context(format!("Could not set the busy timeout on `{}`", url));
            log::error!("{:#}", error);
            return Err(error);
        }
        log::debug!("Connected to `{}`", url);
        Ok(Self {
            connection: Arc::new(connection),
            schema: "main".into(),
        })
    }

    fn set_schema(&mut self, schema: &str) -> Result<&mut Self> {
        if !self.schemas()?.iter().any(|v| v == schema) {
            let error = Error::msg(format!("Schema `{}` does not exist", schema));
            log::error!("{:#}", error);
            return Err(error);
        }
        self.schema = schema.into();
        Ok(self)
    }

    fn create_statement(&mut self) -> Result<SqliteRawStatement<'_>> {
        Ok(SqliteRawStatement::new(self))
    }

    fn prepare(&mut self, statement: &Statement) -> Result<SqlitePrepared> {
        let statement = prepare(**self.connection, statement.sql())?;
        Ok(SqlitePrepared::new(statement, self.connection.clone()))
    }
}

/// Compile exactly one SQL statement.
pub(crate) fn prepare(connection: *mut sqlite3, sql: &str) -> Result<CBox<*mut sqlite3_stmt>> {
    let context = || format!("While preparing the query:\n{}", truncate_long!(sql));
    let query = match CString::new(sql) {
        Ok(query) => query,
        Err(e) => {
            let error = Error::new(e)
                .context("Could not create a CString from the query String")
                .context(context());
            log::error!("{:#}", error);
            return Err(error);
        }
    };
    let length = text_length(sql.len()).with_context(context)?;
    let mut statement = CBox::new(ptr::null_mut(), |p| unsafe {
        sqlite3_finalize(p);
    });
    let mut tail = ptr::null();
    let rc = unsafe {
        sqlite3_prepare_v2(
            connection,
            query.as_ptr(),
            length,
            &mut *statement,
            &mut tail,
        )
    };
    if rc != SQLITE_OK {
        let error = Error::msg(error_message_from_ptr(unsafe { sqlite3_errmsg(connection) }))
            .context(context());
        log::error!("{:#}", error);
        return Err(error);
    }
    if statement.is_null() {
        let error = Error::msg("The query does not contain any statement").context(context());
        log::error!("{:#}", error);
        return Err(error);
    }
    if !tail.is_null() && !unsafe { CStr::from_ptr(tail) }.to_string_lossy().trim().is_empty() {
        let error =
            Error::msg("Cannot prepare more than one statement at a time").context(context());
        log::error!("{:#}", error);
        return Err(error);
    }
    log::debug!("Prepared:\n{}", truncate_long!(sql));
    Ok(statement)
}
