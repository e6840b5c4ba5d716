#![allow(dead_code)]

use log::LevelFilter;
use sqlwrap_core::{
    Connection, Error, Prepared, RawStatement, Result, RowLabeled, Statement, Value,
};
use std::{
    cell::RefCell,
    env,
    fmt::{self, Display},
    rc::Rc,
};

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Everything the recording backend was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetSchema(String),
    Prepare(String),
    RawExecute(String),
    SetInt(u64, i64),
    SetDouble(u64, f64),
    SetString(u64, String),
    SetBoolean(u64, bool),
    Execute,
    Release,
}

pub type Calls = Rc<RefCell<Vec<Call>>>;

pub struct RecordingPrepared {
    pub calls: Calls,
    /// Number of the bind call (from 0) within each execution that fails, if any.
    pub fail_bind: Option<usize>,
    pub fail_execute: bool,
    binds: usize,
}

impl RecordingPrepared {
    pub fn new(calls: Calls) -> Self {
        Self {
            calls,
            fail_bind: None,
            fail_execute: false,
            binds: 0,
        }
    }

    fn record_bind(&mut self, call: Call) -> Result<()> {
        let current = self.binds;
        self.binds += 1;
        if self.fail_bind == Some(current) {
            self.binds = 0;
            return Err(Error::msg(format!("Bind {} failed", current)));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Prepared for RecordingPrepared {
    fn set_int(&mut self, index: u64, value: i64) -> Result<()> {
        self.record_bind(Call::SetInt(index, value))
    }
    fn set_double(&mut self, index: u64, value: f64) -> Result<()> {
        self.record_bind(Call::SetDouble(index, value))
    }
    fn set_string(&mut self, index: u64, value: &str) -> Result<()> {
        self.record_bind(Call::SetString(index, value.into()))
    }
    fn set_boolean(&mut self, index: u64, value: bool) -> Result<()> {
        self.record_bind(Call::SetBoolean(index, value))
    }
    fn execute(&mut self) -> Result<()> {
        self.binds = 0;
        if self.fail_execute {
            return Err(Error::msg("Execution failed"));
        }
        self.calls.borrow_mut().push(Call::Execute);
        Ok(())
    }
}

impl Drop for RecordingPrepared {
    fn drop(&mut self) {
        self.calls.borrow_mut().push(Call::Release);
    }
}

impl Display for RecordingPrepared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordingPrepared")
    }
}

/// Backend that only knows how to bind integers and text.
pub struct TextAndIntPrepared {
    pub calls: Calls,
}

impl Prepared for TextAndIntPrepared {
    fn set_int(&mut self, index: u64, value: i64) -> Result<()> {
        self.calls.borrow_mut().push(Call::SetInt(index, value));
        Ok(())
    }
    fn set_string(&mut self, index: u64, value: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::SetString(index, value.into()));
        Ok(())
    }
    fn execute(&mut self) -> Result<()> {
        self.calls.borrow_mut().push(Call::Execute);
        Ok(())
    }
}

impl Drop for TextAndIntPrepared {
    fn drop(&mut self) {
        self.calls.borrow_mut().push(Call::Release);
    }
}

impl Display for TextAndIntPrepared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextAndIntPrepared")
    }
}

pub struct RecordingConnection {
    pub calls: Calls,
    pub schemas: Vec<String>,
    pub schema: Option<String>,
    /// Rows returned by every `fetch`.
    pub rows: Vec<RowLabeled>,
}

impl RecordingConnection {
    pub fn new() -> Self {
        Self {
            calls: Default::default(),
            schemas: vec!["sql_wrapper_test".into()],
            schema: None,
            rows: Vec::new(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Connection for RecordingConnection {
    type Prepared = RecordingPrepared;
    type RawStatement<'c> = RecordingRawStatement<'c>;

    fn connect(url: &str) -> Result<Self> {
        if !url.starts_with("recording://") {
            return Err(Error::msg(format!("Unexpected url `{}`", url)));
        }
        Ok(Self::new())
    }

    fn set_schema(&mut self, schema: &str) -> Result<&mut Self> {
        self.calls
            .borrow_mut()
            .push(Call::SetSchema(schema.into()));
        if !self.schemas.iter().any(|v| v == schema) {
            return Err(Error::msg(format!("Schema `{}` does not exist", schema)));
        }
        self.schema = Some(schema.into());
        Ok(self)
    }

    fn create_statement(&mut self) -> Result<RecordingRawStatement<'_>> {
        Ok(RecordingRawStatement { connection: self })
    }

    fn prepare(&mut self, statement: &Statement) -> Result<RecordingPrepared> {
        self.calls
            .borrow_mut()
            .push(Call::Prepare(statement.sql().into()));
        if statement.is_empty() {
            return Err(Error::msg("Cannot prepare an empty statement"));
        }
        Ok(RecordingPrepared::new(self.calls.clone()))
    }
}

pub struct RecordingRawStatement<'c> {
    connection: &'c mut RecordingConnection,
}

impl RawStatement for RecordingRawStatement<'_> {
    fn execute(&mut self, sql: &str) -> Result<()> {
        self.connection
            .calls
            .borrow_mut()
            .push(Call::RawExecute(sql.into()));
        Ok(())
    }

    fn fetch<F>(&mut self, sql: &str, mut f: F) -> Result<()>
    where
        F: FnMut(RowLabeled) -> Result<()>,
    {
        self.execute(sql)?;
        for row in self.connection.rows.iter().cloned() {
            f(row)?;
        }
        Ok(())
    }
}

pub fn row(name: &str, age: i64) -> RowLabeled {
    RowLabeled::new(
        ["name".to_string(), "age".to_string()].into(),
        [Some(Value::from(name)), Some(Value::from(age))].into(),
    )
}
