mod batches;
mod builder;
mod failures;
mod users;

use crate::{batches::batches, builder::builder, failures::failures, users::users};
use log::LevelFilter;
use sqlwrap::{Connection, RawStatement, Result, RowLabeled, Statement};
use std::env;

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

/// Run the whole suite on a freshly opened, empty `main` schema.
pub fn execute_tests<C: Connection>(mut connection: C) {
    users(&mut connection).expect("Users test did not succeed");
    batches(&mut connection).expect("Batches test did not succeed");
    builder(&mut connection).expect("Builder test did not succeed");
    failures(&mut connection);
}

/// All the rows returned by `statement`, run without preparing it.
pub fn rows<C: Connection>(connection: &mut C, statement: &Statement) -> Result<Vec<RowLabeled>> {
    let mut result = Vec::new();
    connection
        .create_statement()?
        .fetch(statement.sql(), |row| {
            result.push(row);
            Ok(())
        })?;
    Ok(result)
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
