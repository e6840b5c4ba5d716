use crate::SqliteConnection;
use sqlwrap_core::Driver;

#[derive(Default, Debug, Clone, Copy)]
pub struct SqliteDriver {}

impl SqliteDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for SqliteDriver {
    type Connection = SqliteConnection;

    const NAME: &'static str = "sqlite";
}
