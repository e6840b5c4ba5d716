mod as_value;
mod binder;
mod connection;
mod driver;
mod parameters;
mod prepared;
mod prepared_statement;
mod query;
mod statement;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use binder::*;
pub use connection::*;
pub use driver::*;
pub use parameters::*;
pub use prepared::*;
pub use prepared_statement::*;
pub use query::*;
pub use statement::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
