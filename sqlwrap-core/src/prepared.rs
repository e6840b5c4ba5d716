use crate::{Error, Result};
use std::fmt::Display;

/// A backend prepared statement handle.
///
/// Positions are 1-based, like the `?` placeholders they refer to. Releasing
/// the backend resources is the job of `Drop`: a handle is dropped exactly
/// once by whoever owns it, usually a [`crate::PreparedStatement`].
///
/// The typed setters have a default implementation that fails, so a backend
/// only implements the kinds it can represent and the rest surface as an
/// error at bind time:
/// ```rust,ignore
/// prepared.set_string(1, "Someone")?;
/// prepared.set_int(2, 35)?;
/// prepared.execute()?;
/// ```
pub trait Prepared: Display {
    fn set_int(&mut self, index: u64, value: i64) -> Result<()> {
        let _ = value;
        Err(unsupported(&*self, "integer", index))
    }
    fn set_double(&mut self, index: u64, value: f64) -> Result<()> {
        let _ = value;
        Err(unsupported(&*self, "floating point", index))
    }
    fn set_string(&mut self, index: u64, value: &str) -> Result<()> {
        let _ = value;
        Err(unsupported(&*self, "text", index))
    }
    fn set_boolean(&mut self, index: u64, value: bool) -> Result<()> {
        let _ = value;
        Err(unsupported(&*self, "boolean", index))
    }
    /// Run the statement once with the parameters currently bound.
    fn execute(&mut self) -> Result<()>;
}

fn unsupported<P: Prepared + ?Sized>(prepared: &P, kind: &str, index: u64) -> Error {
    let error = Error::msg(format!(
        "Cannot bind a {} value at parameter {}: `{}` has no setter for it",
        kind, index, prepared
    ));
    log::error!("{:#}", error);
    error
}
