use crate::{Parameters, Prepared, Result, Value, bind_batched};
use std::fmt::{self, Display};

/// A prepared statement together with the values waiting to be bound.
///
/// The session owns the backend handle for its whole lifetime and releases it
/// when dropped, whatever happened in between (a failed `execute` included).
/// Values are accumulated with [`PreparedStatement::set_value`] and only bound
/// when [`PreparedStatement::execute`] is called:
/// ```rust,ignore
/// let mut statement = Statement::new();
/// statement
///     .insert()
///     .into("users (name, age)")
///     .values("?, ?), (?, ?");
/// connection
///     .prepare_statement(&statement)?
///     .set_value(("Someone", 35))
///     .set_value(("Someone else", 53))
///     .execute(4)?;
/// ```
#[derive(Debug)]
pub struct PreparedStatement<P: Prepared> {
    prepared: P,
    values: Vec<Value>,
}

impl<P: Prepared> PreparedStatement<P> {
    pub fn new(prepared: P) -> Self {
        Self {
            prepared,
            values: Vec::new(),
        }
    }

    /// Append one or more values, in order, to the parameters to bind.
    pub fn set_value(&mut self, values: impl Parameters) -> &mut Self {
        values.append_to(&mut self.values);
        self
    }

    /// Bind all the accumulated values with `stride` placeholders per row and
    /// execute the statement once.
    ///
    /// The values are kept: calling it again binds and executes them again.
    pub fn execute(&mut self, stride: usize) -> Result<&mut Self> {
        log::debug!(
            "Executing `{}` with {} values, {} per row",
            self.prepared,
            self.values.len(),
            stride
        );
        bind_batched(&mut self.prepared, &self.values, stride)?;
        Ok(self)
    }

    /// Remove all the accumulated values.
    pub fn clear_values(&mut self) -> &mut Self {
        self.values.clear();
        self
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn handle(&self) -> &P {
        &self.prepared
    }
}

impl<P: Prepared> Display for PreparedStatement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.prepared.fmt(f)
    }
}
