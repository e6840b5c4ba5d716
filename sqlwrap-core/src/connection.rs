use crate::{Prepared, PreparedStatement, Result, RowLabeled, Statement};

/// A live connection to a database.
///
/// Everything here is blocking and takes `&mut self`: a connection (and any
/// statement created from it) is meant to be driven by one thread at a time.
pub trait Connection: Sized {
    type Prepared: Prepared;
    type RawStatement<'c>: RawStatement
    where
        Self: 'c;

    /// Open a connection. The url carries everything the backend needs,
    /// credentials included (e.g. `sqlite://data.sqlite?mode=rwc`).
    fn connect(url: &str) -> Result<Self>;

    /// Select `schema` for this connection, fails if it does not exist.
    ///
    /// What selecting means is up to the backend: some resolve unqualified
    /// names in it, others only check and record the name.
    fn set_schema(&mut self, schema: &str) -> Result<&mut Self>;

    /// A handle to run non prepared SQL text.
    fn create_statement(&mut self) -> Result<Self::RawStatement<'_>>;

    /// Prepare the statement text, producing the backend handle.
    fn prepare(&mut self, statement: &Statement) -> Result<Self::Prepared>;

    /// Run the statement text directly, without preparing it.
    fn execute(&mut self, statement: &Statement) -> Result<&mut Self> {
        self.create_statement()?.execute(statement.sql())?;
        Ok(self)
    }

    /// Prepare the statement text and wrap the handle in a session ready to
    /// receive values.
    fn prepare_statement(
        &mut self,
        statement: &Statement,
    ) -> Result<PreparedStatement<Self::Prepared>> {
        Ok(PreparedStatement::new(self.prepare(statement)?))
    }
}

/// Ad-hoc handle running non prepared SQL on a connection.
pub trait RawStatement {
    /// Run the SQL text, discarding any row it produces.
    fn execute(&mut self, sql: &str) -> Result<()>;

    /// Run the SQL text and call `f` once per result row, in order. Stops at
    /// the first error, either from the database or from `f`.
    fn fetch<F>(&mut self, sql: &str, f: F) -> Result<()>
    where
        F: FnMut(RowLabeled) -> Result<()>;
}
