use crate::{Connection, Result};

/// Entry point of a backend.
pub trait Driver {
    type Connection: Connection;

    /// Scheme of the connection urls accepted by this driver (`<NAME>://...`).
    const NAME: &'static str;

    fn connect(&self, url: &str) -> Result<Self::Connection> {
        <Self::Connection as Connection>::connect(url)
    }
}
