mod cbox;
mod connection;
mod driver;
mod extract;
mod prepared;
mod raw_statement;

use sqlwrap_core::{Error, Result};
use std::ffi::{CStr, c_char, c_int};

pub(crate) use cbox::*;
pub use connection::*;
pub use driver::*;
pub use prepared::*;
pub use raw_statement::*;

pub(crate) fn error_message_from_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return "Unknown error (could not extract the error message)".into();
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .unwrap_or("Unknown error (the error message was not a valid C string)")
        .to_string()
}

/// Byte length of a text handed to SQLite, which takes it as a `c_int`.
pub(crate) fn text_length(len: usize) -> Result<c_int> {
    c_int::try_from(len).map_err(|_| {
        let error = Error::msg(format!("Text of {} bytes is too long for SQLite", len));
        log::error!("{:#}", error);
        error
    })
}

#[cfg(test)]
mod tests {
    use super::text_length;
    use std::ffi::c_int;

    #[test]
    fn text_length_fits_c_int() {
        assert_eq!(text_length(0).unwrap(), 0);
        assert_eq!(text_length(c_int::MAX as usize).unwrap(), c_int::MAX);
        assert!(text_length(c_int::MAX as usize + 1).is_err());
        assert!(text_length(1 << 31).is_err());
    }
}
