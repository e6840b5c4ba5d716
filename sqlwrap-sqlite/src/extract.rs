use libsqlite3_sys::*;
use sqlwrap_core::{Error, Result, Value};
use std::ffi::{CStr, c_int};

pub(crate) fn extract_value(statement: *mut sqlite3_stmt, index: c_int) -> Result<Option<Value>> {
    unsafe {
        let column_type = sqlite3_column_type(statement, index);
        Ok(match column_type {
            SQLITE_NULL => None,
            SQLITE_INTEGER => Some(Value::Int64(sqlite3_column_int64(statement, index))),
            SQLITE_FLOAT => Some(Value::Float64(sqlite3_column_double(statement, index))),
            SQLITE_TEXT => {
                let ptr = sqlite3_column_text(statement, index);
                let len = sqlite3_column_bytes(statement, index) as usize;
                let bytes = if ptr.is_null() {
                    &[][..]
                } else {
                    std::slice::from_raw_parts(ptr, len)
                };
                Some(Value::Varchar(String::from_utf8(bytes.to_vec())?))
            }
            _ => {
                let error = Error::msg(format!(
                    "Unexpected column type {} for column `{}`",
                    column_type,
                    extract_name(statement, index)?
                ));
                log::error!("{:#}", error);
                return Err(error);
            }
        })
    }
}

pub(crate) fn extract_name(statement: *mut sqlite3_stmt, index: c_int) -> Result<String> {
    unsafe {
        let name = sqlite3_column_name(statement, index);
        if name.is_null() {
            return Err(Error::msg(format!("Missing name of column {}", index)));
        }
        Ok(CStr::from_ptr(name).to_str()?.into())
    }
}
