use crate::Value;
use std::borrow::Cow;

/// Conversion from native Rust types into a [`Value`] parameter.
///
/// Only lossless conversions are provided: integers that fit in `i64`, both
/// float widths, booleans and anything string like. Wider integers (`u64`,
/// `i128`, ...) are left out on purpose, convert them explicitly.
///
/// ```rust
/// use sqlwrap_core::{AsValue, Value};
/// assert_eq!(35u8.as_value(), Value::Int64(35));
/// assert_eq!("Someone".as_value(), Value::Varchar("Someone".into()));
/// ```
pub trait AsValue {
    fn as_value(self) -> Value;
}

impl AsValue for Value {
    fn as_value(self) -> Value {
        self
    }
}

impl AsValue for &Value {
    fn as_value(self) -> Value {
        self.clone()
    }
}

macro_rules! impl_as_value {
    ($variant:path, $target:ty => $($source:ty),+ $(,)?) => {
        $(
            impl AsValue for $source {
                fn as_value(self) -> Value {
                    $variant(<$target>::from(self))
                }
            }

            impl AsValue for &$source {
                fn as_value(self) -> Value {
                    $variant(<$target>::from(*self))
                }
            }

            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    value.as_value()
                }
            }
        )+
    };
}

impl_as_value!(Value::Int64, i64 => i8, i16, i32, i64, u8, u16, u32);
impl_as_value!(Value::Float64, f64 => f32, f64);
impl_as_value!(Value::Boolean, bool => bool);

impl AsValue for &str {
    fn as_value(self) -> Value {
        Value::Varchar(self.into())
    }
}

impl AsValue for String {
    fn as_value(self) -> Value {
        Value::Varchar(self)
    }
}

impl AsValue for &String {
    fn as_value(self) -> Value {
        Value::Varchar(self.clone())
    }
}

impl AsValue for Cow<'_, str> {
    fn as_value(self) -> Value {
        Value::Varchar(self.into_owned())
    }
}

impl AsValue for char {
    fn as_value(self) -> Value {
        Value::Varchar(self.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        value.as_value()
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        value.as_value()
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        value.as_value()
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        value.as_value()
    }
}
