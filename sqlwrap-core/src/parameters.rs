use crate::{AsValue, Value};
use std::borrow::Cow;

/// One or more values appended, in order, to a parameter list.
///
/// A single scalar appends one value, a tuple appends its elements left to
/// right, a sequence appends its items in iteration order:
/// ```rust
/// use sqlwrap_core::{Parameters, Value};
/// let mut values = Vec::new();
/// ("Someone", 35, 1.80, true).append_to(&mut values);
/// [1i64, 2].append_to(&mut values);
/// assert_eq!(values.len(), 6);
/// assert_eq!(values[4], Value::Int64(1));
/// ```
pub trait Parameters {
    fn append_to(self, values: &mut Vec<Value>);
}

macro_rules! impl_parameters_scalar {
    ($($source:ty),+ $(,)?) => {
        $(
            impl Parameters for $source {
                fn append_to(self, values: &mut Vec<Value>) {
                    values.push(self.as_value());
                }
            }
        )+
    };
}

impl_parameters_scalar!(
    Value, &Value, bool, &bool, i8, &i8, i16, &i16, i32, &i32, i64, &i64, u8, &u8, u16, &u16,
    u32, &u32, f32, &f32, f64, &f64, &str, String, &String, char,
);

impl Parameters for Cow<'_, str> {
    fn append_to(self, values: &mut Vec<Value>) {
        values.push(self.as_value());
    }
}

macro_rules! impl_parameters_tuple {
    ($($name:ident),+) => {
        impl<$($name: AsValue),+> Parameters for ($($name,)+) {
            #[allow(non_snake_case)]
            fn append_to(self, values: &mut Vec<Value>) {
                let ($($name,)+) = self;
                $(values.push($name.as_value());)+
            }
        }
    };
}

impl_parameters_tuple!(A);
impl_parameters_tuple!(A, B);
impl_parameters_tuple!(A, B, C);
impl_parameters_tuple!(A, B, C, D);
impl_parameters_tuple!(A, B, C, D, E);
impl_parameters_tuple!(A, B, C, D, E, F);
impl_parameters_tuple!(A, B, C, D, E, F, G);
impl_parameters_tuple!(A, B, C, D, E, F, G, H);
impl_parameters_tuple!(A, B, C, D, E, F, G, H, I);
impl_parameters_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_parameters_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_parameters_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

impl<T: AsValue> Parameters for Vec<T> {
    fn append_to(self, values: &mut Vec<Value>) {
        values.extend(self.into_iter().map(AsValue::as_value));
    }
}

impl<T: AsValue, const N: usize> Parameters for [T; N] {
    fn append_to(self, values: &mut Vec<Value>) {
        values.extend(self.into_iter().map(AsValue::as_value));
    }
}

impl<T: AsValue + Clone> Parameters for &[T] {
    fn append_to(self, values: &mut Vec<Value>) {
        values.extend(self.iter().cloned().map(AsValue::as_value));
    }
}
