/// A query parameter kept in its original type until it is bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int64(i64),
    Float64(f64),
    Varchar(String),
    Boolean(bool),
}

impl Value {
    /// Name of the kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int64(..) => "integer",
            Value::Float64(..) => "floating point",
            Value::Varchar(..) => "text",
            Value::Boolean(..) => "boolean",
        }
    }
}
