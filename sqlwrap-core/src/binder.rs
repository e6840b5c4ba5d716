use crate::{Context, Error, Prepared, Result, Value};

/// Placeholder slot (1-based) the value at `index` is bound to.
///
/// Slots cycle through `1..=stride`, starting over every `stride` values.
pub const fn slot(index: usize, stride: usize) -> u64 {
    (index % stride) as u64 + 1
}

/// Bind every value to its slot, then execute the statement once.
///
/// The values describe `N / stride` logical rows of `stride` columns laid out
/// flat. The length is not required to be a multiple of `stride`, the
/// trailing values simply wrap onto the first slots again. Binding stops at
/// the first failure and in that case the statement is not executed.
pub fn bind_batched<P: Prepared + ?Sized>(
    prepared: &mut P,
    values: &[Value],
    stride: usize,
) -> Result<()> {
    if stride == 0 {
        let error = Error::msg("The batch stride must be at least 1");
        log::error!("{:#}", error);
        return Err(error);
    }
    for (i, value) in values.iter().enumerate() {
        let index = slot(i, stride);
        let result = match value {
            Value::Int64(v) => prepared.set_int(index, *v),
            Value::Float64(v) => prepared.set_double(index, *v),
            Value::Varchar(v) => prepared.set_string(index, v),
            Value::Boolean(v) => prepared.set_boolean(index, *v),
        };
        result.with_context(|| {
            format!(
                "While binding value {} ({}) at parameter {} of `{}`",
                i,
                value.kind(),
                index,
                prepared
            )
        })?;
    }
    prepared.execute()
}
