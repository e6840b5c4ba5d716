use crate::rows;
use indoc::indoc;
use sqlwrap::{Connection, Result, Statement, Value};

pub fn batches<C: Connection>(connection: &mut C) -> Result<()> {
    connection.execute(&Statement::with_sql(indoc! {"
        CREATE TABLE measurements (
            label TEXT NOT NULL,
            value REAL NOT NULL,
            valid BOOLEAN NOT NULL
        )
    "}))?;
    let mut select = Statement::new();
    select
        .select("label, value, valid")
        .from("measurements")
        .r#where("1 = 1 ORDER BY label");

    // Two rows in one placeholder list: a single execution inserts both.
    let mut statement = Statement::new();
    statement
        .insert()
        .into("measurements (label, value, valid)")
        .values("?, ?, ?), (?, ?, ?");
    assert_eq!(
        statement.sql(),
        "INSERT INTO measurements (label, value, valid) VALUES (?, ?, ?), (?, ?, ?) "
    );
    connection
        .prepare_statement(&statement)?
        .set_value(("a", 1.5, true))
        .set_value(("b", -0.25, false))
        .execute(6)?;
    let measurements = rows(connection, &select)?;
    assert_eq!(measurements.len(), 2);
    assert_eq!(
        measurements[0].values(),
        [
            Some(Value::from("a")),
            Some(Value::Float64(1.5)),
            Some(Value::Int64(1)),
        ]
    );
    assert_eq!(
        measurements[1].values(),
        [
            Some(Value::from("b")),
            Some(Value::Float64(-0.25)),
            Some(Value::Int64(0)),
        ]
    );
    connection.execute(&Statement::with_sql("DELETE FROM measurements"))?;

    // Rows sharing the same placeholders are rebound before the only
    // execution, so only the last one reaches the database.
    let mut statement = Statement::new();
    statement
        .insert()
        .into("measurements (label, value, valid)")
        .values("?, ?, ?");
    {
        let mut prepared = connection.prepare_statement(&statement)?;
        prepared
            .set_value(("c", 3.0, true))
            .set_value(("d", 4.0, false))
            .execute(3)?;
        let measurements = rows(connection, &select)?;
        assert_eq!(measurements.len(), 1);
        assert_eq!(measurements[0].get_column("label"), Some(Some(&Value::from("d"))));

        // Reused with a fresh set of values
        prepared.clear_values().set_value(("e", 5.0, true)).execute(3)?;
    }
    let measurements = rows(connection, &select)?;
    assert_eq!(measurements.len(), 2);
    assert_eq!(measurements[1].get_column("label"), Some(Some(&Value::from("e"))));

    connection.execute(&Statement::with_sql("DROP TABLE measurements"))?;
    Ok(())
}
