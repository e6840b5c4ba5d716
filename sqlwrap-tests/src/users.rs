use crate::rows;
use sqlwrap::{Connection, Result, Statement, Value};

pub fn users<C: Connection>(connection: &mut C) -> Result<()> {
    let mut statement = Statement::new();
    statement.create("TABLE users (name TEXT NOT NULL, age INTEGER NOT NULL)");
    connection.execute(&statement)?;

    let mut statement = Statement::new();
    statement.insert().into("users (name, age)").values("?, ?");
    connection
        .prepare_statement(&statement)?
        .set_value(("Someone", 35))
        .execute(2)?;

    let mut statement = Statement::new();
    statement.select("name, age").from("users");
    let users = rows(connection, &statement)?;
    assert_eq!(users.len(), 1);
    assert_eq!(
        users[0].values(),
        [Some(Value::from("Someone")), Some(Value::from(35i64))]
    );

    let mut update = Statement::new();
    update.update("users").set("age = ?").r#where("name = ?");
    connection
        .prepare_statement(&update)?
        .set_value((36, "Someone"))
        .execute(2)?;
    let users = rows(connection, &statement)?;
    assert_eq!(users[0].get_column("age"), Some(Some(&Value::Int64(36))));

    let mut delete = Statement::new();
    delete.delete().from("users").r#where("name = ?");
    connection
        .prepare_statement(&delete)?
        .set_value("Someone")
        .execute(1)?;
    assert!(rows(connection, &statement)?.is_empty());

    connection.execute(&Statement::with_sql("DROP TABLE users"))?;
    Ok(())
}
