use crate::silent_logs;
use sqlwrap::{Connection, Statement};

pub fn failures<C: Connection>(connection: &mut C) {
    connection
        .execute(&Statement::with_sql(
            "CREATE TABLE people (name TEXT NOT NULL, age INTEGER)",
        ))
        .expect("Could not create the table");

    silent_logs! {
        let result = connection.set_schema("nonexistent");
        assert!(result.is_err(), "The schema does not exist");
    }
    connection
        .set_schema("main")
        .expect("The main schema always exists");

    // The builder accepts anything, the database does not
    let mut statement = Statement::new();
    statement.insert().r#where("name = ?");
    silent_logs! {
        assert!(connection.prepare_statement(&statement).is_err());
    }

    let mut statement = Statement::new();
    statement.select("*").from("missing_table");
    silent_logs! {
        assert!(connection.prepare_statement(&statement).is_err());
        assert!(connection.execute(&statement).is_err());
    }

    let mut statement = Statement::new();
    statement.insert().into("people (name, age)").values("?, ?");
    silent_logs! {
        // Nothing bound, the NULL name is rejected when executing
        let mut empty = connection
            .prepare_statement(&statement)
            .expect("Could not prepare the insert");
        assert!(empty.execute(2).is_err());
    }
    let mut prepared = connection
        .prepare_statement(&statement)
        .expect("Could not prepare the insert");
    silent_logs! {
        // The statement has no third placeholder
        prepared.set_value(("Someone", 35, "extra"));
        assert!(prepared.execute(3).is_err());
        assert!(prepared.execute(0).is_err());
    }
    prepared.clear_values().set_value(("Someone", 35));
    prepared
        .execute(2)
        .expect("The session is still usable after a failure");
    drop(prepared);

    connection
        .execute(&Statement::with_sql("DROP TABLE people"))
        .expect("Could not drop the table");
}
