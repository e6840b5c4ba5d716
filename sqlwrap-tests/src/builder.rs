use crate::rows;
use sqlwrap::{Connection, Result, Statement, Value};

pub fn builder<C: Connection>(connection: &mut C) -> Result<()> {
    let mut statement = Statement::new();
    statement.create("TABLE books (title TEXT NOT NULL, year INTEGER, price REAL)");
    connection.execute(&statement)?;

    let mut statement = Statement::new();
    statement.insert().into("books (title, year, price)").values("?, ?, ?");
    for (title, year, price) in [
        ("The Hobbit", 1937, 12.5),
        ("Dune", 1965, 9.99),
        ("Neuromancer", 1984, 7.25),
    ] {
        connection
            .prepare_statement(&statement)?
            .set_value((title, year, price))
            .execute(3)?;
    }

    let mut select = Statement::new();
    select
        .select("title, year")
        .from("books")
        .r#where("year > 1950 ORDER BY year");
    assert_eq!(
        select.sql(),
        "SELECT title, year FROM books WHERE year > 1950 ORDER BY year "
    );
    let books = rows(connection, &select)?;
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].names(), ["title", "year"]);
    assert_eq!(books[0].get_column("title"), Some(Some(&Value::from("Dune"))));
    assert_eq!(books[1].get_column("year"), Some(Some(&Value::Int64(1984))));

    let mut update = Statement::new();
    update.update("books").set("year = NULL").r#where("title = 'Dune'");
    connection.execute(&update)?;
    let mut select = Statement::new();
    select.select("year").from("books").r#where("title = 'Dune'");
    let books = rows(connection, &select)?;
    assert_eq!(books[0].values(), [None::<Value>]);

    let mut delete = Statement::new();
    delete.delete().from("books");
    connection.execute(&delete)?;
    let mut select = Statement::new();
    select.select("COUNT(*)").from("books");
    let count = rows(connection, &select)?;
    assert_eq!(count[0].values(), [Some(Value::Int64(0))]);

    connection.execute(&Statement::with_sql("DROP TABLE books"))?;
    Ok(())
}
