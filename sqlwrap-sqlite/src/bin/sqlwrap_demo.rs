use log::LevelFilter;
use sqlwrap_core::{Connection, Result, Statement};
use sqlwrap_sqlite::SqliteConnection;
use std::env;

const DEFAULT_URL: &str = "sqlite://sql_wrapper_test.sqlite?mode=rwc";
const DEFAULT_SCHEMA: &str = "main";

fn run(url: &str, schema: &str) -> Result<()> {
    let mut connection = SqliteConnection::connect(url)?;
    connection.set_schema(schema)?;
    println!("Schema has been set");

    let mut statement = Statement::new();
    statement.create(&format!(
        "TABLE IF NOT EXISTS {}.users (name TEXT NOT NULL, age INTEGER NOT NULL)",
        schema
    ));
    connection.execute(&statement)?;

    let mut statement = Statement::new();
    statement
        .insert()
        .into(&format!("{}.users (name, age)", schema))
        .values("?, ?");
    connection
        .prepare_statement(&statement)?
        .set_value(("Someone", 35))
        .execute(2)?;
    println!("User has been inserted.");
    Ok(())
}

fn main() {
    let mut logger = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Off);
    }
    logger.init();
    let mut args = env::args().skip(1);
    let url = args.next().unwrap_or_else(|| DEFAULT_URL.into());
    let schema = args.next().unwrap_or_else(|| DEFAULT_SCHEMA.into());
    if let Err(error) = run(&url, &schema) {
        println!("Error: {:#}", error);
    }
}
