use std::fmt::{self, Display};

/// Accumulating SQL text built clause by clause.
///
/// Every clause method appends its keyword, the caller supplied fragment and a
/// trailing space, then returns the same builder so calls can be chained:
/// ```rust
/// use sqlwrap_core::Statement;
/// let mut statement = Statement::new();
/// statement.insert().into("users (name, age)").values("?, ?");
/// assert_eq!(statement.sql(), "INSERT INTO users (name, age) VALUES (?, ?) ");
/// ```
///
/// Fragments are copied verbatim: nothing is validated, escaped or reordered.
/// Producing valid SQL is up to the caller, a wrong combination of clauses is
/// only reported by the database when the text is prepared.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    sql: String,
}

impl Statement {
    pub const fn new() -> Self {
        Self { sql: String::new() }
    }

    /// Start from a caller supplied text, later clauses are appended to it.
    ///
    /// `Statement::from` names the `FROM` clause, use this or `.into()` to
    /// convert a literal.
    pub fn with_sql(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    /// The accumulated text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn into_sql(self) -> String {
        self.sql
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    fn clause(&mut self, keyword: &str, fragment: &str) -> &mut Self {
        self.sql.reserve(keyword.len() + fragment.len() + 2);
        self.sql.push_str(keyword);
        self.sql.push(' ');
        self.sql.push_str(fragment);
        self.sql.push(' ');
        self
    }

    /// `SELECT <columns> `
    pub fn select(&mut self, columns: &str) -> &mut Self {
        self.clause("SELECT", columns)
    }

    /// `INSERT `, the target follows with [`Statement::into`].
    pub fn insert(&mut self) -> &mut Self {
        self.sql.push_str("INSERT ");
        self
    }

    /// `INTO <table> `
    pub fn into(&mut self, table: &str) -> &mut Self {
        self.clause("INTO", table)
    }

    /// `VALUES (<values>) `, the fragment is wrapped in parentheses.
    pub fn values(&mut self, values: &str) -> &mut Self {
        self.sql.reserve(values.len() + 10);
        self.sql.push_str("VALUES (");
        self.sql.push_str(values);
        self.sql.push_str(") ");
        self
    }

    /// `UPDATE <table> `
    pub fn update(&mut self, table: &str) -> &mut Self {
        self.clause("UPDATE", table)
    }

    /// `DELETE `, the table follows with [`Statement::from`].
    pub fn delete(&mut self) -> &mut Self {
        self.sql.push_str("DELETE ");
        self
    }

    /// `FROM <table> `
    pub fn from(&mut self, table: &str) -> &mut Self {
        self.clause("FROM", table)
    }

    /// `CREATE <definition> `
    pub fn create(&mut self, definition: &str) -> &mut Self {
        self.clause("CREATE", definition)
    }

    /// `SET <assignments> `
    pub fn set(&mut self, assignments: &str) -> &mut Self {
        self.clause("SET", assignments)
    }

    /// `WHERE <condition> `
    pub fn r#where(&mut self, condition: &str) -> &mut Self {
        self.clause("WHERE", condition)
    }
}

impl From<&str> for Statement {
    fn from(value: &str) -> Self {
        Self { sql: value.into() }
    }
}

impl From<String> for Statement {
    fn from(value: String) -> Self {
        Self { sql: value }
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

#[cfg(test)]
mod tests {
    use super::Statement;

    #[test]
    fn empty() {
        let statement = Statement::new();
        assert!(statement.is_empty());
        assert_eq!(statement.sql(), "");
        assert_eq!(Statement::default(), statement);
    }

    #[test]
    fn insert_into_values() {
        let mut statement = Statement::new();
        statement.insert().into("users (name, age)").values("?, ?");
        assert_eq!(
            statement.sql(),
            "INSERT INTO users (name, age) VALUES (?, ?) "
        );
    }

    #[test]
    fn select_from_where() {
        let mut statement = Statement::new();
        statement
            .select("name, age")
            .from("users")
            .r#where("age > ?");
        assert_eq!(statement.sql(), "SELECT name, age FROM users WHERE age > ? ");
    }

    #[test]
    fn update_set_where() {
        let mut statement = Statement::new();
        statement.update("users").set("age = ?").r#where("name = ?");
        assert_eq!(statement.sql(), "UPDATE users SET age = ? WHERE name = ? ");
    }

    #[test]
    fn delete_from() {
        let mut statement = Statement::new();
        statement.delete().from("users").r#where("age < 18");
        assert_eq!(statement.sql(), "DELETE FROM users WHERE age < 18 ");
    }

    #[test]
    fn create() {
        let mut statement = Statement::new();
        statement.create("TABLE users (name TEXT, age INTEGER)");
        assert_eq!(
            statement.sql(),
            "CREATE TABLE users (name TEXT, age INTEGER) "
        );
    }

    #[test]
    fn nonsense_is_accepted() {
        let mut statement = Statement::new();
        statement.insert().r#where("1 = 1").select("").values("");
        assert_eq!(statement.sql(), "INSERT WHERE 1 = 1 SELECT  VALUES () ");
    }

    #[test]
    fn appends_to_literal() {
        let mut statement = Statement::with_sql("EXPLAIN");
        statement.select("*").from("users");
        assert_eq!(statement.sql(), "EXPLAINSELECT * FROM users ");
        let mut statement = Statement::with_sql(String::from("EXPLAIN "));
        statement.select("*").from("users");
        assert_eq!(statement.to_string(), "EXPLAIN SELECT * FROM users ");
    }

    #[test]
    fn converts_from_literal() {
        let mut statement: Statement = "DELETE ".into();
        statement.from("users");
        assert_eq!(statement.sql(), "DELETE FROM users ");
        let statement: Statement = String::from("VACUUM").into();
        assert_eq!(statement, Statement::with_sql("VACUUM"));
    }

    #[test]
    fn reading_is_idempotent() {
        let mut statement = Statement::new();
        statement.select("1");
        assert_eq!(statement.sql(), statement.sql());
        assert_eq!(statement.to_string(), statement.sql());
        assert_eq!(statement.clone().into_sql(), "SELECT 1 ");
    }
}
