#[cfg(test)]
mod tests {
    use indoc::indoc;
    use sqlwrap::{Parameters, Statement, Value};

    #[test]
    fn clauses_in_call_order() {
        let mut out = Statement::new();
        out.select("name, age")
            .from("users")
            .r#where("age > ?")
            .r#where("name <> ''");
        assert_eq!(
            out.sql(),
            "SELECT name, age FROM users WHERE age > ? WHERE name <> '' "
        );
    }

    #[test]
    fn every_clause() {
        let mut out = Statement::new();
        out.select("a")
            .insert()
            .into("b")
            .values("c")
            .update("d")
            .delete()
            .from("e")
            .create("f")
            .set("g")
            .r#where("h");
        assert_eq!(
            out.sql(),
            "SELECT a INSERT INTO b VALUES (c) UPDATE d DELETE FROM e CREATE f SET g WHERE h "
        );
    }

    #[test]
    fn multiline_fragment() {
        let mut out = Statement::new();
        out.create(
            indoc! {"
                TABLE cart (
                id INTEGER PRIMARY KEY,
                total REAL
                )
            "}
            .trim(),
        );
        assert_eq!(
            out.to_string(),
            indoc! {"
                CREATE TABLE cart (
                id INTEGER PRIMARY KEY,
                total REAL
                ) "}
        );
    }

    #[test]
    fn flat_rows() {
        let mut values = Vec::new();
        for (name, age) in [("Someone", 35), ("Someone else", 53)] {
            (name, age).append_to(&mut values);
        }
        assert_eq!(
            values,
            [
                Value::from("Someone"),
                Value::Int64(35),
                Value::from("Someone else"),
                Value::Int64(53),
            ]
        );
    }
}
