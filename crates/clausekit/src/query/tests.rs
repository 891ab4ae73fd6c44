use super::format::{MAX_LOGGED_SQL, format_statement, truncate_sql_bytes};
use super::*;
use crate::error::ClauseError;
use crate::value::{Map, Value};

fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Map(entries.into_iter().collect())
}

// ==================== Formatting ====================

#[test]
fn format_collapses_whitespace_runs() {
    assert_eq!(
        format_statement(StatementKind::Select, "  SELECT *\n\tFROM  member  "),
        "SELECT * FROM member"
    );
}

#[test]
fn truncate_backs_off_to_char_boundary() {
    assert_eq!(truncate_sql_bytes("SELECT 1", MAX_LOGGED_SQL), "SELECT 1");
    // 'é' is two bytes; cutting at 2 would split it.
    assert_eq!(truncate_sql_bytes("aéb", 2), "a");
    assert_eq!(truncate_sql_bytes("abc", 0), "");
}

#[test]
fn statement_kind_keyword() {
    assert_eq!(StatementKind::Call.to_string(), "CALL");
    assert_eq!(StatementKind::Update.keyword(), "UPDATE");
}

// ==================== SELECT ====================

#[test]
fn select_defaults_to_star() {
    assert_eq!(
        query_select("member", (), (), (), ()).unwrap(),
        "SELECT * FROM member"
    );
}

#[test]
fn select_all_clauses() {
    assert_eq!(
        query_select(
            "member",
            ["name", "age"],
            map([("age", ">= 20".into())]),
            "age DESC",
            5
        )
        .unwrap(),
        "SELECT name, age FROM member WHERE (age >= 20) ORDER BY age DESC LIMIT 5"
    );
}

#[test]
fn select_without_table_fails() {
    assert_eq!(
        query_select((), "name", (), (), ()),
        Err(ClauseError::MissingTableTarget)
    );
    assert_eq!(
        query_select(Value::List(vec![]), "name", (), (), ()),
        Err(ClauseError::TableNotSpecified)
    );
}

#[test]
fn select_group() {
    assert_eq!(
        query_select_group(
            "trade",
            "date, SUM(amount)",
            (),
            "date",
            "SUM(amount) > 10000",
            (),
            ()
        )
        .unwrap(),
        "SELECT date, SUM(amount) FROM trade GROUP BY date HAVING SUM(amount) > 10000"
    );
}

#[test]
fn select_join() {
    assert_eq!(
        query_select_join(
            "member",
            "INNER",
            "country",
            "member.countryIdx = country.idx",
            ["name"],
            map([("age", Value::Int(24))]),
            (),
            ()
        )
        .unwrap(),
        "SELECT name FROM member INNER JOIN country ON member.countryIdx = country.idx WHERE (age = 24)"
    );
}

#[test]
fn select_join_group() {
    assert_eq!(
        query_select_join_group(
            "member",
            "LEFT",
            "country",
            "member.countryIdx = country.idx",
            "country.name, COUNT(*)",
            (),
            "country.name",
            (),
            "country.name",
            3
        )
        .unwrap(),
        "SELECT country.name, COUNT(*) FROM member LEFT JOIN country ON member.countryIdx = country.idx GROUP BY country.name ORDER BY country.name LIMIT 3"
    );
}

#[test]
fn select_builder_omits_unset_clauses() {
    let mut query = SelectQuery::new(["member", "country"]);
    assert_eq!(query.to_sql().unwrap(), "SELECT * FROM member, country");

    query.join("CROSS", "market", "member.idx = market.memberIdx");
    assert_eq!(
        query.build_sql().unwrap(),
        "SELECT * FROM member, country CROSS JOIN market"
    );
}

#[test]
fn select_collapses_whitespace_inside_fragments() {
    assert_eq!(
        query_select("member", "name,   age", "age  =  24", (), ()).unwrap(),
        "SELECT name, age FROM member WHERE age = 24"
    );
}

// ==================== INSERT ====================

#[test]
fn insert_from_map() {
    assert_eq!(
        query_insert("member", map([("age", Value::Int(24)), ("name", "Aiden".into())])).unwrap(),
        r#"INSERT INTO member (age, name) VALUES (24, "Aiden")"#
    );
}

#[test]
fn insert_multiple_rows() {
    let rows = Value::from(vec![
        Value::from(vec![Value::Int(24), "Aiden".into()]),
        Value::from(vec![Value::Int(22), "Ailee".into()]),
    ]);
    assert_eq!(
        query_insert("member", rows).unwrap(),
        r#"INSERT INTO member VALUES (24, "Aiden"), (22, "Ailee")"#
    );
}

#[test]
fn insert_requires_table_name() {
    for table in [Value::Null, "".into(), Value::from(["member"])] {
        assert_eq!(
            query_insert(table, "age = 24"),
            Err(ClauseError::StatementTableMissing("query_insert"))
        );
    }
}

#[test]
fn insert_propagates_value_errors() {
    assert_eq!(
        query_insert("member", ()),
        Err(ClauseError::InsertValuesMissing)
    );
    assert_eq!(
        query_insert("member", Map::new()),
        Err(ClauseError::InsertValuesMalformed)
    );
}

// ==================== UPDATE ====================

#[test]
fn update_with_condition() {
    assert_eq!(
        query_update("member", r"name = Aiden, dateMod = \NOW()", map([("idx", Value::Int(1))]))
            .unwrap(),
        r#"UPDATE member SET name = "Aiden", dateMod = NOW() WHERE (idx = 1)"#
    );
    assert_eq!(
        query_update("member", map([("age", Value::Int(25))]), "idx = 1").unwrap(),
        "UPDATE member SET age = 25 WHERE idx = 1"
    );
}

#[test]
fn update_requires_condition_before_values() {
    assert_eq!(
        query_update("member", map([("age", Value::Int(24))]), ""),
        Err(ClauseError::UpdateConditionMissing)
    );
    // Values are broken too, but the condition is checked first.
    assert_eq!(
        query_update("member", (), ()),
        Err(ClauseError::UpdateConditionMissing)
    );
    assert_eq!(
        query_update("member", "age = 24", Value::List(vec![])),
        Err(ClauseError::UpdateConditionMissing)
    );
}

#[test]
fn update_rejects_blank_conditions() {
    let blank = [
        Value::from("   "),
        Value::from([""]),
        Value::from(["OR", " "]),
        map([("OR", Value::Bool(true)), ("_", "  ".into())]),
    ];
    for condition in blank {
        assert_eq!(
            query_update("member", "age = 24", condition.clone()),
            Err(ClauseError::UpdateConditionMissing),
            "condition {condition:?}"
        );
    }
    assert_eq!(
        query_update("member", "age = 24", ["", "idx = 1"]).unwrap(),
        "UPDATE member SET age = 24 WHERE () AND (idx = 1)"
    );
}

#[test]
fn update_requires_table_name() {
    assert_eq!(
        query_update("", "age = 24", "idx = 1"),
        Err(ClauseError::StatementTableMissing("query_update"))
    );
}

#[test]
fn update_builder() {
    let sql = UpdateQuery::new("member")
        .set(vec!["age = 24", "nickname"])
        .filter(vec!["idx = 1", "OR", "idx = 2"])
        .build_sql()
        .unwrap();
    assert_eq!(sql, "UPDATE member SET age = 24 WHERE (idx = 1) OR (idx = 2)");
}

// ==================== CALL ====================

#[test]
fn call_with_list() {
    let call = query_call("p", ["a", "b"]).unwrap();
    assert_eq!(call.query, "CALL p(?, ?)");
    assert_eq!(call.param, vec![Value::from("a"), Value::from("b")]);
}

#[test]
fn call_with_map_carries_values() {
    let call = query_call("p", map([("a", Value::Int(1)), ("b", Value::Int(2))])).unwrap();
    assert_eq!(call.query, "CALL p(?, ?)");
    assert_eq!(call.param, vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn call_without_parameters() {
    let call = CallQuery::new("refresh_stats").build().unwrap();
    assert_eq!(call.query, "CALL refresh_stats()");
    assert!(call.param.is_empty());
}

#[test]
fn call_errors() {
    assert_eq!(query_call("", ()), Err(ClauseError::CallTargetMissing));
    assert_eq!(query_call(["p"], ()), Err(ClauseError::CallTargetInvalid));
    assert_eq!(query_call("p", 35), Err(ClauseError::CallParametersInvalid));
}
