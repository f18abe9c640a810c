//! CRUD integration tests against a SQLite file.
//!
//! These exercise the public `db` API end to end: configuration from a URL,
//! one connection per `Crud`, placeholder dispatch and change summaries.

use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

use shine::db::{
    run_change, run_query, sanitize_table_name, sanitize_with_whitelist, Crud, DatabaseConfig,
    DbError, Value,
};

/// A SQLite file holding `table_1` with "Adam McGurk" as id 1.
struct Fixture {
    _file: NamedTempFile,
    crud: Crud,
}

#[fixture]
fn fixture() -> Fixture {
    let file = NamedTempFile::new().expect("Failed to create temp db file");
    let config = DatabaseConfig::from_url(&format!("sqlite://{}", file.path().display()))
        .expect("sqlite URL should parse");
    let crud = Crud::connect(&config).expect("Failed to open db");

    crud.change(
        "CREATE TABLE table_1 (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, score REAL)",
        &[],
    )
    .expect("create table");
    crud.change(
        "INSERT INTO table_1 (name, score) VALUES (?, ?)",
        &["Adam McGurk".into(), Value::Float(9.5)],
    )
    .expect("insert fixture row");

    Fixture { _file: file, crud }
}

#[rstest]
fn test_read_fixture_row_with_param(fixture: Fixture) {
    let rows = run_query(
        fixture.crud.backend(),
        "SELECT name FROM table_1 WHERE id = ?",
        &[Value::from(1)],
    )
    .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("name").and_then(Value::as_string).as_deref(), Some("Adam McGurk"));
}

#[rstest]
fn test_read_plain_query(fixture: Fixture) {
    let rows = fixture.crud.read("SELECT id, name, score FROM table_1", &[]).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["id", "name", "score"]);
    assert_eq!(rows[0].get("score"), Some(&Value::Float(9.5)));
}

#[rstest]
fn test_empty_result_is_not_an_error(fixture: Fixture) {
    let rows = fixture
        .crud
        .read("SELECT * FROM table_1 WHERE id = ?", &[Value::from(99)])
        .unwrap();
    assert!(rows.is_empty());
}

#[rstest]
fn test_placeholder_without_params_fails(fixture: Fixture) {
    assert!(matches!(
        fixture.crud.read("SELECT * FROM table_1 WHERE id = ?", &[]),
        Err(DbError::QueryFailed { .. })
    ));
    assert!(matches!(
        fixture.crud.change("DELETE FROM table_1 WHERE id = ?", &[]),
        Err(DbError::QueryFailed { .. })
    ));
}

#[rstest]
fn test_change_summary(fixture: Fixture) {
    let insert = run_change(
        fixture.crud.backend(),
        "INSERT INTO table_1 (name) VALUES (?)",
        &["Grace Hopper".into()],
    )
    .unwrap();
    assert_eq!(insert.last_insert_id, Some(2));
    assert_eq!(insert.row_count, 1);

    let update = fixture
        .crud
        .change("UPDATE table_1 SET score = ?", &[Value::Float(1.0)])
        .unwrap();
    assert_eq!(update.last_insert_id, None);
    assert_eq!(update.row_count, 2);
}

#[rstest]
fn test_insert_after_delete_reports_reused_id(fixture: Fixture) {
    fixture.crud.change("DELETE FROM table_1", &[]).unwrap();

    let insert = fixture
        .crud
        .change(
            "INSERT INTO table_1 (id, name) VALUES (?, ?)",
            &[Value::from(1), "Adam McGurk".into()],
        )
        .unwrap();
    assert_eq!(insert.last_insert_id, Some(1));
    assert_eq!(insert.row_count, 1);

    let replace = fixture
        .crud
        .change(
            "INSERT OR REPLACE INTO table_1 (id, name) VALUES (1, 'Grace Hopper')",
            &[],
        )
        .unwrap();
    assert_eq!(replace.last_insert_id, Some(1));
}

#[rstest]
fn test_null_params_round_trip(fixture: Fixture) {
    fixture
        .crud
        .change(
            "INSERT INTO table_1 (name, score) VALUES (?, ?)",
            &["No Score".into(), Value::from(None::<f64>)],
        )
        .unwrap();

    let rows = fixture
        .crud
        .read("SELECT score FROM table_1 WHERE name = ?", &["No Score".into()])
        .unwrap();
    assert!(rows[0].get("score").is_some_and(Value::is_null));
}

#[rstest]
fn test_sanitized_table_name_in_statement(fixture: Fixture) {
    let table = sanitize_table_name("table_1");
    assert_eq!(table, "`table_1`");

    let rows = fixture
        .crud
        .read(&format!("SELECT COUNT(*) AS n FROM {}", table), &[])
        .unwrap();
    assert_eq!(rows[0].get("n").and_then(Value::as_i64), Some(1));
}

#[rstest]
fn test_whitelisted_table_name(fixture: Fixture) {
    let allowed = ["table_1", "table_2"];
    let table = sanitize_with_whitelist("table_1", &allowed).unwrap();
    assert!(fixture.crud.read(&format!("SELECT * FROM {}", table), &[]).is_ok());

    assert!(matches!(
        sanitize_with_whitelist("users; DROP TABLE table_1", &allowed),
        Err(DbError::NotWhitelisted { .. })
    ));
}

#[rstest]
fn test_one_connection_per_crud() {
    let crud = Crud::connect(&DatabaseConfig::SqliteMem).unwrap();
    crud.change("CREATE TABLE t (id INTEGER)", &[]).unwrap();
    assert!(crud.read("SELECT * FROM t", &[]).is_ok());

    let other = Crud::connect(&DatabaseConfig::SqliteMem).unwrap();
    assert!(other.read("SELECT * FROM t", &[]).is_err());
    assert_eq!(crud.backend().backend_name(), "SqliteMem");
}
