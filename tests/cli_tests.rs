use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bb, init_db, setup_test_db};

const BOXES: &str = "content://bluebird.tracking.data/boxes";

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    bb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    bb().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_box_add_list_and_show() {
    let db_path = setup_test_db("cli_boxes");
    init_db(&db_path);

    bb().args(["--db", &db_path, "box", "add", "North-3"])
        .assert()
        .success()
        .stdout(contains("content://bluebird.tracking.data/box/1"));

    bb().args(["--db", &db_path, "box", "add", "Barn-1"])
        .assert()
        .success();

    bb().args(["--db", &db_path, "box", "list"])
        .assert()
        .success()
        .stdout(contains("North-3").and(contains("Barn-1")));

    bb().args([
        "--db",
        &db_path,
        "obs",
        "add",
        "--box",
        "1",
        "--date",
        "2025-05-01",
        "--laid",
        "4",
        "--problem",
        "ants",
    ])
    .assert()
    .success()
    .stdout(contains("content://bluebird.tracking.data/observation/1"));

    bb().args([
        "--db", &db_path, "obs", "add", "--box", "1", "--date", "2025-05-08", "--laid", "5",
    ])
    .assert()
    .success();

    let out = bb()
        .args(["--db", &db_path, "box", "show", "1"])
        .output()
        .expect("run box show");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("North-3"));
    assert!(stdout.contains("ants"));

    // newest first
    let newer = stdout.find("2025-05-08").expect("newer visit listed");
    let older = stdout.find("2025-05-01").expect("older visit listed");
    assert!(newer < older);
}

#[test]
fn test_obs_add_for_missing_box_fails() {
    let db_path = setup_test_db("cli_obs_missing_box");
    init_db(&db_path);

    bb().args(["--db", &db_path, "obs", "add", "--box", "42"])
        .assert()
        .failure()
        .stderr(contains("box 42"));
}

#[test]
fn test_generic_insert_query_update_delete() {
    let db_path = setup_test_db("cli_generic");
    init_db(&db_path);

    bb().args(["--db", &db_path, "insert", BOXES, "--set", "box_number=A1"])
        .assert()
        .success()
        .stdout(contains("box/1"));
    bb().args(["--db", &db_path, "insert", BOXES, "--set", "box_number=A2"])
        .assert()
        .success();

    bb().args([
        "--db",
        &db_path,
        "update",
        "content://bluebird.tracking.data/box/2",
        "--set",
        "box_number=Z9",
        "--where",
        "1 = 1",
    ])
    .assert()
    .success()
    .stdout(contains("1 row(s) updated"));

    bb().args(["--db", &db_path, "query", BOXES, "--json", "--sort", "desc"])
        .assert()
        .success()
        .stdout(contains("\"Z9\"").and(contains("\"A1\"")));

    bb().args([
        "--db",
        &db_path,
        "query",
        BOXES,
        "--columns",
        "box_number",
        "--where",
        "box_number = ?",
        "--arg",
        "A1",
    ])
    .assert()
    .success()
    .stdout(contains("A1").and(contains("Z9").not()));

    bb().args(["--db", &db_path, "delete", BOXES, "--where", "box_number = ?", "--arg", "A1"])
        .assert()
        .success()
        .stdout(contains("1 row(s) deleted"));

    bb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("insert").and(contains("update")).and(contains("delete")));
}

#[test]
fn test_type_and_unknown_uri() {
    let db_path = setup_test_db("cli_type");
    init_db(&db_path);

    bb().args([
        "--db",
        &db_path,
        "type",
        "content://bluebird.tracking.data/observation/3",
    ])
    .assert()
    .success()
    .stdout(contains("vnd.android.cursor.item/com.bluebird.tracking.data.Observation"));

    bb().args([
        "--db",
        &db_path,
        "query",
        "content://bluebird.tracking.data/unknown",
    ])
    .assert()
    .failure()
    .stderr(contains("Unknown URI"));
}

#[test]
fn test_db_info_counts_rows() {
    let db_path = setup_test_db("cli_info");
    init_db(&db_path);

    bb().args(["--db", &db_path, "box", "add", "1"])
        .assert()
        .success();

    bb().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Boxes").and(contains("Observations")));
}

#[test]
fn test_db_vacuum() {
    let db_path = setup_test_db("cli_vacuum");
    init_db(&db_path);

    bb().args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_config_print_shows_settings() {
    let db_path = setup_test_db("cli_config");
    init_db(&db_path);

    bb().args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("date_format").and(contains("log_level")));
}
