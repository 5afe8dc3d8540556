#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bluebird::provider::uri::{all_boxes_uri, all_observations_uri};
use bluebird::provider::{ContentValues, DataProvider};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bb() -> Command {
    cargo_bin_cmd!("bluebird")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bluebird.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB through the CLI (test mode: no config file written)
pub fn init_db(db_path: &str) {
    bb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Id at the end of a `content://.../<kind>/<id>` URI
pub fn id_of(uri: &str) -> i64 {
    uri.rsplit('/')
        .next()
        .and_then(|s| s.parse().ok())
        .expect("uri ends with a numeric id")
}

pub fn add_box(provider: &mut DataProvider, number: &str) -> i64 {
    let mut values = ContentValues::new();
    values.put("box_number", number.to_string());
    let uri = provider
        .insert(&all_boxes_uri(), &values)
        .expect("insert box");
    id_of(&uri)
}

pub fn add_observation(
    provider: &mut DataProvider,
    box_id: i64,
    obs_date: i64,
    eggs_laid: Option<i64>,
) -> i64 {
    let mut values = ContentValues::new();
    values.put("box_key", box_id).put("obs_date", obs_date);
    if let Some(n) = eggs_laid {
        values.put("eggs_laid", n);
    }
    let uri = provider
        .insert(&all_observations_uri(), &values)
        .expect("insert observation");
    id_of(&uri)
}
