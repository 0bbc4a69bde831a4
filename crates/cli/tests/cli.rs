use std::path::Path;

use assert_cmd::Command;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use tempfile::TempDir;
use uuid::Uuid;

const ORG: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";
const OTHER_ORG: &str = "00000000-0000-0000-0000-0000000000b2";

fn write_dataset(dir: &TempDir) -> std::path::PathBuf {
    let records = [
        ("A", ORG),
        ("x", OTHER_ORG),
        ("B", ORG),
        ("C", ORG),
        ("y", OTHER_ORG),
        ("D", ORG),
        ("E", ORG),
    ];
    let folders: Vec<Value> = records
        .iter()
        .enumerate()
        .map(|(i, (name, org))| {
            json!({
                "id": Uuid::from_u128(i as u128 + 1),
                "name": name,
                "org_id": org,
            })
        })
        .collect();
    let path = dir.path().join("folders.json");
    std::fs::write(&path, serde_json::to_vec(&folders).expect("serialize")).expect("write");
    path
}

fn run(data: &Path, args: &[&str]) -> (Value, i32) {
    let output = Command::cargo_bin("org-folders")
        .expect("binary")
        .env_remove("ORG_FOLDERS_PAGE_SIZE")
        .arg("--data")
        .arg(data)
        .args(args)
        .output()
        .expect("run");
    let body: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    (body, output.status.code().unwrap_or(-1))
}

fn names(page: &Value) -> Vec<String> {
    page["folders"]
        .as_array()
        .expect("folders")
        .iter()
        .map(|f| f["name"].as_str().expect("name").to_string())
        .collect()
}

#[test]
fn pages_follow_tokens_to_the_end() {
    let dir = TempDir::new().expect("tempdir");
    let data = write_dataset(&dir);

    let (first, code) = run(&data, &["page", "--org", ORG]);
    assert_eq!(code, 0);
    assert_eq!(first["status"], "ok");
    assert_eq!(names(&first["data"]), vec!["A", "B"]);
    assert_eq!(first["data"]["token"], STANDARD.encode("2"));

    let token = first["data"]["token"].as_str().expect("token").to_string();
    let (second, _) = run(&data, &["page", "--org", ORG, "--token", &token]);
    assert_eq!(names(&second["data"]), vec!["C", "D"]);
    assert_eq!(second["data"]["token"], "NA==");

    let (third, _) = run(&data, &["page", "--org", ORG, "--token", "NA=="]);
    assert_eq!(names(&third["data"]), vec!["E"]);
    assert_eq!(third["data"]["token"], "");
}

#[test]
fn walk_and_list_agree() {
    let dir = TempDir::new().expect("tempdir");
    let data = write_dataset(&dir);

    let (walk, code) = run(&data, &["walk", "--org", ORG]);
    assert_eq!(code, 0);
    assert_eq!(walk["data"]["total"], 5);
    assert_eq!(walk["data"]["pages"].as_array().map(Vec::len), Some(3));

    let (list, _) = run(&data, &["list", "--org", ORG]);
    assert_eq!(names(&list["data"]), vec!["A", "B", "C", "D", "E"]);

    let (other, _) = run(&data, &["list", "--org", OTHER_ORG]);
    assert_eq!(names(&other["data"]), vec!["x", "y"]);
}

#[test]
fn page_size_comes_from_flag_or_env() {
    let dir = TempDir::new().expect("tempdir");
    let data = write_dataset(&dir);

    let (flagged, _) = run(&data, &["--page-size", "4", "page", "--org", ORG]);
    assert_eq!(names(&flagged["data"]).len(), 4);
    assert_eq!(flagged["meta"]["page_size"], 4);

    let output = Command::cargo_bin("org-folders")
        .expect("binary")
        .env("ORG_FOLDERS_PAGE_SIZE", "3")
        .arg("--data")
        .arg(&data)
        .args(["page", "--org", ORG])
        .output()
        .expect("run");
    let body: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(names(&body["data"]), vec!["A", "B", "C"]);
}

#[test]
fn malformed_tokens_exit_with_token_error() {
    let dir = TempDir::new().expect("tempdir");
    let data = write_dataset(&dir);

    let (invalid, code) = run(&data, &["page", "--org", ORG, "--token", "not-base64!!"]);
    assert_eq!(code, 1);
    assert_eq!(invalid["status"], "error");
    assert!(invalid["message"]
        .as_str()
        .is_some_and(|m| m.contains("invalid token")));

    let abc = STANDARD.encode("abc");
    let (format, code) = run(&data, &["page", "--org", ORG, "--token", &abc]);
    assert_eq!(code, 1);
    assert!(format["message"]
        .as_str()
        .is_some_and(|m| m.contains("invalid token format")));
}

#[test]
fn tokens_are_taken_verbatim() {
    let dir = TempDir::new().expect("tempdir");
    let data = write_dataset(&dir);

    let (_, code) = run(&data, &["page", "--org", ORG, "--token", " NA== "]);
    assert_eq!(code, 1);
    let (_, code) = run(&data, &["page", "--org", ORG, "--token", "   "]);
    assert_eq!(code, 1);

    let padded = STANDARD.encode(format!("{:0>60}", 4));
    let (page, code) = run(&data, &["page", "--org", ORG, "--token", &padded]);
    assert_eq!(code, 0);
    assert_eq!(page["data"]["token"], "");
}

#[test]
fn strict_mode_rejects_tokens_past_the_end() {
    let dir = TempDir::new().expect("tempdir");
    let data = write_dataset(&dir);
    let token = STANDARD.encode("9");

    let (lenient, code) = run(&data, &["page", "--org", ORG, "--token", &token]);
    assert_eq!(code, 0);
    assert_eq!(names(&lenient["data"]), Vec::<String>::new());
    assert_eq!(lenient["data"]["token"], "");

    let (strict, code) = run(&data, &["--strict", "page", "--org", ORG, "--token", &token]);
    assert_eq!(code, 1);
    assert_eq!(strict["status"], "error");
}

#[test]
fn missing_dataset_is_a_failure() {
    let dir = TempDir::new().expect("tempdir");
    let (body, code) = run(&dir.path().join("absent.json"), &["orgs"]);
    assert_eq!(code, 2);
    assert_eq!(body["status"], "error");
    assert!(body["hints"].as_array().is_some_and(|h| !h.is_empty()));
}

#[test]
fn generated_sample_round_trips_through_data_flag() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("sample.json");
    let path_arg = path.to_str().expect("utf-8 path");

    let output = Command::cargo_bin("org-folders")
        .expect("binary")
        .args(["--seed", "11", "sample", "--folders", "40", "--orgs", "3"])
        .args(["--output", path_arg])
        .output()
        .expect("run");
    assert!(output.status.success());
    let written: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(written["data"]["folders"], 40);

    let (orgs, code) = run(&path, &["orgs"]);
    assert_eq!(code, 0);
    let counts = orgs["data"].as_array().expect("orgs");
    assert_eq!(counts.len(), 3);
    let total: u64 = counts.iter().filter_map(|o| o["folders"].as_u64()).sum();
    assert_eq!(total, 40);

    let (walk, _) = run(&path, &["--page-size", "7", "walk", "--org", ORG]);
    let (list, _) = run(&path, &["list", "--org", ORG]);
    assert_eq!(
        walk["data"]["total"].as_u64(),
        list["data"]["folders"].as_array().map(|f| f.len() as u64)
    );
}
