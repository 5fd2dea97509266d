use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn todo(file: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_todo"))
        .args(args)
        .env("TODO_FILENAME", file)
        .env_remove("TODO_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("todo should start");

    let mut pipe = child.stdin.take().expect("stdin is piped");
    if let Some(text) = stdin {
        pipe.write_all(text.as_bytes()).expect("stdin should accept input");
    }
    drop(pipe);

    child.wait_with_output().expect("todo should finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn todo_cli_session() {
    let dir = TempDir::new().expect("tempdir should create");
    let file = dir.path().join("todo.json");
    let task = "test task number 1";
    let task2 = "test task number 2";
    let task3 = "test task number 3";
    let task4 = "test task number 4";

    assert!(todo(&file, &["-add", "test", "task", "number", "1"], None).status.success());
    assert!(todo(&file, &["-add"], Some(task2)).status.success());

    let listed = todo(&file, &["-list"], None);
    assert!(listed.status.success());
    assert_eq!(stdout(&listed), format!(" 1: {task}\n 2: {task2}\n"));

    assert!(todo(&file, &["-add", task3], None).status.success());
    assert!(todo(&file, &["-add", task4], None).status.success());
    assert!(todo(&file, &["-del", "4"], None).status.success());
    assert!(todo(&file, &["-complete", "3"], None).status.success());

    let listed = todo(&file, &["-list"], None);
    assert_eq!(stdout(&listed), format!(" 1: {task}\n 2: {task2}\nX 3: {task3}\n"));

    let hidden = todo(&file, &["-list", "-c"], None);
    assert_eq!(stdout(&hidden), format!(" 1: {task}\n 2: {task2}\n"));
}

#[test]
fn stdin_adds_one_task_per_line() {
    let dir = TempDir::new().expect("tempdir should create");
    let file = dir.path().join("todo.json");

    let added = todo(&file, &["-add"], Some("first\nsecond\n\nignored\n"));
    assert!(added.status.success());

    let listed = todo(&file, &["-list"], None);
    assert_eq!(stdout(&listed), " 1: first\n 2: second\n");
}

#[test]
fn verbose_listing_appends_creation_time() {
    let dir = TempDir::new().expect("tempdir should create");
    let file = dir.path().join("todo.json");
    assert!(todo(&file, &["-add", "a"], None).status.success());

    let listed = stdout(&todo(&file, &["-list", "-v"], None));
    assert!(listed.starts_with(" 1: a - "), "unexpected listing {listed:?}");
    assert!(listed.ends_with('\n'));
}

#[test]
fn bad_index_fails_and_keeps_file() {
    let dir = TempDir::new().expect("tempdir should create");
    let file = dir.path().join("todo.json");
    assert!(todo(&file, &["-add", "only"], None).status.success());
    let before = std::fs::read(&file).unwrap();

    for args in [["-complete", "2"], ["-del", "0"]] {
        let output = todo(&file, &args, None);
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("does not exist"), "unexpected stderr {stderr:?}");
    }
    assert_eq!(std::fs::read(&file).unwrap(), before);
}

#[test]
fn missing_action_exits_with_one() {
    let dir = TempDir::new().expect("tempdir should create");
    let file = dir.path().join("todo.json");

    let output = todo(&file, &[], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid option"));

    let output = todo(&file, &["-list", "-del", "1"], None);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn corrupt_file_is_reported() {
    let dir = TempDir::new().expect("tempdir should create");
    let file = dir.path().join("todo.json");
    std::fs::write(&file, "[{").unwrap();

    let output = todo(&file, &["-list"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
