use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linked_list"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Could not run linked_list binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.to_string())
        .collect()
}

fn write_script(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("linked_list-{}-{}.txt", name, std::process::id()));
    fs::write(&path, contents).expect("Could not write script");
    path
}

#[test]
fn demo_replays_reference_sequence() {
    let output = run(&[]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Linked list: 1 2 3 4 5");
    assert_eq!(lines[1], "Linked list after deleting nodes with data = 3: 1 2 4 5");
    assert_eq!(lines[2], "Linked list after deleting node at location 1: 1 4 5");
    assert_eq!(
        lines[3],
        "Linked list after deleting nodes with data = 2 and next node's data: 1 4 5"
    );
    assert!(lines[4].starts_with("Total memory usage: "));
    assert!(lines[4].ends_with(" bytes"));
    assert_eq!(lines[5], "Inverted linked list: 5 4 1");
}

#[test]
fn demo_with_custom_values() {
    let output = run(&[
        "--values", "2", "7", "2", "8", "9",
        "--delete-value", "9",
        "--delete-index", "10",
        "--paired-value", "2",
    ]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Linked list: 2 7 2 8 9");
    assert_eq!(lines[1], "Linked list after deleting nodes with data = 9: 2 7 2 8");
    assert_eq!(lines[2], "Linked list after deleting node at location 10: 2 7 2 8");
    assert_eq!(
        lines[3],
        "Linked list after deleting nodes with data = 2 and next node's data: Linked list is empty."
    );
    assert_eq!(lines[4], "Linked list is empty.");
    assert_eq!(lines[5], "Inverted linked list: Linked list is empty.");
}

#[test]
fn script_drives_every_operation() {
    let path = write_script(
        "ops",
        "# build\nadd 1 2 3 2 5\nshow\nremove 2\nshow\nreverse\ndelete 0\nshow\n\
         add 6 7\nremovepair 5\nshow\nmemory\nclear\nshow\nmemory\n",
    );
    let output = run(&["--script", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[..5], ["1 2 3 2 5", "1 3 5", "5 3 1", "3 5", "3 7"]);
    assert!(lines[5].starts_with("Total memory usage: "));
    assert!(lines[5].ends_with(" bytes"));
    assert_eq!(lines[6], "Linked list is empty.");
    assert_eq!(lines[7], "Linked list is empty.");
}

#[test]
fn script_reports_bad_lines_and_stops_at_quit() {
    let path = write_script("errors", "add 1 2\nfrobnicate\ndelete x\nshow\nquit\nshow\n");
    let output = run(&["--values", "0", "--script", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["0 1 2".to_string()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2: Unrecognized command: frobnicate"));
    assert!(stderr.contains("line 3: Not a valid number: x"));
}

#[test]
fn missing_script_fails() {
    let output = run(&["--script", "/nonexistent/linked_list/script.txt"]);
    assert!(!output.status.success());
}
