use indoc::indoc;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SOURCE: &str = indoc! {r#"
    {
      "$id": "1",
      "strings": [
        { "Key": "00000000-0000-0000-0000-000000000001", "Value": "Hello" },
        { "Key": "00000000-0000-0000-0000-000000000002", "Value": "Slay the @npc_Dragon@\nnow" },
        { "Key": "00000000-0000-0000-0000-000000000003", "Value": "Goodbye" },
        { "Key": "00000000-0000-0000-0000-000000000004", "Value": "" }
      ]
    }
"#};

const SHEET: &str = indoc! {"
    [[Key]],[[English]],[[Japanese]],[[MachineTranslation]],[[ReferenceID]],[[Sequence]]
    00000000-0000-0000-0000-000000000001,Hello,こんにちは,,r1,1
    00000000-0000-0000-0000-000000000002,Slay the @npc_Dragon@<LF>now,@npc_Dragon@を倒せ<LF>今すぐ,,r2,2
    00000000-0000-0000-0000-000000000003,Goodbye,,さようなら,r3,3
"};

const GLOSSARY: &str = indoc! {"
    [[変換区分]],[[接頭辞]],[[英語]],[[日本語]]
    $,npc,Dragon,竜
"};

fn transsheet_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("transsheet"))
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    transsheet_cmd()
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn read_values(path: &Path) -> Vec<String> {
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    json["strings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["Value"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_mod_writes_translated_json() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "EN/enGB.json", SOURCE);
    let sheet = write(tmp.path(), "sheets/enGB.csv", SHEET);
    let glossary = write(tmp.path(), "glossary.csv", GLOSSARY);
    let output = tmp.path().join("JP").join("enGB.json");

    let result = run(&[
        "mod",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
        "-g",
        glossary.to_str().unwrap(),
    ]);
    assert_success(&result);

    assert_eq!(
        read_values(&output),
        vec!["こんにちは", "竜を倒せ\n今すぐ", "Goodbye", ""]
    );
}

#[test]
fn test_mod_with_machine_translation_and_reference_ids() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    let sheet = write(tmp.path(), "enGB.csv", SHEET);
    let output = tmp.path().join("out.json");

    let result = run(&[
        "mod",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
        "-m",
        "-k",
        "*",
        "-e",
    ]);
    assert_success(&result);

    let values = read_values(&output);
    assert_eq!(values[0], "#r1:こんにちは");
    assert_eq!(values[2], "#r3:*さようなら");
    assert_eq!(values[3], "");
}

#[test]
fn test_mod_reads_sheet_directory() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    let sheets = tmp.path().join("sheets");
    write(
        &sheets,
        "part1.csv",
        indoc! {"
            [[Key]],[[Japanese]],[[ReferenceID]],[[MachineTranslation]]
            00000000-0000-0000-0000-000000000001,こんにちは,,
        "},
    );
    write(
        &sheets,
        "nested/part2.csv",
        indoc! {"
            [[Key]],[[Japanese]],[[ReferenceID]],[[MachineTranslation]]
            00000000-0000-0000-0000-000000000003,さようなら,,
        "},
    );
    write(&sheets, "readme.txt", "not a sheet");
    let output = tmp.path().join("out.json");

    let result = run(&[
        "mod",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-s",
        sheets.to_str().unwrap(),
    ]);
    assert_success(&result);

    let values = read_values(&output);
    assert_eq!(values[0], "こんにちは");
    assert_eq!(values[1], "Slay the @npc_Dragon@\nnow");
    assert_eq!(values[2], "さようなら");
}

#[test]
fn test_mod_writes_mod_csv() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    let sheet = write(tmp.path(), "enGB.csv", SHEET);
    let output = tmp.path().join("enGB_mod.csv");

    let result = run(&[
        "mod",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
        "-u",
    ]);
    assert_success(&result);

    let content = fs::read_to_string(&output).unwrap();
    let content = content.trim_start_matches('\u{FEFF}');
    assert!(content.starts_with("Key,Value,No\n"));
    assert!(content.contains("00000000-0000-0000-0000-000000000001,こんにちは,r1\n"));
    assert!(content.contains("\"@npc_Dragon@を倒せ\n今すぐ\",r2\n"));
}

#[test]
fn test_mod_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    let sheet = write(tmp.path(), "enGB.csv", SHEET);
    let output = write(tmp.path(), "out.json", "existing");

    let args = [
        "mod",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
    ];
    let result = run(&args);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

    let mut with_replace = args.to_vec();
    with_replace.push("-r");
    assert_success(&run(&with_replace));
    assert_eq!(read_values(&output)[0], "こんにちは");
}

#[test]
fn test_mod_fails_on_duplicate_sheet_keys() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    write(tmp.path(), "dir/a.csv", SHEET);
    write(tmp.path(), "dir/b.csv", SHEET);
    let output = tmp.path().join("out.json");

    let result = run(&[
        "mod",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-s",
        tmp.path().join("dir").to_str().unwrap(),
    ]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("duplicate key"));
    assert!(!output.exists());
}

#[test]
fn test_mod_failure_leaves_no_output_directory() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    write(tmp.path(), "dir/a.csv", SHEET);
    write(tmp.path(), "dir/b.csv", SHEET);
    let output = tmp.path().join("JP").join("enGB.json");

    let result = run(&[
        "mod",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-s",
        tmp.path().join("dir").to_str().unwrap(),
    ]);
    assert_eq!(result.status.code(), Some(1));
    assert!(!tmp.path().join("JP").exists());
}

#[test]
fn test_mod_missing_input() {
    let tmp = TempDir::new().unwrap();
    let sheet = write(tmp.path(), "enGB.csv", SHEET);
    let result = run(&[
        "mod",
        "-i",
        tmp.path().join("missing.json").to_str().unwrap(),
        "-o",
        tmp.path().join("out.json").to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
    ]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("File does not exist"));
}

#[test]
fn test_sheet_builds_full_layout() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    let fan = write(
        tmp.path(),
        "fan/enGB.json",
        indoc! {r#"
            {"strings": [
              { "Key": "00000000-0000-0000-0000-000000000001", "Value": "やあ" }
            ]}
        "#},
    );
    let sheet = tmp.path().join("out").join("sheet.csv");

    let result = run(&[
        "sheet",
        "-i",
        input.to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
        "-f",
        fan.to_str().unwrap(),
        "-t",
    ]);
    assert_success(&result);

    let content = fs::read_to_string(&sheet).unwrap();
    let lines: Vec<_> = content.trim_start_matches('\u{FEFF}').lines().collect();
    assert_eq!(
        lines[0],
        "[[Key]],[[English]],[[Japanese]],[[MachineTranslation]],[[ReferenceID]],[[Sequence]]"
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("00000000-0000-0000-0000-000000000001,Hello,やあ,,"));
    assert!(lines[1].ends_with(",1"));
    assert!(lines[2].contains("Slay the @npc_Dragon@<LF>now"));
    assert!(lines[3].ends_with(",3"));
}

#[test]
fn test_sheet_compare_layout() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    let sheet = tmp.path().join("compare.csv");

    let result = run(&[
        "sheet",
        "-i",
        input.to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
        "--compare",
    ]);
    assert_success(&result);

    let content = fs::read_to_string(&sheet).unwrap();
    let content = content.trim_start_matches('\u{FEFF}');
    assert!(content.starts_with("[[Key]],[[English]]\n"));
    assert!(content.contains("\"Slay the @npc_Dragon@\nnow\""));
    assert!(!content.contains("[[Japanese]]"));
}

#[test]
fn test_sheet_rejects_small_split() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    let sheet = tmp.path().join("sheet.csv");

    let result = run(&[
        "sheet",
        "-i",
        input.to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
        "-n",
        "100",
    ]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("at least 5000"));
    assert!(!sheet.exists());
    assert!(!tmp.path().join("sheet_1.csv").exists());
}

#[test]
fn test_sheet_split_file_names() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);
    let sheet = tmp.path().join("sheet.csv");

    let result = run(&[
        "sheet",
        "-i",
        input.to_str().unwrap(),
        "-s",
        sheet.to_str().unwrap(),
        "-n",
        "5000",
    ]);
    assert_success(&result);
    assert!(tmp.path().join("sheet_1.csv").exists());
    assert!(!tmp.path().join("sheet_2.csv").exists());
    assert!(!sheet.exists());
}

#[test]
fn test_sheet_rejects_xlsx() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.json", SOURCE);

    let result = run(&[
        "sheet",
        "-i",
        input.to_str().unwrap(),
        "-s",
        tmp.path().join("sheet.xlsx").to_str().unwrap(),
    ]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Unsupported file extension"));
}

#[test]
fn test_sheet_rejects_non_json_input() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "enGB.txt", SOURCE);

    let result = run(&[
        "sheet",
        "-i",
        input.to_str().unwrap(),
        "-s",
        tmp.path().join("sheet.csv").to_str().unwrap(),
    ]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Input (-i)"));
    assert!(stderr.contains("Unsupported file extension"));
    assert!(!tmp.path().join("sheet.csv").exists());
}

#[test]
fn test_completions() {
    let result = run(&["completions", "bash"]);
    assert_success(&result);
    assert!(String::from_utf8_lossy(&result.stdout).contains("transsheet"));
}
