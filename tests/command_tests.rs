use js_crash_trace::commands::{
    execute_convert, execute_hash, execute_show, load_stacktrace, validate_input, ConvertArgs,
    HashArgs, InputArgs, ShowArgs,
};
use js_crash_trace::output::read_stacktrace;
use js_crash_trace::parser::InputFormat;
use js_crash_trace::{HashFlags, JsPlatform};
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn input(name: &str) -> InputArgs {
    InputArgs {
        input: fixture(name),
        ..Default::default()
    }
}

#[test]
fn test_validate_input_valid() {
    assert!(validate_input(&input("node-01.txt")).is_ok());
}

#[test]
fn test_validate_input_empty_path() {
    assert!(validate_input(&InputArgs::default()).is_err());
}

#[test]
fn test_validate_input_missing_file() {
    assert!(validate_input(&input("does-not-exist.txt")).is_err());
}

#[test]
fn test_validate_input_version_without_runtime() {
    let args = InputArgs {
        runtime_version: Some("18.12.0".to_string()),
        ..input("node-01.txt")
    };
    assert!(validate_input(&args).is_err());
}

#[test]
fn test_execute_hash() {
    let args = HashArgs {
        input: input("node-01.txt"),
        ..Default::default()
    };

    let report = execute_hash(&args).unwrap();
    assert_eq!(report.bthash, "07f88912386a87489c219a89184cb2ab7dae79df");
    assert_eq!(report.duphash, "55e3910a810e9e08099b098ae13c9bfa6af0705f");
}

#[test]
fn test_execute_hash_plain() {
    let args = HashArgs {
        input: input("node-01.txt"),
        frames: 1,
        flags: HashFlags::NoHash,
    };

    let report = execute_hash(&args).unwrap();
    assert_eq!(report.duphash, "ReferenceError\nmain index.js\n");
}

#[test]
fn test_load_with_runtime() {
    let args = InputArgs {
        runtime: Some("Node.js".to_string()),
        runtime_version: Some("6.9.1".to_string()),
        ..input("node-01.txt")
    };

    let trace = load_stacktrace(&args).unwrap();
    assert_eq!(trace.platform(), Some(JsPlatform::default()));
}

#[test]
fn test_load_with_unknown_runtime() {
    let args = InputArgs {
        runtime: Some("Bun".to_string()),
        ..input("node-01.txt")
    };

    assert!(load_stacktrace(&args).is_err());
}

#[test]
fn test_load_forced_format() {
    let args = InputArgs {
        format: InputFormat::Json,
        ..input("node-01.txt")
    };

    assert!(load_stacktrace(&args).is_err());
}

#[test]
fn test_execute_show_short() {
    let args = ShowArgs {
        input: input("node-01.txt"),
        short: Some(2),
    };

    let text = execute_show(&args).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_execute_show_full() {
    let args = ShowArgs {
        input: input("report-01.json"),
        short: None,
    };

    let text = execute_show(&args).unwrap();
    assert_eq!(
        text,
        "ReferenceError\n    \
         at do_nothing (/usr/lib/npm/modules/foo/bar.js:42:24)\n    \
         at do_everything (/usr/lib/npm/modules/bar/foo.js:21:12)\n"
    );
}

#[test]
fn test_execute_convert() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("node-01.json");

    let args = ConvertArgs {
        input: input("node-01.txt"),
        output: output.clone(),
    };
    execute_convert(&args).unwrap();

    let converted = read_stacktrace(&output).unwrap();
    let original = load_stacktrace(&input("node-01.txt")).unwrap();
    assert_eq!(converted, original);
}
