use clap::{error::ErrorKind, CommandFactory, Parser};
use monogen::cli::Args;
use monogen::constants::DEFAULT_PROJECT_NAME;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("monogen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["My Cool App!!"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "My Cool App!!");
    assert_eq!(parsed.dir, None);
    assert_eq!(parsed.package_manager, "pnpm");
    assert!(!parsed.install);
    assert!(!parsed.git);
    assert!(!parsed.verbose);
    assert!(parsed.ignore.is_empty());
}

#[test]
fn test_name_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert_eq!(parsed.name, DEFAULT_PROJECT_NAME);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--dir",
        "/tmp/projects",
        "--pm",
        "yarn",
        "--install",
        "--git",
        "--template",
        "./my-template",
        "--ignore",
        "**/*.log",
        "--ignore",
        "docs",
        "--verbose",
        "acme",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "acme");
    assert_eq!(parsed.dir, Some(PathBuf::from("/tmp/projects")));
    assert_eq!(parsed.package_manager, "yarn");
    assert!(parsed.install);
    assert!(parsed.git);
    assert_eq!(parsed.template, PathBuf::from("./my-template"));
    assert_eq!(parsed.ignore, vec!["**/*.log".to_string(), "docs".to_string()]);
    assert!(parsed.verbose);
}

#[test]
fn test_equals_syntax() {
    let parsed = Args::try_parse_from(make_args(&["--pm=npm", "--dir=out", "acme"])).unwrap();
    assert_eq!(parsed.package_manager, "npm");
    assert_eq!(parsed.dir, Some(PathBuf::from("out")));
}

#[test]
fn test_short_verbose() {
    let parsed = Args::try_parse_from(make_args(&["-v", "acme"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["acme", "extra"])).is_err());
}

#[test]
fn test_unknown_flag() {
    assert!(Args::try_parse_from(make_args(&["--force", "acme"])).is_err());
}

#[test]
fn test_unsupported_package_manager_rejected() {
    let err = Args::try_parse_from(make_args(&["--pm", "cargo", "acme"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_help_lists_package_managers() {
    let help = Args::command().render_help().to_string();
    assert!(help.contains("[possible values: pnpm, npm, yarn]"));
}
