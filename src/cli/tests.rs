#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for CLI commands

use crate::cli::{execute, Cli, Commands};
use crate::runtime_config::RuntimeConfig;
use clap::Parser;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).expect("parse args");
    let mut out = Vec::new();
    execute(cli, &RuntimeConfig::default(), &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn test_active_command_parse() {
    let cli = Cli::try_parse_from(["sitenav", "active", "/work/foo", "--json"]).unwrap();

    match cli.command {
        Commands::Active { path, config, json } => {
            assert_eq!(path, "/work/foo");
            assert!(config.is_none());
            assert!(json);
        }
        _ => panic!("Expected Active command"),
    }
}

#[test]
fn test_resolve_command_with_flags() {
    let cli = Cli::try_parse_from([
        "sitenav",
        "resolve",
        "/lab/x",
        "--config",
        "site.yaml",
        "--fallback",
        "Home",
    ])
    .unwrap();

    match cli.command {
        Commands::Resolve {
            path,
            config,
            fallback,
            json,
        } => {
            assert_eq!(path, "/lab/x");
            assert_eq!(config.unwrap().to_string_lossy(), "site.yaml");
            assert_eq!(fallback.as_deref(), Some("Home"));
            assert!(!json);
        }
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["sitenav", "active", "/"],
        vec!["sitenav", "resolve", "/"],
        vec!["sitenav", "routes"],
        vec!["sitenav", "check", "--fail-on-error"],
        vec!["sitenav", "check", "-c", "site.toml"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

#[test]
fn test_active_requires_path() {
    assert!(Cli::try_parse_from(["sitenav", "active"]).is_err());
}

#[test]
fn test_active_text_output() {
    assert_eq!(run(&["sitenav", "active", "/work/foo"]).unwrap(), "1 Work\n");
    assert_eq!(run(&["sitenav", "active", "/"]).unwrap(), "0 Home\n");
    assert_eq!(run(&["sitenav", "active", "/other"]).unwrap(), "-1\n");
}

#[test]
fn test_active_json_output() {
    let out = run(&["sitenav", "active", "/other", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["active_index"], -1);
    assert!(value["label"].is_null());

    let out = run(&["sitenav", "active", "/writing/hello", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["active_index"], 4);
    assert_eq!(value["label"], "Writing");
}

#[test]
fn test_resolve_output() {
    assert_eq!(run(&["sitenav", "resolve", "/work/my-project"]).unwrap(), "Case Study\n");
    assert_eq!(run(&["sitenav", "resolve", "/a/b/c"]).unwrap(), "Untitled\n");
    assert_eq!(
        run(&["sitenav", "resolve", "/a/b/c", "--fallback", "Ion Mesca"]).unwrap(),
        "Ion Mesca\n"
    );

    let out = run(&["sitenav", "resolve", "/stack", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["title"], "Stack");
    assert_eq!(value["resolved"], true);
    assert!(value["tabs"].is_null());
}

#[test]
fn test_routes_output() {
    let out = run(&["sitenav", "routes"]).unwrap();
    assert!(out.contains("[nav] count=6"));
    assert!(out.contains("[nav] 1 prefix /work -> Work"));
    assert!(out.contains("[route] /work/[slug] -> Case Study"));
    assert!(out.contains("[routes] count=10"));
}

#[test]
fn test_check_builtin_site_is_clean() {
    let out = run(&["sitenav", "check", "--fail-on-error"]).unwrap();
    assert!(out.contains("No lint issues"));
}

#[test]
fn test_missing_config_is_an_error() {
    let err = run(&["sitenav", "routes", "--config", "/no/such/site.yaml"]).unwrap_err();
    assert!(err.to_string().contains("failed to read site definition"));
}
