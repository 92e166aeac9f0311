use super::{split_search_terms, Cli};
use crate::options::{Column, OrderKey, OutputFormat};
use crate::ui::OutputMode;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("prettyps").chain(args.iter().copied());
    Cli::try_parse_from(argv).expect("parse should succeed")
}

#[test]
fn defaults_show_running_containers_as_text() {
    let options = parse(&[]).report_options();
    assert!(options.search_terms.is_empty());
    assert!(!options.include_stopped);
    assert_eq!(options.order, OrderKey::Status);
    assert!(!options.reverse);
    assert_eq!(options.format, OutputFormat::Text);
    assert_eq!(options.columns.iter().count(), 7);
}

#[test]
fn search_is_split_on_commas_dropping_blanks() {
    let options = parse(&["postgres, bad,,"]).report_options();
    assert_eq!(
        options.search_terms,
        vec!["postgres".to_owned(), "bad".to_owned()]
    );
    assert!(split_search_terms(Some("")).is_empty());
    assert!(split_search_terms(None).is_empty());
}

#[test]
fn flags_map_to_options() {
    let cli = parse(&["-a", "-r", "--json", "-i", "sp", "-o", "name"]);
    let options = cli.report_options();
    assert!(options.include_stopped);
    assert!(options.reverse);
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.order, OrderKey::Name);
    assert_eq!(
        options.columns.iter().collect::<Vec<_>>(),
        vec![Column::Status, Column::Ports]
    );
}

#[test]
fn order_aliases_resolve_to_keys() {
    for (raw, key) in [
        ("container", OrderKey::ContainerId),
        ("container-name", OrderKey::ContainerId),
        ("container-id", OrderKey::ContainerId),
        ("image", OrderKey::ImageId),
        ("image-name", OrderKey::ImageId),
        ("created", OrderKey::Created),
        ("status", OrderKey::Status),
    ] {
        assert_eq!(parse(&["--order", raw]).order, key, "{raw}");
    }
}

#[test]
fn unknown_include_letter_is_rejected() {
    let parsed = Cli::try_parse_from(["prettyps", "--include", "sz"]);
    let err = parsed.expect_err("bad letter");
    assert!(err.to_string().contains('z'));
}

#[test]
fn unknown_order_key_is_rejected() {
    let parsed = Cli::try_parse_from(["prettyps", "--order", "size"]);
    assert!(parsed.is_err());
}

#[test]
fn explicit_color_mode_wins() {
    let never = parse(&["--color", "never"]).output_mode();
    let always = parse(&["--color", "always"]).output_mode();
    assert_eq!(never, OutputMode::Never);
    assert_eq!(always, OutputMode::Always);
}

#[test]
fn input_and_config_paths_are_captured() {
    let cli = parse(&["--input", "-", "--config", "/tmp/prettyps.toml"]);
    assert_eq!(cli.input.as_deref(), Some("-"));
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/prettyps.toml"))
    );
}
