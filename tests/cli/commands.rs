use ecsmeta::{
    MetaErrorKind, Tag, TagDelta,
    cli::Command,
    commands::{error_kind, execute},
    config::Config,
};

fn config_with_desired(tags: Vec<Tag>) -> Config {
    Config {
        desired_tags: Some(tags),
        ..Config::default()
    }
}

#[test]
fn arn_commands_print_format_and_name() {
    let config = Config::default();
    let long = "arn:aws:ecs:us-east-1:123456789012:service/prod/web";

    let format = execute(
        &Command::ArnFormat {
            arn: long.to_string(),
        },
        &config,
    )
    .expect("classification should succeed");
    assert_eq!(format, "long");

    let name = execute(
        &Command::ArnName {
            arn: long.to_string(),
        },
        &config,
    )
    .expect("name should resolve");
    assert_eq!(name, "web");
}

#[test]
fn malformed_arn_is_reported_with_context() {
    let err = execute(
        &Command::ArnFormat {
            arn: "arn:aws:ecs".to_string(),
        },
        &Config::default(),
    )
    .expect_err("malformed arn must fail");
    assert!(format!("{err:#}").contains("cannot classify 'arn:aws:ecs'"));
}

#[test]
fn parse_and_format_tags_print_structured_output() {
    let config = Config::default();

    let parsed = execute(
        &Command::ParseTags {
            src: "Foo=FOO,Bar=".to_string(),
        },
        &config,
    )
    .expect("tags should parse");
    let tags: Vec<Tag> = serde_json::from_str(&parsed).expect("output should be json");
    assert_eq!(tags, vec![Tag::new("Foo", "FOO"), Tag::new("Bar", "")]);

    let formatted = execute(
        &Command::FormatTags {
            src: "b=2,a=1".to_string(),
        },
        &config,
    )
    .expect("tags should format");
    assert_eq!(formatted, "a=1,b=2");
}

#[test]
fn diff_tags_prefers_cli_desired_over_config() {
    let config = config_with_desired(vec![Tag::new("Env", "from-config")]);

    let output = execute(
        &Command::DiffTags {
            current: "Env=dev,Old=x".to_string(),
            desired: Some("Env=prod,New=y".to_string()),
        },
        &config,
    )
    .expect("diff should succeed");
    let delta: TagDelta = serde_json::from_str(&output).expect("output should be json");
    assert_eq!(delta.added, vec![Tag::new("New", "y")]);
    assert_eq!(delta.updated, vec![Tag::new("Env", "prod")]);
    assert_eq!(delta.deleted, vec![Tag::new("Old", "x")]);
}

#[test]
fn diff_tags_falls_back_to_config_desired() {
    let config = config_with_desired(vec![Tag::new("Env", "prod")]);

    let output = execute(
        &Command::DiffTags {
            current: "Env=prod".to_string(),
            desired: None,
        },
        &config,
    )
    .expect("diff should succeed");
    let delta: TagDelta = serde_json::from_str(&output).expect("output should be json");
    assert!(delta.is_empty());
}

#[test]
fn diff_tags_without_desired_source_fails() {
    let err = execute(
        &Command::DiffTags {
            current: "Env=prod".to_string(),
            desired: None,
        },
        &Config::default(),
    )
    .expect_err("missing desired tags must fail");
    assert!(err.to_string().contains("no desired tags"));
}

#[test]
fn invalid_tag_input_propagates() {
    let err = execute(
        &Command::DiffTags {
            current: "Env".to_string(),
            desired: Some("Env=prod".to_string()),
        },
        &Config::default(),
    )
    .expect_err("invalid current tags must fail");
    assert!(format!("{err:#}").contains("invalid --current tags"));
}

#[test]
fn failed_commands_expose_the_rejection_kind() {
    let config = Config::default();

    let arn_err = execute(
        &Command::ArnFormat {
            arn: "arn:aws:ecs:r:a:service/a/b/c".to_string(),
        },
        &config,
    )
    .expect_err("malformed arn must fail");
    assert_eq!(error_kind(&arn_err), Some(MetaErrorKind::MalformedArn));

    let tags_err = execute(
        &Command::DiffTags {
            current: "Env=prod".to_string(),
            desired: Some("=".to_string()),
        },
        &config,
    )
    .expect_err("invalid desired tags must fail");
    assert_eq!(error_kind(&tags_err), Some(MetaErrorKind::InvalidTagSyntax));
    assert_eq!(MetaErrorKind::InvalidTagSyntax.as_str(), "invalid_tag_syntax");

    let missing_desired = execute(
        &Command::DiffTags {
            current: "Env=prod".to_string(),
            desired: None,
        },
        &config,
    )
    .expect_err("missing desired tags must fail");
    assert_eq!(error_kind(&missing_desired), None);
}
