use ecsmeta::{ArnFormat, MetaErrorKind, arn_format, is_long_arn_format};

const ECS_ARNS: &[(&str, bool)] = &[
    (
        "arn:aws:ecs:region:aws_account_id:container-instance/container-instance-id",
        false,
    ),
    (
        "arn:aws:ecs:region:aws_account_id:container-instance/cluster-name/container-instance-id",
        true,
    ),
    ("arn:aws:ecs:region:aws_account_id:service/service-name", false),
    (
        "arn:aws:ecs:region:aws_account_id:service/cluster-name/service-name",
        true,
    ),
    ("arn:aws:ecs:region:aws_account_id:task/task-id", false),
    ("arn:aws:ecs:region:aws_account_id:task/cluster-name/task-id", true),
];

#[test]
fn recognized_kinds_classify_by_cluster_segment() {
    for (arn, is_long) in ECS_ARNS {
        let classified = is_long_arn_format(arn)
            .unwrap_or_else(|err| panic!("{arn} should classify: {err}"));
        assert_eq!(classified, *is_long, "is_long_arn_format({arn})");
    }
}

#[test]
fn arn_format_reports_long_and_short() {
    assert_eq!(
        arn_format("arn:aws:ecs:us-east-1:123456789012:service/prod/web").expect("valid arn"),
        ArnFormat::Long
    );
    assert_eq!(
        arn_format("arn:aws:ecs:us-east-1:123456789012:service/web").expect("valid arn"),
        ArnFormat::Short
    );
    assert_eq!(ArnFormat::Long.to_string(), "long");
}

#[test]
fn unrecognized_resource_types_are_short() {
    for arn in [
        "arn:aws:ecs:us-east-1:123456789012:cluster/prod",
        "arn:aws:ecs:us-east-1:123456789012:task-definition/web:12",
        "arn:aws:s3:::bucket/a/b/c",
    ] {
        assert!(
            !is_long_arn_format(arn).unwrap_or_else(|err| panic!("{arn} should classify: {err}")),
            "{arn} should be short"
        );
    }
}

#[test]
fn malformed_input_is_an_error_not_short() {
    for arn in [
        "",
        "not-an-arn",
        "arn:aws:ecs:region:account",
        "urn:aws:ecs:region:account:service/web",
        "arn::ecs:region:account:service/web",
        "arn:aws::region:account:service/web",
        "arn:aws:ecs:region:account:",
        "arn:aws:ecs:region:account:service",
        "arn:aws:ecs:region:account:service/a/b/c",
        "arn:aws:ecs:region:account:service/cluster//id",
        "arn:aws:ecs:region:account:task/",
    ] {
        let err = is_long_arn_format(arn).expect_err("malformed arn must fail");
        assert_eq!(err.kind, MetaErrorKind::MalformedArn, "{arn}: {err}");
    }
}
