//! Services that get a generated list-tags accessor.

/// Hand-maintained roster, kept in alphabetical order.
pub const SERVICE_NAMES: &[&str] = &[
    "acmpca",
    "amplify",
    "appmesh",
    "appstream",
    "appsync",
    "athena",
    "backup",
    "cloudhsmv2",
    "cloudwatch",
    "cloudwatchevents",
    "codecommit",
    "codedeploy",
    "codepipeline",
    "cognitoidentity",
    "cognitoidentityprovider",
    "configservice",
    "databasemigrationservice",
    "datasync",
    "dax",
    "devicefarm",
    "directoryservice",
    "docdb",
    "dynamodb",
    "ecr",
    "ecs",
    "efs",
    "eks",
    "elasticache",
    "elasticbeanstalk",
    "elasticsearchservice",
    "firehose",
    "fsx",
    "glue",
    "guardduty",
    "inspector",
    "iot",
    "iotanalytics",
    "iotevents",
    "kafka",
    "kinesisanalytics",
    "kinesisanalyticsv2",
    "kms",
    "lambda",
    "licensemanager",
    "mediaconnect",
    "medialive",
    "mediapackage",
    "mediastore",
    "mq",
    "neptune",
    "opsworks",
    "organizations",
    "qldb",
    "rds",
    "route53resolver",
    "sagemaker",
    "securityhub",
    "sfn",
    "sns",
    "ssm",
    "storagegateway",
    "swf",
    "transfer",
    "waf",
    "workspaces",
];
