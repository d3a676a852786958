//! Manifest-driven generation.

#[cfg(test)]
mod tests {
    use std::fs;

    use keyvaluetags_codegen::{
        CodegenError, Generator, GenerationReport, Manifest, Outcome, Stage, StaticClientTypes,
    };

    use crate::output_in;

    fn run_manifest(text: &str) -> (tempfile::TempDir, Result<GenerationReport, CodegenError>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("services.toml");
        fs::write(&path, text).unwrap();

        let result = Manifest::load(&path).and_then(|manifest| {
            let roster = manifest.roster()?;
            Generator::builder()
                .output(output_in(dir.path()))
                .client_types(Box::new(StaticClientTypes::new(manifest.client_types)))
                .build()
                .run(&roster)
        });
        (dir, result)
    }

    #[test]
    fn test_should_generate_with_manifest_client_types() {
        let (dir, result) = run_manifest(
            r#"
services = ["ssm", "kms"]

[client_types]
kms = "aws_sdk_kms::Client"
ssm = "aws_sdk_ssm::Client"
"#,
        );
        let report = result.unwrap();
        assert_eq!(report.outcome, Outcome::Written);
        assert_eq!(report.functions, 2);

        let source = fs::read_to_string(output_in(dir.path())).unwrap();
        assert!(source.contains("conn: &aws_sdk_ssm::Client"));
        assert!(source.find("kms_list_tags").unwrap() < source.find("ssm_list_tags").unwrap());
    }

    #[test]
    fn test_should_reject_manifest_with_missing_client_type() {
        let (dir, result) = run_manifest(
            r#"
services = ["kms", "ssm"]

[client_types]
kms = "aws_sdk_kms::Client"
"#,
        );
        let err = result.unwrap_err();
        assert!(matches!(err, CodegenError::MissingClientType(ref s) if s == "ssm"));
        assert!(!output_in(dir.path()).exists());
    }

    #[test]
    fn test_should_reject_duplicate_services() {
        let (_dir, result) = run_manifest(r#"services = ["kms", "kms"]"#);
        let err = result.unwrap_err();
        assert!(matches!(err, CodegenError::DuplicateService(_)));
        assert_eq!(err.stage(), Stage::Configuration);
    }

    #[test]
    fn test_should_reject_invalid_service_names() {
        let (_dir, result) = run_manifest(r#"services = ["Route53"]"#);
        assert!(matches!(
            result.unwrap_err(),
            CodegenError::InvalidServiceName(_)
        ));
    }
}
