//! Failure handling: every stage aborts before the artifact is touched.

#[cfg(test)]
mod tests {
    use std::fs;

    use keyvaluetags_codegen::{
        CodegenError, DEFAULT_TEMPLATE, Generator, Mode, Stage, StaticClientTypes, TemplateSource,
    };

    use crate::{SAMPLE_SERVICES, generator_in, output_in, roster};

    #[test]
    fn test_should_leave_no_artifact_on_malformed_template() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("list_tags.rs.tera");
        let malformed = DEFAULT_TEMPLATE.replacen("{%- endfor %}", "", 1);
        fs::write(&template_path, malformed).unwrap();

        let output = output_in(dir.path());
        let err = Generator::builder()
            .output(output.clone())
            .template(TemplateSource::File(template_path))
            .build()
            .run(&roster(SAMPLE_SERVICES))
            .unwrap_err();

        assert_eq!(err.stage(), Stage::Render);
        assert!(!output.exists());
    }

    #[test]
    fn test_should_keep_previous_artifact_when_validation_fails() {
        let dir = tempfile::tempdir().unwrap();
        generator_in(dir.path())
            .run(&roster(SAMPLE_SERVICES))
            .unwrap();
        let output = output_in(dir.path());
        let previous = fs::read_to_string(&output).unwrap();

        let broken = DEFAULT_TEMPLATE.replace(") -> Result<KeyValueTags> {", ") -> Result<KeyValueTags> = {");
        let err = Generator::builder()
            .output(output.clone())
            .template(TemplateSource::Text {
                name: "broken.rs".to_owned(),
                text: broken,
            })
            .build()
            .run(&roster(SAMPLE_SERVICES))
            .unwrap_err();

        assert_eq!(err.stage(), Stage::Validate);
        assert!(matches!(err, CodegenError::Validate { line, .. } if line > 0));
        assert_eq!(fs::read_to_string(&output).unwrap(), previous);
        assert_eq!(fs::read_dir(output.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn test_should_abort_on_missing_client_type_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let output = output_in(dir.path());
        let err = Generator::builder()
            .output(output.clone())
            .client_types(Box::new(StaticClientTypes::default()))
            .build()
            .run(&roster(&["kms"]))
            .unwrap_err();

        assert_eq!(err.stage(), Stage::Configuration);
        assert!(err.to_string().contains("`kms`"));
        assert!(!output.exists());
    }

    #[test]
    fn test_should_fail_strict_run_on_dead_override_entries() {
        let dir = tempfile::tempdir().unwrap();
        let err = Generator::builder()
            .output(output_in(dir.path()))
            .strict(true)
            .build()
            .run(&roster(SAMPLE_SERVICES))
            .unwrap_err();

        assert_eq!(err.stage(), Stage::Configuration);
        assert!(err.to_string().contains("list_function:redshift"));
    }

    #[test]
    fn test_should_detect_drift_in_check_mode() {
        let dir = tempfile::tempdir().unwrap();
        let output = output_in(dir.path());
        generator_in(dir.path()).run(&roster(&["kms"])).unwrap();

        let checker = Generator::builder()
            .output(output.clone())
            .mode(Mode::Check)
            .build();
        assert!(checker.run(&roster(&["kms"])).is_ok());

        let err = checker.run(&roster(&["kms", "ssm"])).unwrap_err();
        assert!(matches!(err, CodegenError::Stale { .. }));
        assert_eq!(err.stage(), Stage::Write);
        assert!(!fs::read_to_string(&output).unwrap().contains("ssm_list_tags"));
    }
}
