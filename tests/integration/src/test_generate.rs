//! Generation of the list-tags module from a roster.

#[cfg(test)]
mod tests {
    use std::fs;

    use keyvaluetags_codegen::Outcome;

    use crate::{SAMPLE_SERVICES, find_fn, generator_in, output_in, parse, roster};

    fn generate(names: &[&str]) -> String {
        let dir = tempfile::tempdir().unwrap();
        let report = generator_in(dir.path()).run(&roster(names)).unwrap();
        assert_eq!(report.outcome, Outcome::Written);
        fs::read_to_string(output_in(dir.path())).unwrap()
    }

    #[test]
    fn test_should_produce_identical_output_across_runs() {
        assert_eq!(generate(SAMPLE_SERVICES), generate(SAMPLE_SERVICES));
    }

    #[test]
    fn test_should_ignore_roster_order() {
        let mut reversed = SAMPLE_SERVICES.to_vec();
        reversed.reverse();
        assert_eq!(generate(SAMPLE_SERVICES), generate(&reversed));
    }

    #[test]
    fn test_should_write_canonically_formatted_rust() {
        let source = generate(SAMPLE_SERVICES);
        let reformatted = prettyplease::unparse(&parse(&source));
        assert_eq!(source, reformatted);
    }

    #[test]
    fn test_should_start_with_generated_header_and_one_import_block() {
        let source = generate(SAMPLE_SERVICES);
        assert!(source.starts_with("//! Code generated by listtags-gen; DO NOT EDIT.\n"));

        let file = parse(&source);
        let uses = file
            .items
            .iter()
            .filter(|item| matches!(item, syn::Item::Use(_)))
            .count();
        assert_eq!(uses, 1);
    }

    #[test]
    fn test_should_emit_one_function_per_service_in_sorted_order() {
        let file = parse(&generate(&["waf", "kms", "acmpca"]));
        let names: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Fn(f) => Some(f.sig.ident.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(names, ["acmpca_list_tags", "kms_list_tags", "waf_list_tags"]);
    }

    #[test]
    fn test_should_add_resource_type_parameter_only_for_ssm() {
        let file = parse(&generate(SAMPLE_SERVICES));

        let ssm = find_fn(&file, "ssm_list_tags").unwrap();
        assert_eq!(ssm.sig.inputs.len(), 3);

        for name in SAMPLE_SERVICES.iter().filter(|s| **s != "ssm") {
            let f = find_fn(&file, &format!("{name}_list_tags")).unwrap();
            assert_eq!(f.sig.inputs.len(), 2, "{name} should take two arguments");
        }

        let source = generate(&["ssm"]);
        assert!(source.contains(".resource_id(identifier)"));
        assert!(source.contains(".resource_type(resource_type)"));
    }

    #[test]
    fn test_should_use_overridden_operation_and_fields() {
        let source = generate(&["kms", "dynamodb", "acmpca"]);
        assert!(source.contains(
            "aws_sdk_kms::operation::list_resource_tags::ListResourceTagsInput::builder()"
        ));
        assert!(source.contains(".key_id(identifier)"));
        assert!(source.contains("list_tags_of_resource::ListTagsOfResourceInput"));
        assert!(source.contains(".certificate_authority_arn(identifier)"));
    }

    #[test]
    fn test_should_use_defaults_for_services_without_overrides() {
        let source = generate(&["qldb"]);
        assert!(source.contains("conn: &aws_sdk_qldb::Client"));
        assert!(source.contains(
            "aws_sdk_qldb::operation::list_tags_for_resource::ListTagsForResourceInput::builder()"
        ));
        assert!(source.contains(".resource_arn(identifier)"));
        assert!(source.contains("Ok(qldb_key_value_tags(output.tags))"));
    }

    #[test]
    fn test_should_chain_nested_tags_field() {
        let source = generate(&["waf", "cloudhsmv2"]);
        assert!(source.contains("waf_key_value_tags(output.tag_info_for_resource.tag_list)"));
        assert!(source.contains("cloudhsmv2_key_value_tags(output.tag_list)"));
    }

    #[test]
    fn test_should_name_renamed_sdk_crates() {
        let source = generate(&["configservice"]);
        assert!(source.contains("conn: &aws_sdk_config::Client"));
        assert!(source.contains("configservice_list_tags"));
    }

    #[test]
    fn test_should_keep_doc_comments() {
        let source = generate(&["kms"]);
        assert!(source.contains("/// `KmsListTags` lists kms service tags."));
    }
}
