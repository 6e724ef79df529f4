//! Tests for the config module

#[cfg(test)]
mod tests {
    use crate::config::{Config, ConfigV1, EngineConfig, ManifestTemplate};
    use crate::error::Error;
    use crate::renderer::{Data, Template};
    use minijinja::value::Value;
    use serde_json::json;

    fn parse_yaml(content: &str) -> ConfigV1 {
        let Config::V1(config) = serde_yaml::from_str(content).unwrap();
        config
    }

    #[test]
    fn engine_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.extension, "html");
        assert!(!config.auto_escape);
        assert!(config.trim_blocks);
        assert!(!config.lstrip_blocks);
        assert!(!config.keep_trailing_newline);
        assert!(!config.strict_undefined);
    }

    #[test]
    fn parses_yaml_manifest() {
        let config = parse_yaml(
            r#"
schemaVersion: v1
extension: txt
auto_escape: true
blocks:
  layout: page
  item: partials/item
vars:
  common:
    site: Demo
  item:
    class: row
params:
  lang: en
"#,
        );
        assert_eq!(config.engine.extension, "txt");
        assert!(config.engine.auto_escape);
        assert!(config.engine.trim_blocks);
        assert_eq!(config.blocks["layout"], "page");
        assert_eq!(config.blocks["item"], "partials/item");
        assert_eq!(config.vars["common"], json!({ "site": "Demo" }));
        assert_eq!(config.params["lang"], json!("en"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_dotted_extension() {
        let config = parse_yaml("schemaVersion: v1\nextension: .html\n");
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn rejects_empty_extension() {
        let config = parse_yaml("schemaVersion: v1\nextension: ''\n");
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn loads_json_before_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("inlay.json"),
            r#"{"schemaVersion": "v1", "blocks": {"layout": "from-json"}}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("inlay.yaml"),
            "schemaVersion: v1\nblocks:\n  layout: from-yaml\n",
        )
        .unwrap();

        let Config::V1(config) = Config::load_config(dir.path()).unwrap();
        assert_eq!(config.blocks["layout"], "from-json");
    }

    #[test]
    fn missing_manifest_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_config(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.to_string().contains("inlay.json, inlay.yaml, inlay.yml"));
    }

    #[test]
    fn manifest_template_overlays_data_on_common_scope() {
        let template = ManifestTemplate::new(parse_yaml(
            r#"
schemaVersion: v1
blocks:
  layout: page
vars:
  common:
    site: Demo
    title: Default
  layout: not-a-mapping
"#,
        ));
        let mut params = Data::new();
        params.insert("lang".into(), json!("en"));
        let mut data = Data::new();
        data.insert("title".into(), json!("Home"));

        let blocks = template.init(&params, &data).unwrap();
        let scope = blocks.scope("layout", None);

        assert_eq!(blocks.file("layout"), Some("page"));
        assert_eq!(scope["site"], Value::from("Demo"));
        assert_eq!(scope["title"], Value::from("Home"));
        assert_eq!(scope["params"].get_attr("lang").unwrap(), Value::from("en"));
    }
}
