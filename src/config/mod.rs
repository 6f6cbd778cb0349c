// Core configuration types
mod core;
mod loader;

pub use core::{
    default_boolean_types, default_scalar_types, default_void_type, DiagnosticsConfig,
    SchemaConfig, TypeSettings,
};

pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DiagnosticThreshold, TypeName};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SchemaConfig::default());
        assert!(config.types.is_boolean(&TypeName::from("boolean")));
        assert!(config.types.is_scalar(&TypeName::from("String")));
    }

    #[test]
    fn test_parse_overrides() {
        let config = parse_config(
            r#"
            [types]
            boolean = ["boolean", "Boolean"]
            void = "Unit"

            [diagnostics]
            fail_on = "warning"
            "#,
        )
        .unwrap();

        assert!(config.types.is_boolean(&TypeName::from("Boolean")));
        assert!(config.types.is_void(&TypeName::from("Unit")));
        assert_eq!(config.diagnostics.fail_on, DiagnosticThreshold::Warning);
    }

    #[test]
    fn test_empty_boolean_list_is_rejected() {
        let err = parse_config("[types]\nboolean = []\n").unwrap_err();
        assert!(err.to_string().contains("types.boolean"));
    }

    #[test]
    fn test_default_config_round_trips() {
        let rendered = default_config_toml().unwrap();
        assert_eq!(parse_config(&rendered).unwrap(), SchemaConfig::default());
    }

    #[test]
    fn test_discover_config_searches_ancestors() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[diagnostics]\nfail_on = \"warning\"\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.diagnostics.fail_on, DiagnosticThreshold::Warning);
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors("/a/b/c".into(), 2).collect();
        assert_eq!(dirs.len(), 2);
    }
}
