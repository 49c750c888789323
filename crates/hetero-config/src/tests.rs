//! Tests for benchmark configuration.

use std::io::Write;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        name = "containers"
        rustc = "/opt/rust/bin/rustc"
        edition = "2018"
        opt_level = "2"
        warmup_count = 0
        run_count = 4
        sizes = [1, 2, 4]
        templates = ["make_tuple", "set_make"]
        library_paths = ["target/release/deps"]
        csv_output = "out.csv"

        [externs]
        hetero = "target/release/libhetero.rlib"
    "#;

    let config = BenchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.name, "containers");
    assert_eq!(config.rustc, PathBuf::from("/opt/rust/bin/rustc"));
    assert_eq!(config.edition, "2018");
    assert_eq!(config.opt_level, "2");
    assert_eq!(config.warmup_count, 0);
    assert_eq!(config.run_count, 4);
    assert_eq!(config.sizes, vec![1, 2, 4]);
    assert_eq!(config.templates.len(), 2);
    assert_eq!(config.templates[1].name(), "set_make");
    assert_eq!(config.library_paths, vec![PathBuf::from("target/release/deps")]);
    assert_eq!(
        config.externs.get("hetero"),
        Some(&PathBuf::from("target/release/libhetero.rlib"))
    );
    assert_eq!(config.csv_output, Some(PathBuf::from("out.csv")));
    assert_eq!(config.markdown_output, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        name: containers
        run_count: 2
        sizes: [3, 6]
        templates:
          - take_while
          - name: custom
            path: custom.rs.tmpl
    "#;

    let config = BenchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.run_count, 2);
    assert_eq!(config.sizes, vec![3, 6]);
    assert_eq!(
        config.templates[1],
        TemplateSpec::File {
            name: "custom".to_string(),
            path: PathBuf::from("custom.rs.tmpl"),
        }
    );
}

#[test]
fn test_missing_fields_take_defaults() {
    let config = BenchConfig::from_toml_str("").unwrap();
    assert_eq!(config, BenchConfig::default());
    assert_eq!(config.edition, "2021");
    assert_eq!(config.run_count, 3);
    assert!(config.templates.is_empty());
}

#[test]
fn test_builder() {
    let config = BenchConfig::new()
        .with_name("quick")
        .with_rustc("rustc-nightly")
        .with_opt_level("s")
        .with_runs(0, 1)
        .with_sizes([2, 8])
        .with_template(TemplateSpec::Builtin("tuple_t".into()))
        .with_library_path("deps")
        .with_extern("hetero", "libhetero.rlib")
        .with_work_dir("/tmp/bench")
        .with_csv_output("a.csv")
        .with_markdown_output("a.md");

    assert_eq!(config.name, "quick");
    assert_eq!(config.run_count, 1);
    assert_eq!(config.sizes, vec![2, 8]);
    assert_eq!(config.externs.len(), 1);
    assert_eq!(config.markdown_output, Some(PathBuf::from("a.md")));
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let invalid = |config: BenchConfig| matches!(config.validate(), Err(ConfigError::Invalid(_)));

    assert!(invalid(BenchConfig::new().with_runs(1, 0)));
    assert!(invalid(BenchConfig::new().with_sizes([])));
    assert!(invalid(BenchConfig::new().with_opt_level("4")));
    assert!(invalid(BenchConfig {
        edition: "2020".into(),
        ..BenchConfig::default()
    }));
    assert!(invalid(
        BenchConfig::new()
            .with_template(TemplateSpec::Builtin("make_tuple".into()))
            .with_template(TemplateSpec::Builtin("make_tuple".into()))
    ));
}

#[test]
fn test_load_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let yaml_path = dir.path().join("bench.yaml");
    let mut file = std::fs::File::create(&yaml_path).unwrap();
    writeln!(file, "run_count: 7").unwrap();
    assert_eq!(BenchConfig::load(&yaml_path).unwrap().run_count, 7);

    let toml_path = dir.path().join("bench.toml");
    std::fs::write(&toml_path, "run_count = 9\n").unwrap();
    assert_eq!(BenchConfig::load(&toml_path).unwrap().run_count, 9);

    let missing = BenchConfig::load(dir.path().join("missing.toml"));
    assert!(matches!(missing, Err(ConfigError::Io(_))));
}

#[test]
fn test_parse_errors_are_reported() {
    assert!(matches!(
        BenchConfig::from_toml_str("run_count = \"many\""),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        BenchConfig::from_yaml_str("sizes: {"),
        Err(ConfigError::Yaml(_))
    ));
}
