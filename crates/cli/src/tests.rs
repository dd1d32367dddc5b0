use std::io::Write;

use super::*;

#[test]
fn parses_resolve_arguments() {
	let cli = Cli::try_parse_from(["folio", "-v", "resolve", "panels.toml", "source", "--builtins", "--data", "{}"]).expect("valid args");

	assert!(cli.verbose);
	match cli.command {
		Command::Resolve { source, name, data } => {
			assert_eq!(source.config, PathBuf::from("panels.toml"));
			assert!(source.builtins);
			assert_eq!(name.as_deref(), Some("source"));
			assert_eq!(data.as_deref(), Some("{}"));
		}
		other => panic!("unexpected command {other:?}"),
	}
}

#[test]
fn data_must_be_an_object() {
	assert!(parse_data(None).expect("empty").is_empty());
	assert_eq!(parse_data(Some(r#"{"a": 1}"#)).expect("object").len(), 1);
	assert!(parse_data(Some("[1, 2]")).is_err());
	assert!(parse_data(Some("{")).is_err());
}

#[test]
fn load_combines_builtins_and_config() {
	let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("tempfile");
	writeln!(file, "[[drawer]]\nname = \"a11y\"\npartial = \"panels/a11y\"").expect("write");

	let source = Source {
		config: file.path().to_path_buf(),
		builtins: true,
		group: None,
	};
	let registry = load(&source).expect("load");
	assert_eq!(registry.count(Some("drawer")), 4);
	assert_eq!(registry.count(None), 6);

	let plain = Source { builtins: false, ..source };
	assert_eq!(load(&plain).expect("load").count(None), 1);
}
