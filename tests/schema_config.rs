#[cfg(test)]
mod tests {
    use std::fs::write;
    use tempfile::TempDir;
    use spiking_neural_network_logs::{
        error::ConfigError,
        schema::{Command, CommandNames, EventKind, LogSchema},
    };

    #[test]
    pub fn test_defaults() {
        let schema = LogSchema::default();

        assert_eq!(schema.commands.name(Command::NetworkConnected), "networkConnected");
        assert_eq!(schema.commands.command("intrinsicPlasticity"), Some(Command::IntrinsicPlasticity));
        assert_eq!(schema.commands.command("unknown"), None);
        assert!(schema.parallel);
        assert_eq!(LogSchema::from_toml_str("").unwrap(), schema);
    }

    #[test]
    pub fn test_every_event_kind_has_a_command() {
        let commands = CommandNames::default();

        for kind in EventKind::ALL {
            let name = commands.name(kind.command());

            assert_eq!(commands.command(name), Some(kind.command()));
            assert!(!kind.required_fields().is_empty());
        }
    }

    #[test]
    pub fn test_strip_unit() {
        let schema = LogSchema::default();

        assert_eq!(schema.strip_unit("74.0 ms"), "74.0");
        assert_eq!(schema.strip_unit("-0.5 mV"), "-0.5");
        assert_eq!(schema.strip_unit("3 µm"), "3");
        assert_eq!(schema.strip_unit("12ms"), "12");
        assert_eq!(schema.strip_unit(" 0.25 "), "0.25");
        assert_eq!(schema.strip_unit("ms"), "ms");
        assert_eq!(schema.strip_unit("5 s"), "5 s");
    }

    #[test]
    pub fn test_partial_file() {
        let directory = TempDir::new().unwrap();
        let path = directory.path().join("schema.toml");
        write(&path, "parallel = false\nunits = [\"ms\", \"s\"]\n\n[commands]\nlearn = \"weightUpdate\"\n").unwrap();

        let schema = LogSchema::from_toml_file(&path).unwrap();

        assert!(!schema.parallel);
        assert_eq!(schema.units, vec![String::from("ms"), String::from("s")]);
        assert_eq!(schema.commands.name(Command::Learn), "weightUpdate");
        assert_eq!(schema.commands.name(Command::Fire), "fire");
        assert_eq!(schema.strip_unit("5 s"), "5");
    }

    #[test]
    pub fn test_config_errors() {
        assert!(matches!(LogSchema::from_toml_str("parallel = \"yes\""), Err(ConfigError::Parse(_))));
        assert!(matches!(LogSchema::from_toml_file("/nonexistent/schema.toml"), Err(ConfigError::Io(_))));
    }
}
