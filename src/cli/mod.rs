//! CLI argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

#[cfg(test)]
mod tests {
    use super::args::Cli;
    use clap::{CommandFactory, Parser};
    use config_manifest::config::Settings;
    use config_manifest::flatten::RootPolicy;
    use std::path::Path;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_required_flags() {
        let cli = Cli::try_parse_from(["config-manifest", "--config", "a.yaml", "--out", "b.json"])
            .unwrap();
        assert_eq!(cli.config, Path::new("a.yaml"));
        assert_eq!(cli.out, Path::new("b.json"));
        assert!(cli.separator.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn both_paths_are_required() {
        assert!(Cli::try_parse_from(["config-manifest", "--config", "a.yaml"]).is_err());
        assert!(Cli::try_parse_from(["config-manifest", "--out", "b.json"]).is_err());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from([
            "config-manifest", "--config", "a", "--out", "b", "-v", "-q",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let cli = Cli::try_parse_from([
            "config-manifest", "--config", "a", "--out", "b", "--root", "leaf", "--indent", "4",
        ])
        .unwrap();
        let mut settings = Settings::default();
        settings.flatten.separator = "/".into();

        cli.apply_overrides(&mut settings);

        assert_eq!(settings.flatten.separator, "/");
        assert_eq!(settings.flatten.root, RootPolicy::Leaf);
        assert_eq!(settings.output.indent, 4);
    }
}
