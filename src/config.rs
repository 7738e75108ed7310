use std::path::PathBuf;

pub const CATALOG_VAR: &str = "OOP_LABS_CATALOG";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Settings shared by the demo binaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoConfig {
    /// Catalog file for the library demo; the bundled fixture is used when unset.
    pub catalog: Option<PathBuf>,
    pub use_colors: bool,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog = lookup(CATALOG_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            catalog,
            use_colors: lookup(NO_COLOR_VAR).is_none(),
        }
    }

    /// A path given on the command line wins over the environment.
    pub fn with_catalog_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.catalog = Some(PathBuf::from(path));
        }
        self
    }

    pub fn apply(&self) {
        if !self.use_colors {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_vars(vars(&[]));
        assert_eq!(config.catalog, None);
        assert!(config.use_colors);
    }

    #[test]
    fn test_catalog_and_no_color() {
        let config = DemoConfig::from_vars(vars(&[
            (CATALOG_VAR, "/tmp/books.toml"),
            (NO_COLOR_VAR, "1"),
        ]));
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/books.toml")));
        assert!(!config.use_colors);
    }

    #[test]
    fn test_blank_catalog_is_ignored() {
        let config = DemoConfig::from_vars(vars(&[(CATALOG_VAR, "  ")]));
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_cli_argument_overrides_env() {
        let config = DemoConfig::from_vars(vars(&[(CATALOG_VAR, "env.json")]))
            .with_catalog_arg(Some("cli.json".to_string()));
        assert_eq!(config.catalog, Some(PathBuf::from("cli.json")));

        let unchanged = DemoConfig::from_vars(vars(&[(CATALOG_VAR, "env.json")]))
            .with_catalog_arg(None);
        assert_eq!(unchanged.catalog, Some(PathBuf::from("env.json")));
    }
}
