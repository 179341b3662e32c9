use anyhow::{Context, Result};
use std::path::Path;
use tablesmith::GenerationOptions;

/// Loads generation options from a TOML file.
///
/// Keys left out of the file keep their default values.
pub fn load_options(path: impl AsRef<Path>) -> Result<GenerationOptions> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("failed to parse options file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablesmith::Dialect;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "dialect = \"2008\"\nnamespace = \"Arcade\"\ngrants = true\n").unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.dialect, Dialect::SqlServer2008);
        assert_eq!(options.namespace, "Arcade");
        assert!(options.grants);
        assert_eq!(options.procedure_prefix, "usp_");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "namespce = \"Arcade\"\n").unwrap();

        let err = load_options(&path).unwrap_err();
        assert!(format!("{err:#}").contains("namespce"));
    }
}
