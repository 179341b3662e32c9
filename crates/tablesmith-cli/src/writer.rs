use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tablesmith::Artifact;

/// Writes each artifact to `dir/<name>.<extension>`, creating `dir` when
/// missing. Existing files are overwritten.
pub fn write_flat(dir: impl AsRef<Path>, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let path = dir.join(artifact.file_name());
        fs::write(&path, &artifact.body)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_carry_the_kind_extension() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let artifacts = [
            Artifact::script("usp_Game_SelectAll", "SELECT 1\n"),
            Artifact::source("Game", "class Game {}\n"),
        ];

        let written = write_flat(&out, &artifacts).unwrap();
        assert_eq!(
            written,
            [out.join("usp_Game_SelectAll.sql"), out.join("Game.cs")]
        );
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), "SELECT 1\n");
    }
}
