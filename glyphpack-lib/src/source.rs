use anyhow::{ensure, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The bitmap text files a conversion is asked to process.
pub struct Source {
    files: Vec<PathBuf>,
}

impl Source {
    /// Resolves the given paths to concrete files; a directory is expanded
    /// to the `.txt` files inside it.
    pub fn locate(inputs: &[PathBuf]) -> Result<Self> {
        let mut files = Vec::new();

        for input in inputs {
            if input.is_dir() {
                let pattern = input.join("*.txt");
                let paths = glob::glob(&pattern.to_string_lossy())
                    .with_context(|| format!("Couldn't scan {}", input.display()))?;

                for path in paths {
                    files.push(path.with_context(|| format!("Couldn't scan {}", input.display()))?);
                }
            } else {
                files.push(input.clone());
            }
        }

        ensure!(!files.is_empty(), "No input files found");

        Ok(Self { files })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn read(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Couldn't read {}", path.display()))
    }
}
