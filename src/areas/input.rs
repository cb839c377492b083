use anyhow::Context;
use std::fmt::Display;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const STDIN_MARKER: &str = "-";

/// Where one side of a comparison is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }

    pub fn read_to_string(&self) -> anyhow::Result<String> {
        match self {
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read from stdin")?;
                Ok(text)
            }
            InputSource::File(path) => Self::read_file(path),
        }
    }

    fn read_file(path: &Path) -> anyhow::Result<String> {
        if path.is_dir() {
            anyhow::bail!("{} is a directory", path.display());
        }

        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

impl FromStr for InputSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == STDIN_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(s))
        })
    }
}

impl Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
