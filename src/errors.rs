use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the run before anything is written.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Usage: md2r <path_to_markdown_file.md>")]
    Usage,

    #[error("Markdown file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not read markdown file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
