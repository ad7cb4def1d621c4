use crate::errors::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Check the positional argument: present, and pointing at a regular file.
pub fn validate_input(arg: Option<&str>) -> Result<PathBuf, InputError> {
    let raw = arg.ok_or(InputError::Usage)?;
    let path = PathBuf::from(raw);
    if !path.is_file() {
        return Err(InputError::NotFound { path });
    }
    Ok(path)
}

/// Read the whole markdown file as UTF-8 text.
pub fn read_markdown(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}
