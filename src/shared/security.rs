use crate::shared::error::FalconError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for any input file we read (dependency trees, scan reports, configs)
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a text input file after checking it is a regular, non-symlinked file
/// of acceptable size.
///
/// # Arguments
/// * `path` - The file to read
/// * `description` - Human-readable description used in error messages
///   (e.g. "dependency tree", "scan report")
///
/// # Errors
/// Returns `FalconError::SecurityError` for symlinks and oversized files and
/// `FalconError::FileReadError` for anything else that prevents reading.
pub fn read_input_file(path: &Path, description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| FalconError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(FalconError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} is a symbolic link", description),
            hint: "Pass the path of the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(FalconError::FileReadError {
            path: path.to_path_buf(),
            details: format!("The {} is not a regular file", description),
        }
        .into());
    }

    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(FalconError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "The {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                description,
                metadata.len(),
                MAX_INPUT_FILE_SIZE
            ),
            hint: "Trim the input or split it into several runs".to_string(),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        FalconError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Rejects writing through an existing symbolic link
pub fn ensure_not_symlink(path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(FalconError::SecurityError {
                path: path.to_path_buf(),
                reason: "Output path is a symbolic link".to_string(),
                hint: "Choose an output path that is not a symbolic link".to_string(),
            }
            .into());
        }
    }
    Ok(())
}
