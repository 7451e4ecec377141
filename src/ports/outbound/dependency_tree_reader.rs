use crate::shared::Result;
use std::path::Path;

/// DependencyTreeReader port for loading dependency tree text
///
/// This port abstracts where the tree comes from (typically the saved output
/// of `mvn dependency:tree`). Parsing is done by the remediation core.
pub trait DependencyTreeReader {
    /// Reads the raw tree text
    ///
    /// # Arguments
    /// * `path` - Path to the dependency tree file
    ///
    /// # Returns
    /// The raw file content
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is a symbolic link or exceeds the size limit
    /// - The file cannot be read due to permissions or I/O errors
    fn read_tree(&self, path: &Path) -> Result<String>;
}
