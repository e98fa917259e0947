use crate::error::{PatchError, Result};
use std::path::{Path, PathBuf};

pub const CATALOG_RELATIVE_PATH: &str = "gradle/libs.versions.toml";

/// ProjectScannerAgent locates the version catalog inside a project
pub struct ProjectScannerAgent {
    project_path: PathBuf,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the catalog path, or `CatalogNotFound` when it is missing.
    pub fn locate_catalog(&self) -> Result<PathBuf> {
        if !self.project_path.is_dir() {
            return Err(PatchError::ProjectValidation(format!(
                "Path '{}' is not a directory",
                self.project_path.display()
            )));
        }

        let catalog_path = self.project_path.join(CATALOG_RELATIVE_PATH);
        if !catalog_path.is_file() {
            return Err(PatchError::CatalogNotFound(catalog_path));
        }

        Ok(catalog_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn locates_catalog_under_gradle_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("gradle")).unwrap();
        fs::write(dir.path().join(CATALOG_RELATIVE_PATH), "[versions]\n").unwrap();

        let path = ProjectScannerAgent::new(dir.path()).locate_catalog().unwrap();
        assert!(path.ends_with("gradle/libs.versions.toml"));
    }

    #[test]
    fn missing_catalog_is_not_found() {
        let dir = tempdir().unwrap();
        let err = ProjectScannerAgent::new(dir.path())
            .locate_catalog()
            .unwrap_err();
        assert!(matches!(err, PatchError::CatalogNotFound(_)));
    }

    #[test]
    fn catalog_directory_is_not_a_catalog() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(CATALOG_RELATIVE_PATH)).unwrap();
        let err = ProjectScannerAgent::new(dir.path())
            .locate_catalog()
            .unwrap_err();
        assert!(matches!(err, PatchError::CatalogNotFound(_)));
    }

    #[test]
    fn rejects_file_as_project_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("build.gradle.kts");
        fs::write(&file_path, "").unwrap();
        let err = ProjectScannerAgent::new(&file_path)
            .locate_catalog()
            .unwrap_err();
        assert!(matches!(err, PatchError::ProjectValidation(_)));
    }
}
