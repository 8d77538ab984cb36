use crate::domain::ports::PageStore;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalPageStore {
    base_path: String,
}

impl LocalPageStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl PageStore for LocalPageStore {
    async fn write_page(&self, path: &str, html: &str) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_page_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalPageStore::new(temp_dir.path().to_str().unwrap().to_string());

        store
            .write_page("acme/link/index.html", "<!DOCTYPE html>")
            .await
            .unwrap();

        let written = temp_dir.path().join("acme/link/index.html");
        assert_eq!(fs::read_to_string(written).unwrap(), "<!DOCTYPE html>");
    }
}
