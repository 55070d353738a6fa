use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ObjError, ObjResult};

/// Resolves a logical resource name to its full text.
pub trait ResourceProvider {
    fn read_to_string(&self, name: &str) -> ObjResult<String>;
}

/// Looks resources up as `<root>/<name>.<extension>`.
#[derive(Debug, Clone)]
pub struct AssetDirectory {
    root: PathBuf,
    extension: String,
}

impl AssetDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        return AssetDirectory {
            root: root.as_ref().to_path_buf(),
            extension: "obj".to_string(),
        };
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        return self;
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        return self.root.join(format!("{}.{}", name, self.extension));
    }
}

impl ResourceProvider for AssetDirectory {
    fn read_to_string(&self, name: &str) -> ObjResult<String> {
        let path = self.path_for(name);
        log::debug!("reading {}", path.display());

        return fs::read_to_string(&path).map_err(|source| ObjError::ResourceNotFound {
            name: name.to_string(),
            source,
        });
    }
}
