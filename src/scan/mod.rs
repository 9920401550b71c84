pub mod filesystem;

use crate::config::{DEFAULT_CONFIG_FILE, DEFAULT_LOCAL_FILE};
use crate::error::{Result, ScreenerError};
use crate::types::document::Document;
use filesystem::{has_extension, list_files};
use std::path::Path;
use tracing::{debug, warn};

/// Loads candidate documents from a single file or from every matching file
/// under a directory. Directory entries are returned in file-name order.
pub fn load_documents(path: &Path, extensions: &[String]) -> Result<Vec<Document>> {
    if !path.exists() {
        return Err(ScreenerError::PathNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![read_document(path)?]);
    }

    let local_config = path.join(DEFAULT_LOCAL_FILE);
    let mut documents = Vec::new();
    for file in list_files(path) {
        if file.file_name().and_then(|name| name.to_str()) == Some(DEFAULT_CONFIG_FILE)
            || file == local_config
            || !has_extension(&file, extensions)
        {
            continue;
        }
        match read_document(&file) {
            Ok(document) => documents.push(document),
            Err(ScreenerError::Io(e)) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!(file = %file.display(), "skipping non UTF-8 document");
            }
            Err(e) => return Err(e),
        }
    }
    debug!(count = documents.len(), root = %path.display(), "loaded documents");
    Ok(documents)
}

fn read_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(name, &content))
}
