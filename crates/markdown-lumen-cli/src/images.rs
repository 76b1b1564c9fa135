use std::path::PathBuf;

use base64::{Engine, engine::general_purpose::STANDARD};
use markdown_lumen_engine::ImageStore;

/// Image extensions looked up for a reference id, with their MIME types.
const IMAGE_TYPES: [(&str, &str); 6] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
];

/// Serves `<dir>/<id>.<ext>` files as base64 `data:` URLs.
#[derive(Debug, Clone)]
pub struct DirImageStore {
    dir: PathBuf,
}

impl DirImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ImageStore for DirImageStore {
    fn get(&self, id: &str) -> Option<String> {
        // Ids are plain file stems; anything path-like is not ours.
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return None;
        }
        IMAGE_TYPES.iter().find_map(|(ext, mime)| {
            let path = self.dir.join(format!("{id}.{ext}"));
            let bytes = std::fs::read(&path).ok()?;
            log::debug!("resolved image {id} from {}", path.display());
            Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
        })
    }
}
