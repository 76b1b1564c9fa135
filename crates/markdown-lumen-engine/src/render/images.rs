use std::collections::HashMap;

/// Out-of-band image storage keyed by identifier.
///
/// Image nodes whose URL starts with the configured reference prefix are
/// looked up here instead of being rendered literally.
pub trait ImageStore {
    /// Returns a `data:` URL (or any URL) for the image, if known.
    fn get(&self, id: &str) -> Option<String>;
}

/// An [`ImageStore`] held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageStore {
    images: HashMap<String, String>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, url: impl Into<String>) {
        self.images.insert(id.into(), url.into());
    }
}

impl ImageStore for MemoryImageStore {
    fn get(&self, id: &str) -> Option<String> {
        self.images.get(id).cloned()
    }
}

/// Resolves `url` against `store` when it carries `prefix`.
///
/// Unknown references and URLs without the prefix come back unchanged.
pub fn resolve_image_url(url: &str, prefix: &str, store: Option<&dyn ImageStore>) -> String {
    if prefix.is_empty() {
        return url.to_string();
    }
    url.strip_prefix(prefix)
        .and_then(|id| store?.get(id))
        .unwrap_or_else(|| url.to_string())
}
