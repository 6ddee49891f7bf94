//! File attachments and their preview handles.
//!
//! A preview is an external resource (an object URL in a browser host) that
//! must be released exactly once. [`PreviewHandle`] releases on drop, so an
//! attachment's preview goes away whether the file entry is removed or the
//! owning [`EditSession`](super::EditSession) is saved, cancelled or simply
//! dropped.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;

use uuid::Uuid;

/// Metadata of a file picked in a file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Only images get a visual preview.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Creates and releases preview resources.
pub trait PreviewStore: Send + Sync {
    /// Allocates a preview and returns its URL.
    fn create(&self, file: &FileInfo) -> String;

    /// Frees a preview URL returned by [`create`](Self::create).
    fn release(&self, url: &str);
}

/// An allocated preview, released when dropped.
pub struct PreviewHandle {
    url: String,
    store: Arc<dyn PreviewStore>,
}

impl PreviewHandle {
    pub fn new(store: Arc<dyn PreviewStore>, file: &FileInfo) -> Self {
        let url = store.create(file);
        Self { url, store }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        log::debug!("Releasing preview {}", self.url);
        self.store.release(&self.url);
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle").field("url", &self.url).finish()
    }
}

/// A file attached to a form field.
#[derive(Debug)]
pub struct Attachment {
    pub field: String,
    pub file: FileInfo,
    /// Present for image files when a preview store is configured.
    pub preview: Option<PreviewHandle>,
}

/// In-memory preview store issuing `preview://<uuid>` URLs.
///
/// Tracks live URLs so hosts and tests can check nothing leaked.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreviewStore {
    live: Arc<Mutex<HashSet<String>>>,
}

impl MemoryPreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of previews created and not yet released.
    pub fn live_count(&self) -> usize {
        self.live.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live.lock().map(|g| g.contains(url)).unwrap_or(false)
    }
}

impl PreviewStore for MemoryPreviewStore {
    fn create(&self, file: &FileInfo) -> String {
        let url = format!("preview://{}", Uuid::new_v4());
        log::debug!("Created preview {} for {}", url, file.name);
        if let Ok(mut guard) = self.live.lock() {
            guard.insert(url.clone());
        }
        url
    }

    fn release(&self, url: &str) {
        let removed = self.live.lock().map(|mut g| g.remove(url)).unwrap_or(false);
        if !removed {
            log::warn!("Preview {} released twice or never created", url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_releases_on_drop() {
        let store = MemoryPreviewStore::new();
        let shared: Arc<dyn PreviewStore> = Arc::new(store.clone());

        let handle = PreviewHandle::new(shared, &FileInfo::new("a.png", 10, "image/png"));
        assert!(handle.url().starts_with("preview://"));
        assert_eq!(store.live_count(), 1);

        drop(handle);
        assert_eq!(store.live_count(), 0);
    }
}
