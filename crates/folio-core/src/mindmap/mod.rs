//! Markdown mind map for the tools page: fetched source text, its outline
//! tree, and the SVG rendering the page shows and exports.

mod outline;
mod svg;

pub use outline::{OutlineNode, OutlineTransformer};
pub use svg::{escape_xml, layout, render_svg, Layout, PlacedNode};

use crate::error::{FolioError, Result};

pub const EXPORT_FILE_NAME: &str = "mindmap.svg";
pub const EXPORT_MIME: &str = "image/svg+xml";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready {
        markdown: String,
        root: OutlineNode,
    },
    Failed(String),
}

/// A file the page offers for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub name: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

pub struct MindMapViewer {
    source_url: String,
    transformer: OutlineTransformer,
    state: LoadState,
}

impl MindMapViewer {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            transformer: OutlineTransformer::default(),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn begin_load(&mut self) {
        log::info!("[mindmap] fetching {}", self.source_url);
        self.state = LoadState::Loading;
    }

    /// Store the fetch outcome. Returns true when there is a map to draw;
    /// an empty document or a failed fetch draws nothing.
    pub fn finish_load(&mut self, fetched: Result<String>) -> bool {
        match fetched {
            Ok(markdown) => {
                let root = self.transformer.transform(&markdown);
                let drawable = !markdown.trim().is_empty();
                log::info!(
                    "[mindmap] loaded {} bytes, {} nodes",
                    markdown.len(),
                    root.count()
                );
                self.state = LoadState::Ready { markdown, root };
                drawable
            }
            Err(e) => {
                log::error!("[mindmap] load failed: {}", e);
                self.state = LoadState::Failed(e.to_string());
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Message shown in place of the map, formatted for the page.
    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            LoadState::Failed(msg) => Some(format!("Something Wrong: {}", msg)),
            _ => None,
        }
    }

    pub fn markdown(&self) -> Option<&str> {
        match &self.state {
            LoadState::Ready { markdown, .. } => Some(markdown),
            _ => None,
        }
    }

    pub fn root(&self) -> Option<&OutlineNode> {
        match &self.state {
            LoadState::Ready { root, .. } => Some(root),
            _ => None,
        }
    }

    pub fn svg(&self) -> Result<String> {
        self.root().map(render_svg).ok_or(FolioError::NotReady)
    }

    /// Raw markdown for the clipboard.
    pub fn clipboard_text(&self) -> Result<&str> {
        self.markdown().ok_or(FolioError::NotReady)
    }

    pub fn export_file(&self) -> Result<ExportFile> {
        Ok(ExportFile {
            name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            contents: self.svg()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_copy_before_load() {
        let v = MindMapViewer::new("https://example.invalid/map.md");
        assert!(matches!(v.clipboard_text(), Err(FolioError::NotReady)));
        assert!(v.export_file().is_err());
        assert!(v.error_message().is_none());
    }

    #[test]
    fn empty_document_draws_nothing() {
        let mut v = MindMapViewer::new("u");
        v.begin_load();
        assert!(v.is_loading());
        assert!(!v.finish_load(Ok(String::new())));
        assert!(!v.is_loading());
        assert_eq!(v.clipboard_text().ok(), Some(""));
    }
}
