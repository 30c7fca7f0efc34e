// Host-side tests for the markdown mind map: outline building, SVG output
// and the load/copy/export lifecycle.

use folio_core::content::MIND_MAP_URL;
use folio_core::mindmap::{LoadState, OutlineTransformer, EXPORT_FILE_NAME, EXPORT_MIME};
use folio_core::{FolioError, MindMapViewer};

const DOC: &str = "\
---
title: tools
---
# AI Tools

## Chat
- [ChatGPT](https://chat.openai.com)
- **Claude**
  - Projects
  - Artifacts

## Images
1. Midjourney
2. Stable Diffusion

```
- not a node
```
";

#[test]
fn headings_and_lists_nest() {
    let root = OutlineTransformer::default().transform(DOC);
    assert_eq!(root.text, "AI Tools");
    let names: Vec<&str> = root.children.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(names, ["Chat", "Images"]);

    let chat = &root.children[0];
    assert_eq!(chat.children.len(), 2);
    assert_eq!(chat.children[0].text, "ChatGPT");
    assert_eq!(chat.children[0].link.as_deref(), Some("https://chat.openai.com"));
    assert_eq!(chat.children[1].text, "Claude");
    assert_eq!(chat.children[1].children.len(), 2);

    assert_eq!(root.children[1].children.len(), 2);
    assert_eq!(root.count(), 9);
    assert_eq!(root.max_depth(), 3);
}

#[test]
fn inline_markup_is_reduced_to_plain_labels() {
    let root = OutlineTransformer::default()
        .transform("# T\n- *Claude* and _Gemini_\n- `__init__` hooks\n- ![logo](x.png) Sora\n");
    let labels: Vec<&str> = root.children.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(labels, ["Claude and Gemini", "__init__ hooks", "Sora"]);
    assert!(root.children.iter().all(|c| c.link.is_none()));
}

#[test]
fn several_top_level_headings_share_a_root() {
    let root = OutlineTransformer::new("Tools").transform("# A\n# B\n- b1\n");
    assert_eq!(root.text, "Tools");
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[1].children[0].text, "b1");
}

#[test]
fn loaded_map_renders_and_exports() {
    let mut v = MindMapViewer::new(MIND_MAP_URL);
    v.begin_load();
    assert!(v.is_loading());
    assert!(v.finish_load(Ok(DOC.to_string())));
    assert!(!v.is_loading());

    let svg = v.svg().unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox=\"0 0 "));
    assert!(svg.contains(">Midjourney</text>"));
    assert!(svg.contains("href=\"https://chat.openai.com\""));

    assert_eq!(v.clipboard_text().unwrap(), DOC);
    let file = v.export_file().unwrap();
    assert_eq!(file.name, EXPORT_FILE_NAME);
    assert_eq!(file.mime, EXPORT_MIME);
    assert_eq!(file.contents, svg);
}

#[test]
fn failed_fetch_shows_message_and_disables_actions() {
    let mut v = MindMapViewer::new(MIND_MAP_URL);
    v.begin_load();
    assert!(!v.finish_load(Err(FolioError::Http(404))));
    assert!(!v.is_loading());
    assert_eq!(
        v.error_message().as_deref(),
        Some("Something Wrong: HTTP error! status: 404")
    );
    assert!(matches!(v.state(), LoadState::Failed(_)));
    assert!(matches!(v.svg(), Err(FolioError::NotReady)));
    assert!(v.clipboard_text().is_err());
}

#[test]
fn network_errors_are_reported_verbatim() {
    let mut v = MindMapViewer::new(MIND_MAP_URL);
    v.begin_load();
    v.finish_load(Err(FolioError::Network("Failed to fetch".into())));
    assert_eq!(
        v.error_message().as_deref(),
        Some("Something Wrong: network error: Failed to fetch")
    );
}
