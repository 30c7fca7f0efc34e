use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// One node of the mind map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutlineNode {
    pub text: String,
    pub link: Option<String>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Number of nodes in this subtree, self included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::count).sum::<usize>()
    }

    /// Depth of the deepest descendant (a lone node has depth 0).
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.max_depth())
            .max()
            .unwrap_or(0)
    }
}

/// Label being collected for a heading or list item.
struct Pending {
    depth: usize,
    text: String,
    link: Option<String>,
}

/// Turns a markdown outline into a tree: headings nest by level, list items
/// nest under the nearest heading and by list nesting. Paragraph text, code
/// blocks, images and front matter never become nodes; inline markup is
/// flattened to its text and the first link is kept.
#[derive(Clone, Debug)]
pub struct OutlineTransformer {
    root_title: String,
    options: Options,
}

impl Default for OutlineTransformer {
    fn default() -> Self {
        Self::new("Mind map")
    }
}

impl OutlineTransformer {
    /// `root_title` names the root when the document has more than one
    /// top-level entry.
    pub fn new(root_title: impl Into<String>) -> Self {
        Self {
            root_title: root_title.into(),
            options: Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TABLES
                | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS,
        }
    }

    pub fn transform(&self, markdown: &str) -> OutlineNode {
        let mut stack: Vec<(usize, OutlineNode)> = vec![(0, OutlineNode::default())];
        let mut pending: Option<Pending> = None;
        let mut heading_depth = 0usize;
        let mut list_depth = 0usize;
        // inside an image, code block or front matter
        let mut skip = 0usize;

        for event in Parser::new_ext(markdown, self.options) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    flush(&mut stack, pending.take());
                    pending = Some(Pending::new(level as usize));
                }
                Event::End(TagEnd::Heading(level)) => {
                    heading_depth = level as usize;
                    flush(&mut stack, pending.take());
                }
                Event::Start(Tag::List(_)) => {
                    // a nested list closes its parent item's label
                    flush(&mut stack, pending.take());
                    list_depth += 1;
                }
                Event::End(TagEnd::List(_)) => list_depth = list_depth.saturating_sub(1),
                Event::Start(Tag::Item) => {
                    flush(&mut stack, pending.take());
                    pending = Some(Pending::new(heading_depth + list_depth.max(1)));
                }
                Event::End(TagEnd::Item) => flush(&mut stack, pending.take()),
                Event::Start(Tag::Image { .. } | Tag::CodeBlock(_) | Tag::MetadataBlock(_)) => {
                    skip += 1
                }
                Event::End(TagEnd::Image | TagEnd::CodeBlock | TagEnd::MetadataBlock(_)) => {
                    skip = skip.saturating_sub(1)
                }
                Event::Start(Tag::Link { dest_url, .. }) if skip == 0 => {
                    if let Some(p) = pending.as_mut() {
                        p.link.get_or_insert_with(|| dest_url.trim().to_string());
                    }
                }
                Event::Text(t) | Event::Code(t) if skip == 0 => {
                    if let Some(p) = pending.as_mut() {
                        p.text.push_str(&t);
                    }
                }
                Event::SoftBreak | Event::HardBreak | Event::End(TagEnd::Paragraph) => {
                    if let Some(p) = pending.as_mut() {
                        p.text.push(' ');
                    }
                }
                _ => {}
            }
        }
        flush(&mut stack, pending);
        while stack.len() > 1 {
            fold_top(&mut stack);
        }

        let mut root = stack.pop().map(|(_, n)| n).unwrap_or_default();
        if root.children.len() == 1 {
            root = root.children.remove(0);
        } else {
            root.text = self.root_title.clone();
        }
        root
    }
}

impl Pending {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            text: String::new(),
            link: None,
        }
    }
}

/// Attach a finished label at its depth; empty labels are dropped.
fn flush(stack: &mut Vec<(usize, OutlineNode)>, pending: Option<Pending>) {
    let Some(p) = pending else {
        return;
    };
    let text = p.text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return;
    }
    while stack.len() > 1 && stack.last().map(|(d, _)| *d >= p.depth).unwrap_or(false) {
        fold_top(stack);
    }
    stack.push((
        p.depth,
        OutlineNode {
            text,
            link: p.link,
            children: Vec::new(),
        },
    ));
}

fn fold_top(stack: &mut Vec<(usize, OutlineNode)>) {
    if let Some((_, node)) = stack.pop() {
        if let Some((_, parent)) = stack.last_mut() {
            parent.children.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(node: &OutlineNode) -> Vec<&str> {
        node.children.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn emphasis_and_code_flatten_to_text() {
        let root = OutlineTransformer::default()
            .transform("# T\n- *Claude* and _Gemini_\n- `__init__` hooks\n- ~~old~~ **new**\n");
        assert_eq!(root.text, "T");
        assert_eq!(texts(&root), ["Claude and Gemini", "__init__ hooks", "old new"]);
    }

    #[test]
    fn images_drop_out_of_labels() {
        let root = OutlineTransformer::default().transform("# T\n- ![logo](x.png) Sora\n");
        assert_eq!(texts(&root), ["Sora"]);
        assert!(root.children[0].link.is_none());
    }

    #[test]
    fn first_link_is_kept() {
        let root = OutlineTransformer::default().transform(
            "# T\n- **Chat**: [ChatGPT](https://chat.openai.com) and [Claude](https://claude.ai)\n",
        );
        assert_eq!(texts(&root), ["Chat: ChatGPT and Claude"]);
        assert_eq!(root.children[0].link.as_deref(), Some("https://chat.openai.com"));
    }

    #[test]
    fn paragraphs_under_headings_are_not_nodes() {
        let root = OutlineTransformer::default().transform("# T\nsome prose\n\n- a\n");
        assert_eq!(texts(&root), ["a"]);
    }

    #[test]
    fn lists_without_headings_hang_from_the_root() {
        let root = OutlineTransformer::new("Map").transform("- a\n  - a1\n- b\n");
        assert_eq!(root.text, "Map");
        assert_eq!(texts(&root), ["a", "b"]);
        assert_eq!(texts(&root.children[0]), ["a1"]);
    }

    #[test]
    fn empty_items_are_skipped() {
        let root = OutlineTransformer::default().transform("# T\n\n-\n- x\n");
        assert_eq!(texts(&root), ["x"]);
    }
}
