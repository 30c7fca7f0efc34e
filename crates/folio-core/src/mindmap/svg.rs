use super::outline::OutlineNode;
use crate::constants::{
    MINDMAP_BRANCH_COLORS, MINDMAP_COLUMN_WIDTH, MINDMAP_FONT_PX, MINDMAP_PADDING,
    MINDMAP_ROW_HEIGHT,
};
use std::fmt::Write;

/// A laid-out node, flattened in pre-order.
#[derive(Clone, Debug)]
pub struct PlacedNode<'a> {
    pub node: &'a OutlineNode,
    pub x: f32,
    pub y: f32,
    pub parent: Option<usize>,
    /// Index of the top-level branch this node hangs from.
    pub branch: usize,
}

#[derive(Clone, Debug)]
pub struct Layout<'a> {
    pub nodes: Vec<PlacedNode<'a>>,
    pub width: f32,
    pub height: f32,
}

/// Left-to-right tidy layout: leaves take consecutive rows and each parent
/// sits midway between its first and last child.
pub fn layout(root: &OutlineNode) -> Layout<'_> {
    let mut nodes = Vec::with_capacity(root.count());
    let mut rows = 0usize;
    place(root, 0, None, 0, &mut rows, &mut nodes);
    Layout {
        nodes,
        width: (root.max_depth() + 1) as f32 * MINDMAP_COLUMN_WIDTH + 2.0 * MINDMAP_PADDING,
        height: rows.max(1) as f32 * MINDMAP_ROW_HEIGHT + 2.0 * MINDMAP_PADDING,
    }
}

fn place<'a>(
    node: &'a OutlineNode,
    depth: usize,
    parent: Option<usize>,
    branch: usize,
    rows: &mut usize,
    out: &mut Vec<PlacedNode<'a>>,
) -> f32 {
    let me = out.len();
    out.push(PlacedNode {
        node,
        x: MINDMAP_PADDING + depth as f32 * MINDMAP_COLUMN_WIDTH,
        y: 0.0,
        parent,
        branch,
    });
    let y = if node.children.is_empty() {
        let y = MINDMAP_PADDING + (*rows as f32 + 0.5) * MINDMAP_ROW_HEIGHT;
        *rows += 1;
        y
    } else {
        let mut first = None;
        let mut last = 0.0;
        for (i, child) in node.children.iter().enumerate() {
            let child_branch = if depth == 0 { i } else { branch };
            let cy = place(child, depth + 1, Some(me), child_branch, rows, out);
            first.get_or_insert(cy);
            last = cy;
        }
        0.5 * (first.unwrap_or(last) + last)
    };
    out[me].y = y;
    y
}

/// Standalone SVG document for `root`. The `viewBox` is fitted to the
/// content so the map opens fully in view.
pub fn render_svg(root: &OutlineNode) -> String {
    let layout = layout(root);
    let mut edges = String::new();
    let mut labels = String::new();

    for placed in &layout.nodes {
        if let Some(p) = placed.parent.and_then(|p| layout.nodes.get(p)) {
            let sx = p.x + label_width(&p.node.text) + 6.0;
            let ex = placed.x - 4.0;
            let mx = 0.5 * (sx + ex);
            _ = write!(
                edges,
                "<path stroke=\"{}\" d=\"M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}\"/>",
                branch_color(placed.branch),
                sx,
                p.y,
                mx,
                p.y,
                mx,
                placed.y,
                ex,
                placed.y
            );
        }
        let text = escape_xml(&placed.node.text);
        match &placed.node.link {
            Some(href) => _ = write!(
                labels,
                "<a href=\"{}\" target=\"_blank\"><text x=\"{:.1}\" y=\"{:.1}\" dominant-baseline=\"middle\" fill=\"#1a5fb4\">{}</text></a>",
                escape_xml(href),
                placed.x,
                placed.y,
                text
            ),
            None => _ = write!(
                labels,
                "<text x=\"{:.1}\" y=\"{:.1}\" dominant-baseline=\"middle\" fill=\"#222\">{}</text>",
                placed.x, placed.y, text
            ),
        }
    }

    let mut svg = String::with_capacity(edges.len() + labels.len() + 256);
    _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w:.0} {h:.0}\" width=\"{w:.0}\" height=\"{h:.0}\" font-family=\"system-ui, sans-serif\" font-size=\"{f:.0}\">",
        w = layout.width,
        h = layout.height,
        f = MINDMAP_FONT_PX,
    );
    _ = write!(svg, "<g fill=\"none\" stroke-width=\"1.5\">{}</g>", edges);
    _ = write!(svg, "<g>{}</g>", labels);
    svg.push_str("</svg>");
    svg
}

fn branch_color(i: usize) -> &'static str {
    MINDMAP_BRANCH_COLORS[i % MINDMAP_BRANCH_COLORS.len()]
}

fn label_width(text: &str) -> f32 {
    let w = text.chars().count() as f32 * MINDMAP_FONT_PX * 0.6;
    w.min(MINDMAP_COLUMN_WIDTH - 16.0)
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
