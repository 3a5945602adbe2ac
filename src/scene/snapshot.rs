use crate::scene::model::Viewport;
use crate::scene::playback::FrameRecord;

/// Stroke/fill used for every outline in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotStyle {
    /// SVG `fill` value.
    pub fill: String,
    /// SVG `stroke` value.
    pub stroke: String,
}

impl Default for SnapshotStyle {
    fn default() -> Self {
        Self {
            fill: "none".to_string(),
            stroke: "#111".to_string(),
        }
    }
}

/// Standalone SVG document showing `record`'s outlines in `viewport`.
pub fn svg_document(record: &FrameRecord, viewport: Viewport, style: &SnapshotStyle) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = viewport.width,
        h = viewport.height,
    );
    for (id, d) in &record.paths {
        out.push_str(&format!(
            "  <path id=\"{}\" d=\"{}\" fill=\"{}\" stroke=\"{}\"/>\n",
            escape_attr(id),
            escape_attr(d),
            escape_attr(&style.fill),
            escape_attr(&style.stroke),
        ));
    }
    out.push_str("</svg>\n");
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/snapshot.rs"]
mod tests;
