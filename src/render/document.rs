//! Standalone SVG documents.
//!
//! A live display resolves the theme through its own stylesheet. Files and rasters have no such
//! host, so the document carries a stylesheet with the theme's values written in.

use crate::{config::theme::Theme, scene::container::Scene};

fn stylesheet(theme: &Theme) -> String {
    let vars: String = theme
        .properties()
        .iter()
        .filter(|(name, _)| *name != "--logo")
        .map(|(name, value)| format!(" {name}: {value};"))
        .collect();
    format!(
        "\
svg {{{vars} }}
.hide {{ display: none; }}
.unhide {{ display: unset; }}
text {{ fill: {text}; font-family: sans-serif; }}
.center-text {{ text-anchor: middle; dominant-baseline: middle; font-size: 40px; }}
.small-text {{ font-size: 18px; }}
.smaller-text {{ font-size: 12px; }}
#face-bg {{ fill: {bg_fill}; stroke: {bg_stroke}; }}
#face-circle {{ fill: {face}; }}
#minute-markers line, #hour-markers line {{ stroke: {markers}; }}
#hands-of-time line {{ stroke: {hands}; stroke-linecap: round; stroke-width: 6; }}
#hands-of-time #seconds {{ stroke-width: 2; }}
#digi-padding {{ fill: {bg_fill}; }}
#digi-border {{ fill: none; stroke: {border}; stroke-width: 8; }}
#digi-screen {{ fill: {face}; }}
.segment, .separator-dot {{ fill: {hands}; }}
.digi-text {{ font-size: 44px; text-anchor: middle; }}
",
        text = theme.text_color,
        bg_fill = theme.face_bg_fill,
        bg_stroke = theme.face_bg_stroke,
        face = theme.face_fill,
        markers = theme.markers_color,
        hands = theme.hands_color,
        border = theme.digital_border,
    )
}

/// Wrap the scene into a self-contained `<svg>` document styled with `theme`.
pub fn document(scene: &Scene, theme: &Theme) -> String {
    let (w, h) = (scene.width(), scene.height());
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\" style=\"background-color: {bg}\"><style>\n{css}</style>{body}</svg>",
        bg = theme.page_background,
        css = stylesheet(theme),
        body = scene.markup(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/document.rs"]
mod tests;
