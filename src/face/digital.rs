//! Seven-segment digital face.

use chrono::{Locale, NaiveDateTime, Timelike};

use crate::{
    config::form::{LabelToggles, Snapshot},
    config::theme::Theme,
    face::analog::{LOGO_ID, blur_defs, logo_class},
    face::date_text::{month_day_text, weekday_text},
    face::segments::{SEGMENT_COUNT, SegmentMask, diamond, digit_segments, segment_style},
    foundation::core::Canvas,
    scene::node::{Attrs, Child, Node},
};

pub const WEEKDAY_TEXT_ID: &str = "weekday-text";
pub const MONTH_TEXT_ID: &str = "month-text";

/// Left edges of the four digit cells, in twenty-seconds of the canvas width.
const DIGIT_X: [f64; 4] = [7.5, 9.5, 12.5, 14.5];

pub fn segment_id(digit: usize, segment: usize) -> String {
    format!("digit-{digit}-seg-{segment}")
}

/// Lit segments of hour-tens, hour-units, minute-tens and minute-units.
///
/// A pair whose toggle is off is entirely dark.
pub fn digit_masks(now: &NaiveDateTime, toggles: LabelToggles) -> [SegmentMask; 4] {
    let (h, m) = (now.hour(), now.minute());
    let digits = [h / 10, h % 10, m / 10, m % 10];
    std::array::from_fn(|i| {
        let on = if i < 2 { toggles.hours } else { toggles.minutes };
        if on {
            SegmentMask::for_digit(digits[i]).unwrap_or(SegmentMask::NONE)
        } else {
            SegmentMask::NONE
        }
    })
}

/// `(segment id, style)` for every segment of the display.
pub fn segment_styles(masks: [SegmentMask; 4]) -> impl Iterator<Item = (String, &'static str)> {
    masks.into_iter().enumerate().flat_map(|(d, mask)| {
        (0..SEGMENT_COUNT).map(move |s| (segment_id(d, s), segment_style(mask.contains(s))))
    })
}

fn screen_rect(canvas: Canvas, attrs: Attrs) -> Node {
    let (w, h) = (canvas.w(), canvas.h());
    Node::rect(w * 5.0 / 22.0, h * 4.0 / 22.0, w * 12.0 / 22.0, h * 12.0 / 22.0, attrs)
}

fn frame_rect(canvas: Canvas, id: &str) -> Node {
    let (w, h) = (canvas.w(), canvas.h());
    Node::rounded_rect(
        w * 3.5 / 22.0,
        h * 2.0 / 22.0,
        w * 15.0 / 22.0,
        h * 18.0 / 22.0,
        15.0,
        15.0,
        Attrs::new().attr("id", id),
    )
}

fn date_text(canvas: Canvas, y_22: f64, id: &str, content: String) -> Node {
    let (w, h) = (canvas.w(), canvas.h());
    Node::text(
        w * 12.0 / 22.0,
        h * y_22 / 22.0,
        content,
        Attrs::new()
            .attr("class", "digi-text")
            .attr("id", id)
            .attr("textLength", w * 9.5 / 22.0),
    )
}

/// Build the digital face for `now` as root children, in paint order.
#[tracing::instrument(skip(snap, theme), fields(theme = theme.name.as_str()))]
pub fn build_digital(
    canvas: Canvas,
    snap: &Snapshot,
    theme: &Theme,
    now: &NaiveDateTime,
) -> Vec<Child> {
    let (w, h) = (canvas.w(), canvas.h());
    let mut out: Vec<Child> = Vec::with_capacity(12);

    out.push(
        Node::generic(
            "defs",
            vec![
                blur_defs().into(),
                Node::generic(
                    "clipPath",
                    vec![screen_rect(canvas, Attrs::new()).into()],
                    Attrs::new().attr("id", "screen-clip"),
                )
                .into(),
            ],
            Attrs::new(),
        )
        .into(),
    );
    out.push(
        Node::rect(
            0.0,
            0.0,
            w,
            h,
            Attrs::new()
                .attr("filter", "url(#f1)")
                .attr("id", "face-bg"),
        )
        .into(),
    );
    out.push(frame_rect(canvas, "digi-padding").into());
    out.push(frame_rect(canvas, "digi-border").into());
    out.push(screen_rect(canvas, Attrs::new().attr("id", "digi-screen")).into());
    out.push(
        Node::generic(
            "image",
            vec![],
            Attrs::new()
                .attr("x", w / 8.0)
                .attr("y", h * 0.5 / 8.0)
                .attr("width", w * 3.0 / 4.0)
                .attr("height", h * 3.0 / 4.0)
                .attr("href", theme.logo)
                .attr("id", LOGO_ID)
                .attr("class", logo_class(snap.logo))
                .attr("clip-path", "url(#screen-clip)"),
        )
        .into(),
    );

    let side = w * 0.825 / 22.0;
    let dot = |y_22: f64| -> Child {
        Node::polygon(
            diamond(w * 11.625 / 22.0, h * y_22 / 22.0, side),
            Attrs::new().attr("class", "separator-dot"),
        )
        .into()
    };
    out.push(Node::group(vec![dot(6.4), dot(7.7)], Attrs::new().attr("id", "hour-separator")).into());

    let masks = digit_masks(now, snap.labels);
    let digits: Vec<Child> = DIGIT_X
        .iter()
        .zip(masks)
        .enumerate()
        .map(|(d, (x_22, mask))| {
            let cells = digit_segments(w * x_22 / 22.0, h * 6.0 / 22.0, w * 2.0 / 22.0, h * 3.0 / 22.0);
            let segments: Vec<Child> = cells
                .into_iter()
                .enumerate()
                .map(|(s, points)| {
                    Node::polygon(
                        points,
                        Attrs::new()
                            .style(segment_style(mask.contains(s)))
                            .attr("class", "segment")
                            .attr("id", segment_id(d, s)),
                    )
                    .into()
                })
                .collect();
            Node::group(
                segments,
                Attrs::new()
                    .attr("class", "digit")
                    .attr("id", format!("digit-{d}")),
            )
            .into()
        })
        .collect();
    out.push(Node::group(digits, Attrs::new().attr("id", "display-digits")).into());

    out.push(date_text(canvas, 11.0, WEEKDAY_TEXT_ID, weekday_text(now, snap.locale)).into());
    out.push(date_text(canvas, 13.0, MONTH_TEXT_ID, month_day_text(now, snap.locale)).into());

    out
}

/// Texts refreshed by the digital loop: `(element id, content)`.
pub fn date_texts(now: &NaiveDateTime, locale: Locale) -> [(&'static str, String); 2] {
    [
        (WEEKDAY_TEXT_ID, weekday_text(now, locale)),
        (MONTH_TEXT_ID, month_day_text(now, locale)),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/face/digital.rs"]
mod tests;
