//! Analog face: ticks, label rings, logo and hands.

use chrono::{NaiveDateTime, Timelike};

use crate::{
    config::form::Snapshot,
    config::theme::Theme,
    face::labels::LabelRing,
    foundation::core::Canvas,
    foundation::geometry::rotate_attr,
    scene::node::{Attrs, Child, Node},
};

pub const SECOND_HAND_ID: &str = "seconds";
pub const MINUTE_HAND_ID: &str = "minutes";
pub const HOUR_HAND_ID: &str = "hours";
pub const LOGO_ID: &str = "clock-logo";

/// Hand rotations in degrees. The -87/-86 offsets calibrate the hands, drawn along the
/// positive x axis, against the twelve o'clock mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    pub second: f64,
    pub minute: f64,
    pub hour: f64,
}

impl HandAngles {
    pub fn at(t: &NaiveDateTime) -> Self {
        let s = f64::from(t.second());
        let m = f64::from(t.minute());
        let h = f64::from(t.hour());
        Self {
            second: -87.0 + s * 6.0,
            minute: -86.0 + s * 6.0 / 60.0 + m * 6.0,
            hour: -86.0 + m * 0.5 + h * 30.0,
        }
    }

    /// `(element id, transform)` for each hand.
    pub fn transforms(self, canvas: Canvas) -> [(&'static str, String); 3] {
        let c = canvas.center();
        [
            (SECOND_HAND_ID, rotate_attr(self.second, c)),
            (MINUTE_HAND_ID, rotate_attr(self.minute, c)),
            (HOUR_HAND_ID, rotate_attr(self.hour, c)),
        ]
    }
}

pub(crate) fn blur_defs() -> Node {
    Node::generic(
        "filter",
        vec![
            Node::generic(
                "feGaussianBlur",
                vec![],
                Attrs::new()
                    .attr("in", "SourceGraphic")
                    .attr("stdDeviation", "15"),
            )
            .into(),
        ],
        Attrs::new().attr("id", "f1").attr("x", "0").attr("y", "0"),
    )
}

pub(crate) fn logo_class(visible: bool) -> &'static str {
    if visible { "unhide" } else { "hide" }
}

/// Build the analog face for `now` as root children, in paint order.
#[tracing::instrument(skip(snap, theme), fields(theme = theme.name.as_str()))]
pub fn build_analog(
    canvas: Canvas,
    snap: &Snapshot,
    theme: &Theme,
    now: &NaiveDateTime,
) -> Vec<Child> {
    let (w, h) = (canvas.w(), canvas.h());
    let c = canvas.center();
    let mut out: Vec<Child> = Vec::with_capacity(10);

    out.push(Node::generic("defs", vec![blur_defs().into()], Attrs::new()).into());
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
    out.push(Node::circle(c.x, c.y, w * 10.4 / 22.0, Attrs::new().attr("id", "face-circle")).into());

    let ticks = |count: usize, inner_x: f64, width: &str, id: &str| {
        let step = 360.0 / count as f64;
        let lines: Vec<Child> = (0..count)
            .map(|i| {
                Node::line(
                    inner_x,
                    c.y,
                    w * 10.0 / 11.0,
                    c.y,
                    Attrs::new()
                        .style(format!("stroke-width: {width}"))
                        .transform(rotate_attr(i as f64 * step, c)),
                )
                .into()
            })
            .collect();
        Node::group(lines, Attrs::new().attr("id", id))
    };
    out.push(ticks(60, w * 19.0 / 22.0, "1", "minute-markers").into());
    out.push(ticks(12, w * 17.0 / 22.0, "2", "hour-markers").into());

    let logo_w = (635.0 / 880.0) * w / 2.0;
    let logo_h = (171.0 / 880.0) * h / 2.0;
    out.push(
        Node::generic(
            "image",
            vec![],
            Attrs::new()
                .attr("x", c.x - logo_w / 2.0)
                .attr("y", c.y - logo_h / 2.0)
                .attr("width", logo_w)
                .attr("height", logo_h)
                .attr("href", theme.logo)
                .attr("id", LOGO_ID)
                .attr("class", logo_class(snap.logo)),
        )
        .into(),
    );

    for ring in LabelRing::ALL {
        let labels: Vec<Child> = (0..ring.count())
            .map(|i| {
                let at = ring.position(canvas, snap.inner, i);
                Node::text(
                    at.x,
                    at.y,
                    ring.text(snap.label_style, snap.labels, i),
                    Attrs::new()
                        .transform(rotate_attr(0.0, at))
                        .attr("id", ring.label_id(i))
                        .attr("class", ring.class()),
                )
                .into()
            })
            .collect();
        out.push(Node::group(labels, Attrs::new().attr("id", ring.group_id())).into());
    }

    let angles = HandAngles::at(now);
    let hand = |len: f64, angle: f64, id: &str| -> Child {
        Node::line(
            c.x,
            c.y,
            w * len / 22.0,
            h * 10.5 / 22.0,
            Attrs::new().transform(rotate_attr(angle, c)).attr("id", id),
        )
        .into()
    };
    out.push(
        Node::group(
            vec![
                hand(20.0, angles.second, SECOND_HAND_ID),
                hand(18.0, angles.minute, MINUTE_HAND_ID),
                hand(17.0, angles.hour, HOUR_HAND_ID),
            ],
            Attrs::new().attr("id", "hands-of-time"),
        )
        .into(),
    );

    out
}

#[cfg(test)]
#[path = "../../tests/unit/face/analog.rs"]
mod tests;
