//! Fixed color palettes.

use crate::foundation::error::{ClockError, ClockResult};

/// One palette: the nine style properties every face reads.
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub hands_color: &'static str,
    pub markers_color: &'static str,
    pub face_bg_stroke: &'static str,
    pub face_bg_fill: &'static str,
    pub face_fill: &'static str,
    pub digital_border: &'static str,
    pub text_color: &'static str,
    pub page_background: &'static str,
    pub logo: &'static str,
}

impl Theme {
    /// Property names and values, in the order they are published.
    pub fn properties(&self) -> [(&'static str, &'static str); 9] {
        [
            ("--hands-color", self.hands_color),
            ("--markers-color", self.markers_color),
            ("--face-bg-stroke", self.face_bg_stroke),
            ("--face-bg-fill", self.face_bg_fill),
            ("--face-fill", self.face_fill),
            ("--digi-border", self.digital_border),
            ("--color", self.text_color),
            ("--body-bg", self.page_background),
            ("--logo", self.logo),
        ]
    }
}

/// Theme selector, indexed as in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Ametyst,
    Bezowy,
    Cytrusowy,
    Morski,
    Truskawkowy,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Ametyst,
        ThemeName::Bezowy,
        ThemeName::Cytrusowy,
        ThemeName::Morski,
        ThemeName::Truskawkowy,
    ];

    pub fn from_index(v: u8) -> ClockResult<Self> {
        Self::ALL
            .get(usize::from(v))
            .copied()
            .ok_or_else(|| ClockError::range(format!("theme value is out of bounds ({v})")))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Ametyst => "ametyst",
            ThemeName::Bezowy => "bezowy",
            ThemeName::Cytrusowy => "cytrusowy",
            ThemeName::Morski => "morski",
            ThemeName::Truskawkowy => "truskawkowy",
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeName::Ametyst => &AMETYST,
            ThemeName::Bezowy => &BEZOWY,
            ThemeName::Cytrusowy => &CYTRUSOWY,
            ThemeName::Morski => &MORSKI,
            ThemeName::Truskawkowy => &TRUSKAWKOWY,
        }
    }
}

static CYTRUSOWY: Theme = Theme {
    name: ThemeName::Cytrusowy,
    hands_color: "rgb(255,0,0)",
    markers_color: "rgb(55,50,240)",
    face_bg_stroke: "green",
    face_bg_fill: "rgba(198, 230, 20, 0.46)",
    face_fill: "rgba(252,252, 29, 0.9)",
    digital_border: "#FAA381",
    text_color: "black",
    page_background: "white",
    logo: "assets/logo.png",
};

static AMETYST: Theme = Theme {
    name: ThemeName::Ametyst,
    hands_color: "#4F359B",
    markers_color: "rgb(55,50,240)",
    face_bg_stroke: "#1E00FF",
    face_bg_fill: "#585191",
    face_fill: "#7D6F86",
    digital_border: "black",
    text_color: "#E7C8DD",
    page_background: "#585191",
    logo: "assets/logo_ametyst.png",
};

static BEZOWY: Theme = Theme {
    name: ThemeName::Bezowy,
    hands_color: "#80727B",
    markers_color: "#040711",
    face_bg_stroke: "#040711",
    face_bg_fill: "#E7DECD",
    face_fill: "#E7DECD",
    digital_border: "#FAA381",
    text_color: "#040711",
    page_background: "#E7DECD",
    logo: "assets/logo_bezowy.png",
};

static MORSKI: Theme = Theme {
    name: ThemeName::Morski,
    hands_color: "#BEA8A7",
    markers_color: "#BEA8A7",
    face_bg_stroke: "green",
    face_bg_fill: "#00A6FB",
    face_fill: "#DEFFFC",
    digital_border: "#75DBCD",
    text_color: "black",
    page_background: "white",
    logo: "assets/logo_morski.png",
};

static TRUSKAWKOWY: Theme = Theme {
    name: ThemeName::Truskawkowy,
    hands_color: "#2a5800",
    markers_color: "#2a5800",
    face_bg_stroke: "#f9b5b5",
    face_bg_fill: "#d84f4f",
    face_fill: "#f9b5b5",
    digital_border: "#FAA381",
    text_color: "black",
    page_background: "white",
    logo: "assets/logo.png",
};

#[cfg(test)]
#[path = "../../tests/unit/config/theme.rs"]
mod tests;
