//! Map render settings.
//!
//! The core never draws anything.  These settings are accepted at build time,
//! carried through the snapshot, and handed back to whichever renderer the
//! query phase uses.

/// A 2-D offset in screen units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An SVG colour: a named colour, `rgb(...)`, or `rgba(...)`.
///
/// With the `serde` feature a colour reads from `"red"`, `[255, 16, 12]` or
/// `[255, 200, 23, 0.85]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Default for Color {
    fn default() -> Self {
        Color::Named("none".to_owned())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Named(name)        => f.write_str(name),
            Color::Rgb(r, g, b)       => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a)   => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

/// Layout and styling parameters for the route map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderSettings {
    pub width:                f64,
    pub height:               f64,
    pub padding:              f64,
    pub line_width:           f64,
    pub stop_radius:          f64,
    pub bus_label_font_size:  u32,
    pub bus_label_offset:     Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset:    Point,
    pub underlayer_color:     Color,
    pub underlayer_width:     f64,
    pub color_palette:        Vec<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width:                1_200.0,
            height:               1_200.0,
            padding:              50.0,
            line_width:           14.0,
            stop_radius:          5.0,
            bus_label_font_size:  20,
            bus_label_offset:     Point::new(7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset:    Point::new(7.0, -3.0),
            underlayer_color:     Color::Rgba(255, 255, 255, 0.85),
            underlayer_width:     3.0,
            color_palette:        vec![
                Color::Named("green".to_owned()),
                Color::Rgb(255, 160, 0),
                Color::Named("red".to_owned()),
            ],
        }
    }
}
