use std::fmt;
use std::io;

/// RGB color used for bar fills on the duration scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn lerp(a: Self, b: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb(
            channel(a.0, b.0),
            channel(a.1, b.1),
            channel(a.2, b.2),
        )
    }
}

/// Color theme for the chart page. Defaults reproduce the blue dashboard
/// look: dark-blue text, light-cyan plot area on an azure page, and a
/// three-stop dark-blue / royal-blue / cyan scale for bar durations.
#[derive(Debug, Clone)]
pub struct GanttTheme {
    pub text_color: String,
    pub plot_background: String,
    pub page_background: String,
    pub grid_color: String,
    pub scale_start: Rgb,
    pub scale_mid: Rgb,
    pub scale_end: Rgb,
}

impl Default for GanttTheme {
    fn default() -> Self {
        Self {
            text_color: "#00008b".to_string(),
            plot_background: "#e0ffff".to_string(),
            page_background: "#f0ffff".to_string(),
            grid_color: "#b0c4de".to_string(),
            scale_start: Rgb(0x00, 0x00, 0x8b),
            scale_mid: Rgb(0x41, 0x69, 0xe1),
            scale_end: Rgb(0x00, 0xff, 0xff),
        }
    }
}

impl GanttTheme {
    /// Map a normalized duration in [0, 1] onto the three-stop scale.
    pub fn scale_color(&self, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        if t <= 0.5 {
            Rgb::lerp(self.scale_start, self.scale_mid, t * 2.0)
        } else {
            Rgb::lerp(self.scale_mid, self.scale_end, (t - 0.5) * 2.0)
        }
    }
}

#[derive(Debug)]
pub enum RenderError {
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<io::Error> for RenderError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub mod gantt;

pub use gantt::{render_page, render_svg, write_html_file};
