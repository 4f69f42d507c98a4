//! Viewport modes and the preview frame.

use std::fmt;

use glam::UVec2;
use tailor_core::NumericRange;

/// Canvas zoom in percent, applied to the frame only.
pub const ZOOM_RANGE: NumericRange = NumericRange::new(25, 200, 25);

/// Default zoom in percent.
pub const DEFAULT_ZOOM: u32 = 100;

/// Logical size a fluid frame is laid out at when a concrete size is needed.
pub const FLUID_SIZE: UVec2 = UVec2::new(1280, 800);

/// Device class the preview frame imitates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewportMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ViewportMode {
    pub const ALL: [Self; 3] = [Self::Desktop, Self::Tablet, Self::Mobile];

    /// Parse a mode name. Unknown names fall back to desktop.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match Self::ALL.iter().find(|mode| mode.id().eq_ignore_ascii_case(name)) {
            Some(mode) => *mode,
            None => {
                tracing::debug!(name, "unknown viewport mode, using desktop");
                Self::Desktop
            }
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }

    /// Fixed logical size; `None` for the fluid desktop frame.
    pub fn logical_size(&self) -> Option<UVec2> {
        match self {
            Self::Desktop => None,
            Self::Tablet => Some(UVec2::new(768, 1024)),
            Self::Mobile => Some(UVec2::new(375, 667)),
        }
    }
}

impl fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The frame a component preview is drawn in.
///
/// Zoom scales the frame as a whole; the component's own style is never
/// touched by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Frame {
    pub mode: ViewportMode,
    pub zoom_percent: u32,
    /// Size used for layout when the mode is fluid.
    pub fluid_size: UVec2,
}

impl Frame {
    pub fn new(mode: ViewportMode) -> Self {
        Self {
            mode,
            zoom_percent: DEFAULT_ZOOM,
            fluid_size: FLUID_SIZE,
        }
    }

    /// Set the zoom, clamped to 25..=200 and snapped to steps of 25.
    pub fn with_zoom(mut self, percent: i64) -> Self {
        self.zoom_percent = ZOOM_RANGE.snap(percent) as u32;
        self
    }

    pub fn with_fluid_size(mut self, size: UVec2) -> Self {
        self.fluid_size = size.max(UVec2::ONE);
        self
    }

    pub fn zoom_in(self) -> Self {
        let zoom = self.zoom_percent as i64 + ZOOM_RANGE.step;
        self.with_zoom(zoom)
    }

    pub fn zoom_out(self) -> Self {
        let zoom = self.zoom_percent as i64 - ZOOM_RANGE.step;
        self.with_zoom(zoom)
    }

    /// Zoom as a scale factor.
    pub fn zoom(&self) -> f32 {
        self.zoom_percent as f32 / 100.0
    }

    pub fn is_fluid(&self) -> bool {
        self.mode.logical_size().is_none()
    }

    /// Logical size of the frame before zoom.
    pub fn size(&self) -> UVec2 {
        self.mode.logical_size().unwrap_or(self.fluid_size)
    }

    /// Frame sizing classes, e.g. `w-[375px] h-[667px]`.
    pub fn classes(&self) -> Vec<String> {
        match self.mode.logical_size() {
            Some(size) => vec![format!("w-[{}px]", size.x), format!("h-[{}px]", size.y)],
            None => vec!["w-full".to_string(), "h-full".to_string()],
        }
    }

    /// Inline CSS of the frame, including the zoom transform when not 100%.
    pub fn css(&self) -> String {
        let mut declarations = match self.mode.logical_size() {
            Some(size) => vec![format!("width: {}px", size.x), format!("height: {}px", size.y)],
            None => vec!["width: 100%".to_string(), "height: 100%".to_string()],
        };
        if self.zoom_percent != DEFAULT_ZOOM {
            declarations.push(format!("transform: scale({})", self.zoom()));
            declarations.push("transform-origin: top center".to_string());
        }
        declarations.join("; ")
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(ViewportMode::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(ViewportMode::parse("mobile"), ViewportMode::Mobile);
        assert_eq!(ViewportMode::parse(" Tablet "), ViewportMode::Tablet);
        assert_eq!(ViewportMode::parse("watch"), ViewportMode::Desktop);
    }

    #[test]
    fn test_frame_sizes() {
        assert_eq!(Frame::new(ViewportMode::Mobile).size(), UVec2::new(375, 667));
        assert_eq!(Frame::new(ViewportMode::Tablet).size(), UVec2::new(768, 1024));
        let desktop = Frame::new(ViewportMode::Desktop);
        assert!(desktop.is_fluid());
        assert_eq!(desktop.size(), FLUID_SIZE);
        assert_eq!(desktop.classes(), vec!["w-full", "h-full"]);
        assert_eq!(Frame::new(ViewportMode::Mobile).classes(), vec!["w-[375px]", "h-[667px]"]);
    }

    #[test]
    fn test_zoom_is_clamped_and_stepped() {
        let frame = Frame::new(ViewportMode::Mobile);
        assert_eq!(frame.with_zoom(10).zoom_percent, 25);
        assert_eq!(frame.with_zoom(400).zoom_percent, 200);
        assert_eq!(frame.with_zoom(140).zoom_percent, 150);
        assert_eq!(frame.zoom_in().zoom_percent, 125);
        assert_eq!(frame.with_zoom(25).zoom_out().zoom_percent, 25);
        assert_eq!(frame.with_zoom(200).zoom_in().zoom_percent, 200);
    }

    #[test]
    fn test_css_includes_zoom_only_when_scaled() {
        let frame = Frame::new(ViewportMode::Mobile);
        assert_eq!(frame.css(), "width: 375px; height: 667px");
        assert_eq!(
            frame.with_zoom(50).css(),
            "width: 375px; height: 667px; transform: scale(0.5); transform-origin: top center"
        );
    }
}
