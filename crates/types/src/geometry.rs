//! Page size and margin primitives, in PDF points.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    pub fn width_pt(&self) -> f32 {
        match self {
            PageSize::A4 => 595.0,
            PageSize::Letter => 612.0,
            PageSize::Custom { width, .. } => *width,
        }
    }

    pub fn height_pt(&self) -> f32 {
        match self {
            PageSize::A4 => 842.0,
            PageSize::Letter => 792.0,
            PageSize::Custom { height, .. } => *height,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub size: PageSize,
    pub margins: Margins,
}

impl PageLayout {
    /// The geometry used for generated reports: A4 with half-inch side
    /// margins and three-quarter-inch top and bottom margins.
    pub fn report_default() -> Self {
        Self {
            size: PageSize::A4,
            margins: Margins { top: 54.0, right: 36.0, bottom: 54.0, left: 36.0 },
        }
    }

    pub fn content_width(&self) -> f32 {
        self.size.width_pt() - self.margins.left - self.margins.right
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::report_default()
    }
}
