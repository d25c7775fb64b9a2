use serde::{Deserialize, Serialize};

use crate::cluster::ClusterParams;
use crate::consts::DEFAULT_LEADING_MARGIN;
use crate::selection::{default_categories, Category, ReselectPolicy};
use crate::services::FeedbackStyle;
use crate::viewport::{Region, ZoomPolicy};

/// Full configuration of an explore screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub clustering: ClusterParams,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(flatten)]
    pub zoom: ZoomPolicy,
    /// Region shown when the screen mounts.
    #[serde(default)]
    pub initial_region: Region,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Padding kept between the strip's leading edge and the active chip.
    #[serde(default = "default_leading_margin")]
    pub leading_margin: f64,
    #[serde(default)]
    pub reselect: ReselectPolicy,
    /// Haptic style for chip and marker taps.
    #[serde(default)]
    pub feedback: FeedbackStyle,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

fn default_leading_margin() -> f64 {
    DEFAULT_LEADING_MARGIN
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            leading_margin: DEFAULT_LEADING_MARGIN,
            reselect: ReselectPolicy::default(),
            feedback: FeedbackStyle::default(),
            categories: default_categories(),
        }
    }
}
