//! Overlay settings kept by the chart host alongside the indicator inputs.

use serde::{Deserialize, Serialize};

use super::indicators::BollingerInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub visible: bool,
    pub color: String,
    pub line_width: u8,
    pub line_style: LineKind,
}

impl LineStyle {
    pub fn new(color: &str) -> Self {
        Self {
            visible: true,
            color: color.to_string(),
            line_width: 1,
            line_style: LineKind::Solid,
        }
    }
}

/// Fill between the upper and lower band. `opacity` is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundStyle {
    pub visible: bool,
    pub opacity: u8,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BollingerStyle {
    pub basis: LineStyle,
    pub upper: LineStyle,
    pub lower: LineStyle,
    pub background: BackgroundStyle,
}

impl Default for BollingerStyle {
    fn default() -> Self {
        Self {
            basis: LineStyle::new("#2962ff"),
            upper: LineStyle::new("#787b86"),
            lower: LineStyle::new("#787b86"),
            background: BackgroundStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BollingerSettings {
    pub inputs: BollingerInputs,
    pub style: BollingerStyle,
}
