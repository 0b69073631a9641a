//! Renderer and crosshair helpers over computed band points.
//!
//! The chart draws each visible band as a line and optionally fills the area
//! between upper and lower. Undefined (`NaN`) points are left out so lines
//! start where the indicator has enough history.

use serde::Serialize;

use crate::models::indicators::BandPoint;
use crate::models::settings::{BollingerStyle, LineStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Basis,
    Upper,
    Lower,
}

impl Band {
    pub fn value(&self, point: &BandPoint) -> f64 {
        match self {
            Band::Basis => point.basis,
            Band::Upper => point.upper,
            Band::Lower => point.lower,
        }
    }

    fn style<'a>(&self, style: &'a BollingerStyle) -> &'a LineStyle {
        match self {
            Band::Basis => &style.basis,
            Band::Upper => &style.upper,
            Band::Lower => &style.lower,
        }
    }
}

/// `(timestamp, value)` pairs for one band.
#[derive(Debug, Clone, Serialize)]
pub struct OverlayLine {
    pub band: Band,
    pub style: LineStyle,
    pub points: Vec<(i64, f64)>,
}

/// `(timestamp, upper, lower)` triples with both bands defined.
#[derive(Debug, Clone, Serialize)]
pub struct BandFill {
    pub opacity: u8,
    pub points: Vec<(i64, f64, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overlay {
    pub lines: Vec<OverlayLine>,
    pub fill: Option<BandFill>,
}

/// Split band points into the line series and fill region the chart draws.
pub fn build_overlay(points: &[BandPoint], style: &BollingerStyle) -> Overlay {
    let lines = [Band::Basis, Band::Upper, Band::Lower]
        .into_iter()
        .filter(|band| band.style(style).visible)
        .map(|band| OverlayLine {
            band,
            style: band.style(style).clone(),
            points: points
                .iter()
                .filter_map(|p| {
                    let value = band.value(p);
                    (!value.is_nan()).then_some((p.timestamp, value))
                })
                .collect(),
        })
        .collect();

    let fill = style.background.visible.then(|| BandFill {
        opacity: style.background.opacity,
        points: points
            .iter()
            .filter(|p| !p.upper.is_nan() && !p.lower.is_nan())
            .map(|p| (p.timestamp, p.upper, p.lower))
            .collect(),
    });

    Overlay { lines, fill }
}

/// Band values for the candle under the crosshair.
///
/// `None` when `index` is past the end or the basis is still warming up.
pub fn tooltip_at(points: &[BandPoint], index: usize) -> Option<&BandPoint> {
    points.get(index).filter(|p| !p.basis.is_nan())
}
