//! Unit tests for overlay lines and tooltip lookup

use bandchart::indicators::volatility::compute_bollinger_bands;
use bandchart::models::indicators::{BollingerInputs, Candle};
use bandchart::models::settings::BollingerStyle;
use bandchart::overlay::{build_overlay, tooltip_at, Band};

fn sample_bands() -> Vec<bandchart::models::indicators::BandPoint> {
    let candles: Vec<Candle> = [10.0, 12.0, 11.0, 13.0, 14.0, 12.0]
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::new(c, c, c, c, 1.0, i as i64 * 1000))
        .collect();
    let inputs = BollingerInputs {
        length: 3,
        ..BollingerInputs::default()
    };
    compute_bollinger_bands(&candles, inputs)
}

#[test]
fn test_lines_skip_warmup_points() {
    let overlay = build_overlay(&sample_bands(), &BollingerStyle::default());
    assert_eq!(overlay.lines.len(), 3);
    for line in &overlay.lines {
        assert_eq!(line.points.len(), 4);
        assert_eq!(line.points[0].0, 2000);
    }
    let fill = overlay.fill.unwrap();
    assert_eq!(fill.opacity, 10);
    assert_eq!(fill.points.len(), 4);
    assert!(fill.points.iter().all(|&(_, upper, lower)| upper >= lower));
}

#[test]
fn test_hidden_lines_and_fill_are_omitted() {
    let mut style = BollingerStyle::default();
    style.upper.visible = false;
    style.background.visible = false;

    let overlay = build_overlay(&sample_bands(), &style);
    let bands: Vec<Band> = overlay.lines.iter().map(|l| l.band).collect();
    assert_eq!(bands, vec![Band::Basis, Band::Lower]);
    assert!(overlay.fill.is_none());
}

#[test]
fn test_tooltip_lookup() {
    let bands = sample_bands();
    assert!(tooltip_at(&bands, 0).is_none());
    assert!(tooltip_at(&bands, 1).is_none());
    assert_eq!(tooltip_at(&bands, 2).unwrap().basis, 11.0);
    assert!(tooltip_at(&bands, 6).is_none());
}

#[test]
fn test_overlay_of_empty_series() {
    let overlay = build_overlay(&[], &BollingerStyle::default());
    assert!(overlay.lines.iter().all(|l| l.points.is_empty()));
    assert!(overlay.fill.unwrap().points.is_empty());
}
