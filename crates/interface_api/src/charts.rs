//! Bar chart rendering for analysis results
//!
//! Charts are fixed-layout PNGs: one bar per category, heights in [0, 1] of
//! the plot area, light gridlines at quarters. No text is drawn; the client
//! labels the bars since the categories never change.

use std::io::Cursor;

use image::{ImageError, ImageFormat, Rgb, RgbImage};
use thiserror::Error;

use domain_claims::{NormalizedClaim, Severity};
use domain_documents::{category::max_keyword_count, ClassificationResult};
use domain_fraud::{FraudAssessment, RiskLevel, MAX_SCORE};

pub const WIDTH: u32 = 480;
pub const HEIGHT: u32 = 320;
const MARGIN: u32 = 32;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const GRID: Rgb<u8> = Rgb([228, 231, 235]);
const AXIS: Rgb<u8> = Rgb([55, 65, 81]);
const MUTED: Rgb<u8> = Rgb([209, 213, 219]);
pub const BLUE: Rgb<u8> = Rgb([59, 130, 246]);
pub const GREEN: Rgb<u8> = Rgb([34, 197, 94]);
pub const AMBER: Rgb<u8> = Rgb([245, 158, 11]);
pub const RED: Rgb<u8> = Rgb([239, 68, 68]);

/// Share of the plot height given to bars that were not selected
const MUTED_HEIGHT: f64 = 0.15;

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to encode chart: {0}")]
    Encode(#[from] ImageError),
}

/// One bar of a chart
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    /// Height as a share of the plot area; clamped to [0, 1]
    pub value: f64,
    pub color: Rgb<u8>,
}

impl Bar {
    pub fn new(value: f64, color: Rgb<u8>) -> Self {
        Self { value, color }
    }
}

/// Horizontal pixel span `[x0, x1)` of bar `index` out of `count`
pub fn bar_span(index: usize, count: usize) -> (u32, u32) {
    let plot_width = WIDTH - 2 * MARGIN;
    let slot = plot_width / count.max(1) as u32;
    let x0 = MARGIN + slot * index as u32 + slot / 5;
    let x1 = MARGIN + slot * (index as u32 + 1) - slot / 5;
    (x0, x1)
}

/// Top pixel row of a bar of the given value
pub fn bar_top(value: f64) -> u32 {
    let plot_height = HEIGHT - 2 * MARGIN;
    let value = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
    HEIGHT - MARGIN - (value * plot_height as f64).round() as u32
}

fn fill_rect(image: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..y1.min(HEIGHT) {
        for x in x0..x1.min(WIDTH) {
            image.put_pixel(x, y, color);
        }
    }
}

/// Renders bars left to right and encodes the chart as PNG
pub fn render_bar_chart(bars: &[Bar]) -> Result<Vec<u8>, ChartError> {
    let mut image = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    let bottom = HEIGHT - MARGIN;

    for quarter in 1..=4 {
        let y = bar_top(quarter as f64 / 4.0);
        fill_rect(&mut image, MARGIN, y, WIDTH - MARGIN, y + 1, GRID);
    }

    for (index, bar) in bars.iter().enumerate() {
        let (x0, x1) = bar_span(index, bars.len());
        fill_rect(&mut image, x0, bar_top(bar.value), x1, bottom, bar.color);
    }

    // axes
    fill_rect(&mut image, MARGIN, bottom, WIDTH - MARGIN, bottom + 2, AXIS);
    fill_rect(&mut image, MARGIN - 2, MARGIN, MARGIN, bottom + 2, AXIS);

    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Confidence, document health, and keyword coverage
pub fn classification_bars(result: &ClassificationResult) -> Vec<Bar> {
    let coverage = match max_keyword_count() {
        0 => 0.0,
        max => result.matched_keywords.len() as f64 / max as f64,
    };
    vec![
        Bar::new(result.confidence, BLUE),
        Bar::new(result.health(), GREEN),
        Bar::new(coverage, AMBER),
    ]
}

/// Low, Medium, High with the claim's severity at full height
pub fn severity_bars(claim: &NormalizedClaim) -> Vec<Bar> {
    [(Severity::Low, GREEN), (Severity::Medium, AMBER), (Severity::High, RED)]
        .into_iter()
        .map(|(severity, color)| {
            if severity == claim.severity {
                Bar::new(1.0, color)
            } else {
                Bar::new(MUTED_HEIGHT, MUTED)
            }
        })
        .collect()
}

/// Risk level and score
pub fn fraud_bars(assessment: &FraudAssessment) -> Vec<Bar> {
    let (level, color) = match assessment.fraud_risk_level {
        RiskLevel::Low => (1.0 / 3.0, GREEN),
        RiskLevel::Medium => (2.0 / 3.0, AMBER),
        RiskLevel::High => (1.0, RED),
    };
    let score = (assessment.fraud_score as f64 / MAX_SCORE as f64).min(1.0);
    vec![Bar::new(level, color), Bar::new(score, color)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::normalize_claim_text;
    use domain_documents::classify_document;
    use domain_fraud::score_fraud_risk;
    use proptest::prelude::*;

    fn pixel(png: &[u8], x: u32, y: u32) -> Rgb<u8> {
        let decoded = image::load_from_memory(png).unwrap().to_rgb8();
        *decoded.get_pixel(x, y)
    }

    fn bar_center(index: usize, count: usize) -> u32 {
        let (x0, x1) = bar_span(index, count);
        (x0 + x1) / 2
    }

    #[test]
    fn test_png_dimensions() {
        let png = render_bar_chart(&[Bar::new(0.5, BLUE)]).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), WIDTH);
        assert_eq!(decoded.height(), HEIGHT);
    }

    #[test]
    fn test_bar_top_clamps() {
        assert_eq!(bar_top(0.0), HEIGHT - MARGIN);
        assert_eq!(bar_top(1.0), MARGIN);
        assert_eq!(bar_top(7.0), MARGIN);
        assert_eq!(bar_top(-1.0), HEIGHT - MARGIN);
        assert_eq!(bar_top(f64::NAN), HEIGHT - MARGIN);
    }

    #[test]
    fn test_severity_chart_highlights_selected() {
        let claim = normalize_claim_text("total loss of the car");
        let png = render_bar_chart(&severity_bars(&claim)).unwrap();

        // high bar reaches the top of the plot, low bar does not
        assert_eq!(pixel(&png, bar_center(2, 3), MARGIN + 2), RED);
        assert_eq!(pixel(&png, bar_center(0, 3), MARGIN + 2), BACKGROUND);
        assert_eq!(pixel(&png, bar_center(0, 3), HEIGHT - MARGIN - 2), MUTED);
    }

    #[test]
    fn test_fraud_bars() {
        let assessment = score_fraud_risk("no fir, previous claim", None, None);
        let bars = fraud_bars(&assessment);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].value, 1.0);
        assert_eq!(bars[0].color, RED);
        assert!((bars[1].value - 4.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_classification_bars() {
        let result = classify_document("tax invoice signed on date for policy 7");
        let bars = classification_bars(&result);

        assert_eq!(bars[0].value, 0.25);
        assert_eq!(bars[1].value, 1.0);
        assert_eq!(bars[2].value, 0.25);
    }

    proptest! {
        #[test]
        fn prop_bar_top_stays_in_plot(value in proptest::num::f64::ANY) {
            let top = bar_top(value);
            prop_assert!(top >= MARGIN && top <= HEIGHT - MARGIN);
        }

        #[test]
        fn prop_bar_spans_do_not_overlap(count in 1usize..12) {
            for index in 1..count {
                let (_, previous_end) = bar_span(index - 1, count);
                let (start, end) = bar_span(index, count);
                prop_assert!(previous_end <= start);
                prop_assert!(start < end);
            }
        }
    }
}
