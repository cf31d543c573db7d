//! Server-side SVG for the page charts: the WISER risk gauge, the product
//! usage bar and the wound-size sparkline.

use tera::escape_html;
use woundchart_core::models::wound::WoundTrendPoint;
use woundchart_rules::risk::{RiskGauge, GAUGE_CENTER};
use woundchart_rules::wastage::ProductUsage;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

const NEEDLE_COLOR: &str = "#1f2937";
const TRACK_COLOR: &str = "#e5e7eb";
const LOW_COLOR: &str = "#10b981";
const MEDIUM_COLOR: &str = "#f59e0b";
const HIGH_COLOR: &str = "#ef4444";
const SPARKLINE_COLOR: &str = "#CF9455";

/// The semicircular gauge in a 200×120 viewBox. The zone arcs are fixed;
/// only the needle moves.
pub fn risk_gauge_svg(gauge: &RiskGauge) -> String {
    let (cx, cy) = GAUGE_CENTER;
    let (x2, y2) = gauge.needle_end;
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="120" viewBox="0 0 200 120">"#,
    );
    for (d, color) in [
        ("M 20 100 A 80 80 0 0 1 180 100", TRACK_COLOR),
        ("M 20 100 A 80 80 0 0 1 70 37", LOW_COLOR),
        ("M 70 37 A 80 80 0 0 1 131 37", MEDIUM_COLOR),
        ("M 131 37 A 80 80 0 0 1 180 100", HIGH_COLOR),
    ] {
        svg.push_str(&format!(
            r#"<path d="{d}" fill="none" stroke="{color}" stroke-width="20" stroke-linecap="round"/>"#
        ));
    }
    svg.push_str(&format!(
        r#"<line x1="{cx}" y1="{cy}" x2="{x2:.2}" y2="{y2:.2}" stroke="{NEEDLE_COLOR}" stroke-width="3" stroke-linecap="round"/>"#
    ));
    svg.push_str(&format!(r#"<circle cx="{cx}" cy="{cy}" r="8" fill="{NEEDLE_COLOR}"/>"#));
    svg.push_str("</svg>");
    svg
}

/// Horizontal used / wasted bar in a 100×16 viewBox. Without a product
/// size the bar is replaced by its prompt text.
pub fn usage_bar_svg(usage: &ProductUsage) -> String {
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="16" viewBox="0 0 100 16" preserveAspectRatio="none">"#,
    );
    match usage {
        ProductUsage::NoProduct { message } => {
            svg.push_str(&format!(
                r#"<text x="50" y="12" font-size="8" text-anchor="middle">{}</text>"#,
                escape_html(message)
            ));
        }
        ProductUsage::Breakdown {
            used_width,
            wasted_width,
            ..
        } => {
            svg.push_str(&format!(
                r#"<rect x="0" y="0" width="100" height="16" fill="{TRACK_COLOR}"/><rect x="0" y="0" width="{used_width:.2}" height="16" fill="{LOW_COLOR}"/>"#
            ));
            if *wasted_width > 0.0 {
                svg.push_str(&format!(
                    r#"<rect x="{used_width:.2}" y="0" width="{wasted_width:.2}" height="16" fill="{HIGH_COLOR}"/>"#
                ));
            }
        }
    }
    svg.push_str("</svg>");
    svg
}

/// Wound size over time as a polyline scaled into `width`×`height`.
pub fn sparkline_svg(points: &[WoundTrendPoint], width: f64, height: f64) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    if points.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">No data available</text></svg>"#,
            width / 2.0,
            height / 2.0
        ));
        return svg;
    }

    let coords = sparkline_coords(points, width, height);
    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        r#"<polyline points="{polyline}" fill="none" stroke="{SPARKLINE_COLOR}" stroke-width="3"/>"#
    ));
    for ((x, y), point) in coords.iter().zip(points) {
        svg.push_str(&format!(
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="5" fill="{SPARKLINE_COLOR}"><title>{}: {} cm²</title></circle>"#,
            escape_html(&point.label),
            point.size
        ));
    }
    svg.push_str("</svg>");
    svg
}

const SPARKLINE_PADDING: f64 = 10.0;

/// Larger sizes sit higher. A flat series is drawn through the middle.
fn sparkline_coords(points: &[WoundTrendPoint], width: f64, height: f64) -> Vec<(f64, f64)> {
    let inner_w = (width - 2.0 * SPARKLINE_PADDING).max(0.0);
    let inner_h = (height - 2.0 * SPARKLINE_PADDING).max(0.0);
    let min = points.iter().map(|p| p.size).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.size).fold(f64::NEG_INFINITY, f64::max);
    let step = if points.len() > 1 {
        inner_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() > 1 {
                SPARKLINE_PADDING + step * i as f64
            } else {
                width / 2.0
            };
            let y = if max > min {
                SPARKLINE_PADDING + (max - p.size) / (max - min) * inner_h
            } else {
                height / 2.0
            };
            (x, y)
        })
        .collect()
}
