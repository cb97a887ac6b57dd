//! Radar chart geometry for a [`PeriodStats`] profile.
//!
//! One axis per emotion, in enumeration order, spaced `2π/7` apart and starting
//! straight up. Coordinates are in a 400×400 drawing space with the y axis
//! pointing down, centered on `(200, 200)`.

use super::PeriodStats;
use crate::constants::{
    RADAR_CENTER_X, RADAR_CENTER_Y, RADAR_DATA_RADIUS, RADAR_GRID_RADIUS, RADAR_INNER_RING_SCALES,
};
use crate::emotion::EmotionCategory;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

/// An axis line from the center to `end`, labelled with its emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub emotion: EmotionCategory,
    pub label: &'static str,
    pub end: RadarPoint,
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub axes: Vec<RadarAxis>,
    /// Outer ring first, then the 20/40/60/80% rings.
    pub rings: Vec<Vec<RadarPoint>>,
    pub data: Vec<RadarPoint>,
}

impl RadarChart {
    pub fn from_stats(stats: &PeriodStats) -> Self {
        RadarChart {
            axes: axes(RADAR_GRID_RADIUS),
            rings: grid_rings(RADAR_GRID_RADIUS),
            data: data_polygon(stats, RADAR_DATA_RADIUS),
        }
    }
}

/// Angle of the axis at `index`, in radians.
pub fn axis_angle(index: usize) -> f64 {
    TAU / EmotionCategory::COUNT as f64 * index as f64 - FRAC_PI_2
}

/// Point on axis `index` at `distance` from the center.
pub fn point_on_axis(index: usize, distance: f64) -> RadarPoint {
    let angle = axis_angle(index);
    RadarPoint {
        x: RADAR_CENTER_X + distance * angle.cos(),
        y: RADAR_CENTER_Y + distance * angle.sin(),
    }
}

/// Data polygon vertices: each emotion's percentage of `radius` along its axis.
///
/// ```
/// use emodiary::stats::{aggregate, radar::data_polygon};
/// use emodiary::{DiaryCollection, DiaryEntry, EmotionCategory};
///
/// let collection = DiaryCollection::from_entries([DiaryEntry {
///     date_key: "2025-06-01".parse()?,
///     content: "좋아".into(),
///     emotion: EmotionCategory::Joy,
/// }]);
/// let polygon = data_polygon(&aggregate(&collection, 2025, 5), 100.0);
///
/// // Joy is the first axis, straight up, at full length.
/// assert!((polygon[0].x - 200.0).abs() < 1e-9);
/// assert!((polygon[0].y - 100.0).abs() < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn data_polygon(stats: &PeriodStats, radius: f64) -> Vec<RadarPoint> {
    EmotionCategory::ALL
        .iter()
        .map(|&emotion| {
            let distance = stats.percentage(emotion) / 100.0 * radius;
            point_on_axis(emotion.index(), distance)
        })
        .collect()
}

pub fn axes(radius: f64) -> Vec<RadarAxis> {
    EmotionCategory::ALL
        .iter()
        .map(|&emotion| RadarAxis {
            emotion,
            label: emotion.label(),
            end: point_on_axis(emotion.index(), radius),
        })
        .collect()
}

/// The outer ring at `radius`, followed by the inner rings.
pub fn grid_rings(radius: f64) -> Vec<Vec<RadarPoint>> {
    std::iter::once(1.0)
        .chain(RADAR_INNER_RING_SCALES)
        .map(|scale| ring(radius * scale))
        .collect()
}

fn ring(distance: f64) -> Vec<RadarPoint> {
    (0..EmotionCategory::COUNT)
        .map(|index| point_on_axis(index, distance))
        .collect()
}

/// Formats vertices as an SVG `points` attribute value.
pub fn svg_points(points: &[RadarPoint]) -> String {
    let mut out = String::new();
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.2},{:.2}", point.x, point.y);
    }
    out
}
