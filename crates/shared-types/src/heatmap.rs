use serde::{Deserialize, Serialize};

use crate::filter::FilterChoice;
use crate::report::ReportStatus;

/// Categories offered by the heat map's category filter.
pub const HEATMAP_CATEGORIES: &[&str] = &[
    "Infrastructure",
    "Transportation",
    "Emergency",
    "Waste Management",
    "Public Safety",
    "Parks & Recreation",
];

/// Intensity at or above which a hotspot counts as high intensity.
pub const HIGH_INTENSITY: f64 = 0.7;

/// A cluster of reports around one location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapPoint {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Normalised density in `0.0..=1.0`.
    pub intensity: f64,
    pub status: ReportStatus,
    pub category: String,
    pub title: String,
    pub report_count: u32,
}

impl HeatmapPoint {
    pub fn band(&self) -> IntensityBand {
        IntensityBand::from_intensity(self.intensity)
    }

    /// Intensity as a whole percentage.
    pub fn intensity_percent(&self) -> u32 {
        (self.intensity.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    /// Position on the mock map as `(left%, top%)`.
    ///
    /// This is a placeholder projection that spreads the sample coordinates
    /// across the canvas; it is not a geographic mapping.
    pub fn map_position(&self) -> (f64, f64) {
        let left = ((self.lng + 74.5) * 1000.0).rem_euclid(80.0);
        let top = ((40.8 - self.lat) * 1000.0).rem_euclid(60.0);
        (left, top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityBand {
    Low,
    Medium,
    High,
    Critical,
}

pub const ALL_INTENSITY_BANDS: &[IntensityBand] = &[
    IntensityBand::Critical,
    IntensityBand::High,
    IntensityBand::Medium,
    IntensityBand::Low,
];

impl IntensityBand {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity >= 0.8 {
            IntensityBand::Critical
        } else if intensity >= 0.6 {
            IntensityBand::High
        } else if intensity >= 0.4 {
            IntensityBand::Medium
        } else {
            IntensityBand::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            IntensityBand::Critical => "#dc2626",
            IntensityBand::High => "#ea580c",
            IntensityBand::Medium => "#f59e0b",
            IntensityBand::Low => "#22c55e",
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            IntensityBand::Critical => "Critical (0.8+)",
            IntensityBand::High => "High (0.6-0.8)",
            IntensityBand::Medium => "Medium (0.4-0.6)",
            IntensityBand::Low => "Low (0.0-0.4)",
        }
    }
}

/// Marker colour for a report status on the map.
pub fn status_color(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Open => "#f59e0b",
        ReportStatus::InProgress => "#3b82f6",
        ReportStatus::Resolved => "#10b981",
        ReportStatus::Escalated => "#ef4444",
    }
}

/// How hotspots are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapView {
    #[default]
    Heatmap,
    Markers,
    Clusters,
}

pub const ALL_MAP_VIEWS: &[MapView] = &[MapView::Heatmap, MapView::Markers, MapView::Clusters];

impl MapView {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapView::Heatmap => "heatmap",
            MapView::Markers => "markers",
            MapView::Clusters => "clusters",
        }
    }

    pub fn parse(s: &str) -> Self {
        ALL_MAP_VIEWS
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapView::Heatmap => "Heat Map",
            MapView::Markers => "Markers",
            MapView::Clusters => "Clusters",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapFilter {
    pub category: FilterChoice<String>,
    pub status: FilterChoice<ReportStatus>,
}

impl HeatmapFilter {
    pub fn matches(&self, point: &HeatmapPoint) -> bool {
        self.category.accepts(&point.category) && self.status.accepts(&point.status)
    }

    pub fn apply(&self, points: &[HeatmapPoint]) -> Vec<HeatmapPoint> {
        points.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Stat card figures, computed over the visible points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeatmapStats {
    pub hotspots: usize,
    pub high_intensity: usize,
    pub active: usize,
    pub resolved: usize,
}

impl HeatmapStats {
    pub fn from_points(points: &[HeatmapPoint]) -> Self {
        Self {
            hotspots: points.len(),
            high_intensity: points.iter().filter(|p| p.intensity >= HIGH_INTENSITY).count(),
            active: points.iter().filter(|p| p.status.is_active()).count(),
            resolved: points
                .iter()
                .filter(|p| p.status == ReportStatus::Resolved)
                .count(),
        }
    }
}
