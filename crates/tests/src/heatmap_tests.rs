use pretty_assertions::assert_eq;
use shared_types::{
    seed, FilterChoice, HeatmapFilter, HeatmapStats, IntensityBand, ReportStatus,
};

#[test]
fn unfiltered_stats_cover_all_points() {
    let points = seed::heatmap_points();
    let visible = HeatmapFilter::default().apply(&points);
    assert_eq!(visible.len(), 6);
    assert_eq!(
        HeatmapStats::from_points(&visible),
        HeatmapStats { hotspots: 6, high_intensity: 3, active: 4, resolved: 1 }
    );
}

#[test]
fn category_filter_narrows_stats() {
    let points = seed::heatmap_points();
    let filter = HeatmapFilter {
        category: FilterChoice::Only("Infrastructure".to_string()),
        status: FilterChoice::All,
    };
    let visible = filter.apply(&points);
    let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "6"]);
    assert_eq!(HeatmapStats::from_points(&visible).high_intensity, 1);
}

#[test]
fn status_filter_combines_with_category() {
    let points = seed::heatmap_points();
    let filter = HeatmapFilter {
        category: FilterChoice::Only("Infrastructure".to_string()),
        status: FilterChoice::Only(ReportStatus::InProgress),
    };
    assert_eq!(filter.apply(&points).len(), 1);

    let none = HeatmapFilter {
        category: FilterChoice::Only("Emergency".to_string()),
        status: FilterChoice::Only(ReportStatus::Resolved),
    };
    assert!(none.apply(&points).is_empty());
    assert_eq!(HeatmapStats::from_points(&[]), HeatmapStats::default());
}

#[test]
fn seed_points_fall_into_bands() {
    let bands: Vec<IntensityBand> = seed::heatmap_points().iter().map(|p| p.band()).collect();
    assert_eq!(
        bands,
        vec![
            IntensityBand::Critical,
            IntensityBand::High,
            IntensityBand::Critical,
            IntensityBand::Medium,
            IntensityBand::High,
            IntensityBand::Medium,
        ]
    );
}
