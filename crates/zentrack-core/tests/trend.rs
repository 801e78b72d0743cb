use zentrack_core::error::CoreError;
use zentrack_core::models::trend::{TrendSeries, DEFAULT_TREND_CAPACITY};

#[test]
fn default_series_holds_seven_points() {
    let series = TrendSeries::default();
    assert_eq!(series.capacity(), DEFAULT_TREND_CAPACITY);
    assert_eq!(series.capacity(), 7);
    assert!(series.is_empty());
    assert_eq!(series.latest(), None);
}

#[test]
fn zero_capacity_is_rejected() {
    assert!(matches!(
        TrendSeries::new(0),
        Err(CoreError::ZeroTrendCapacity)
    ));
}

#[test]
fn full_series_evicts_oldest_first() {
    let mut series = TrendSeries::new(3).unwrap();
    assert_eq!(series.push(10), None);
    assert_eq!(series.push(20), None);
    assert_eq!(series.push(30), None);
    assert_eq!(series.push(40), Some(10));
    assert_eq!(series.points(), vec![20, 30, 40]);
    assert_eq!(series.latest(), Some(40));
    assert_eq!(series.len(), 3);
}

#[test]
fn eighth_score_rolls_the_weekly_chart() {
    let mut series = TrendSeries::default();
    for score in [45, 52, 38, 60, 55, 42, 50] {
        series.push(score);
    }
    series.push(70);
    assert_eq!(series.points(), vec![52, 38, 60, 55, 42, 50, 70]);
}

#[test]
fn percentages_above_one_hundred_are_clamped() {
    let mut series = TrendSeries::new(2).unwrap();
    series.push(250);
    assert_eq!(series.latest(), Some(100));
}
