//! Health analytics
//!
//! Simulated 30-day history, summary statistics, CSV export, the monthly text
//! report, and the hourly trend over a work shift. History values are drawn at
//! random; they are not produced by the aggregator.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::info;

use crate::error::GuardError;

/// CSV header for exported history
pub const CSV_HEADER: &str = "Date,Health_Score,Stress_Level,Fatigue_Score,Posture_Score";
/// Days of history shown on the analytics page
pub const HISTORY_DAYS: usize = 30;
/// Health score at or above which a day counts as healthy
pub const HEALTHY_DAY_SCORE: f64 = 75.0;
/// Hours in a tracked work shift
pub const SHIFT_HOURS: u32 = 8;

/// First day of the simulated history
pub fn default_history_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// One day of history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHealthRecord {
    pub date: NaiveDate,
    pub health_score: f64,
    pub stress_level: f64,
    pub fatigue_score: f64,
    pub posture_score: f64,
}

/// Draw `days` consecutive days of history starting at `start`
pub fn generate_history<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    days: usize,
) -> Vec<DailyHealthRecord> {
    (0..days)
        .map(|offset| DailyHealthRecord {
            date: start + Duration::days(offset as i64),
            health_score: rng.gen_range(60.0..95.0),
            stress_level: rng.gen_range(20.0..80.0),
            fatigue_score: rng.gen_range(30.0..90.0),
            posture_score: rng.gen_range(65.0..95.0),
        })
        .collect()
}

/// Summary statistics over a history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub days: usize,
    pub average_health: f64,
    pub lowest_health: f64,
    pub healthy_days: usize,
    /// Last day's health score minus the first day's
    pub change: f64,
    /// Latest day's values for the component chart
    pub latest: Option<DailyHealthRecord>,
}

impl AnalyticsSummary {
    /// Summarize a history. An empty history yields zeros.
    pub fn from_records(records: &[DailyHealthRecord]) -> Self {
        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Self {
                    days: 0,
                    average_health: 0.0,
                    lowest_health: 0.0,
                    healthy_days: 0,
                    change: 0.0,
                    latest: None,
                }
            }
        };

        let total: f64 = records.iter().map(|r| r.health_score).sum();
        let lowest_health = records
            .iter()
            .map(|r| r.health_score)
            .fold(f64::INFINITY, f64::min);
        let healthy_days = records
            .iter()
            .filter(|r| r.health_score >= HEALTHY_DAY_SCORE)
            .count();

        Self {
            days: records.len(),
            average_health: total / records.len() as f64,
            lowest_health,
            healthy_days,
            change: last.health_score - first.health_score,
            latest: Some(last.clone()),
        }
    }

    /// Render the monthly report text
    pub fn monthly_report(&self) -> String {
        format!(
            "MONTHLY HEALTH REPORT\n\
             =====================\n\
             \n\
             Summary:\n\
             - Average Health Score: {:.1}/100\n\
             - Healthy Days: {}\n\
             - Improvement Trend: {:.1} points\n\
             \n\
             Recommendations:\n\
             1. Continue monitoring stress levels\n\
             2. Maintain posture improvement exercises\n\
             3. Schedule regular health check-ups\n\
             4. Encourage hydration and breaks\n\
             \n\
             Next Steps:\n\
             - Schedule individual health consultations\n\
             - Implement workstation ergonomics review\n\
             - Plan wellness workshops\n",
            self.average_health, self.healthy_days, self.change
        )
    }
}

/// Render history as CSV, header first
pub fn to_csv(records: &[DailyHealthRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for record in records {
        lines.push(format!(
            "{},{},{},{},{}",
            record.date.format("%m-%d"),
            record.health_score,
            record.stress_level,
            record.fatigue_score,
            record.posture_score
        ));
    }
    lines.join("\n") + "\n"
}

/// Write history as CSV to any writer
pub fn write_csv<W: Write>(records: &[DailyHealthRecord], mut writer: W) -> Result<(), GuardError> {
    writer.write_all(to_csv(records).as_bytes())?;
    writer.flush()?;
    info!(rows = records.len(), "exported health history");
    Ok(())
}

/// One hour of a shift trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyTrendPoint {
    pub hour: u32,
    pub heart_rate: i32,
    pub stress_score: i32,
    pub posture_score: i32,
}

/// Draw heart rate, stress and posture for each hour of a shift
pub fn generate_shift_trend<R: Rng>(rng: &mut R) -> Vec<HourlyTrendPoint> {
    (1..=SHIFT_HOURS)
        .map(|hour| HourlyTrendPoint {
            hour,
            heart_rate: 72 + rng.gen_range(-5..5),
            stress_score: 30 + rng.gen_range(-10..10),
            posture_score: 85 + rng.gen_range(-10..5),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(day: u32, health: f64) -> DailyHealthRecord {
        DailyHealthRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            health_score: health,
            stress_level: 40.0,
            fatigue_score: 50.0,
            posture_score: 80.5,
        }
    }

    #[test]
    fn test_history_shape_and_ranges() {
        let mut rng = StdRng::seed_from_u64(30);
        let history = generate_history(&mut rng, default_history_start(), HISTORY_DAYS);

        assert_eq!(history.len(), 30);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(history[29].date, NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
        for day in &history {
            assert!((60.0..95.0).contains(&day.health_score));
            assert!((20.0..80.0).contains(&day.stress_level));
            assert!((30.0..90.0).contains(&day.fatigue_score));
            assert!((65.0..95.0).contains(&day.posture_score));
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = to_csv(&[record(1, 72.5), record(2, 81.0)]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Date,Health_Score,Stress_Level,Fatigue_Score,Posture_Score");
        assert_eq!(lines[1], "01-01,72.5,40,50,80.5");
        assert_eq!(lines[2], "01-02,81,40,50,80.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_csv_to_buffer() {
        let mut buffer = Vec::new();
        write_csv(&[record(5, 66.0)], &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with(CSV_HEADER));
        assert!(text.contains("01-05,66,"));
    }

    #[test]
    fn test_summary_statistics() {
        let records = vec![record(1, 70.0), record(2, 80.0), record(3, 75.0), record(4, 90.0)];
        let summary = AnalyticsSummary::from_records(&records);

        assert_eq!(summary.days, 4);
        assert_eq!(summary.average_health, 78.75);
        assert_eq!(summary.lowest_health, 70.0);
        assert_eq!(summary.healthy_days, 3);
        assert_eq!(summary.change, 20.0);
        assert_eq!(summary.latest, Some(record(4, 90.0)));
    }

    #[test]
    fn test_empty_summary() {
        let summary = AnalyticsSummary::from_records(&[]);
        assert_eq!(summary.days, 0);
        assert!(summary.latest.is_none());
    }

    #[test]
    fn test_monthly_report_text() {
        let summary = AnalyticsSummary::from_records(&[record(1, 70.0), record(2, 64.0)]);
        let report = summary.monthly_report();

        assert!(report.starts_with("MONTHLY HEALTH REPORT"));
        assert!(report.contains("- Average Health Score: 67.0/100"));
        assert!(report.contains("- Healthy Days: 0"));
        assert!(report.contains("- Improvement Trend: -6.0 points"));
    }

    #[test]
    fn test_shift_trend() {
        let mut rng = StdRng::seed_from_u64(8);
        let trend = generate_shift_trend(&mut rng);

        assert_eq!(trend.len(), 8);
        assert_eq!(trend[0].hour, 1);
        assert_eq!(trend[7].hour, 8);
        for point in &trend {
            assert!((67..=76).contains(&point.heart_rate));
            assert!((20..=39).contains(&point.stress_score));
            assert!((75..=89).contains(&point.posture_score));
        }
    }
}
