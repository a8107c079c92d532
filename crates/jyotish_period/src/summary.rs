//! Range statistics over finished day records.
//!
//! Sentinel records are counted as failed days and excluded from every
//! statistic and ranking.

use chrono::NaiveDate;
use serde::Serialize;

use crate::day::DayRecord;
use crate::scoring::Quality;

/// Window compared at each end of the range for the trend.
pub const TREND_WINDOW: usize = 7;

/// Mean difference beyond which the trend is not Stable.
pub const TREND_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QualityCounts {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub below_average: usize,
    pub poor: usize,
}

impl QualityCounts {
    fn add(&mut self, quality: Quality) {
        match quality {
            Quality::Excellent => self.excellent += 1,
            Quality::Good => self.good += 1,
            Quality::Average => self.average += 1,
            Quality::BelowAverage => self.below_average += 1,
            Quality::Poor => self.poor += 1,
            Quality::Unknown => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDay {
    pub date: NaiveDate,
    pub score: f64,
    pub quality: Quality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub total_days: usize,
    pub valid_days: usize,
    pub failed_days: usize,
    /// `None` when no day succeeded.
    pub average_score: Option<f64>,
    pub median_score: Option<f64>,
    pub highest_score: Option<f64>,
    pub lowest_score: Option<f64>,
    pub counts: QualityCounts,
    pub trend: Trend,
    pub best_days: Vec<RankedDay>,
    pub worst_days: Vec<RankedDay>,
}

fn mean(xs: &[f64]) -> Option<f64> {
    (!xs.is_empty()).then(|| xs.iter().sum::<f64>() / xs.len() as f64)
}

fn median(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}

/// Trend of calendar-ordered scores: last window mean minus first window mean.
pub fn classify_trend(scores: &[f64]) -> Trend {
    if scores.len() < 2 {
        return Trend::Stable;
    }
    let n = TREND_WINDOW.min(scores.len());
    let (Some(first), Some(last)) = (mean(&scores[..n]), mean(&scores[scores.len() - n..])) else {
        return Trend::Stable;
    };
    let delta = last - first;
    if delta > TREND_THRESHOLD {
        Trend::Improving
    } else if delta < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn ranked(day: &DayRecord) -> RankedDay {
    RankedDay {
        date: day.date,
        score: day.score,
        quality: day.quality,
    }
}

/// Summarize calendar-ordered records. Rankings are stable: ties keep
/// calendar order.
pub fn summarize(records: &[DayRecord], top_n: usize) -> PeriodSummary {
    let valid: Vec<&DayRecord> = records.iter().filter(|r| !r.is_sentinel()).collect();
    let scores: Vec<f64> = valid.iter().map(|r| r.score).collect();

    let mut counts = QualityCounts::default();
    for s in &scores {
        counts.add(Quality::from_score(*s));
    }

    let mut best = valid.clone();
    best.sort_by(|a, b| b.score.total_cmp(&a.score));
    let mut worst = valid.clone();
    worst.sort_by(|a, b| a.score.total_cmp(&b.score));

    PeriodSummary {
        total_days: records.len(),
        valid_days: valid.len(),
        failed_days: records.len() - valid.len(),
        average_score: mean(&scores),
        median_score: median(&scores),
        highest_score: scores.iter().copied().max_by(f64::total_cmp),
        lowest_score: scores.iter().copied().min_by(f64::total_cmp),
        counts,
        trend: classify_trend(&scores),
        best_days: best.into_iter().take(top_n).map(ranked).collect(),
        worst_days: worst.into_iter().take(top_n).map(ranked).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_thresholds() {
        assert_eq!(classify_trend(&[]), Trend::Stable);
        assert_eq!(classify_trend(&[90.0]), Trend::Stable);
        let rising: Vec<f64> = (0..14).map(|i| 50.0 + i as f64).collect();
        assert_eq!(classify_trend(&rising), Trend::Improving);
        let falling: Vec<f64> = rising.iter().rev().copied().collect();
        assert_eq!(classify_trend(&falling), Trend::Declining);
        let flat: Vec<f64> = (0..14).map(|i| 60.0 + (i % 2) as f64).collect();
        assert_eq!(classify_trend(&flat), Trend::Stable);
    }

    fn scored(day: u32, score: f64) -> DayRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let mut r = DayRecord::sentinel(date, "unused");
        r.error = None;
        r.score = score;
        r.quality = Quality::from_score(score);
        r
    }

    fn dates(days: &[RankedDay]) -> Vec<u32> {
        use chrono::Datelike;
        days.iter().map(|r| r.date.day()).collect()
    }

    #[test]
    fn tied_rankings_keep_calendar_order() {
        let records: Vec<DayRecord> = [60.0, 70.0, 60.0, 70.0, 60.0]
            .iter()
            .enumerate()
            .map(|(i, &s)| scored(i as u32 + 1, s))
            .collect();
        let summary = summarize(&records, 3);
        assert_eq!(dates(&summary.best_days), vec![2, 4, 1]);
        assert_eq!(dates(&summary.worst_days), vec![1, 3, 5]);
    }

    #[test]
    fn sentinels_are_left_out_of_rankings() {
        let mut records = vec![scored(1, 40.0), scored(2, 80.0), scored(3, 40.0)];
        records.insert(
            1,
            DayRecord::sentinel(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(), "gap"),
        );
        let summary = summarize(&records, 5);
        assert_eq!(summary.total_days, 4);
        assert_eq!(summary.failed_days, 1);
        assert_eq!(dates(&summary.best_days), vec![2, 1, 3]);
        assert_eq!(dates(&summary.worst_days), vec![1, 3, 2]);
        assert_eq!(summary.average_score, Some(160.0 / 3.0));
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }
}
