use crate::error::{CoreError, CoreResult};
use crate::solve::SolveRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The four rolling metrics tracked per puzzle.
///
/// String form matches the API and database ("avg_five", "mean_hundred").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AverageKind {
    Single,
    AvgFive,
    AvgTwelve,
    MeanHundred,
}

impl AverageKind {
    /// How many recent solves feed the metric.
    pub fn sample_size(self) -> usize {
        match self {
            Self::Single => 1,
            Self::AvgFive => 5,
            Self::AvgTwelve => 12,
            Self::MeanHundred => 100,
        }
    }

    /// Whether the metric drops the best and worst solve before averaging.
    /// Speedcubing convention: "averages" trim, "means" and singles do not.
    pub fn trimmed(self) -> bool {
        matches!(self, Self::AvgFive | Self::AvgTwelve)
    }

    pub fn from_sample_size(n: usize) -> Option<Self> {
        Self::iter().find(|kind| kind.sample_size() == n)
    }

    /// Parses the snake_case metric name, e.g. "avg_twelve".
    pub fn parse(s: &str) -> CoreResult<Self> {
        Self::from_str(s).map_err(|_| CoreError::UnknownAverageKind(s.to_string()))
    }
}

/// A defined rolling average: the value plus the window that produced it.
/// Every solve in the window contributes, including the trimmed extremes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Average {
    pub time_secs: f64,
    pub solves: Vec<SolveRecord>,
}

/// Mean over the `n` most recent solves of a newest-first history.
///
/// Returns `None` while the history is still shorter than `n`. With
/// `trimmed` set, one slowest and one fastest solve are dropped before the
/// mean is taken; windows of fewer than three fall back to the plain mean.
/// DNF solves count at their recorded time.
pub fn average_of(n: usize, history: &[SolveRecord], trimmed: bool) -> Option<Average> {
    if history.len() < n || n == 0 {
        return None;
    }

    let window = &history[..n];
    let mut times: Vec<f64> = window.iter().map(|s| s.time_secs).collect();

    let time_secs = if trimmed && times.len() > 2 {
        times.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let kept = &times[1..times.len() - 1];
        kept.iter().sum::<f64>() / kept.len() as f64
    } else {
        times.iter().sum::<f64>() / times.len() as f64
    };

    Some(Average {
        time_secs,
        solves: window.to_vec(),
    })
}

/// All four metrics evaluated against one history snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAverages {
    pub single: Option<Average>,
    pub avg_five: Option<Average>,
    pub avg_twelve: Option<Average>,
    pub mean_hundred: Option<Average>,
}

impl CurrentAverages {
    /// Evaluates every metric over a newest-first history.
    pub fn compute(history: &[SolveRecord]) -> Self {
        Self {
            single: average_of(1, history, false),
            avg_five: average_of(5, history, true),
            avg_twelve: average_of(12, history, true),
            mean_hundred: average_of(100, history, false),
        }
    }

    pub fn get(&self, kind: AverageKind) -> Option<&Average> {
        match kind {
            AverageKind::Single => self.single.as_ref(),
            AverageKind::AvgFive => self.avg_five.as_ref(),
            AverageKind::AvgTwelve => self.avg_twelve.as_ref(),
            AverageKind::MeanHundred => self.mean_hundred.as_ref(),
        }
    }

    /// Metric kinds paired with their (possibly undefined) values, in the
    /// fixed single / avg_five / avg_twelve / mean_hundred order.
    pub fn entries(&self) -> impl Iterator<Item = (AverageKind, Option<&Average>)> + '_ {
        AverageKind::iter().map(move |kind| (kind, self.get(kind)))
    }
}
