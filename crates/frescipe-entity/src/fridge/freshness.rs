//! Freshness scoring.
//!
//! The score is a pure function of the item's dates and `now`. With an
//! expiry date it is the share of the lifespan still ahead of the item;
//! without one it decays by two points a day since purchase. Opening
//! subtracts a further five points a day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One day in milliseconds. All freshness arithmetic runs in milliseconds.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

const DAILY_DECAY_WITHOUT_EXPIRY: f64 = 2.0;
const DAILY_DECAY_AFTER_OPENING: f64 = 5.0;

/// Discrete freshness band derived from the rounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessStatus {
    /// Score 90 and above.
    Excellent,
    /// Score 70 to 89.
    Good,
    /// Score 50 to 69.
    Fair,
    /// Score 30 to 49.
    Poor,
    /// Score below 30.
    Expired,
}

impl FreshnessStatus {
    /// Band a rounded score.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            70..=89 => Self::Good,
            50..=69 => Self::Fair,
            30..=49 => Self::Poor,
            _ => Self::Expired,
        }
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FreshnessStatus {
    type Err = frescipe_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            "expired" => Ok(Self::Expired),
            _ => Err(frescipe_core::AppError::validation(format!(
                "Invalid freshness status: '{s}'"
            ))),
        }
    }
}

/// A computed score and its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freshness {
    /// Integer score in `0..=100`.
    pub score: u8,
    /// Band of `score`.
    pub status: FreshnessStatus,
}

impl Freshness {
    /// Score of a freshly purchased item.
    pub const FRESH: Self = Self {
        score: 100,
        status: FreshnessStatus::Excellent,
    };

    fn from_raw(raw: f64) -> Self {
        let score = raw.clamp(0.0, 100.0).round() as u8;
        Self {
            score,
            status: FreshnessStatus::from_score(score),
        }
    }
}

/// The dates freshness depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessInputs {
    /// When the item was bought.
    pub purchase_date: DateTime<Utc>,
    /// Printed expiry, if any.
    pub expiry_date: Option<DateTime<Utc>>,
    /// When the item was opened. `None` for sealed items.
    pub opened_date: Option<DateTime<Utc>>,
}

impl FreshnessInputs {
    /// Evaluate the score at `now`.
    pub fn evaluate(&self, now: DateTime<Utc>) -> Freshness {
        let base = match self.expiry_date {
            Some(expiry) => {
                let total = millis_between(self.purchase_date, expiry);
                let elapsed = millis_between(self.purchase_date, now);
                let remaining = millis_between(now, expiry);
                if remaining <= 0.0 || total <= 0.0 {
                    0.0
                } else {
                    100.0 - (elapsed / total) * 100.0
                }
            }
            None => {
                let days_elapsed = millis_between(self.purchase_date, now) / MILLIS_PER_DAY;
                100.0 - days_elapsed * DAILY_DECAY_WITHOUT_EXPIRY
            }
        };

        // Clock skew can make `elapsed` negative; cap before applying penalties.
        let mut score = base.clamp(0.0, 100.0);

        if let Some(opened) = self.opened_date {
            let days_open = millis_between(opened, now) / MILLIS_PER_DAY;
            score -= days_open * DAILY_DECAY_AFTER_OPENING;
        }

        Freshness::from_raw(score)
    }
}

fn millis_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64
}
