//! Raw indicator readings handed to a live scoring run.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use biosphere_config::IndicatorKind;

/// Outcome of asking one measurement source for its latest value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Reading {
    Available(f64),
    /// The source gave up; the string says why
    Unavailable(String),
}

/// One reading per indicator for a single run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    by_indicator: HashMap<IndicatorKind, Reading>,
}

impl Readings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an available reading.
    pub fn with(mut self, indicator: IndicatorKind, value: f64) -> Self {
        self.insert(indicator, Reading::Available(value));
        self
    }

    /// Add an unavailable reading.
    pub fn unavailable(mut self, indicator: IndicatorKind, reason: &str) -> Self {
        self.insert(indicator, Reading::Unavailable(reason.to_string()));
        self
    }

    pub fn insert(&mut self, indicator: IndicatorKind, reading: Reading) {
        self.by_indicator.insert(indicator, reading);
    }

    pub fn get(&self, indicator: IndicatorKind) -> Option<&Reading> {
        self.by_indicator.get(&indicator)
    }

    /// Available value for an indicator, if any.
    pub fn value(&self, indicator: IndicatorKind) -> Option<f64> {
        match self.get(indicator)? {
            Reading::Available(v) => Some(*v),
            Reading::Unavailable(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.by_indicator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_indicator.is_empty()
    }
}

impl FromIterator<(IndicatorKind, Reading)> for Readings {
    fn from_iter<I: IntoIterator<Item = (IndicatorKind, Reading)>>(iter: I) -> Self {
        Self {
            by_indicator: iter.into_iter().collect(),
        }
    }
}
