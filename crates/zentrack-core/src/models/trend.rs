use std::collections::VecDeque;

use serde::Serialize;

use crate::error::CoreError;

/// Number of points the dashboard stress chart shows.
pub const DEFAULT_TREND_CAPACITY: usize = 7;

/// Fixed-size rolling window of recent assessment percentages.
///
/// Pushing into a full series evicts the oldest point. Points are kept in
/// insertion order, oldest first, which is the order the chart plots them.
#[derive(Debug, Clone, Serialize)]
pub struct TrendSeries {
    capacity: usize,
    points: VecDeque<u8>,
}

impl TrendSeries {
    pub fn new(capacity: usize) -> Result<Self, CoreError> {
        if capacity == 0 {
            return Err(CoreError::ZeroTrendCapacity);
        }
        Ok(Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
        })
    }

    /// Append a percentage, returning the evicted point if the series was full.
    pub fn push(&mut self, percentage: u8) -> Option<u8> {
        let evicted = if self.points.len() == self.capacity {
            self.points.pop_front()
        } else {
            None
        };
        self.points.push_back(percentage.min(100));
        evicted
    }

    pub fn points(&self) -> Vec<u8> {
        self.points.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<u8> {
        self.points.back().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for TrendSeries {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TREND_CAPACITY,
            points: VecDeque::with_capacity(DEFAULT_TREND_CAPACITY),
        }
    }
}
