//! Minute-resolution production timeline with gap filling and pagination.
//!
//! A requested span is split into pages of [`PAGE_SIZE_MINUTES`] minutes.
//! For one page, every minute slot yields exactly one entry: the stored
//! report that falls into that minute, or a placeholder carrying only the
//! slot's timestamp.
//!
//! The page end is capped by the *total* requested duration measured from
//! the requested start, not from the page start:
//!
//! ```text
//! end        = start + min(duration, PAGE_SIZE * page)
//! page_start = start + PAGE_SIZE * (page - 1)
//! ```
//!
//! For `page > 1` and a short duration this puts `end` before `page_start`
//! and the page is empty. Clients paginate against this arithmetic, so it
//! is kept as is.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::time::{add_minutes, TimeWindow};
use crate::types::Timestamp;
use crate::validation::{validate_duration, validate_page};

/// Number of minutes covered by a single timeline page.
pub const PAGE_SIZE_MINUTES: i64 = 60;

/// Anything that carries a sample timestamp and can be placed on a
/// timeline.
pub trait TimedSample {
    fn timestamp(&self) -> Timestamp;
}

/// One slot of a reconstructed timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimelineEntry<R> {
    /// A stored sample.
    Report(R),
    /// No sample was stored for this minute.
    Placeholder { timestamp: Timestamp },
}

impl<R: TimedSample> TimelineEntry<R> {
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Report(report) => report.timestamp(),
            Self::Placeholder { timestamp } => *timestamp,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// The window of one timeline page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePage {
    pub page: i64,
    pub window: TimeWindow,
}

impl TimelinePage {
    /// Compute the window for `page` (1-indexed) of a span of
    /// `duration_minutes` beginning at `start`.
    pub fn compute(start: Timestamp, duration_minutes: i64, page: i64) -> Result<Self, CoreError> {
        validate_duration(duration_minutes)?;
        validate_page(page)?;

        let page_end_offset = PAGE_SIZE_MINUTES
            .checked_mul(page)
            .ok_or_else(|| CoreError::Validation(format!("page is out of range: {page}")))?;
        let end = add_minutes(start, duration_minutes.min(page_end_offset), "duration")?;
        let page_start = add_minutes(start, page_end_offset - PAGE_SIZE_MINUTES, "page")?;

        Ok(Self {
            page,
            window: TimeWindow {
                start: page_start,
                end,
            },
        })
    }

    /// Timestamp of the `index`-th minute slot of this page.
    fn slot_timestamp(&self, index: i64) -> Result<Timestamp, CoreError> {
        add_minutes(self.window.start, index, "slot")
    }

    /// Index of the minute slot containing `ts`, if it lies on this page.
    fn slot_of(&self, ts: Timestamp) -> Option<i64> {
        if !self.window.contains(ts) {
            return None;
        }
        Some((ts - self.window.start).num_minutes())
    }

    /// Merge stored samples into this page, filling every empty minute with
    /// a placeholder.
    ///
    /// Samples outside the page window are ignored. When several samples
    /// share a minute, the one appearing last in `samples` wins, so callers
    /// should pass them in insertion order. The result is strictly
    /// ascending by slot with no gaps.
    pub fn reconstruct<R: TimedSample>(
        &self,
        samples: Vec<R>,
    ) -> Result<Vec<TimelineEntry<R>>, CoreError> {
        let mut by_slot: BTreeMap<i64, R> = BTreeMap::new();
        for sample in samples {
            if let Some(slot) = self.slot_of(sample.timestamp()) {
                by_slot.insert(slot, sample);
            }
        }

        let slots = self.window.minute_slots();
        let mut entries = Vec::with_capacity(usize::try_from(slots).unwrap_or_default());
        for index in 0..slots {
            let entry = match by_slot.remove(&index) {
                Some(report) => TimelineEntry::Report(report),
                None => TimelineEntry::Placeholder {
                    timestamp: self.slot_timestamp(index)?,
                },
            };
            entries.push(entry);
        }
        Ok(entries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
