//! Day-picker rules for the date steps.

use jiff::civil::Date;

use crate::models::DateRange;

/// Outcome of a calendar tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPick {
    /// A new selection began at the tapped day.
    Restarted(DateRange),
    /// The tapped day closed the open selection.
    Closed(DateRange),
}

impl DayPick {
    pub fn range(&self) -> DateRange {
        match self {
            DayPick::Restarted(range) | DayPick::Closed(range) => *range,
        }
    }
}

/// Applies a tap on `day` to the current selection.
///
/// With nothing selected, or with a complete range, the tap starts a new
/// selection. With only a start, a later day closes the range and any other
/// day starts over.
pub fn pick(current: Option<&DateRange>, day: Date) -> DayPick {
    match current {
        Some(range) if !range.is_complete() && day > range.start => DayPick::Closed(DateRange {
            start: range.start,
            end: Some(day),
        }),
        _ => DayPick::Restarted(DateRange::starting(day)),
    }
}

/// Day counts offered for an approximate trip: `1..=length-1`, empty when
/// the period spans one day or less or is still open.
pub fn day_count_options(range: Option<&DateRange>) -> Vec<u32> {
    match range.and_then(DateRange::length_days) {
        Some(length) if length > 1 => (1..length).collect(),
        _ => Vec::new(),
    }
}

/// Highlight data for one calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkedDay {
    pub date: Date,
    pub starting_day: bool,
    pub ending_day: bool,
}

/// Cells to highlight for a selection. An open or single-day selection only
/// marks its start.
pub fn marked_days(range: Option<&DateRange>) -> Vec<MarkedDay> {
    let Some(range) = range else {
        return Vec::new();
    };
    match range.end {
        Some(end) if end != range.start => range
            .days()
            .map(|date| MarkedDay {
                date,
                starting_day: date == range.start,
                ending_day: date == end,
            })
            .collect(),
        _ => vec![MarkedDay {
            date: range.start,
            starting_day: true,
            ending_day: false,
        }],
    }
}
