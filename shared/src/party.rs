use std::sync::LazyLock;

use regex::Regex;

use crate::config::SUMMARY_ROW_TOKEN;

static TOTAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)").expect("static pattern"));
static FEMALE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"（([0-9]+)）").expect("static pattern"));

/// Seat numbers found in a seat-count cell such as `"10（3）"`.
///
/// `None` means the pattern did not match (or the digits overflowed); callers
/// treat that as zero when aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatCount {
    pub total: Option<u32>,
    pub female: Option<u32>,
}

impl SeatCount {
    pub fn parse(text: &str) -> Self {
        let capture = |re: &Regex| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<u32>().ok())
        };
        Self {
            total: capture(&TOTAL_PATTERN),
            female: capture(&FEMALE_PATTERN),
        }
    }
}

/// Raw cell text of one table body row, as read from the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartyRow {
    pub name: String,
    pub abbreviation: String,
    pub seat_text: String,
}

impl PartyRow {
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        seat_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            seat_text: seat_text.into(),
        }
    }

    pub fn is_summary(&self) -> bool {
        is_summary_name(&self.name)
    }

    pub fn record(&self) -> PartySeatRecord {
        PartySeatRecord {
            name: self.name.trim().to_string(),
            abbreviation: self.abbreviation.trim().to_string(),
            seats: SeatCount::parse(&self.seat_text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartySeatRecord {
    pub name: String,
    pub abbreviation: String,
    pub seats: SeatCount,
}

impl PartySeatRecord {
    pub fn total_seats(&self) -> u32 {
        self.seats.total.unwrap_or(0)
    }

    pub fn female_seats(&self) -> u32 {
        self.seats.female.unwrap_or(0)
    }

    /// Whether the seat cell carried a number at all. Rows without one are
    /// counted as parties but never drawn.
    pub fn has_seat_count(&self) -> bool {
        self.seats.total.is_some()
    }
}

/// The `計` row totals the table and must never be aggregated.
pub fn is_summary_name(cell_text: &str) -> bool {
    let normalized: String = cell_text.chars().filter(|c| !c.is_whitespace()).collect();
    normalized == SUMMARY_ROW_TOKEN
}

/// Parses every non-summary row, preserving table order.
pub fn data_records(rows: &[PartyRow]) -> Vec<PartySeatRecord> {
    rows.iter()
        .filter(|row| !row.is_summary())
        .map(PartyRow::record)
        .collect()
}
