use std::collections::HashMap;

use crate::chart::SegmentInput;
use crate::party::PartySeatRecord;

/// Fallback colors, assigned by segment position.
pub const PALETTE: [&str; 10] = [
    "#e74c3c", "#3498db", "#f39c12", "#2ecc71", "#9b59b6", "#e91e63", "#34495e", "#16a085",
    "#f1c40f", "#95a5a6",
];

const PARTY_COLORS: &[(&str, &str)] = &[
    ("自由民主党・無所属の会", "#e74c3c"),
    ("立憲民主党・無所属", "#3498db"),
    ("日本維新の会", "#f39c12"),
    ("国民民主党・無所属クラブ", "#2ecc71"),
    ("公明党", "#9b59b6"),
    ("れいわ新選組", "#e91e63"),
    ("日本共産党", "#e74c3c"),
    ("有志・改革の会", "#34495e"),
    ("参政党", "#16a085"),
    ("減税保守こども", "#f1c40f"),
    ("無所属", "#95a5a6"),
];

/// Parliamentary groups treated as the governing side.
pub const RULING_PARTIES: &[&str] = &["自由民主党・無所属の会"];

pub const RULING_BUCKET: &str = "与党";
pub const OPPOSITION_BUCKET: &str = "野党";
pub const RULING_BUCKET_COLOR: &str = "#e74c3c";
pub const OPPOSITION_BUCKET_COLOR: &str = "#3498db";

pub type ColorTable = HashMap<String, String>;

/// Deterministic fallback color for the segment at `position`.
pub fn palette_color(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

/// Name -> color lookup for the per-party chart.
pub fn party_color_table() -> ColorTable {
    PARTY_COLORS
        .iter()
        .map(|&(name, color)| (name.to_string(), color.to_string()))
        .collect()
}

pub fn is_ruling_party(name: &str) -> bool {
    RULING_PARTIES.contains(&name)
}

/// Coalition-view buckets are flagged by label rather than by party membership.
pub fn is_ruling_bucket(label: &str) -> bool {
    label == RULING_BUCKET || label == "ruling"
}

/// Per-party chart input: records with a seat number, in table order. Colors are
/// left to the chart's table/palette resolution.
pub fn party_segments(records: &[PartySeatRecord]) -> Vec<SegmentInput> {
    records
        .iter()
        .filter(|record| record.has_seat_count())
        .map(|record| SegmentInput::new(record.name.clone(), u64::from(record.total_seats())))
        .collect()
}

/// Two-bucket 与党/野党 aggregate over the per-party segments.
pub fn coalition_segments(parties: &[SegmentInput]) -> Vec<SegmentInput> {
    let (ruling, opposition) = parties.iter().fold((0u64, 0u64), |(r, o), party| {
        if is_ruling_party(&party.name) {
            (r + party.seats, o)
        } else {
            (r, o + party.seats)
        }
    });
    vec![
        SegmentInput::new(RULING_BUCKET, ruling).with_color(RULING_BUCKET_COLOR),
        SegmentInput::new(OPPOSITION_BUCKET, opposition).with_color(OPPOSITION_BUCKET_COLOR),
    ]
}
