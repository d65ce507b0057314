use crate::markup::{escape_html, format_one_decimal};
use crate::party::PartySeatRecord;

/// Aggregates shown on the statistics cards. Built from non-summary records only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatStatistics {
    pub party_count: usize,
    pub total_seats: u64,
    pub female_seats: u64,
}

impl SeatStatistics {
    pub fn from_records(records: &[PartySeatRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.party_count += 1;
            acc.total_seats += u64::from(record.total_seats());
            acc.female_seats += u64::from(record.female_seats());
            acc
        })
    }

    pub fn female_ratio(&self) -> f64 {
        if self.total_seats == 0 {
            return 0.0;
        }
        self.female_seats as f64 / self.total_seats as f64 * 100.0
    }

    /// Female ratio as shown on the card, e.g. `"20.0"`.
    pub fn female_ratio_label(&self) -> String {
        format_one_decimal(self.female_ratio())
    }

    /// Inner markup of the `stats-cards` block.
    pub fn cards_html(&self) -> String {
        let cards = [
            (self.party_count.to_string(), "会派数"),
            (self.total_seats.to_string(), "総議員数"),
            (self.female_seats.to_string(), "女性議員数"),
            (format!("{}%", self.female_ratio_label()), "女性議員比率"),
        ];
        let mut html = String::new();
        for (number, label) in cards {
            html.push_str(&format!(
                r#"<div class="stat-card"><div class="stat-number">{}</div><div class="stat-label">{label}</div></div>"#,
                escape_html(&number)
            ));
        }
        html
    }
}
