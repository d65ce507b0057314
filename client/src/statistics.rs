use shugiin_shared::{SeatStatistics, data_records, seat_charts_html};

use crate::log;
use crate::page::{Page, create_with_class, party_rows};

pub const STATS_CLASS: &str = "stats-cards";
pub const CHART_CLASS: &str = "seat-chart-container";

/// Insert the statistics cards above the table. Nothing is inserted when the
/// table has no data rows.
pub fn insert_statistics<P: Page>(page: &P) -> Option<P::Node> {
    let table = page.table()?;
    let records = data_records(&party_rows(page, &table));
    if records.is_empty() {
        return None;
    }
    let stats = SeatStatistics::from_records(&records);

    let container = create_with_class(page, "div", &format!("{STATS_CLASS} fade-in"))?;
    page.set_inner_html(&container, &stats.cards_html());
    page.insert_before(&table, &container).then_some(container)
}

/// Insert the per-party and coalition seat charts above the table.
pub fn insert_seat_chart<P: Page>(page: &P) -> Option<P::Node> {
    let table = page.table()?;
    let records = data_records(&party_rows(page, &table));
    if records.is_empty() {
        return None;
    }
    let html = match seat_charts_html(&records) {
        Ok(html) => html,
        Err(e) => {
            log::info(&format!("Seat chart skipped: {e}"));
            return None;
        }
    };

    let container = create_with_class(page, "div", &format!("{CHART_CLASS} fade-in"))?;
    page.set_inner_html(&container, &html);
    page.insert_before(&table, &container).then_some(container)
}

/// Show or hide both blocks in place; nothing is recomputed.
pub fn set_statistics_visible<P: Page>(page: &P, visible: bool) {
    if let Some(stats) = page.elements_with_class(STATS_CLASS).first() {
        page.set_style(stats, "display", if visible { "grid" } else { "none" });
    }
    if let Some(chart) = page.elements_with_class(CHART_CLASS).first() {
        page.set_style(chart, "display", if visible { "block" } else { "none" });
    }
}
