//! Semicircle ("hemicycle") seat chart.
//!
//! Segments are laid out along the upper half of a ring centred at
//! (`CHART_CENTER_X`, `CHART_CENTER_Y`). Angles are in SVG space (y grows
//! downward): the arc starts at π (left end), and sweeping clockwise by π ends
//! at 2π (right end), passing 1.5π at the top.

use std::f64::consts::PI;
use std::fmt::Write;

use thiserror::Error;

use crate::colors::{
    ColorTable, coalition_segments, is_ruling_bucket, is_ruling_party, palette_color,
    party_color_table, party_segments,
};
use crate::config::{
    CHART_CENTER_X, CHART_CENTER_Y, CHART_OUTER_RADIUS, CHART_STROKE_WIDTH, CHART_VIEWBOX_HEIGHT,
    CHART_VIEWBOX_WIDTH, MAJORITY_COLOR, MAJORITY_LABEL_HEIGHT, MAJORITY_LABEL_OFFSET,
    MAJORITY_LABEL_WIDTH, MAJORITY_MARKER_RADIUS,
};
use crate::markup::{escape_html, format_coord, format_one_decimal};
use crate::party::PartySeatRecord;

pub const PARTY_CHART_TITLE: &str = "政党別議席数";
pub const COALITION_CHART_TITLE: &str = "与野党別議席数";
pub const CHART_HEADING: &str = "🏛️ 議席配分グラフ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("seat chart needs a positive seat total")]
    NoSeats,
}

/// One slice as supplied by the caller. Draw order is slice order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentInput {
    pub name: String,
    pub seats: u64,
    pub color: Option<String>,
}

impl SegmentInput {
    pub fn new(name: impl Into<String>, seats: u64) -> Self {
        Self {
            name: name.into(),
            seats,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A slice after color and governing-side resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSegment {
    pub label: String,
    pub seats: u64,
    pub color_hex: String,
    pub is_governing: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartOptions<'a> {
    pub title: &'a str,
    pub colors: Option<&'a ColorTable>,
    /// Coalition view flags buckets by label (`与党`) instead of party membership.
    pub coalition_view: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

fn polar(radius: f64, angle: f64) -> Point {
    Point {
        x: CHART_CENTER_X + radius * angle.cos(),
        y: CHART_CENTER_Y + radius * angle.sin(),
    }
}

/// Radius of the stroke centre line.
pub fn arc_radius() -> f64 {
    CHART_OUTER_RADIUS - CHART_STROKE_WIDTH / 2.0
}

pub fn majority_threshold(total_seats: u64) -> u64 {
    total_seats.div_ceil(2)
}

pub fn majority_angle(majority: u64, total_seats: u64) -> f64 {
    PI + (majority as f64 / total_seats as f64) * PI
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    pub segment: ChartSegment,
    pub start_angle: f64,
    pub sweep: f64,
    pub start: Point,
    pub end: Point,
    pub percentage: f64,
}

impl ArcPath {
    /// Only a slice wider than the half-ring itself needs the large-arc flag.
    pub fn large_arc(&self) -> bool {
        self.sweep > PI
    }

    pub fn path_data(&self) -> String {
        let r = format_coord(arc_radius());
        format!(
            "M {} {} A {r} {r} 0 {} 1 {} {}",
            format_coord(self.start.x),
            format_coord(self.start.y),
            u8::from(self.large_arc()),
            format_coord(self.end.x),
            format_coord(self.end.y),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MajorityMarker {
    pub seats: u64,
    pub angle: f64,
    pub inner: Point,
    pub outer: Point,
    pub label: Point,
}

impl MajorityMarker {
    fn new(seats: u64, total_seats: u64) -> Self {
        let angle = majority_angle(seats, total_seats);
        let radius = arc_radius();
        Self {
            seats,
            angle,
            inner: polar(radius - CHART_STROKE_WIDTH / 2.0, angle),
            outer: polar(radius + CHART_STROKE_WIDTH / 2.0, angle),
            label: polar(CHART_OUTER_RADIUS + MAJORITY_LABEL_OFFSET, angle),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemicircleChart {
    pub title: String,
    pub total_seats: u64,
    pub coalition_view: bool,
    pub arcs: Vec<ArcPath>,
    pub majority: MajorityMarker,
}

impl SemicircleChart {
    /// Lay out `segments` against `total_seats`. The denominator is used as
    /// given even if the segments sum to something else.
    pub fn layout(
        segments: &[SegmentInput],
        total_seats: u64,
        majority: u64,
        options: &ChartOptions<'_>,
    ) -> Result<Self, ChartError> {
        if total_seats == 0 {
            return Err(ChartError::NoSeats);
        }
        let total = total_seats as f64;
        let radius = arc_radius();

        let mut offset = 0.0;
        let mut arcs = Vec::with_capacity(segments.len());
        for (index, input) in segments.iter().enumerate() {
            let share = input.seats as f64 / total;
            let sweep = share * PI;
            let start_angle = PI + offset;
            let color_hex = input
                .color
                .clone()
                .or_else(|| options.colors.and_then(|table| table.get(&input.name).cloned()))
                .unwrap_or_else(|| palette_color(index).to_string());
            let is_governing = if options.coalition_view {
                is_ruling_bucket(&input.name)
            } else {
                is_ruling_party(&input.name)
            };

            arcs.push(ArcPath {
                segment: ChartSegment {
                    label: input.name.clone(),
                    seats: input.seats,
                    color_hex,
                    is_governing,
                },
                start_angle,
                sweep,
                start: polar(radius, start_angle),
                end: polar(radius, start_angle + sweep),
                percentage: share * 100.0,
            });
            offset += sweep;
        }

        Ok(Self {
            title: options.title.to_string(),
            total_seats,
            coalition_view: options.coalition_view,
            arcs,
            majority: MajorityMarker::new(majority, total_seats),
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = &ChartSegment> {
        self.arcs.iter().map(|arc| &arc.segment)
    }

    pub fn total_sweep(&self) -> f64 {
        self.arcs.iter().map(|arc| arc.sweep).sum()
    }

    pub fn svg(&self) -> String {
        let mut svg = String::with_capacity(1024 + self.arcs.len() * 320);
        let _ = write!(
            svg,
            r#"<svg viewBox="0 0 {CHART_VIEWBOX_WIDTH} {CHART_VIEWBOX_HEIGHT}" xmlns="http://www.w3.org/2000/svg">"#
        );

        for arc in &self.arcs {
            let name = escape_html(&arc.segment.label);
            let _ = write!(
                svg,
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" opacity="0.9" class="chart-segment" data-party="{name}" data-seats="{}"><title>{name}: {}議席 ({}%)</title></path>"#,
                arc.path_data(),
                escape_html(&arc.segment.color_hex),
                format_coord(CHART_STROKE_WIDTH),
                arc.segment.seats,
                arc.segment.seats,
                format_one_decimal(arc.percentage),
            );
        }

        let m = &self.majority;
        let _ = write!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{MAJORITY_COLOR}" stroke-width="4" stroke-dasharray="8,4" opacity="1" class="majority-line"/>"#,
            format_coord(m.inner.x),
            format_coord(m.inner.y),
            format_coord(m.outer.x),
            format_coord(m.outer.y),
        );
        let _ = write!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{MAJORITY_COLOR}" opacity="1"/>"#,
            format_coord(m.outer.x),
            format_coord(m.outer.y),
            format_coord(MAJORITY_MARKER_RADIUS),
        );
        let _ = write!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="rgba(255, 71, 87, 0.9)" rx="15" stroke="{MAJORITY_COLOR}" stroke-width="2"/>"#,
            format_coord(m.label.x - MAJORITY_LABEL_WIDTH / 2.0),
            format_coord(m.label.y - MAJORITY_LABEL_HEIGHT / 2.0),
            format_coord(MAJORITY_LABEL_WIDTH),
            format_coord(MAJORITY_LABEL_HEIGHT),
        );
        let _ = write!(
            svg,
            r##"<text x="{}" y="{}" fill="#ffffff" font-size="16" font-weight="bold" text-anchor="middle" class="majority-label">過半数 {}</text>"##,
            format_coord(m.label.x),
            format_coord(m.label.y + 10.0),
            m.seats,
        );

        svg.push_str("</svg>");
        svg
    }

    pub fn legend_html(&self) -> String {
        let mut html = String::new();
        for arc in &self.arcs {
            let segment = &arc.segment;
            let class = if segment.is_governing {
                "legend-item ruling-party"
            } else {
                "legend-item"
            };
            let _ = write!(
                html,
                r#"<div class="{class}"><div class="legend-color" style="background: {};"></div><div class="legend-info"><div class="legend-name">{}</div><div class="legend-seats">{}議席<span class="legend-percentage">({}%)</span></div></div></div>"#,
                escape_html(&segment.color_hex),
                escape_html(&segment.label),
                segment.seats,
                format_one_decimal(arc.percentage),
            );
        }
        html
    }

    pub fn center_label_html(&self) -> String {
        format!(
            r#"<div class="chart-center-text"><div class="chart-total">{}</div><div class="chart-label">総議席数</div></div>"#,
            self.total_seats
        )
    }

    /// Titled block: chart, centre label and legend.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="semicircle-chart-block"><h3 class="semicircle-chart-title">{}</h3><div class="chart-wrapper"><div class="semicircle-chart">{}{}</div></div><div class="chart-legend">{}</div></div>"#,
            escape_html(&self.title),
            self.svg(),
            self.center_label_html(),
            self.legend_html(),
        )
    }
}

/// Inner markup of `seat-chart-container`: the per-party chart followed by the
/// ruling/opposition chart, both over the same seat total and majority. Seat
/// counts are summed in `u64`, the same width the statistics cards use.
pub fn seat_charts_html(records: &[PartySeatRecord]) -> Result<String, ChartError> {
    let parties = party_segments(records);
    let total_seats: u64 = parties.iter().map(|party| party.seats).sum();
    let majority = majority_threshold(total_seats);
    let colors = party_color_table();

    let party_chart = SemicircleChart::layout(
        &parties,
        total_seats,
        majority,
        &ChartOptions {
            title: PARTY_CHART_TITLE,
            colors: Some(&colors),
            coalition_view: false,
        },
    )?;
    let coalition_chart = SemicircleChart::layout(
        &coalition_segments(&parties),
        total_seats,
        majority,
        &ChartOptions {
            title: COALITION_CHART_TITLE,
            colors: None,
            coalition_view: true,
        },
    )?;

    Ok(format!(
        r#"<h2 class="seat-chart-title">{CHART_HEADING}</h2>{}<div class="seat-chart-spacer"></div>{}"#,
        party_chart.to_html(),
        coalition_chart.to_html(),
    ))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::{
        ChartError, ChartOptions, SegmentInput, SemicircleChart, arc_radius, majority_angle,
        majority_threshold, seat_charts_html,
    };
    use crate::colors::party_color_table;
    use crate::party::{PartyRow, data_records};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    fn layout(segments: &[SegmentInput], total: u64) -> SemicircleChart {
        SemicircleChart::layout(
            segments,
            total,
            majority_threshold(total),
            &ChartOptions {
                title: "test",
                ..ChartOptions::default()
            },
        )
        .expect("positive total")
    }

    #[test]
    fn sixty_forty_split() {
        let chart = layout(
            &[SegmentInput::new("A", 60), SegmentInput::new("B", 40)],
            100,
        );
        assert_close(chart.arcs[0].sweep, 0.6 * PI);
        assert_close(chart.arcs[1].sweep, 0.4 * PI);
        assert_close(chart.arcs[1].start_angle, PI + 0.6 * PI);
        assert_eq!(chart.majority.seats, 50);
        assert_close(chart.majority.angle, 1.5 * PI);
    }

    #[test]
    fn sweeps_sum_to_half_turn() {
        let seats = [196, 148, 38, 28, 24, 9, 8, 4, 3, 2, 1, 4];
        let segments: Vec<_> = seats
            .iter()
            .enumerate()
            .map(|(i, &s)| SegmentInput::new(format!("P{i}"), s))
            .collect();
        let chart = layout(&segments, seats.iter().sum());
        assert_close(chart.total_sweep(), PI);
        let last = chart.arcs.last().expect("segments");
        assert_close(last.start_angle + last.sweep, 2.0 * PI);
    }

    #[test]
    fn arcs_start_left_and_end_right() {
        let chart = layout(&[SegmentInput::new("A", 1), SegmentInput::new("B", 1)], 2);
        let r = arc_radius();
        assert_close(chart.arcs[0].start.x, 250.0 - r);
        assert_close(chart.arcs[0].start.y, 240.0);
        // Shared boundary sits at the top of the ring.
        assert_close(chart.arcs[0].end.x, 250.0);
        assert_close(chart.arcs[0].end.y, 240.0 - r);
        assert_close(chart.arcs[1].end.x, 250.0 + r);
        assert!(chart.arcs[0].path_data().starts_with("M 80 240 A 170 170 0 0 1 250 70"));
    }

    #[test]
    fn single_segment_is_one_half_circle() {
        let chart = layout(&[SegmentInput::new("A", 465)], 465);
        assert_eq!(chart.arcs.len(), 1);
        assert_close(chart.arcs[0].sweep, PI);
        assert!(!chart.arcs[0].large_arc());
        assert_eq!(chart.majority.seats, 233);
    }

    #[test]
    fn oversized_segment_sets_large_arc_flag() {
        // Denominator smaller than the segment: drawn as given.
        let chart = layout(&[SegmentInput::new("A", 30)], 20);
        assert!(chart.arcs[0].large_arc());
        assert!(chart.arcs[0].path_data().contains(" 0 1 1 "));
    }

    #[test]
    fn zero_total_is_rejected() {
        let err = SemicircleChart::layout(&[], 0, 0, &ChartOptions::default());
        assert_eq!(err.unwrap_err(), ChartError::NoSeats);
    }

    #[test]
    fn majority_is_ceiling_of_half() {
        assert_eq!(majority_threshold(465), 233);
        assert_eq!(majority_threshold(100), 50);
        assert_eq!(majority_threshold(1), 1);
    }

    #[test]
    fn majority_angle_increases_with_majority() {
        let total = 465;
        let angles: Vec<f64> = (0..=total).map(|m| majority_angle(m, total)).collect();
        assert!(angles.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn majority_line_spans_the_stroke() {
        let chart = layout(&[SegmentInput::new("A", 60), SegmentInput::new("B", 40)], 100);
        let m = &chart.majority;
        assert_close(m.inner.x, 250.0);
        assert_close(m.inner.y, 240.0 - 140.0);
        assert_close(m.outer.y, 240.0 - 200.0);
        assert_close(m.label.y, 240.0 - 250.0);
        let svg = chart.svg();
        assert!(svg.contains(r#"<rect x="200" y="-30" width="100" height="40""#));
        assert!(svg.contains("過半数 50</text>"));
    }

    #[test]
    fn colors_resolve_explicit_then_table_then_palette() {
        let table = party_color_table();
        let chart = SemicircleChart::layout(
            &[
                SegmentInput::new("公明党", 10),
                SegmentInput::new("新党X", 10),
                SegmentInput::new("新党Y", 10).with_color("#123456"),
            ],
            30,
            15,
            &ChartOptions {
                title: "t",
                colors: Some(&table),
                coalition_view: false,
            },
        )
        .expect("positive total");
        let colors: Vec<_> = chart.segments().map(|s| s.color_hex.as_str()).collect();
        assert_eq!(colors, ["#9b59b6", "#3498db", "#123456"]);
    }

    #[test]
    fn legend_marks_ruling_party_in_party_view() {
        let chart = layout(
            &[
                SegmentInput::new("自由民主党・無所属の会", 196),
                SegmentInput::new("与党", 4),
            ],
            200,
        );
        let legend = chart.legend_html();
        assert_eq!(legend.matches("ruling-party").count(), 1);
        assert!(legend.contains("196議席<span class=\"legend-percentage\">(98.0%)</span>"));
    }

    #[test]
    fn legend_marks_bucket_in_coalition_view() {
        let chart = SemicircleChart::layout(
            &[SegmentInput::new("与党", 3), SegmentInput::new("野党", 1)],
            4,
            2,
            &ChartOptions {
                title: "t",
                colors: None,
                coalition_view: true,
            },
        )
        .expect("positive total");
        assert!(chart.arcs[0].segment.is_governing);
        assert!(!chart.arcs[1].segment.is_governing);
    }

    #[test]
    fn svg_carries_party_attributes_escaped() {
        let chart = layout(&[SegmentInput::new("A&B<党>", 7)], 7);
        let svg = chart.svg();
        assert!(svg.contains(r#"data-party="A&amp;B&lt;党&gt;" data-seats="7""#));
        assert!(svg.contains("<title>A&amp;B&lt;党&gt;: 7議席 (100.0%)</title>"));
        assert_eq!(svg.matches("class=\"chart-segment\"").count(), 1);
    }

    #[test]
    fn page_charts_exclude_summary_row() {
        let rows = vec![
            PartyRow::new("A党", "A", "10（3）"),
            PartyRow::new("B党", "B", "5"),
            PartyRow::new("計", "", "15"),
        ];
        let html = seat_charts_html(&data_records(&rows)).expect("charts");
        assert!(!html.contains(r#"data-party="計""#));
        // Per-party chart has two arcs, coalition chart two buckets.
        assert_eq!(html.matches("class=\"chart-segment\"").count(), 4);
        assert_eq!(html.matches("<div class=\"chart-total\">15</div>").count(), 2);
        assert!(html.contains("過半数 8"));
    }

    #[test]
    fn page_charts_need_seats() {
        let rows = vec![PartyRow::new("欠員", "", "―")];
        assert_eq!(
            seat_charts_html(&data_records(&rows)).unwrap_err(),
            ChartError::NoSeats
        );
    }

    #[test]
    fn page_charts_sum_past_u32() {
        let rows = vec![
            PartyRow::new("A党", "A", "4000000000"),
            PartyRow::new("B党", "B", "4000000000"),
        ];
        let html = seat_charts_html(&data_records(&rows)).expect("charts");
        assert_eq!(html.matches(r#"<div class="chart-total">8000000000</div>"#).count(), 2);
        assert!(html.contains("過半数 4000000000"));
        assert!(html.contains(r#"data-party="A党" data-seats="4000000000""#));
    }
}
