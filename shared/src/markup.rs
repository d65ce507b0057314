use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format with exactly one decimal, rounding halves away from zero.
pub fn format_one_decimal(value: f64) -> String {
    let mut out = String::with_capacity(8);
    write_one_decimal(&mut out, value);
    out
}

fn write_one_decimal(buf: &mut String, value: f64) {
    let rounded = if value.is_finite() {
        (value * 10.0).round() / 10.0
    } else {
        0.0
    };
    let _ = write!(buf, "{rounded:.1}");
}

/// Format an SVG coordinate with at most three decimals and no trailing zeros.
pub fn format_coord(v: f64) -> String {
    if !v.is_finite() || v.abs() < 0.0005 {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    let mut s = format!("{r:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" { "0".to_string() } else { s }
}
