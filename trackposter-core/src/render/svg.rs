use std::fmt::Write as _;

use crate::{
    config::poster::PosterConfig,
    layout::calendar::{CellMark, DayCell, PosterLayout},
    stats::{classify::Tier, summary::ValueRange},
};

/// Fill for days without activity.
pub const EMPTY_CELL_COLOR: &str = "#444444";

const FONT_FAMILY: &str = "Arial";
const TITLE_SIZE: f64 = 12.0;
const YEAR_SIZE: f64 = 10.0;
const TOTAL_SIZE: f64 = 110.0 * 3.0 / 80.0;
const MONTH_SIZE: f64 = 2.5;

/// Serialize the poster layout as an SVG document.
///
/// `range` is the store-wide min/max of daily values that drives the
/// `track -> track2` gradient for normal days.
pub fn render_svg(layout: &PosterLayout, config: &PosterConfig, range: Option<ValueRange>) -> String {
    let palette = &config.palette;
    let mut svg = SvgBuilder::new(layout.width, layout.height);

    svg.rect(0.0, 0.0, layout.width, layout.height, &palette.background, None);
    svg.text(
        layout.title_origin.x,
        layout.title_origin.y,
        &config.title,
        &TextStyle {
            size: TITLE_SIZE,
            bold: true,
            hanging: false,
            fill: &palette.text,
        },
    );

    for row in &layout.rows {
        svg.open_group(&format!("year-{}", row.year));
        svg.text(
            row.origin.x,
            row.origin.y,
            &row.year.to_string(),
            &TextStyle {
                size: YEAR_SIZE,
                bold: false,
                hanging: true,
                fill: &palette.text,
            },
        );
        svg.text(
            row.total_origin.x,
            row.total_origin.y,
            &row.total_label,
            &TextStyle {
                size: TOTAL_SIZE,
                bold: false,
                hanging: true,
                fill: &palette.text,
            },
        );
        for (name, at) in &row.month_labels {
            svg.text(
                at.x,
                at.y,
                name,
                &TextStyle {
                    size: MONTH_SIZE,
                    bold: false,
                    hanging: false,
                    fill: &palette.text,
                },
            );
        }
        for cell in &row.cells {
            let fill = cell_fill(cell, config, range);
            let r = cell.rect;
            svg.rect(
                r.x0,
                r.y0,
                r.width(),
                r.height(),
                &fill,
                Some(&cell.caption(&config.unit)),
            );
        }
        svg.close_group();
    }

    svg.build()
}

fn cell_fill(cell: &DayCell, config: &PosterConfig, range: Option<ValueRange>) -> String {
    let palette = &config.palette;
    match cell.mark {
        CellMark::Empty => EMPTY_CELL_COLOR.to_owned(),
        CellMark::Track { tier: Tier::Special2, .. } => palette.special2.clone(),
        CellMark::Track { tier: Tier::Special, .. } => palette.special.clone(),
        CellMark::Track { value, .. } => {
            palette.track_gradient(range.and_then(|r| r.normalize(value)))
        }
    }
}

struct TextStyle<'a> {
    size: f64,
    bold: bool,
    hanging: bool,
    fill: &'a str,
}

struct SvgBuilder {
    out: String,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    fn new(width: f64, height: f64) -> Self {
        Self {
            out: String::with_capacity(64 * 1024),
            width,
            height,
        }
    }

    fn build(self) -> String {
        let mut svg = String::with_capacity(self.out.len() + 256);
        svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
            w = num(self.width),
            h = num(self.height),
        );
        svg.push_str(&self.out);
        svg.push_str("</svg>\n");
        svg
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, title: Option<&str>) {
        let _ = write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            num(x),
            num(y),
            num(w),
            num(h),
            escape(fill),
        );
        match title {
            Some(t) => {
                let _ = writeln!(self.out, "><title>{}</title></rect>", escape(t));
            }
            None => self.out.push_str("/>\n"),
        }
    }

    fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle<'_>) {
        let weight = if style.bold { " font-weight:bold;" } else { "" };
        let baseline = if style.hanging {
            r#" dominant-baseline="hanging""#
        } else {
            ""
        };
        let _ = writeln!(
            self.out,
            r#"<text x="{}" y="{}" fill="{}"{baseline} style="font-size:{}px; font-family:{FONT_FAMILY};{weight}">{}</text>"#,
            num(x),
            num(y),
            escape(style.fill),
            num(style.size),
            escape(content),
        );
    }

    fn open_group(&mut self, id: &str) {
        let _ = writeln!(self.out, r#"<g id="{}">"#, escape(id));
    }

    fn close_group(&mut self) {
        self.out.push_str("</g>\n");
    }
}

/// Shortest stable decimal form, at most three fractional digits.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
