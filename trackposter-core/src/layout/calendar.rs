use chrono::{Datelike, Days, NaiveDate};

use crate::{
    config::poster::PosterConfig,
    foundation::core::{Point, Rect},
    foundation::math::format_value,
    stats::classify::Tier,
    track::store::TrackStore,
};

/// Height of everything that is not a year row (header and bottom margin).
pub const BASE_OFFSET: f64 = 55.0;
/// Vertical space taken by one year row.
pub const ROW_HEIGHT: f64 = 43.0;
/// Canvas width in user units (rendered as millimeters).
pub const POSTER_WIDTH: f64 = 200.0;

const MARGIN_X: f64 = 10.0;
const FIRST_ROW_Y: f64 = 30.0;
const TITLE_Y: f64 = 20.0;
const CELL_SIZE: f64 = 2.6;
const CELL_PITCH: f64 = 3.5;
const GRID_TOP: f64 = 20.0;
const MONTH_LABEL_DX: f64 = 15.5;
const MONTH_LABEL_DY: f64 = 14.0;
const TOTAL_LABEL_DX: f64 = 165.0;
const TOTAL_LABEL_DY: f64 = 2.0;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `BASE_OFFSET + ROW_HEIGHT * years`.
pub fn poster_height(year_count: usize) -> f64 {
    BASE_OFFSET + ROW_HEIGHT * year_count as f64
}

/// Poster geometry, ready for the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct PosterLayout {
    /// Always [`POSTER_WIDTH`].
    pub width: f64,
    /// See [`poster_height`].
    pub height: f64,
    /// Baseline origin of the title text.
    pub title_origin: Point,
    /// Newest year first.
    pub rows: Vec<YearRow>,
}

/// One year of the poster: labels plus its day grid.
#[derive(Clone, Debug, PartialEq)]
pub struct YearRow {
    /// Calendar year drawn in this row.
    pub year: i32,
    /// Top-left of the row; also the year label position.
    pub origin: Point,
    /// Sum of the year's values.
    pub total: f64,
    /// `"<int(total)> <unit>"`.
    pub total_label: String,
    /// Position of `total_label`.
    pub total_origin: Point,
    /// `Jan`..`Dec` with their positions.
    pub month_labels: Vec<(&'static str, Point)>,
    /// Week-major grid, Monday first within each week.
    pub cells: Vec<DayCell>,
}

impl YearRow {
    /// Cells that carry a track.
    pub fn marked(&self) -> impl Iterator<Item = &DayCell> {
        self.cells
            .iter()
            .filter(|c| matches!(c.mark, CellMark::Track { .. }))
    }
}

/// One square of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    /// Day this cell stands for.
    pub date: NaiveDate,
    /// Cell bounds in user units.
    pub rect: Rect,
    /// Whether the day carries a track.
    pub mark: CellMark,
}

impl DayCell {
    /// Tooltip text: the date, plus value and unit for active days.
    pub fn caption(&self, unit: &str) -> String {
        match self.mark {
            CellMark::Empty => self.date.to_string(),
            CellMark::Track { value, .. } => {
                format!("{} {} {unit}", self.date, format_value(value))
            }
        }
    }
}

/// What a cell shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellMark {
    /// No activity, or a leading day from the previous year.
    Empty,
    /// Active day.
    Track {
        /// Daily sum.
        value: f64,
        /// Emphasis under the configured thresholds.
        tier: Tier,
    },
}

/// Lay out every stored year as a week-by-weekday grid.
pub fn layout_poster(store: &TrackStore, config: &PosterConfig) -> PosterLayout {
    let mut years = store.years();
    years.reverse();

    let rows = years
        .iter()
        .enumerate()
        .map(|(idx, &year)| {
            let origin = Point::new(MARGIN_X, FIRST_ROW_Y + ROW_HEIGHT * idx as f64);
            layout_year(store, config, year, origin)
        })
        .collect();

    PosterLayout {
        width: POSTER_WIDTH,
        height: poster_height(years.len()),
        title_origin: Point::new(MARGIN_X, TITLE_Y),
        rows,
    }
}

fn layout_year(store: &TrackStore, config: &PosterConfig, year: i32, origin: Point) -> YearRow {
    let daily = store.daily_values(year);
    let total = store.total_for_year(year);

    let month_labels = MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(m, name)| {
            (
                *name,
                Point::new(
                    origin.x + MONTH_LABEL_DX * m as f64,
                    origin.y + MONTH_LABEL_DY,
                ),
            )
        })
        .collect();

    let mut cells = Vec::with_capacity(54 * 7);
    if let Some(jan1) = NaiveDate::from_ymd_opt(year, 1, 1) {
        let lead = u64::from(jan1.weekday().num_days_from_monday());
        // Leading days before the first representable date are left out; the
        // grid keeps its weekday alignment either way.
        for back in (1..=lead).rev() {
            if let Some(date) = jan1.checked_sub_days(Days::new(back)) {
                cells.push(DayCell {
                    date,
                    rect: cell_rect(origin, lead - back),
                    mark: CellMark::Empty,
                });
            }
        }

        let mut slot = lead;
        let mut day = Some(jan1);
        while let Some(date) = day.filter(|d| d.year() == year) {
            let mark = match daily.get(&date) {
                Some(&value) => CellMark::Track {
                    value,
                    tier: config.special.classify(value),
                },
                None => CellMark::Empty,
            };
            cells.push(DayCell {
                date,
                rect: cell_rect(origin, slot),
                mark,
            });
            slot += 1;
            day = date.succ_opt();
        }
    }

    YearRow {
        year,
        origin,
        total,
        total_label: format!("{} {}", total.trunc() as i64, config.unit),
        total_origin: Point::new(origin.x + TOTAL_LABEL_DX, origin.y + TOTAL_LABEL_DY),
        month_labels,
        cells,
    }
}

/// Bounds of grid slot `slot`, counted from the Monday on or before January 1st.
fn cell_rect(origin: Point, slot: u64) -> Rect {
    let week = (slot / 7) as f64;
    let weekday = (slot % 7) as f64;
    let x = MARGIN_X + CELL_PITCH * week;
    let y = origin.y + GRID_TOP + CELL_PITCH * (weekday + 1.0);
    Rect::new(x, y, x + CELL_SIZE, y + CELL_SIZE)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/calendar.rs"]
mod tests;
