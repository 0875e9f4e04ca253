//! trackposter turns per-day activity records into a calendar poster.
//!
//! # Pipeline overview
//!
//! 1. **Source**: a [`Source`] adapter parses one service's payload into [`Track`]s
//!    for the requested [`YearRange`].
//! 2. **Store**: [`TrackStore`] keeps valid tracks and the years they cover.
//! 3. **Statistics**: [`SpecialNumbers::classify`] assigns each day a [`Tier`];
//!    the store supplies totals and the value range.
//! 4. **Layout**: [`layout_poster`] maps each year onto a week-by-weekday grid.
//!    Canvas height is `55 + 43 * years`.
//! 5. **Render**: [`render_svg`] emits the SVG; [`OutputFormat::Png`] rasterizes it.
//!
//! [`Poster`] owns the store and the immutable [`PosterConfig`] and drives the
//! whole pipeline.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod layout;
mod poster;
mod render;
mod stats;
mod track;

pub mod source;

pub use config::palette::{Palette, PaletteOptions, Rgb8, parse_hex};
pub use config::poster::{PosterConfig, PosterConfigBuilder};
pub use foundation::core::{Point, Rect, YearFilter, YearRange};
pub use foundation::error::{PosterError, PosterResult};
pub use layout::calendar::{
    BASE_OFFSET, CellMark, DayCell, POSTER_WIDTH, PosterLayout, ROW_HEIGHT, YearRow,
    layout_poster, poster_height,
};
pub use poster::Poster;
pub use render::OutputFormat;
pub use render::raster::{
    DEFAULT_RASTER_SCALE, MAX_RASTER_DIM, parse_svg, svg_to_png, svg_to_png_fitted,
};
pub use render::svg::{EMPTY_CELL_COLOR, render_svg};
pub use source::{Source, SourceAdapter, SourceConfig, SourceData};
pub use stats::classify::{SpecialNumbers, SpecialOverride, Tier};
pub use stats::summary::ValueRange;
pub use track::model::{SourceKind, Track};
pub use track::store::TrackStore;
