use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    config::poster::PosterConfig,
    foundation::{core::YearRange, error::PosterResult},
    layout::calendar::{PosterLayout, layout_poster, poster_height},
    render::{
        OutputFormat,
        raster::{DEFAULT_RASTER_SCALE, svg_to_png_fitted},
        svg::render_svg,
    },
    source::SourceAdapter,
    stats::classify::Tier,
    track::{model::Track, store::TrackStore},
};

/// Aggregate root: owns the tracks, the years they cover and the render config.
#[derive(Clone, Debug)]
pub struct Poster {
    config: PosterConfig,
    store: TrackStore,
}

impl Poster {
    /// Empty poster (zero years) with `config`.
    pub fn new(config: PosterConfig) -> Self {
        Self {
            config,
            store: TrackStore::new(),
        }
    }

    /// Pull tracks from `source` for `range` and store them.
    pub fn from_source(
        config: PosterConfig,
        source: &dyn SourceAdapter,
        range: YearRange,
    ) -> PosterResult<Self> {
        let data = source.get_all_track_data(range)?;
        let mut poster = Self::new(config);
        poster.set_tracks(data.tracks, &data.years);
        Ok(poster)
    }

    /// Replace stored tracks; see [`TrackStore::set_tracks`].
    pub fn set_tracks(&mut self, tracks: Vec<Track>, years: &[i32]) {
        self.store.set_tracks(tracks, years);
    }

    /// Resolved render configuration.
    pub fn config(&self) -> &PosterConfig {
        &self.config
    }

    /// Stored tracks.
    pub fn store(&self) -> &TrackStore {
        &self.store
    }

    /// Years with tracks, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.store.years()
    }

    /// Canvas height in user units.
    pub fn height(&self) -> f64 {
        poster_height(self.store.year_count())
    }

    /// Emphasis tier of one track under the configured thresholds.
    pub fn classify(&self, track: &Track) -> Tier {
        self.config.special.classify(track.value)
    }

    /// Calendar geometry for every stored year.
    pub fn layout(&self) -> PosterLayout {
        layout_poster(&self.store, &self.config)
    }

    /// The poster as an SVG document.
    #[tracing::instrument(skip(self), fields(years = self.store.year_count()))]
    pub fn render_svg(&self) -> String {
        render_svg(&self.layout(), &self.config, self.store.value_range())
    }

    /// Encoded artifact bytes.
    ///
    /// PNG uses [`DEFAULT_RASTER_SCALE`], reduced as needed so long histories
    /// still fit the pixmap limit.
    pub fn render(&self, format: OutputFormat) -> PosterResult<Vec<u8>> {
        let svg = self.render_svg();
        match format {
            OutputFormat::Svg => Ok(svg.into_bytes()),
            OutputFormat::Png => svg_to_png_fitted(&svg, DEFAULT_RASTER_SCALE),
        }
    }

    /// Output file name: `<type>.<ext>`.
    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.config.kind.name(), format.extension())
    }

    /// Write exactly one artifact into `dir` and return its path.
    #[tracing::instrument(skip_all, fields(format = ?format))]
    pub fn write(&self, dir: impl AsRef<Path>, format: OutputFormat) -> PosterResult<PathBuf> {
        let dir = dir.as_ref();
        let bytes = self.render(format)?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let path = dir.join(self.file_name(format));
        std::fs::write(&path, bytes)
            .with_context(|| format!("write poster '{}'", path.display()))?;
        tracing::info!(path = %path.display(), years = self.store.year_count(), "wrote poster");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../tests/unit/poster.rs"]
mod tests;
