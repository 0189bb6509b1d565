//! Static chart export for pressure-volume-temperature results.
//!
//! [`Chart`] collects named series and writes them as a line chart with
//! circular markers, a legend, and a background grid.
//!
//! ```no_run
//! use pvt_plot::Chart;
//!
//! Chart::new()
//!     .title("Example Plot")
//!     .x_label("x")
//!     .y_label("y")
//!     .add_series("first series", &[[0.0, 1.0], [1.0, 3.0], [2.0, 1.0]])
//!     .add_series("second series", &[[0.0, 2.0], [1.0, 0.5], [2.0, 0.25]])
//!     .save("example.svg")?;
//! # Ok::<(), pvt_plot::PlotError>(())
//! ```

mod clip;
mod error;

use std::path::Path;

use plotters::{coord::Shift, prelude::*};

pub use error::PlotError;

/// Line colors, cycled by series index.
const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

/// Fraction of the data span added above (and below, without a floor) the data.
const MARGIN: f64 = 0.05;

/// A line chart that can be saved as a static image.
#[derive(Debug, Clone)]
pub struct Chart {
    title: String,
    x_label: String,
    y_label: String,
    y_floor: Option<f64>,
    size: (u32, u32),
    series: Vec<Series>,
}

#[derive(Debug, Clone)]
struct Series {
    name: String,
    points: Vec<(f64, f64)>,
}

/// Supported output formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Svg,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, PlotError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "svg" => Ok(Self::Svg),
            _ => Err(PlotError::UnsupportedFormat { extension }),
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    /// Creates an empty 1000 × 700 chart with no title or labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            y_floor: None,
            size: (1000, 700),
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Sets the lower limit of the y axis.
    ///
    /// Only the display is affected: lines are cut where they cross the floor
    /// and markers below it are hidden.
    #[must_use]
    pub fn y_floor(mut self, floor: f64) -> Self {
        self.y_floor = Some(floor);
        self
    }

    /// Sets the image size in pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().map(|&[x, y]| (x, y)).collect(),
        });

        self
    }

    /// Renders the chart and writes it to `path`.
    ///
    /// The format is chosen from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart has no series, the extension is not a
    /// supported format, or the image cannot be drawn or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlotError> {
        let path = path.as_ref();

        if self.series.is_empty() {
            return Err(PlotError::NoSeries);
        }

        match Format::from_path(path)? {
            Format::Svg => self.draw(SVGBackend::new(path, self.size).into_drawing_area()),
        }
    }

    fn draw(&self, root: DrawingArea<SVGBackend<'_>, Shift>) -> Result<(), PlotError> {
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        let floor = self.y_floor.unwrap_or(f64::NEG_INFINITY);

        root.fill(&WHITE).map_err(PlotError::render)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(PlotError::render)?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .draw()
            .map_err(PlotError::render)?;

        for (index, series) in self.series.iter().enumerate() {
            let color = PALETTE[index % PALETTE.len()];

            for run in clip::runs_above(&series.points, floor) {
                chart
                    .draw_series(LineSeries::new(run, color.stroke_width(2)))
                    .map_err(PlotError::render)?;
            }

            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .filter(|&&(x, y)| x.is_finite() && y.is_finite() && y >= floor)
                        .map(|&point| Circle::new(point, 3, color.filled())),
                )
                .map_err(PlotError::render)?
                .label(series.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(PlotError::render)?;

        root.present().map_err(PlotError::render)
    }

    fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.series
            .iter()
            .flat_map(|series| series.points.iter().copied())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    fn x_range(&self) -> (f64, f64) {
        let (min, max) = bounds(self.finite_points().map(|(x, _)| x));
        widen(min, max)
    }

    fn y_range(&self) -> (f64, f64) {
        let (data_min, data_max) = bounds(self.finite_points().map(|(_, y)| y));

        match self.y_floor {
            Some(floor) => {
                let top = if data_max > floor {
                    data_max
                } else {
                    floor + 1.0
                };
                (floor, top + MARGIN * (top - floor))
            }
            None => {
                let (lo, hi) = widen(data_min, data_max);
                let pad = MARGIN * (hi - lo);
                (lo - pad, hi + pad)
            }
        }
    }
}

/// Returns `(min, max)` of the values, or `(0, 1)` if there are none.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0.0, 1.0))
}

/// Ensures a non-degenerate range.
fn widen(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        (min, max)
    } else {
        (min - 0.5, min + 0.5)
    }
}
