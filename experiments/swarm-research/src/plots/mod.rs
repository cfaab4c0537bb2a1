//! Provides the way to draw population on different plotters backends.

#[cfg(test)]
#[path = "../../tests/unit/plots/plots_test.rs"]
mod plots_test;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

mod draw_population;
pub use self::draw_population::*;

/// A series of points drawn with the same color.
pub struct PopulationSeries {
    /// Point coordinates.
    pub points: Vec<(f64, f64)>,
    /// Point color.
    pub color: RGBColor,
}

/// Specifies drawing configuration for population state.
pub struct PopulationDrawConfig {
    /// Half-width of the square chart.
    pub bound: f64,
    /// Circle radius in pixels.
    pub point_size: u32,
    /// Series to draw, later series are drawn on top.
    pub series: Vec<PopulationSeries>,
}

/// Draws population into svg string.
pub fn draw_to_svg(config: &PopulationDrawConfig, size: (u32, u32)) -> DrawResult<String> {
    let mut buffer = String::new();

    {
        let area = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        draw_on_area(&area, config)?;
    }

    Ok(buffer)
}

/// Draws population into png file.
pub fn draw_to_png(config: &PopulationDrawConfig, path: &Path, size: (u32, u32)) -> DrawResult<()> {
    let area = BitMapBackend::new(path, size).into_drawing_area();

    draw_on_area(&area, config)
}

fn draw_on_area<B>(area: &DrawingArea<B, Shift>, config: &PopulationDrawConfig) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    area.fill(&WHITE)?;
    draw_population(area, config)?;
    area.present()?;

    Ok(())
}
