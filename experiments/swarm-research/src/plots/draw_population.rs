#[cfg(test)]
#[path = "../../tests/unit/plots/draw_population_test.rs"]
mod draw_population_test;

use super::*;
use dispersive::prelude::compare_floats_refs;
use itertools::{Itertools, MinMaxResult};
use std::ops::Range;

/// Draws population as a square chart with one filled circle per individual.
pub fn draw_population<B>(area: &DrawingArea<B, Shift>, config: &PopulationDrawConfig) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let range = get_axis_range(config);

    let mut chart = ChartBuilder::on(area).margin(10).build_cartesian_2d(range.clone(), range.clone())?;

    chart.draw_series(std::iter::once(Rectangle::new([(range.start, range.start), (range.end, range.end)], BLACK)))?;

    config.series.iter().try_for_each(|series| {
        chart.draw_series(
            series.points.iter().map(|&(x, y)| Circle::new((x, y), config.point_size, series.color.filled())),
        )?;

        Ok::<_, Box<dyn std::error::Error>>(())
    })?;

    Ok(())
}

/// Returns symmetric axis range which covers the search space and all points.
pub(crate) fn get_axis_range(config: &PopulationDrawConfig) -> Range<f64> {
    let extent = match config
        .series
        .iter()
        .flat_map(|series| series.points.iter())
        .flat_map(|&(x, y)| [x.abs(), y.abs()])
        .filter(|value| value.is_finite())
        .minmax_by(compare_floats_refs)
    {
        MinMaxResult::OneElement(value) => value,
        MinMaxResult::MinMax(_, max) => max,
        MinMaxResult::NoElements => 0.,
    };

    let half_width = extent.max(config.bound);

    -half_width..half_width
}
