use crate::config::AnalyzerConfig;
use crate::error::RenderError;
use crate::render::fonts;
use plotters::coord::ranged1d::SegmentedCoord;
use plotters::coord::types::RangedCoordu32;
use plotters::prelude::*;
use std::path::Path;

/// X axis with one segment per bar; u32 ranges are inclusive of their end
fn bar_axis(bars: usize) -> SegmentedCoord<RangedCoordu32> {
    (0u32..(bars as u32).saturating_sub(1)).into_segmented()
}

/// Draws the word counts as a bar chart and saves it as a PNG at `path`.
///
/// Bars keep the order of `counts`; x labels are the words, rotated so long
/// words do not overlap.
pub fn render_frequency_chart(
    counts: &[(String, usize)],
    config: &AnalyzerConfig,
    path: &Path,
) -> Result<(), RenderError> {
    fonts::register(config)?;

    let labels = config.locale.chart_labels();
    let family = config.font_family.as_str();
    let font_size = f64::from(config.font_size);

    let root = BitMapBackend::new(path, (config.chart_width, config.chart_height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(RenderError::plot)?;

    // Rotated labels need room for the longest word below the axis
    let label_style = TextStyle::from((family, font_size).into_font());
    let mut longest_label = 0;
    for (word, _) in counts {
        let (width, _) = root
            .estimate_text_size(word, &label_style)
            .map_err(RenderError::plot)?;
        longest_label = longest_label.max(width);
    }

    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0) as u32;
    let y_top = max_count + max_count / 10 + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(&labels.title, (family, font_size * 1.5))
        .margin(15)
        .x_label_area_size(longest_label + 20)
        .y_label_area_size(60)
        .build_cartesian_2d(bar_axis(counts.len()), 0u32..y_top)
        .map_err(RenderError::plot)?;

    let x_label = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(i) => counts
            .get(*i as usize)
            .map(|(word, _)| word.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.len())
        .x_label_formatter(&x_label)
        .label_style((family, font_size))
        .x_label_style(
            (family, font_size)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc(labels.x_label.as_str())
        .y_desc(labels.y_label.as_str())
        .axis_desc_style((family, font_size))
        .draw()
        .map_err(RenderError::plot)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.7).filled())
                .margin(8)
                .data(
                    counts
                        .iter()
                        .enumerate()
                        .map(|(i, (_, count))| (i as u32, *count as u32)),
                ),
        )
        .map_err(RenderError::plot)?;

    root.present().map_err(RenderError::plot)?;
    ::log::info!("Saved frequency chart to {}", path.display());
    Ok(())
}
