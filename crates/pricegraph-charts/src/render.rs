//! Plotters rendering of chart specifications to PNG files

use crate::{GroupedBarSpec, HistogramSpec, PriceChange, ScatterSpec};
use plotters::prelude::*;
use pricegraph_common::Result;
use pricegraph_config::StylingConfig;
use std::path::Path;
use tracing::info;

/// Point color for price drops (below the identity line).
const DROP_COLOR: RGBColor = RGBColor(44, 160, 44);
/// Point color for price increases (above the identity line).
const INCREASE_COLOR: RGBColor = RGBColor(214, 39, 40);
/// Point color for unchanged prices (on the identity line).
const UNCHANGED_COLOR: RGBColor = RGBColor(127, 127, 127);

/// Renders chart specifications with a shared styling configuration.
pub struct ChartRenderer {
    style: StylingConfig,
}

impl ChartRenderer {
    /// Create a renderer from the configured styling.
    pub fn new(style: StylingConfig) -> Self {
        Self { style }
    }

    /// Parse a color string (hex format) to RGBColor, black on failure.
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        RGBColor(0, 0, 0)
    }

    fn background(&self) -> RGBColor {
        self.parse_color(&self.style.background)
    }

    /// Render the histogram spec to a PNG file.
    pub fn render_histogram(&self, spec: &HistogramSpec, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.style.width, self.style.height))
            .into_drawing_area();
        root.fill(&self.background())?;

        let y_max = f64::from(spec.max_count().max(1)) * 1.1;
        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 16))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(spec.range.min..spec.range.max, 0f64..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str());
        if !self.style.enable_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let color = self.parse_color(&self.style.current_color);
        chart.draw_series(spec.bins.iter().filter(|bin| bin.count > 0).map(|bin| {
            Rectangle::new(
                [(bin.lower, 0.0), (bin.upper, f64::from(bin.count))],
                color.mix(0.7).filled(),
            )
        }))?;

        root.present()?;
        info!("Rendered histogram to {}", path.display());
        Ok(())
    }

    /// Render the grouped bar spec to a PNG file. Missing means are omitted,
    /// never drawn as zero-height bars.
    pub fn render_grouped_bar(&self, spec: &GroupedBarSpec, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.style.width, self.style.height))
            .into_drawing_area();
        root.fill(&self.background())?;

        let x_max = spec.groups.len().max(1) as f64;
        let y_max = spec.max_mean().unwrap_or(1.0) * 1.1;
        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 16))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

        let vendors: Vec<String> = spec.groups.iter().map(|g| g.vendor.clone()).collect();
        let vendor_label = |x: &f64| {
            vendors
                .get(x.floor() as usize)
                .cloned()
                .unwrap_or_default()
        };
        let mut mesh = chart.configure_mesh();
        mesh.y_desc(spec.y_label.as_str())
            .x_labels(vendors.len().max(1))
            .x_label_formatter(&vendor_label);
        if !self.style.enable_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let current_color = self.parse_color(&self.style.current_color);
        let old_color = self.parse_color(&self.style.old_color);

        chart
            .draw_series(spec.groups.iter().enumerate().filter_map(|(i, group)| {
                group.current_mean.map(|mean| {
                    let x = i as f64;
                    Rectangle::new([(x + 0.10, 0.0), (x + 0.45, mean)], current_color.filled())
                })
            }))?
            .label(spec.series[0].as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], current_color.filled())
            });

        chart
            .draw_series(spec.groups.iter().enumerate().filter_map(|(i, group)| {
                group.old_mean.map(|mean| {
                    let x = i as f64;
                    Rectangle::new([(x + 0.55, 0.0), (x + 0.90, mean)], old_color.filled())
                })
            }))?
            .label(spec.series[1].as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], old_color.filled())
            });

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        info!("Rendered grouped bar chart to {}", path.display());
        Ok(())
    }

    /// Render the scatter spec to a PNG file, identity line first so points
    /// draw on top of it.
    pub fn render_scatter(&self, spec: &ScatterSpec, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.style.width, self.style.height))
            .into_drawing_area();
        root.fill(&self.background())?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 16))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(spec.range.min..spec.range.max, spec.range.min..spec.range.max)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str());
        if !self.style.enable_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        if spec.identity_line {
            chart
                .draw_series(LineSeries::new(
                    [
                        (spec.range.min, spec.range.min),
                        (spec.range.max, spec.range.max),
                    ],
                    BLACK.mix(0.5),
                ))?
                .label("No change")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLACK.mix(0.5)));
        }

        chart.draw_series(spec.points.iter().map(|point| {
            let color = match point.change {
                PriceChange::Drop => DROP_COLOR,
                PriceChange::Increase => INCREASE_COLOR,
                PriceChange::Unchanged => UNCHANGED_COLOR,
            };
            Circle::new((point.old_price, point.current_price), 3, color.filled())
        }))?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        info!("Rendered scatter plot to {}", path.display());
        Ok(())
    }
}
