//! Terminal rendering of forecast charts
//!
//! Draws a parsed chart as a color-coded horizontal timeline: one block
//! glyph per forecast hour, one row per forecast dimension. Color intensity
//! follows the upstream palette: forecast codes scale linearly into a
//! red-to-green channel pair, darkness maps onto a grayscale ramp, and hours
//! cycle through a small palette that advances at each midnight.

use crate::app::models::SkyChart;
use crate::constants::{
    CHART_BLOCK, LABEL_WIDTH, cloud_channel, darkness_channel, quality_channel,
};
use chrono::{Local, Timelike};
use colored::{ColoredString, Colorize};

/// Renders a forecast series for the terminal
#[derive(Debug)]
pub struct ChartRenderer;

impl ChartRenderer {
    /// Render a chart as colored text, one column per forecast hour
    pub fn render(chart: &SkyChart, location_name: &str) -> String {
        let now = Local::now();

        let mut tens_row = format!("{:<width$}", now.format("%Y-%m-%d"), width = LABEL_WIDTH)
            .bright_green()
            .to_string();
        let mut ones_row = format!("{:<width$}", now.format("%H:%M"), width = LABEL_WIDTH)
            .bright_yellow()
            .to_string();
        let mut cloud_row = row_label("Cloud Cover:");
        let mut transparency_row = row_label("Transparency:");
        let mut seeing_row = row_label("Seeing:");
        let mut darkness_row = row_label("Darkness:");

        let mut day = 0usize;
        for record in &chart.records {
            let hour = record.timestamp.hour();
            if hour == 0 {
                day += 1;
            }

            let digits = format!("{:02}", hour);
            let mut chars = digits.chars();
            let tens = chars.next().unwrap_or('0');
            let ones = chars.next().unwrap_or('0');
            tens_row.push_str(&format!("{} ", day_color(day, tens)));
            ones_row.push_str(&format!("{} ", day_color(day, ones)));

            let cloud = cloud_channel(record.cloud_cover);
            cloud_row.push_str(&scale_cell(cloud));

            let transparency = quality_channel(record.transparency);
            transparency_row.push_str(&scale_cell(transparency));

            let seeing = quality_channel(record.seeing);
            seeing_row.push_str(&scale_cell(seeing));

            let level = darkness_channel(record.darkness);
            let grey = (255 - level).clamp(0, 255) as u8;
            darkness_row.push_str(&format!(
                "{} ",
                CHART_BLOCK.to_string().truecolor(grey, grey, grey)
            ));
        }

        let width = LABEL_WIDTH + chart.records.len() * 2;
        let rule = "-".repeat(width).truecolor(255, 95, 0).to_string();
        let title = format!(" Clear Sky Chart for {} ", location_name);
        let title_row = format!("{:-^width$}", title, width = width)
            .truecolor(255, 95, 0)
            .to_string();

        [
            rule.clone(),
            title_row,
            rule,
            tens_row,
            ones_row,
            cloud_row,
            transparency_row,
            seeing_row,
            darkness_row,
        ]
        .join("\n")
    }
}

fn row_label(label: &str) -> String {
    format!("{:<width$}", label, width = LABEL_WIDTH)
        .bright_white()
        .to_string()
}

/// A red-to-green cell for a scaled forecast code channel
fn scale_cell(channel: i32) -> String {
    let green = channel.clamp(0, 255) as u8;
    let red = (255 - channel).clamp(0, 255) as u8;
    format!("{} ", CHART_BLOCK.to_string().truecolor(red, green, 0))
}

/// Hour digit color, cycling a four-color palette day by day
fn day_color(day: usize, digit: char) -> ColoredString {
    let text = digit.to_string();
    match day % 4 {
        0 => text.bright_green(),
        1 => text.bright_yellow(),
        2 => text.bright_red(),
        _ => text.bright_cyan(),
    }
}
