//! Show command implementation
//!
//! The main pipeline: resolve an observing location, download its chart,
//! parse the forecast series and render it. A failed parse aborts before any
//! rendering - a partial or zero-filled chart is never shown.

use anyhow::Context;
use tracing::info;

use crate::app::services::chart_parser::ChartParser;
use crate::app::services::data_source::DataSource;
use crate::app::services::renderer::ChartRenderer;
use crate::cli::args::ShowArgs;
use crate::config::{Config, SavedLocation};

use super::locations::{load_index, select_by_city};
use super::shared::setup_logging;

/// Show command runner: fetch, parse and render a chart
pub async fn run_show(args: ShowArgs) -> anyhow::Result<()> {
    setup_logging(args.get_log_level());

    let config = Config::resolve(args.cache_dir.clone())?;
    let source = DataSource::new(config.clone());

    let location = resolve_location(&args, &config, &source).await?;
    info!("fetching chart for {} ({})", location.name, location.key);

    let chart_text = source.chart_text(&location.key).await?;
    let chart = ChartParser::parse(&chart_text)
        .with_context(|| format!("Chart for '{}' could not be parsed", location.key))?;

    println!("{}", ChartRenderer::render(&chart, &location.name));
    Ok(())
}

/// Resolve the location to display
///
/// Priority: an explicit `--key` flag, then the saved choice from a previous
/// run, then the interactive city selection (which is persisted for next
/// time).
async fn resolve_location(
    args: &ShowArgs,
    config: &Config,
    source: &DataSource,
) -> anyhow::Result<SavedLocation> {
    if let Some(key) = &args.key {
        return Ok(SavedLocation {
            key: key.clone(),
            name: key.clone(),
        });
    }

    if let Some(saved) = SavedLocation::load(&config.saved_location_path()) {
        info!("using saved location {} ({})", saved.name, saved.key);
        return Ok(saved);
    }

    let index = load_index(source, args.refresh_locations).await?;
    let entry = select_by_city(&index)?;

    let saved = SavedLocation::from_entry(entry);
    saved.save(&config.saved_location_path())?;

    Ok(saved)
}
