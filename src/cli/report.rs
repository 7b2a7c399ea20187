//! CLI command for the spending dashboard
//!
//! Prints the monthly and category tables and optionally writes both charts
//! as SVG files.

use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use crate::charts::ChartResult;
use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::build_dashboard;
use crate::storage::Storage;

use super::FilterArgs;

/// Arguments for `expense dashboard`
#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Directory to write monthly.svg and category.svg into
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Handle `expense dashboard`
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    args: DashboardArgs,
) -> ExpenseResult<()> {
    let view = build_dashboard(storage, &args.filter.to_filter()?, &settings.charts)?;
    print!("{}", format_dashboard(&view, settings));

    if let Some(out_dir) = args.out_dir {
        fs::create_dir_all(&out_dir).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create directory {}: {}",
                out_dir.display(),
                e
            ))
        })?;

        for chart in [&view.monthly_chart, &view.category_chart] {
            if let Some(path) = write_chart(chart, &out_dir)? {
                println!("Chart written to: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Write a rendered chart into `dir`; unavailable charts are skipped
fn write_chart(chart: &ChartResult, dir: &Path) -> ExpenseResult<Option<PathBuf>> {
    let Some(chart) = chart.chart() else {
        return Ok(None);
    };

    let path = dir.join(chart.kind().file_name());
    fs::write(&path, chart.as_bytes()).map_err(|e| {
        ExpenseError::Io(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(Some(path))
}
