//! CLI command for CSV export

use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_filtered_csv;
use crate::storage::Storage;

use super::FilterArgs;

/// Arguments for `expense export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle `expense export`
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let filter = args.filter.to_filter()?;

    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    let rows = export_filtered_csv(storage, &filter, &mut writer)?;

    println!("{} expenses exported to: {}", rows, args.output.display());
    Ok(())
}
