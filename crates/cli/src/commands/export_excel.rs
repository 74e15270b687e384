//! registro export-excel command

use std::path::PathBuf;

use clap::Args;
use console::style;

use auth::Session;
use shared::DataPaths;
use store::ParticipantStore;

use crate::admin;

#[derive(Debug, Args)]
pub struct ExportExcelCommand {
    /// Target file; defaults to participantes.xlsx in the data directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportExcelCommand {
    pub fn run(&self, paths: &DataPaths, session: &mut Session) -> anyhow::Result<()> {
        admin::ensure_admin(paths, session)?;

        let store = ParticipantStore::open(paths);
        let participants = store.load_all()?;

        if participants.is_empty() {
            println!("{}", style("No data to export").yellow());
            return Ok(());
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| paths.default_export_file());
        export::write_xlsx(&output, &participants)?;

        println!(
            "{}",
            style(format!(
                "✓ Exported {} participants to {}",
                participants.len(),
                output.display()
            ))
            .green()
        );
        Ok(())
    }
}
