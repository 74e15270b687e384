//! registro stats command

use clap::Args;
use console::style;

use auth::Session;
use shared::{Category, DataPaths};
use store::ParticipantStore;

use crate::admin;
use crate::table;

#[derive(Debug, Args)]
pub struct StatsCommand {}

impl StatsCommand {
    pub fn run(&self, paths: &DataPaths, session: &mut Session) -> anyhow::Result<()> {
        admin::ensure_admin(paths, session)?;

        let store = ParticipantStore::open(paths);
        let counts = store.category_counts()?;

        if counts.is_empty() {
            println!("{}", style("No participants registered yet").yellow());
            return Ok(());
        }

        // Fixed display order; categories without records are omitted.
        let rows: Vec<Vec<String>> = Category::ALL
            .iter()
            .filter_map(|category| {
                counts
                    .get(category)
                    .map(|count| vec![category.to_string(), count.to_string()])
            })
            .collect();

        println!("{}", style("Registrations per category").cyan().bold());
        print!("{}", table::render(&["Category", "Count"], &rows));
        Ok(())
    }
}
