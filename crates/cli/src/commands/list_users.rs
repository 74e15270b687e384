//! registro list-users command

use clap::Args;
use console::style;

use shared::DataPaths;
use store::ParticipantStore;

use crate::table;

#[derive(Debug, Args)]
pub struct ListUsersCommand {}

impl ListUsersCommand {
    pub fn run(&self, paths: &DataPaths) -> anyhow::Result<()> {
        let store = ParticipantStore::open(paths);
        let participants = store.load_all()?;

        if participants.is_empty() {
            println!("{}", style("No participants registered yet").yellow());
            return Ok(());
        }

        let rows: Vec<Vec<String>> = participants
            .iter()
            .map(|p| {
                vec![
                    p.full_name.clone(),
                    p.age.to_string(),
                    p.email.clone(),
                    p.category.to_string(),
                    p.institution.clone(),
                ]
            })
            .collect();

        println!("{}", style("Registered participants").cyan().bold());
        print!(
            "{}",
            table::render(
                &["Name", "Age", "Email", "Category", "Institution"],
                &rows
            )
        );
        Ok(())
    }
}
