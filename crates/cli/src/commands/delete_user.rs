//! registro delete-user command

use clap::Args;
use console::style;
use dialoguer::Confirm;

use auth::Session;
use shared::{DataPaths, RegistroError};
use store::ParticipantStore;

use crate::admin;

#[derive(Debug, Args)]
pub struct DeleteUserCommand {
    /// Email of the participant to remove
    pub email: String,
}

impl DeleteUserCommand {
    pub fn run(&self, paths: &DataPaths, session: &mut Session) -> anyhow::Result<()> {
        admin::ensure_admin(paths, session)?;

        let store = ParticipantStore::open(paths);
        let participants = store.load_all()?;
        let record = participants
            .iter()
            .find(|p| p.email == self.email)
            .ok_or_else(|| RegistroError::NotFound {
                email: self.email.clone(),
            })?;

        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} <{}>?",
                record.full_name, record.email
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", style("Operation cancelled").yellow());
            return Ok(());
        }

        let removed = store.remove(&self.email)?;
        println!(
            "{}",
            style(format!("✓ Participant {} removed", removed.full_name)).green()
        );
        Ok(())
    }
}
