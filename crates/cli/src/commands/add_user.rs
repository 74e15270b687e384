//! registro add-user command

use clap::Args;
use console::style;
use dialoguer::{Input, Select};

use shared::{Category, DataPaths, Participant};
use store::ParticipantStore;

#[derive(Debug, Args)]
pub struct AddUserCommand {}

impl AddUserCommand {
    pub fn run(&self, paths: &DataPaths) -> anyhow::Result<()> {
        let full_name: String = Input::new()
            .with_prompt("Full name")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let age: u32 = Input::new().with_prompt("Age").interact_text()?;

        let email: String = Input::new().with_prompt("Email").interact_text()?;

        let selection = Select::new()
            .with_prompt("Category")
            .items(&Category::ALL)
            .default(0)
            .interact()?;
        let category = Category::ALL[selection];

        let institution: String = Input::new()
            .with_prompt("Institution (school or university)")
            .allow_empty(true)
            .interact_text()?;

        let store = ParticipantStore::open(paths);
        store.append(Participant::new(
            full_name.clone(),
            age,
            email,
            category,
            institution,
        ))?;

        println!(
            "{}",
            style(format!("✓ Participant {} registered", full_name)).green()
        );
        Ok(())
    }
}
