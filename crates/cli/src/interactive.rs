//! Interactive REPL mode

use std::io::{self, Write};

use auth::Session;
use shared::DataPaths;

use crate::commands::{
    AddUserCommand, DeleteUserCommand, ExportExcelCommand, ListUsersCommand, StatsCommand,
};

/// Interactive CLI over the registration stores.
///
/// All commands in one run share a single session, so the admin gate prompts
/// at most once no matter how many privileged commands follow.
pub struct InteractiveCli {
    paths: DataPaths,
    session: Session,
}

impl InteractiveCli {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            session: Session::new(),
        }
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Registro Interactive Mode");
        println!("Type help for commands, quit to exit");
        println!();

        loop {
            // Print prompt
            let admin = self.session.admin().unwrap_or("not authenticated");
            print!("[{}] > ", admin);
            io::stdout().flush()?;

            // Read input
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break; // EOF
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(should_exit) if should_exit => break,
                Ok(_) => continue,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "help" | "h" => {
                println!("Commands:");
                println!("  add             - Register a new participant");
                println!("  list            - Show all participants");
                println!("  delete <email>  - Remove a participant (admin)");
                println!("  export          - Export to spreadsheet (admin)");
                println!("  stats           - Category counts (admin)");
                println!("  quit            - Exit");
            }
            "add" => {
                AddUserCommand {}.run(&self.paths)?;
            }
            "list" => {
                ListUsersCommand {}.run(&self.paths)?;
            }
            "delete" => match parts.get(1) {
                Some(email) => {
                    DeleteUserCommand {
                        email: email.to_string(),
                    }
                    .run(&self.paths, &mut self.session)?;
                }
                None => println!("Usage: delete <email>"),
            },
            "export" => {
                ExportExcelCommand { output: None }.run(&self.paths, &mut self.session)?;
            }
            "stats" => {
                StatsCommand {}.run(&self.paths, &mut self.session)?;
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }
}
