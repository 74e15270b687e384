//! Interactive admin gate for privileged commands

use console::style;
use dialoguer::{Input, Password};

use auth::{CredentialStore, Session};
use shared::DataPaths;

/// Make sure the session is admin-authorized, prompting for credentials if
/// it is not yet.
///
/// Called by every privileged command before it touches the stores; a
/// session that already authorized once passes through silently. Failure
/// aborts the requested operation.
pub fn ensure_admin(paths: &DataPaths, session: &mut Session) -> anyhow::Result<()> {
    if session.is_authorized() {
        return Ok(());
    }

    let store = CredentialStore::open(paths);
    store.ensure_initialized()?;

    let username: String = Input::new().with_prompt("Admin user").interact_text()?;
    let password: String = Password::new().with_prompt("Password").interact()?;

    session.authorize(&store, &username, &password)?;
    println!(
        "{}",
        style(format!("✓ Access granted as {}", username)).green()
    );
    Ok(())
}
