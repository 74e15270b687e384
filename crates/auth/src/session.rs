//! Session - per-process admin authorization state

use shared::{RegistroError, Result};

use crate::credential_store::CredentialStore;

/// Authorization state for one running session.
///
/// Passed explicitly to command handlers instead of living in a process-wide
/// variable, so independent sessions can coexist (and be tested) side by
/// side. Once authorized, a session stays authorized until the process ends.
#[derive(Debug, Default)]
pub struct Session {
    admin: Option<String>,
}

impl Session {
    /// A fresh, unauthorized session
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an admin has already authenticated in this session
    pub fn is_authorized(&self) -> bool {
        self.admin.is_some()
    }

    /// Name of the authenticated admin, if any
    pub fn admin(&self) -> Option<&str> {
        self.admin.as_deref()
    }

    /// Verify the pair against the store and record the admin on success.
    ///
    /// Failure leaves the session unauthorized.
    pub fn authorize(
        &mut self,
        store: &CredentialStore,
        username: &str,
        password: &str,
    ) -> Result<()> {
        if store.verify(username, password)? {
            self.admin = Some(username.to_string());
            Ok(())
        } else {
            Err(RegistroError::InvalidCredentials)
        }
    }
}
