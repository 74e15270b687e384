//! # Registro Auth
//!
//! Admin credential verification and per-process session state.
//!
//! ## Components
//!
//! - `CredentialStore` - persisted admin credential list with seed-on-absent
//! - `Session` - explicit, memoized authorization state for one process

mod credential_store;
mod session;

pub use credential_store::{hash_password, AdminCredential, CredentialStore};
pub use session::Session;
