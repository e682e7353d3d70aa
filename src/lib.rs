//! Domain core for a role-based property-management dashboard.
//!
//! Administrators, owners, and verifiers work with buildings, apartments,
//! inventory items, and inspection records. Visibility for non-admin
//! roles is decided exclusively by the owner and verifier assignment
//! ledgers; everything else fails closed to an empty result. Storage is
//! in-memory with simulated latency, behind ports that a real persistence
//! layer can implement later.
//!
//! ```
//! use estia::config::Config;
//! use estia::domain::LoginCredentials;
//! use estia::example_data::{ExampleDataSet, OWNER_LOGIN};
//! use estia::state::AppState;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), estia::domain::Error> {
//! let state = AppState::seeded(&Config::default(), ExampleDataSet::generate());
//!
//! let creds = LoginCredentials::try_from_parts(OWNER_LOGIN.0, OWNER_LOGIN.1)
//!     .map_err(|err| estia::domain::Error::invalid_request(err.to_string()))?;
//! let owner = state.auth.login(&creds).await?;
//!
//! let visible = state.apartments.visible_to(&owner).await?;
//! assert_eq!(visible.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod example_data;
pub mod outbound;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use state::AppState;
