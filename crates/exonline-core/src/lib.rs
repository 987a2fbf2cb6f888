//! Client library for the Ex-Online equipment-inspection API.
//!
//! ```no_run
//! use exonline_core::{Config, DateRange, ExOnlineClient, Page};
//!
//! # fn main() -> Result<(), exonline_core::ApiError> {
//! let client = ExOnlineClient::new(&Config::from_env()?)?;
//! for project in client.projects(311, Page::projects())? {
//!     println!("{}", project.display_name());
//! }
//! let items = client.equipment(17, &[1201, 1202], DateRange::default(), Page::equipment())?;
//! # let _ = items;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod deserializers;
pub mod envelope;
pub mod models;

pub use api::{ApiError, DateRange, Endpoint, ExOnlineClient, Page, Transport};
pub use config::Config;
pub use envelope::{Envelope, Status};
pub use models::{AssociatedEq, AttachmentData, Document, EqItem, ItemNo, Project};
