//! Data models for Ex-Online records.
//!
//! Each type is the decoded form of one element of an envelope's `data`
//! list (or, for `AssociatedEq` and `Document`, of a list nested inside
//! `AttachmentData`):
//!
//! - `Project`: a project visible to an account (`ListProjects`)
//! - `EqItem`: full equipment detail for one dossier (`ListEq`)
//! - `AttachmentData`, `AssociatedEq`, `Document`: per-dossier attachments
//!   (`ListEqAttc`)
//!
//! All structs use `#[serde(default)]`, so any absent field takes its
//! default instead of failing the decode.

pub mod attachment;
pub mod equipment;
pub mod project;

pub use attachment::{AssociatedEq, AttachmentData, Document, ItemNo};
pub use equipment::EqItem;
pub use project::Project;
