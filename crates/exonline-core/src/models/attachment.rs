//! Per-dossier attachments returned by `ListEqAttc`.
//!
//! An `AttachmentData` owns the associated equipment and documents of one
//! dossier. Both lists decode to empty when absent or `null`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::deserializers::{int, opt_text, text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentData {
    #[serde(deserialize_with = "int")]
    pub dossier_id: i64,
    pub assoc_eq: Vec<AssociatedEq>,
    pub doc: Vec<Document>,
}

impl AttachmentData {
    pub fn is_empty(&self) -> bool {
        self.assoc_eq.is_empty() && self.doc.is_empty()
    }
}

/// An item number the API sends as either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemNo {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemNo::Number(n) => write!(f, "{}", n),
            ItemNo::Text(s) => f.write_str(s),
        }
    }
}

/// Helper function to deserialize an optional [`ItemNo`]
///
/// Integers stay numeric, other scalars become text, anything else is `None`.
fn item_no<'de, D>(deserializer: D) -> Result<Option<ItemNo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => ItemNo::Number(i),
            None => ItemNo::Text(n.to_string()),
        }),
        Value::String(s) => Some(ItemNo::Text(s)),
        Value::Bool(b) => Some(ItemNo::Text(b.to_string())),
        _ => None,
    })
}

/// Equipment associated with a dossier (barriers, isolators, junction boxes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociatedEq {
    #[serde(deserialize_with = "int")]
    pub dossier_id: i64,
    #[serde(deserialize_with = "int")]
    pub project_id: i64,
    #[serde(deserialize_with = "item_no")]
    pub ae_item_no: Option<ItemNo>,
    #[serde(deserialize_with = "int")]
    pub linked_items: i64,
    #[serde(deserialize_with = "text")]
    pub description: String,

    #[serde(deserialize_with = "opt_text")]
    pub service: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub manufacturer: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub model: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub cert: Option<String>,

    #[serde(deserialize_with = "opt_text")]
    pub exr_epl: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_group: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_prot: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_tclass: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_amb_min: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_amb_max: Option<String>,
    /// `"N"` unless the API says otherwise
    #[serde(deserialize_with = "text")]
    pub is_simple: String,

    #[serde(deserialize_with = "opt_text")]
    pub exr_ip: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_ui: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_ii: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_pi: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_ci: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exr_li: Option<String>,

    #[serde(deserialize_with = "opt_text")]
    pub bar_um: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub bar_uo: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub bar_io: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub bar_po: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub bar_co: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub bar_lo: Option<String>,

    #[serde(deserialize_with = "text")]
    pub updated_by: String,
    #[serde(deserialize_with = "text")]
    pub updated_dt: String,
    #[serde(deserialize_with = "text")]
    pub dossier_state: String,
    #[serde(deserialize_with = "text")]
    pub dossier_state_dt: String,
    #[serde(deserialize_with = "int")]
    pub dossier_dossier_id: i64,
    #[serde(deserialize_with = "int")]
    pub dossier_dossier_id1: i64,
}

impl Default for AssociatedEq {
    fn default() -> Self {
        Self {
            dossier_id: 0,
            project_id: 0,
            ae_item_no: None,
            linked_items: 0,
            description: String::new(),
            service: None,
            manufacturer: None,
            model: None,
            cert: None,
            exr_epl: None,
            exr_group: None,
            exr_prot: None,
            exr_tclass: None,
            exr_amb_min: None,
            exr_amb_max: None,
            is_simple: "N".to_string(),
            exr_ip: None,
            exr_ui: None,
            exr_ii: None,
            exr_pi: None,
            exr_ci: None,
            exr_li: None,
            bar_um: None,
            bar_uo: None,
            bar_io: None,
            bar_po: None,
            bar_co: None,
            bar_lo: None,
            updated_by: String::new(),
            updated_dt: String::new(),
            dossier_state: String::new(),
            dossier_state_dt: String::new(),
            dossier_dossier_id: 0,
            dossier_dossier_id1: 0,
        }
    }
}

impl AssociatedEq {
    /// True when any barrier rating is filled in.
    pub fn has_barrier_ratings(&self) -> bool {
        [
            &self.bar_um,
            &self.bar_uo,
            &self.bar_io,
            &self.bar_po,
            &self.bar_co,
            &self.bar_lo,
        ]
        .iter()
        .any(|v| v.is_some())
    }
}

/// Metadata for one file attached to a dossier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "int")]
    pub dossier_id: i64,
    #[serde(deserialize_with = "int")]
    pub document_id: i64,
    #[serde(deserialize_with = "text")]
    pub document_no_issued: String,
    #[serde(deserialize_with = "opt_text")]
    pub issue_no: Option<String>,
    #[serde(deserialize_with = "text")]
    pub updated_by: String,
    #[serde(deserialize_with = "text")]
    pub updated_dt: String,
    #[serde(deserialize_with = "text")]
    pub doc_type: String,
    #[serde(deserialize_with = "text")]
    pub file_name_stored: String,
    #[serde(deserialize_with = "text")]
    pub link: String,
}
