use serde::{Deserialize, Serialize};

use crate::deserializers::{int, opt_text, text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project id
    #[serde(deserialize_with = "int")]
    pub pgid: i64,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub client: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub proj_job_no: Option<String>,
}

impl Project {
    /// Name with the job number appended when one is set.
    pub fn display_name(&self) -> String {
        match self.proj_job_no.as_deref() {
            Some(job) if !job.is_empty() => format!("{} ({})", self.name, job),
            _ => self.name.clone(),
        }
    }
}
