//! Detailed equipment records returned by `ListEq`.

use serde::{Deserialize, Serialize};

use crate::deserializers::{int, opt_text, text};

/// One piece of hazardous-area equipment with its latest inspection state.
///
/// Text fields the API always sends are plain `String`s (empty when
/// missing); fields the API documents as nullable are `Option<String>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqItem {
    #[serde(deserialize_with = "int")]
    pub dossier_id: i64,
    #[serde(deserialize_with = "int")]
    pub project_id: i64,
    #[serde(deserialize_with = "text")]
    pub tag_no: String,

    // Counters reported under single-letter keys
    #[serde(rename = "D")]
    #[serde(deserialize_with = "int")]
    pub d: i64,
    #[serde(rename = "C")]
    #[serde(deserialize_with = "int")]
    pub c: i64,
    #[serde(rename = "A")]
    #[serde(deserialize_with = "int")]
    pub a: i64,

    #[serde(deserialize_with = "text")]
    pub site: String,
    #[serde(deserialize_with = "text")]
    pub area: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub service: String,
    #[serde(deserialize_with = "text")]
    pub location: String,
    #[serde(deserialize_with = "text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "text")]
    pub model: String,
    #[serde(deserialize_with = "opt_text")]
    pub serial_no: Option<String>,

    // Inspection history
    #[serde(deserialize_with = "text")]
    pub install_date: String,
    #[serde(deserialize_with = "text")]
    pub last_insp_date: String,
    #[serde(deserialize_with = "text")]
    pub last_insp_grade: String,
    #[serde(deserialize_with = "opt_text")]
    pub actual_last_insp_date: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub last_system_insp_upload_dt: Option<String>,
    #[serde(deserialize_with = "int")]
    pub insp_interval_month: i64,

    // Area classification
    #[serde(deserialize_with = "text")]
    pub ac_zone: String,
    #[serde(deserialize_with = "text")]
    pub ac_epl: String,
    #[serde(deserialize_with = "text")]
    pub ac_group: String,
    #[serde(deserialize_with = "text")]
    pub ac_tclass: String,
    #[serde(deserialize_with = "text")]
    pub ac_amb_min: String,
    #[serde(deserialize_with = "text")]
    pub ac_amb_max: String,
    #[serde(deserialize_with = "text")]
    pub ac_ip: String,

    // Certification
    #[serde(deserialize_with = "text")]
    pub cert: String,
    #[serde(deserialize_with = "text")]
    pub cert_issue: String,
    #[serde(deserialize_with = "text")]
    pub is_simple: String,
    #[serde(deserialize_with = "opt_text")]
    pub eq_group: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub ce_code: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub eex: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub certified_to: Option<String>,

    // Equipment Ex rating
    #[serde(deserialize_with = "text")]
    pub exr_epl: String,
    #[serde(deserialize_with = "text")]
    pub exr_group: String,
    #[serde(deserialize_with = "text")]
    pub exr_prot: String,
    #[serde(deserialize_with = "text")]
    pub exr_tclass: String,
    #[serde(deserialize_with = "text")]
    pub exr_amb_min: String,
    #[serde(deserialize_with = "text")]
    pub exr_amb_max: String,
    #[serde(deserialize_with = "text")]
    pub exr_ip: String,

    // Motor
    #[serde(deserialize_with = "opt_text")]
    pub mot_kw: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub mot_voltage: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub mot_amps: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub mot_hz: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub mot_rpm: Option<String>,
    #[serde(rename = "exe_mot_Ia_In")]
    #[serde(deserialize_with = "opt_text")]
    pub exe_mot_ia_in: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub exe_mot_te: Option<String>,

    // Intrinsic safety entity parameters
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

    // Barrier
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

    #[serde(deserialize_with = "opt_text")]
    pub other_1: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub other_2: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub other_3: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub other_4: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub other_5: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub other_6: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub comment_1: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub comment_2: Option<String>,

    #[serde(deserialize_with = "text")]
    pub updated_by: String,
    #[serde(deserialize_with = "text")]
    pub updated_dt: String,
    #[serde(deserialize_with = "text")]
    pub dossier_state: String,
    #[serde(deserialize_with = "text")]
    pub dossier_state_dt: String,
}

impl EqItem {
    /// True when the equipment is flagged as simple apparatus.
    pub fn is_simple_apparatus(&self) -> bool {
        self.is_simple.eq_ignore_ascii_case("Y")
    }

    /// Any motor characteristic is present.
    pub fn has_motor_data(&self) -> bool {
        [
            &self.mot_kw,
            &self.mot_voltage,
            &self.mot_amps,
            &self.mot_hz,
            &self.mot_rpm,
            &self.exe_mot_ia_in,
            &self.exe_mot_te,
        ]
        .iter()
        .any(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eq_item() {
        let json = r#"{
            "dossier_id": 1201, "project_id": 17, "tag_no": "P-101A",
            "D": 2, "C": 0, "A": 1,
            "site": "North", "area": "Module 3", "description": "Crude pump motor",
            "manufacturer": "ABB", "model": "M3JP", "serial_no": null,
            "last_insp_date": "2024-05-01", "last_insp_grade": "D",
            "insp_interval_month": 36,
            "ac_zone": "1", "ac_group": "IIA", "ac_tclass": "T3",
            "is_simple": "N", "exr_prot": "Ex d",
            "mot_kw": "55", "exe_mot_Ia_In": "7.1",
            "other_3": "spare",
            "updated_by": "inspector", "dossier_state": "Active"
        }"#;
        let item: EqItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.dossier_id, 1201);
        assert_eq!(item.tag_no, "P-101A");
        assert_eq!((item.d, item.c, item.a), (2, 0, 1));
        assert_eq!(item.insp_interval_month, 36);
        assert_eq!(item.serial_no, None);
        assert_eq!(item.exe_mot_ia_in.as_deref(), Some("7.1"));
        assert_eq!(item.other_3.as_deref(), Some("spare"));
        assert_eq!(item.cert, "");
        assert_eq!(item.bar_um, None);
        assert!(!item.is_simple_apparatus());
        assert!(item.has_motor_data());
    }

    #[test]
    fn test_missing_fields_default() {
        let item: EqItem = serde_json::from_str(r#"{"tag_no": "TT-1"}"#).unwrap();
        assert_eq!(item.dossier_id, 0);
        assert_eq!(item.d, 0);
        assert_eq!(item.site, "");
        assert_eq!(item.comment_2, None);
        assert!(!item.has_motor_data());
    }

    #[test]
    fn test_number_in_text_field() {
        let items: Vec<EqItem> =
            serde_json::from_str(r#"[{"tag_no": "a"}, {"tag_no": "b", "mot_kw": 55, "site": 3}]"#)
                .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].mot_kw, None);
        assert_eq!(items[1].tag_no, "b");
        assert_eq!(items[1].mot_kw.as_deref(), Some("55"));
        assert_eq!(items[1].site, "3");
        assert!(items[1].has_motor_data());
    }

    #[test]
    fn test_numeric_string_in_id_field() {
        let item: EqItem =
            serde_json::from_str(r#"{"dossier_id": "1201", "D": "2", "insp_interval_month": "36"}"#)
                .unwrap();
        assert_eq!(item.dossier_id, 1201);
        assert_eq!(item.d, 2);
        assert_eq!(item.insp_interval_month, 36);
    }

    #[test]
    fn test_wire_keys_on_encode() {
        let item = EqItem {
            d: 3,
            exe_mot_ia_in: Some("6.5".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["D"], 3);
        assert_eq!(value["exe_mot_Ia_In"], "6.5");
        assert!(value.get("d").is_none());
    }
}
