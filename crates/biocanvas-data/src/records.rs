//! Reference record types. Field names follow the wire format the
//! presentation layer consumes: `uniprot_id` for the protein accession,
//! `pubchem_cid` for the ligand compound id.

use serde::{Deserialize, Serialize};

/// A curated protein available for docking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProteinRecord {
    pub id: i64,
    pub name: String,
    pub uniprot_id: String,
    pub function: String,
    pub category: String,
}

/// A small-molecule ligand from the demo library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LigandRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub pubchem_cid: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ligand_kind_serializes_as_type() {
        let ligand = LigandRecord {
            id: 3,
            name: "Aspirin".to_string(),
            kind: "NSAID".to_string(),
            description: "Acetylsalicylic acid".to_string(),
            pubchem_cid: 2244,
        };
        let json = serde_json::to_value(&ligand).unwrap();
        assert_eq!(json["type"], "NSAID");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_protein_round_trips_wire_names() {
        let raw = r#"{
            "id": 1,
            "name": "Hemoglobin subunit alpha",
            "uniprot_id": "P69905",
            "function": "Oxygen transport from lung to tissues",
            "category": "Transport Protein"
        }"#;
        let protein: ProteinRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(protein.uniprot_id, "P69905");
        assert_eq!(protein.id, 1);
    }
}
