//! Integrity checks over the reference collections shipped in data/.

use biocanvas_data::ReferenceStore;
use std::collections::HashSet;
use std::path::PathBuf;

fn shipped_store() -> ReferenceStore {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    ReferenceStore::new(dir)
}

#[test]
fn ten_proteins_with_unique_ids_and_full_fields() {
    let proteins = shipped_store().proteins();
    assert_eq!(proteins.len(), 10, "Expected 10 curated proteins");

    let ids: HashSet<i64> = proteins.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), proteins.len(), "Protein ids must be unique");

    for p in proteins.iter() {
        assert!(!p.name.is_empty());
        assert!(!p.uniprot_id.is_empty());
        assert!(!p.function.is_empty());
        assert!(!p.category.is_empty());
    }
}

#[test]
fn ten_ligands_with_unique_ids_and_cids() {
    let ligands = shipped_store().ligands();
    assert_eq!(ligands.len(), 10, "Expected 10 library ligands");

    let ids: HashSet<i64> = ligands.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), ligands.len(), "Ligand ids must be unique");

    for l in ligands.iter() {
        assert!(!l.name.is_empty());
        assert!(!l.kind.is_empty());
        assert!(!l.description.is_empty());
        assert!(l.pubchem_cid > 0, "{} needs a PubChem CID", l.name);
    }
}

#[test]
fn scripted_pairs_reference_shipped_records() {
    let store = shipped_store();
    let proteins = store.proteins();
    let ligands = store.ligands();

    // Each scripted docking pair must point at records that actually ship.
    for (protein_id, ligand_id) in [(1, 1), (7, 10), (2, 2), (10, 2), (4, 7)] {
        assert!(
            proteins.iter().any(|p| p.id == protein_id),
            "Scripted pair references missing protein {}",
            protein_id
        );
        assert!(
            ligands.iter().any(|l| l.id == ligand_id),
            "Scripted pair references missing ligand {}",
            ligand_id
        );
    }

    assert_eq!(
        proteins.iter().find(|p| p.id == 7).map(|p| p.uniprot_id.as_str()),
        Some("P00533")
    );
    assert_eq!(
        ligands.iter().find(|l| l.id == 10).map(|l| l.pubchem_cid),
        Some(123631)
    );
}
