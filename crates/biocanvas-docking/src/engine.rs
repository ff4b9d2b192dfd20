//! Fixed interaction table plus the seeded weak-binding fallback.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Qualitative binding class reported alongside the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingStrength {
    #[serde(rename = "Strong Binding")]
    Strong,
    #[serde(rename = "Moderate Binding")]
    Moderate,
    #[serde(rename = "Weak Binding")]
    Weak,
}

/// Outcome of one docking request. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockingResult {
    /// Interaction score in kcal/mol; more negative is more favorable.
    pub score: f64,
    pub strength: BindingStrength,
    pub message: String,
    pub success: bool,
}

/// Random fallback draws from this closed interval.
pub const WEAK_SCORE_RANGE: (f64, f64) = (-4.5, -3.0);

/// Score a protein-ligand pair. Known pairs return their fixed entry; any
/// other combination gets a weak-binding score drawn uniformly from
/// [`WEAK_SCORE_RANGE`], rounded to one decimal. Supplying `seed` makes the
/// random branch reproducible.
pub fn dock(protein_id: i64, ligand_id: i64, seed: Option<u64>) -> DockingResult {
    if let Some(result) = scripted_pair(protein_id, ligand_id) {
        return result;
    }

    let raw = match seed {
        Some(seed) => StdRng::seed_from_u64(seed).gen_range(WEAK_SCORE_RANGE.0..=WEAK_SCORE_RANGE.1),
        None => rand::thread_rng().gen_range(WEAK_SCORE_RANGE.0..=WEAK_SCORE_RANGE.1),
    };

    DockingResult {
        score: (raw * 10.0).round() / 10.0,
        strength: BindingStrength::Weak,
        message: "Low complementarity. The shape and chemical properties do not match well."
            .to_string(),
        success: true,
    }
}

fn scripted_pair(protein_id: i64, ligand_id: i64) -> Option<DockingResult> {
    let (score, strength, message) = match (protein_id, ligand_id) {
        // Hemoglobin + Heme B
        (1, 1) => (
            -11.5,
            BindingStrength::Strong,
            "Excellent! Heme is the natural cofactor that binds to Hemoglobin to transport oxygen.",
        ),
        // EGFR + Gefitinib
        (7, 10) => (
            -9.8,
            BindingStrength::Strong,
            "High affinity! Gefitinib effectively inhibits the EGFR tyrosine kinase domain.",
        ),
        // Serum albumin + Glucose
        (2, 2) => (
            -7.1,
            BindingStrength::Moderate,
            "Moderate interaction. Glucose associates with serum albumin and slowly glycates its lysine residues.",
        ),
        // Pancreatic alpha-amylase + Glucose
        (10, 2) => (
            -6.2,
            BindingStrength::Moderate,
            "Moderate interaction. Glucose is the breakdown product of starch, which Amylase acts upon.",
        ),
        // Lysozyme + N-Acetylglucosamine
        (4, 7) => (
            -5.8,
            BindingStrength::Moderate,
            "Moderate interaction. N-Acetylglucosamine occupies the lysozyme active-site cleft as a substrate unit.",
        ),
        _ => return None,
    };

    Some(DockingResult {
        score,
        strength,
        message: message.to_string(),
        success: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_pairs_are_fixed() {
        let cases = [
            (1, 1, -11.5, BindingStrength::Strong),
            (7, 10, -9.8, BindingStrength::Strong),
            (2, 2, -7.1, BindingStrength::Moderate),
            (10, 2, -6.2, BindingStrength::Moderate),
            (4, 7, -5.8, BindingStrength::Moderate),
        ];
        for (protein, ligand, score, strength) in cases {
            let result = dock(protein, ligand, None);
            assert_eq!(result.score, score, "pair ({}, {})", protein, ligand);
            assert_eq!(result.strength, strength);
            assert!(result.success);
            assert!(!result.message.is_empty());
        }
    }

    #[test]
    fn test_table_scores_stay_in_documented_range() {
        for (protein, ligand) in [(1, 1), (7, 10), (2, 2), (10, 2), (4, 7)] {
            let result = dock(protein, ligand, None);
            assert!(result.score >= -12.0 && result.score <= -3.0);
        }
    }

    #[test]
    fn test_unknown_pair_falls_back_to_weak() {
        for seed in 0..50 {
            let result = dock(3, 5, Some(seed));
            assert_eq!(result.strength, BindingStrength::Weak);
            assert!(result.score >= WEAK_SCORE_RANGE.0 && result.score <= WEAK_SCORE_RANGE.1,
                "score {} out of range", result.score);
            // One decimal place only.
            assert_eq!(result.score, (result.score * 10.0).round() / 10.0);
            assert!(result.success);
        }
    }

    #[test]
    fn test_seed_makes_fallback_deterministic() {
        let first = dock(9, 4, Some(42));
        let second = dock(9, 4, Some(42));
        assert_eq!(first.score, second.score);

        let other = dock(9, 4, Some(43));
        // Different seeds may collide on a rounded value, but the draw
        // itself must come from the seeded source.
        let redraw = dock(9, 4, Some(43));
        assert_eq!(other.score, redraw.score);
    }

    #[test]
    fn test_strength_wire_strings() {
        assert_eq!(
            serde_json::to_value(BindingStrength::Strong).unwrap(),
            "Strong Binding"
        );
        assert_eq!(
            serde_json::to_value(BindingStrength::Moderate).unwrap(),
            "Moderate Binding"
        );
        assert_eq!(
            serde_json::to_value(BindingStrength::Weak).unwrap(),
            "Weak Binding"
        );
    }
}
