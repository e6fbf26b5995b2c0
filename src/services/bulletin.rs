//! Bulletin de notes : moyennes par matière et moyenne générale pondérée.

use crate::models::{Grade, Subject};

/// Ligne du bulletin pour une matière
#[derive(Debug, Clone)]
pub struct LigneBulletin {
    pub matiere: String,
    pub coefficient: u32,
    pub moyenne: f64,
}

/// Bulletin calculé pour un élève
#[derive(Debug, Clone)]
pub struct Bulletin {
    pub lignes: Vec<LigneBulletin>,
    pub moyenne_generale: f64,
}

/// Moyenne d'une matière : moyenne simple des notes de l'élève dans
/// cette matière, 0 si aucune note. Une matière sans note pèse donc à 0
/// dans la moyenne générale.
pub fn moyenne_matiere(subject_id: &str, notes: &[&Grade]) -> f64 {
    let scores: Vec<f64> = notes
        .iter()
        .filter(|n| n.subject_id == subject_id)
        .map(|n| n.score)
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Moyenne générale = Σ(moyenne × coefficient) / Σ(coefficient),
/// 0 si la classe n'a aucune matière.
pub fn calculer_bulletin(matieres: &[&Subject], notes: &[&Grade]) -> Bulletin {
    let mut lignes = Vec::with_capacity(matieres.len());
    let mut total_pondere = 0.0;
    let mut total_coefficients = 0u32;

    for matiere in matieres {
        let moyenne = moyenne_matiere(&matiere.id, notes);
        total_pondere += moyenne * matiere.coefficient as f64;
        total_coefficients += matiere.coefficient;
        lignes.push(LigneBulletin {
            matiere: matiere.name.clone(),
            coefficient: matiere.coefficient,
            moyenne,
        });
    }

    let moyenne_generale = if total_coefficients > 0 {
        total_pondere / total_coefficients as f64
    } else {
        0.0
    };

    Bulletin {
        lignes,
        moyenne_generale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn matiere(id: &str, name: &str, coefficient: u32) -> Subject {
        Subject {
            id: id.into(),
            class_id: "c1".into(),
            name: name.into(),
            coefficient,
        }
    }

    fn note(subject_id: &str, score: f64) -> Grade {
        Grade {
            id: format!("n-{subject_id}-{score}"),
            student_id: "e1".into(),
            subject_id: subject_id.into(),
            score,
            composition_name: "Composition N°1".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_moyenne_matiere() {
        let notes = [note("math", 14.0), note("math", 16.0), note("fr", 10.0)];
        let refs: Vec<&Grade> = notes.iter().collect();
        assert_eq!(moyenne_matiere("math", &refs), 15.0);
        assert_eq!(moyenne_matiere("fr", &refs), 10.0);
        // Aucune note -> 0
        assert_eq!(moyenne_matiere("histoire", &refs), 0.0);
    }

    #[test]
    fn test_moyenne_generale_ponderee() {
        // math coef 3 moyenne 15, français coef 4 moyenne 12
        // -> (15×3 + 12×4) / 7
        let matieres = [matiere("math", "Mathématiques", 3), matiere("fr", "Français", 4)];
        let notes = [
            note("math", 14.0),
            note("math", 16.0),
            note("fr", 12.0),
        ];
        let matieres_refs: Vec<&Subject> = matieres.iter().collect();
        let notes_refs: Vec<&Grade> = notes.iter().collect();

        let bulletin = calculer_bulletin(&matieres_refs, &notes_refs);
        let attendu = (15.0 * 3.0 + 12.0 * 4.0) / 7.0;
        assert!((bulletin.moyenne_generale - attendu).abs() < 1e-9);
        assert_eq!(bulletin.lignes.len(), 2);
    }

    #[test]
    fn test_matiere_sans_note_pese_a_zero() {
        let matieres = [matiere("math", "Mathématiques", 1), matiere("fr", "Français", 1)];
        let notes = [note("math", 16.0)];
        let matieres_refs: Vec<&Subject> = matieres.iter().collect();
        let notes_refs: Vec<&Grade> = notes.iter().collect();

        let bulletin = calculer_bulletin(&matieres_refs, &notes_refs);
        // (16 + 0) / 2
        assert_eq!(bulletin.moyenne_generale, 8.0);
    }

    #[test]
    fn test_aucune_matiere() {
        let bulletin = calculer_bulletin(&[], &[]);
        assert_eq!(bulletin.moyenne_generale, 0.0);
        assert!(bulletin.lignes.is_empty());
    }
}
