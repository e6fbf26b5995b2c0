use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classe de l'école (ex : "CP1", "CM2")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: String,
    pub name: String,
}

/// Genre d'un élève
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    M,
    F,
    Autre,
}

impl Genre {
    pub fn label(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
            Self::Autre => "Autre",
        }
    }

    pub fn all() -> &'static [Genre] {
        &[Self::M, Self::F, Self::Autre]
    }
}

/// Élève inscrit dans une classe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub class_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Genre,
    pub contact_parent: Option<String>,
}

impl Student {
    pub fn nom_complet(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    pub fn valider(&self) -> Result<(), SchoolValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(SchoolValidationError::PrenomRequis);
        }
        if self.last_name.trim().is_empty() {
            return Err(SchoolValidationError::NomRequis);
        }
        Ok(())
    }
}

/// Matière enseignée dans une classe, pondérée par un coefficient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub class_id: String,
    pub name: String,
    pub coefficient: u32,
}

impl Subject {
    pub fn valider(&self) -> Result<(), SchoolValidationError> {
        if self.name.trim().is_empty() {
            return Err(SchoolValidationError::MatiereRequise);
        }
        if self.coefficient < 1 {
            return Err(SchoolValidationError::CoefficientInvalide);
        }
        Ok(())
    }
}

/// Note obtenue à une composition, sur 20
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub student_id: String,
    pub subject_id: String,
    pub score: f64,
    pub composition_name: String,
    pub date: NaiveDate,
}

impl Grade {
    pub fn valider(&self) -> Result<(), SchoolValidationError> {
        if self.composition_name.trim().is_empty() {
            return Err(SchoolValidationError::CompositionRequise);
        }
        if !(0.0..=20.0).contains(&self.score) {
            return Err(SchoolValidationError::NoteHorsBornes);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchoolValidationError {
    #[error("Le prénom est requis.")]
    PrenomRequis,
    #[error("Le nom est requis.")]
    NomRequis,
    #[error("Le nom de la matière est requis.")]
    MatiereRequise,
    #[error("Le coefficient doit être un entier positif.")]
    CoefficientInvalide,
    #[error("Le nom de la composition est requis.")]
    CompositionRequise,
    #[error("La note doit être comprise entre 0 et 20.")]
    NoteHorsBornes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_note() {
        let note = Grade {
            id: "n1".into(),
            student_id: "e1".into(),
            subject_id: "mat1".into(),
            score: 14.5,
            composition_name: "Composition N°1".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        };
        assert!(note.valider().is_ok());

        let mut n = note.clone();
        n.score = 20.5;
        assert!(matches!(
            n.valider(),
            Err(SchoolValidationError::NoteHorsBornes)
        ));

        let mut n = note.clone();
        n.score = -0.5;
        assert!(matches!(
            n.valider(),
            Err(SchoolValidationError::NoteHorsBornes)
        ));
    }

    #[test]
    fn test_validation_matiere() {
        let matiere = Subject {
            id: "mat1".into(),
            class_id: "c1".into(),
            name: "Mathématiques".into(),
            coefficient: 3,
        };
        assert!(matiere.valider().is_ok());

        let mut m = matiere.clone();
        m.coefficient = 0;
        assert!(matches!(
            m.valider(),
            Err(SchoolValidationError::CoefficientInvalide)
        ));
    }
}
