use crate::models::{Grade, SchoolClass, Student, Subject};
use crate::utils::format::nouvel_id;
use crate::utils::{AppError, AppResult};

/// Classes, élèves, matières et notes
#[derive(Debug, Default)]
pub struct SchoolStore {
    classes: Vec<SchoolClass>,
    eleves: Vec<Student>,
    matieres: Vec<Subject>,
    notes: Vec<Grade>,
}

impl SchoolStore {
    /// Store pré-rempli avec les classes du primaire
    pub fn avec_classes_par_defaut() -> Self {
        let mut store = Self::default();
        for name in ["CP1", "CP2", "CE1", "CE2", "CM1", "CM2"] {
            store.classes.push(SchoolClass {
                id: nouvel_id(),
                name: name.into(),
            });
        }
        store
    }

    // ----- Classes -----

    pub fn ajouter_classe(&mut self, name: &str) -> AppResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation(
                "Le nom de la classe ne peut pas être vide.",
            ));
        }
        if self
            .classes
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
        {
            return Err(AppError::already_exists(
                "Une classe avec ce nom existe déjà.",
            ));
        }
        let classe = SchoolClass {
            id: nouvel_id(),
            name: name.to_string(),
        };
        let id = classe.id.clone();
        self.classes.push(classe);
        Ok(id)
    }

    /// Supprime la classe, ses élèves (avec leurs notes) et ses matières
    pub fn supprimer_classe(&mut self, id: &str) -> AppResult<()> {
        let avant = self.classes.len();
        self.classes.retain(|c| c.id != id);
        if self.classes.len() == avant {
            return Err(AppError::not_found(format!("classe {id}")));
        }
        let eleves_supprimes: Vec<String> = self
            .eleves
            .iter()
            .filter(|e| e.class_id == id)
            .map(|e| e.id.clone())
            .collect();
        self.eleves.retain(|e| e.class_id != id);
        self.matieres.retain(|m| m.class_id != id);
        self.notes
            .retain(|n| !eleves_supprimes.contains(&n.student_id));
        Ok(())
    }

    pub fn classe_par_id(&self, id: &str) -> Option<&SchoolClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn classes(&self) -> &[SchoolClass] {
        &self.classes
    }

    // ----- Élèves -----

    pub fn ajouter_eleve(&mut self, mut eleve: Student) -> String {
        eleve.id = nouvel_id();
        let id = eleve.id.clone();
        self.eleves.push(eleve);
        id
    }

    pub fn modifier_eleve(&mut self, id: &str, mut remplacement: Student) -> AppResult<()> {
        let existant = self
            .eleves
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found(format!("élève {id}")))?;
        remplacement.id = existant.id.clone();
        *existant = remplacement;
        Ok(())
    }

    /// Supprime l'élève et ses notes
    pub fn supprimer_eleve(&mut self, id: &str) -> AppResult<()> {
        let avant = self.eleves.len();
        self.eleves.retain(|e| e.id != id);
        if self.eleves.len() == avant {
            return Err(AppError::not_found(format!("élève {id}")));
        }
        self.notes.retain(|n| n.student_id != id);
        Ok(())
    }

    pub fn eleve_par_id(&self, id: &str) -> Option<&Student> {
        self.eleves.iter().find(|e| e.id == id)
    }

    pub fn eleves_de(&self, class_id: &str) -> Vec<&Student> {
        self.eleves
            .iter()
            .filter(|e| e.class_id == class_id)
            .collect()
    }

    // ----- Matières -----

    pub fn ajouter_matiere(&mut self, mut matiere: Subject) -> String {
        matiere.id = nouvel_id();
        let id = matiere.id.clone();
        self.matieres.push(matiere);
        id
    }

    pub fn modifier_matiere(&mut self, id: &str, mut remplacement: Subject) -> AppResult<()> {
        let existante = self
            .matieres
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::not_found(format!("matière {id}")))?;
        remplacement.id = existante.id.clone();
        *existante = remplacement;
        Ok(())
    }

    /// Supprime la matière et les notes qui s'y rattachent
    pub fn supprimer_matiere(&mut self, id: &str) -> AppResult<()> {
        let avant = self.matieres.len();
        self.matieres.retain(|m| m.id != id);
        if self.matieres.len() == avant {
            return Err(AppError::not_found(format!("matière {id}")));
        }
        self.notes.retain(|n| n.subject_id != id);
        Ok(())
    }

    pub fn matiere_par_id(&self, id: &str) -> Option<&Subject> {
        self.matieres.iter().find(|m| m.id == id)
    }

    pub fn matieres_de(&self, class_id: &str) -> Vec<&Subject> {
        self.matieres
            .iter()
            .filter(|m| m.class_id == class_id)
            .collect()
    }

    // ----- Notes -----

    pub fn ajouter_note(&mut self, mut note: Grade) -> String {
        note.id = nouvel_id();
        let id = note.id.clone();
        self.notes.push(note);
        id
    }

    pub fn modifier_note(&mut self, id: &str, mut remplacement: Grade) -> AppResult<()> {
        let existante = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("note {id}")))?;
        remplacement.id = existante.id.clone();
        *existante = remplacement;
        Ok(())
    }

    pub fn supprimer_note(&mut self, id: &str) -> AppResult<()> {
        let avant = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == avant {
            return Err(AppError::not_found(format!("note {id}")));
        }
        Ok(())
    }

    pub fn note_par_id(&self, id: &str) -> Option<&Grade> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn notes_de(&self, student_id: &str) -> Vec<&Grade> {
        self.notes
            .iter()
            .filter(|n| n.student_id == student_id)
            .collect()
    }

    pub fn nombre_eleves(&self) -> usize {
        self.eleves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;
    use chrono::NaiveDate;

    fn eleve(class_id: &str) -> Student {
        Student {
            id: String::new(),
            class_id: class_id.into(),
            first_name: "Awa".into(),
            last_name: "Diabaté".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2015, 9, 3).unwrap(),
            gender: Genre::F,
            contact_parent: None,
        }
    }

    #[test]
    fn test_classes_par_defaut() {
        let store = SchoolStore::avec_classes_par_defaut();
        assert_eq!(store.classes().len(), 6);
        assert!(store.classes().iter().any(|c| c.name == "CM2"));
    }

    #[test]
    fn test_classe_dupliquee_rejetee() {
        let mut store = SchoolStore::avec_classes_par_defaut();
        assert!(matches!(
            store.ajouter_classe("cp1"),
            Err(AppError::AlreadyExists(_))
        ));
        assert!(matches!(
            store.ajouter_classe("   "),
            Err(AppError::Validation(_))
        ));
        assert!(store.ajouter_classe("6ème").is_ok());
    }

    #[test]
    fn test_suppression_classe_cascade() {
        let mut store = SchoolStore::default();
        let classe = store.ajouter_classe("CP1").unwrap();
        let eleve_id = store.ajouter_eleve(eleve(&classe));
        let matiere_id = store.ajouter_matiere(Subject {
            id: String::new(),
            class_id: classe.clone(),
            name: "Lecture".into(),
            coefficient: 2,
        });
        store.ajouter_note(Grade {
            id: String::new(),
            student_id: eleve_id.clone(),
            subject_id: matiere_id.clone(),
            score: 12.0,
            composition_name: "Composition N°1".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        });

        store.supprimer_classe(&classe).unwrap();
        assert!(store.eleves_de(&classe).is_empty());
        assert!(store.matieres_de(&classe).is_empty());
        assert!(store.notes_de(&eleve_id).is_empty());
    }

    #[test]
    fn test_suppression_eleve_cascade_notes() {
        let mut store = SchoolStore::default();
        let classe = store.ajouter_classe("CE1").unwrap();
        let eleve_id = store.ajouter_eleve(eleve(&classe));
        store.ajouter_note(Grade {
            id: String::new(),
            student_id: eleve_id.clone(),
            subject_id: "mat".into(),
            score: 15.0,
            composition_name: "Composition N°2".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        });

        store.supprimer_eleve(&eleve_id).unwrap();
        assert!(store.notes_de(&eleve_id).is_empty());
    }
}
