use crate::models::{FicheDePaie, Personnel};
use crate::utils::format::nouvel_id;
use crate::utils::{AppError, AppResult};

/// Employés et fiches de paie générées
#[derive(Debug, Default)]
pub struct PersonnelStore {
    employes: Vec<Personnel>,
    fiches: Vec<FicheDePaie>,
}

impl PersonnelStore {
    pub fn ajouter(&mut self, mut employe: Personnel) -> String {
        employe.id = nouvel_id();
        let id = employe.id.clone();
        self.employes.push(employe);
        id
    }

    pub fn modifier(&mut self, id: &str, mut remplacement: Personnel) -> AppResult<()> {
        let existant = self
            .employes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("personnel {id}")))?;
        remplacement.id = existant.id.clone();
        *existant = remplacement;
        Ok(())
    }

    /// Supprime l'employé et ses fiches de paie
    pub fn supprimer(&mut self, id: &str) -> AppResult<()> {
        let avant = self.employes.len();
        self.employes.retain(|p| p.id != id);
        if self.employes.len() == avant {
            return Err(AppError::not_found(format!("personnel {id}")));
        }
        self.fiches.retain(|f| f.personnel_id != id);
        Ok(())
    }

    pub fn par_id(&self, id: &str) -> Option<&Personnel> {
        self.employes.iter().find(|p| p.id == id)
    }

    pub fn tous(&self) -> &[Personnel] {
        &self.employes
    }

    /// Chaque génération ajoute un instantané indépendant, même pour le
    /// même employé et le même mois.
    pub fn enregistrer_fiche(&mut self, fiche: FicheDePaie) -> String {
        let id = fiche.id.clone();
        self.fiches.push(fiche);
        id
    }

    pub fn fiches_de(&self, personnel_id: &str) -> Vec<&FicheDePaie> {
        self.fiches
            .iter()
            .filter(|f| f.personnel_id == personnel_id)
            .collect()
    }

    pub fn nombre(&self) -> usize {
        self.employes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::paie;
    use chrono::NaiveDate;

    fn employe(nom: &str) -> Personnel {
        Personnel {
            id: String::new(),
            nom: nom.into(),
            prenoms: "Jean".into(),
            date_naissance: NaiveDate::from_ymd_opt(1985, 1, 1).unwrap(),
            email: "jean@bks.com".into(),
            contact: "0700000000".into(),
            date_embauche: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            date_fin_contrat: None,
            salaire_de_base: 100_000.0,
            poste: "Chauffeur".into(),
        }
    }

    #[test]
    fn test_suppression_cascade_fiches() {
        let mut store = PersonnelStore::default();
        let id = store.ajouter(employe("Traoré"));
        let fiche = paie::generer_fiche(store.par_id(&id).unwrap());
        store.enregistrer_fiche(fiche);
        assert_eq!(store.fiches_de(&id).len(), 1);

        store.supprimer(&id).unwrap();
        assert!(store.fiches_de(&id).is_empty());
    }

    #[test]
    fn test_regeneration_non_idempotente() {
        let mut store = PersonnelStore::default();
        let id = store.ajouter(employe("Koné"));
        let employe = store.par_id(&id).unwrap().clone();
        store.enregistrer_fiche(paie::generer_fiche(&employe));
        store.enregistrer_fiche(paie::generer_fiche(&employe));
        // Deux instantanés distincts
        let fiches = store.fiches_de(&id);
        assert_eq!(fiches.len(), 2);
        assert_ne!(fiches[0].id, fiches[1].id);
    }
}
