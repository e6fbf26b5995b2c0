use chrono::Utc;

use crate::models::{Devis, Facture, StatutDevis, StatutFacture};
use crate::utils::format::nouvel_id;
use crate::utils::{AppError, AppResult};

/// Devis et factures
#[derive(Debug, Default)]
pub struct DevisStore {
    devis: Vec<Devis>,
    factures: Vec<Facture>,
}

impl DevisStore {
    // ----- Devis -----

    pub fn ajouter_devis(&mut self, mut devis: Devis) -> String {
        devis.id = nouvel_id();
        devis.recalculer();
        let id = devis.id.clone();
        self.devis.push(devis);
        id
    }

    pub fn modifier_devis(&mut self, id: &str, mut remplacement: Devis) -> AppResult<()> {
        let existant = self
            .devis
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("devis {id}")))?;
        remplacement.id = existant.id.clone();
        remplacement.recalculer();
        *existant = remplacement;
        Ok(())
    }

    pub fn supprimer_devis(&mut self, id: &str) -> AppResult<()> {
        let avant = self.devis.len();
        self.devis.retain(|d| d.id != id);
        if self.devis.len() == avant {
            return Err(AppError::not_found(format!("devis {id}")));
        }
        Ok(())
    }

    pub fn devis_par_id(&self, id: &str) -> Option<&Devis> {
        self.devis.iter().find(|d| d.id == id)
    }

    pub fn tous_devis(&self) -> &[Devis] {
        &self.devis
    }

    /// Marque le devis `Facturé` (terminal) et retourne une facture
    /// pré-remplie à compléter dans le formulaire. La facture n'est
    /// enregistrée qu'à la soumission du formulaire.
    pub fn convertir_en_facture(&mut self, devis_id: &str) -> AppResult<Facture> {
        let devis = self
            .devis
            .iter_mut()
            .find(|d| d.id == devis_id)
            .ok_or_else(|| AppError::not_found(format!("devis {devis_id}")))?;

        devis.statut = StatutDevis::Facture;

        Ok(Facture {
            id: String::new(),
            devis_id: Some(devis.id.clone()),
            client_name: devis.client_name.clone(),
            date_emission: Utc::now().date_naive(),
            date_echeance: devis.date_validite,
            items: devis.items.clone(),
            sous_total: devis.sous_total,
            taux_tva: devis.taux_tva,
            montant_tva: devis.montant_tva,
            montant_total: devis.montant_total,
            statut: StatutFacture::NonPayee,
            notes: devis.notes.clone(),
        })
    }

    // ----- Factures -----

    pub fn ajouter_facture(&mut self, mut facture: Facture) -> String {
        facture.id = nouvel_id();
        facture.recalculer();
        let id = facture.id.clone();
        self.factures.push(facture);
        id
    }

    pub fn modifier_facture(&mut self, id: &str, mut remplacement: Facture) -> AppResult<()> {
        let existante = self
            .factures
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::not_found(format!("facture {id}")))?;
        remplacement.id = existante.id.clone();
        remplacement.recalculer();
        *existante = remplacement;
        Ok(())
    }

    pub fn supprimer_facture(&mut self, id: &str) -> AppResult<()> {
        let avant = self.factures.len();
        self.factures.retain(|f| f.id != id);
        if self.factures.len() == avant {
            return Err(AppError::not_found(format!("facture {id}")));
        }
        Ok(())
    }

    pub fn facture_par_id(&self, id: &str) -> Option<&Facture> {
        self.factures.iter().find(|f| f.id == id)
    }

    pub fn toutes_factures(&self) -> &[Facture] {
        &self.factures
    }

    pub fn nombre_devis(&self) -> usize {
        self.devis.len()
    }

    pub fn nombre_factures(&self) -> usize {
        self.factures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use chrono::NaiveDate;

    fn devis() -> Devis {
        Devis {
            id: String::new(),
            client_name: "Chantier Cocody".into(),
            date_emission: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            date_validite: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            items: vec![LineItem {
                id: "l1".into(),
                description: "Main d'œuvre".into(),
                quantite: 2,
                prix_unitaire: 100.0,
                prix_total: LineItem::calculer_total(2, 100.0),
            }],
            sous_total: 0.0,
            taux_tva: 0.18,
            montant_tva: 0.0,
            montant_total: 0.0,
            statut: StatutDevis::Accepte,
            notes: None,
        }
    }

    #[test]
    fn test_totaux_recalcules_a_l_insertion() {
        let mut store = DevisStore::default();
        let id = store.ajouter_devis(devis());
        let enregistre = store.devis_par_id(&id).unwrap();
        assert_eq!(enregistre.sous_total, 200.0);
        assert!((enregistre.montant_total - 236.0).abs() < 1e-9);
    }

    #[test]
    fn test_conversion_marque_facture() {
        let mut store = DevisStore::default();
        let id = store.ajouter_devis(devis());

        let facture = store.convertir_en_facture(&id).unwrap();
        assert_eq!(store.devis_par_id(&id).unwrap().statut, StatutDevis::Facture);
        assert_eq!(facture.devis_id.as_deref(), Some(id.as_str()));
        assert_eq!(facture.statut, StatutFacture::NonPayee);
        assert_eq!(facture.items.len(), 1);
        assert_eq!(facture.sous_total, 200.0);

        // La facture pré-remplie n'est pas encore enregistrée
        assert_eq!(store.nombre_factures(), 0);
        store.ajouter_facture(facture);
        assert_eq!(store.nombre_factures(), 1);
    }

    #[test]
    fn test_modification_idempotente() {
        let mut store = DevisStore::default();
        let id = store.ajouter_devis(devis());
        let inchange = store.devis_par_id(&id).unwrap().clone();
        store.modifier_devis(&id, inchange).unwrap();
        assert_eq!(store.nombre_devis(), 1);
        assert_eq!(store.devis_par_id(&id).unwrap().sous_total, 200.0);
    }
}
