//! Devis et factures : lignes d'articles, totaux HT/TVA/TTC, statuts.
//!
//! Les montants sont des flottants et ne sont jamais arrondis au stockage ;
//! la troncature à 2 décimales n'intervient qu'à l'affichage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ligne d'article d'un devis ou d'une facture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub quantite: u32,
    pub prix_unitaire: f64,
    pub prix_total: f64,
}

impl LineItem {
    /// prix_total = quantité × prix unitaire
    pub fn calculer_total(quantite: u32, prix_unitaire: f64) -> f64 {
        quantite as f64 * prix_unitaire
    }

    pub fn valider(&self) -> Result<(), DevisValidationError> {
        if self.description.trim().is_empty() {
            return Err(DevisValidationError::DescriptionRequise);
        }
        if self.quantite < 1 {
            return Err(DevisValidationError::QuantiteInvalide);
        }
        if self.prix_unitaire < 0.01 {
            return Err(DevisValidationError::PrixUnitaireInvalide);
        }
        Ok(())
    }
}

/// Totaux dérivés d'un document commercial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totaux {
    pub sous_total: f64,
    pub montant_tva: f64,
    pub montant_total: f64,
}

/// Agrège les lignes puis applique la TVA.
/// Liste vide -> sous-total 0 (le rejet d'un document sans ligne
/// appartient au formulaire appelant).
pub fn calculer_totaux(items: &[LineItem], taux_tva: f64) -> Totaux {
    let sous_total: f64 = items.iter().map(|item| item.prix_total).sum();
    let montant_tva = sous_total * taux_tva;
    Totaux {
        sous_total,
        montant_tva,
        montant_total: sous_total + montant_tva,
    }
}

/// Le taux de TVA est une fraction entre 0 et 1 inclus
pub fn valider_taux_tva(taux: f64) -> Result<(), DevisValidationError> {
    if !(0.0..=1.0).contains(&taux) {
        return Err(DevisValidationError::TauxTvaHorsBornes);
    }
    Ok(())
}

/// Statut d'un devis. `Facture` est terminal, atteint par conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatutDevis {
    #[default]
    Brouillon,
    Envoye,
    Accepte,
    Refuse,
    Facture,
}

impl StatutDevis {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Brouillon => "Brouillon",
            Self::Envoye => "Envoyé",
            Self::Accepte => "Accepté",
            Self::Refuse => "Refusé",
            Self::Facture => "Facturé",
        }
    }

    /// Statuts sélectionnables dans le formulaire (Facturé ne s'obtient
    /// que par conversion)
    pub fn selectionnables() -> &'static [StatutDevis] {
        &[Self::Brouillon, Self::Envoye, Self::Accepte, Self::Refuse]
    }
}

/// Statut de règlement d'une facture, sans ordre imposé entre eux
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatutFacture {
    #[default]
    NonPayee,
    PartiellementPayee,
    Payee,
    Annulee,
}

impl StatutFacture {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NonPayee => "Non payée",
            Self::PartiellementPayee => "Partiellement payée",
            Self::Payee => "Payée",
            Self::Annulee => "Annulée",
        }
    }

    pub fn all() -> &'static [StatutFacture] {
        &[
            Self::NonPayee,
            Self::PartiellementPayee,
            Self::Payee,
            Self::Annulee,
        ]
    }
}

/// Devis adressé à un client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Devis {
    pub id: String,
    pub client_name: String,
    pub date_emission: NaiveDate,
    pub date_validite: NaiveDate,
    pub items: Vec<LineItem>,
    pub sous_total: f64,
    pub taux_tva: f64,
    pub montant_tva: f64,
    pub montant_total: f64,
    pub statut: StatutDevis,
    pub notes: Option<String>,
}

impl Devis {
    pub fn valider(&self) -> Result<(), DevisValidationError> {
        if self.client_name.trim().is_empty() {
            return Err(DevisValidationError::ClientRequis);
        }
        valider_taux_tva(self.taux_tva)?;
        if self.items.is_empty() {
            return Err(DevisValidationError::AucunArticle);
        }
        Ok(())
    }

    /// Recalcule les totaux à partir des lignes courantes
    pub fn recalculer(&mut self) {
        let totaux = calculer_totaux(&self.items, self.taux_tva);
        self.sous_total = totaux.sous_total;
        self.montant_tva = totaux.montant_tva;
        self.montant_total = totaux.montant_total;
    }
}

/// Facture, éventuellement issue d'un devis (`devis_id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facture {
    pub id: String,
    pub devis_id: Option<String>,
    pub client_name: String,
    pub date_emission: NaiveDate,
    pub date_echeance: NaiveDate,
    pub items: Vec<LineItem>,
    pub sous_total: f64,
    pub taux_tva: f64,
    pub montant_tva: f64,
    pub montant_total: f64,
    pub statut: StatutFacture,
    pub notes: Option<String>,
}

impl Facture {
    pub fn valider(&self) -> Result<(), DevisValidationError> {
        if self.client_name.trim().is_empty() {
            return Err(DevisValidationError::ClientRequis);
        }
        valider_taux_tva(self.taux_tva)?;
        if self.items.is_empty() {
            return Err(DevisValidationError::AucunArticle);
        }
        Ok(())
    }

    pub fn recalculer(&mut self) {
        let totaux = calculer_totaux(&self.items, self.taux_tva);
        self.sous_total = totaux.sous_total;
        self.montant_tva = totaux.montant_tva;
        self.montant_total = totaux.montant_total;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DevisValidationError {
    #[error("La description est requise.")]
    DescriptionRequise,
    #[error("La quantité doit être au moins 1.")]
    QuantiteInvalide,
    #[error("Le prix unitaire doit être positif.")]
    PrixUnitaireInvalide,
    #[error("Le nom du client est requis.")]
    ClientRequis,
    #[error("Le taux de TVA doit être compris entre 0 et 1.")]
    TauxTvaHorsBornes,
    #[error("Veuillez ajouter au moins un article.")]
    AucunArticle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ligne(quantite: u32, prix_unitaire: f64) -> LineItem {
        LineItem {
            id: format!("l-{quantite}-{prix_unitaire}"),
            description: "Prestation".into(),
            quantite,
            prix_unitaire,
            prix_total: LineItem::calculer_total(quantite, prix_unitaire),
        }
    }

    #[test]
    fn test_total_ligne() {
        assert_eq!(LineItem::calculer_total(2, 100.0), 200.0);
        assert_eq!(LineItem::calculer_total(1, 50.0), 50.0);
        assert_eq!(LineItem::calculer_total(3, 0.5), 1.5);
    }

    #[test]
    fn test_sous_total() {
        let items = vec![ligne(2, 100.0), ligne(1, 50.0)];
        let totaux = calculer_totaux(&items, 0.0);
        assert_eq!(totaux.sous_total, 250.0);
    }

    #[test]
    fn test_totaux_avec_tva() {
        // sous-total 250, TVA 18% -> 45 de TVA, 295 TTC
        let items = vec![ligne(2, 100.0), ligne(1, 50.0)];
        let totaux = calculer_totaux(&items, 0.18);
        assert_eq!(totaux.sous_total, 250.0);
        assert!((totaux.montant_tva - 45.0).abs() < 1e-9);
        assert!((totaux.montant_total - 295.0).abs() < 1e-9);
    }

    #[test]
    fn test_liste_vide() {
        let totaux = calculer_totaux(&[], 0.18);
        assert_eq!(totaux.sous_total, 0.0);
        assert_eq!(totaux.montant_tva, 0.0);
        assert_eq!(totaux.montant_total, 0.0);
    }

    #[test]
    fn test_taux_tva_bornes() {
        assert!(valider_taux_tva(0.0).is_ok());
        assert!(valider_taux_tva(1.0).is_ok());
        assert!(valider_taux_tva(0.18).is_ok());
        assert!(valider_taux_tva(-0.01).is_err());
        assert!(valider_taux_tva(1.01).is_err());
    }

    #[test]
    fn test_devis_sans_article_rejete() {
        let devis = Devis {
            id: "d1".into(),
            client_name: "Client SARL".into(),
            date_emission: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            date_validite: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            items: vec![],
            sous_total: 0.0,
            taux_tva: 0.18,
            montant_tva: 0.0,
            montant_total: 0.0,
            statut: StatutDevis::Brouillon,
            notes: None,
        };
        assert!(matches!(
            devis.valider(),
            Err(DevisValidationError::AucunArticle)
        ));
    }

    #[test]
    fn test_recalculer() {
        let mut devis = Devis {
            id: "d1".into(),
            client_name: "Client SARL".into(),
            date_emission: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            date_validite: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            items: vec![ligne(2, 100.0), ligne(1, 50.0)],
            sous_total: 0.0,
            taux_tva: 0.18,
            montant_tva: 0.0,
            montant_total: 0.0,
            statut: StatutDevis::Brouillon,
            notes: None,
        };
        devis.recalculer();
        assert_eq!(devis.sous_total, 250.0);
        assert!((devis.montant_total - 295.0).abs() < 1e-9);
    }

    #[test]
    fn test_validation_ligne() {
        assert!(ligne(1, 0.01).valider().is_ok());
        assert!(matches!(
            ligne(0, 10.0).valider(),
            Err(DevisValidationError::QuantiteInvalide)
        ));
        assert!(matches!(
            ligne(1, 0.0).valider(),
            Err(DevisValidationError::PrixUnitaireInvalide)
        ));
    }
}
