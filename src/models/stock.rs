use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Article tenu en stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    pub nom: String,
    pub description: String,
    pub quantite_actuelle: u32,
    pub prix_achat_unitaire: f64,
    pub prix_vente_unitaire: f64,
}

impl StockItem {
    pub fn valider(&self) -> Result<(), StockValidationError> {
        if self.nom.trim().is_empty() {
            return Err(StockValidationError::NomRequis);
        }
        if self.prix_achat_unitaire < 0.0 || self.prix_vente_unitaire < 0.0 {
            return Err(StockValidationError::PrixNegatif);
        }
        Ok(())
    }

    /// Applique un mouvement à la quantité courante.
    /// Une sortie qui rendrait la quantité négative est refusée et
    /// laisse l'article inchangé.
    pub fn appliquer_mouvement(&mut self, mouvement: &StockMovement) -> Result<(), StockValidationError> {
        match mouvement.type_mouvement {
            TypeMouvement::Entree => {
                self.quantite_actuelle += mouvement.quantite;
                Ok(())
            }
            TypeMouvement::Sortie => {
                if mouvement.quantite > self.quantite_actuelle {
                    return Err(StockValidationError::QuantiteNegative);
                }
                self.quantite_actuelle -= mouvement.quantite;
                Ok(())
            }
        }
    }
}

/// Sens d'un mouvement de stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeMouvement {
    Entree,
    Sortie,
}

impl TypeMouvement {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entree => "Entrée",
            Self::Sortie => "Sortie",
        }
    }
}

/// Mouvement enregistré dans l'historique d'un article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: String,
    pub item_id: String,
    pub date: NaiveDate,
    pub type_mouvement: TypeMouvement,
    pub quantite: u32,
    pub raison: String,
}

impl StockMovement {
    pub fn valider(&self) -> Result<(), StockValidationError> {
        if self.quantite < 1 {
            return Err(StockValidationError::QuantiteMouvementInvalide);
        }
        if self.raison.trim().is_empty() {
            return Err(StockValidationError::RaisonRequise);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StockValidationError {
    #[error("Le nom de l'article est requis.")]
    NomRequis,
    #[error("Les prix unitaires doivent être positifs ou nuls.")]
    PrixNegatif,
    #[error("La quantité en stock ne peut pas être négative.")]
    QuantiteNegative,
    #[error("La quantité doit être au moins 1.")]
    QuantiteMouvementInvalide,
    #[error("La raison du mouvement est requise.")]
    RaisonRequise,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(quantite: u32) -> StockItem {
        StockItem {
            id: "a1".into(),
            nom: "Sac de ciment 50kg".into(),
            description: String::new(),
            quantite_actuelle: quantite,
            prix_achat_unitaire: 4500.0,
            prix_vente_unitaire: 5500.0,
        }
    }

    fn mouvement(type_mouvement: TypeMouvement, quantite: u32) -> StockMovement {
        StockMovement {
            id: "m1".into(),
            item_id: "a1".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            type_mouvement,
            quantite,
            raison: "Inventaire".into(),
        }
    }

    #[test]
    fn test_entree_ajoute() {
        let mut item = article(10);
        item.appliquer_mouvement(&mouvement(TypeMouvement::Entree, 5))
            .unwrap();
        assert_eq!(item.quantite_actuelle, 15);
    }

    #[test]
    fn test_sortie_retire() {
        let mut item = article(10);
        item.appliquer_mouvement(&mouvement(TypeMouvement::Sortie, 4))
            .unwrap();
        assert_eq!(item.quantite_actuelle, 6);
    }

    #[test]
    fn test_sortie_refusee_si_negatif() {
        let mut item = article(10);
        let err = item
            .appliquer_mouvement(&mouvement(TypeMouvement::Sortie, 15))
            .unwrap_err();
        assert!(matches!(err, StockValidationError::QuantiteNegative));
        // L'article reste inchangé
        assert_eq!(item.quantite_actuelle, 10);
    }

    #[test]
    fn test_sortie_exacte_autorisee() {
        let mut item = article(10);
        item.appliquer_mouvement(&mouvement(TypeMouvement::Sortie, 10))
            .unwrap();
        assert_eq!(item.quantite_actuelle, 0);
    }

    #[test]
    fn test_validation_mouvement() {
        let mut m = mouvement(TypeMouvement::Entree, 0);
        assert!(matches!(
            m.valider(),
            Err(StockValidationError::QuantiteMouvementInvalide)
        ));
        m.quantite = 1;
        m.raison = String::new();
        assert!(matches!(
            m.valider(),
            Err(StockValidationError::RaisonRequise)
        ));
    }
}
