use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sens d'une transaction financière
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeTransaction {
    Revenu,
    Depense,
}

impl TypeTransaction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Revenu => "Revenu",
            Self::Depense => "Dépense",
        }
    }
}

/// Ligne de caisse (entrée ou sortie)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub designation: String,
    pub prix_unitaire: f64,
    pub nombre: u32,
    pub prix_total: f64,
    pub type_transaction: TypeTransaction,
}

impl Transaction {
    /// prix_total = prix_unitaire × nombre
    pub fn calculer_total(prix_unitaire: f64, nombre: u32) -> f64 {
        prix_unitaire * nombre as f64
    }

    pub fn valider(&self) -> Result<(), TransactionValidationError> {
        if self.designation.trim().is_empty() {
            return Err(TransactionValidationError::DesignationRequise);
        }
        if self.prix_unitaire < 0.0 {
            return Err(TransactionValidationError::PrixNegatif);
        }
        if self.nombre < 1 {
            return Err(TransactionValidationError::NombreInvalide);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("La désignation est requise.")]
    DesignationRequise,
    #[error("Le prix unitaire doit être positif ou nul.")]
    PrixNegatif,
    #[error("Le nombre doit être au moins 1.")]
    NombreInvalide,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(prix: f64, nombre: u32) -> Transaction {
        Transaction {
            id: "t1".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            designation: "Vente ciment".into(),
            prix_unitaire: prix,
            nombre,
            prix_total: Transaction::calculer_total(prix, nombre),
            type_transaction: TypeTransaction::Revenu,
        }
    }

    #[test]
    fn test_calculer_total() {
        assert_eq!(Transaction::calculer_total(100.0, 2), 200.0);
        assert_eq!(Transaction::calculer_total(0.0, 5), 0.0);
        assert_eq!(Transaction::calculer_total(12.5, 4), 50.0);
    }

    #[test]
    fn test_validation() {
        assert!(transaction(100.0, 2).valider().is_ok());

        let mut t = transaction(100.0, 2);
        t.designation = "  ".into();
        assert!(matches!(
            t.valider(),
            Err(TransactionValidationError::DesignationRequise)
        ));

        let t = transaction(-1.0, 2);
        assert!(matches!(
            t.valider(),
            Err(TransactionValidationError::PrixNegatif)
        ));

        let t = transaction(100.0, 0);
        assert!(matches!(
            t.valider(),
            Err(TransactionValidationError::NombreInvalide)
        ));
    }
}
