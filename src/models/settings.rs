use serde::{Deserialize, Serialize};

use super::devis::valider_taux_tva;

/// Paramètres du système, singleton tenu en mémoire et jamais persisté
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSettings {
    pub company_name: String,
    pub company_address: String,
    pub company_phone: String,
    pub company_email: String,
    /// Fraction, ex. 0.18 pour 18 %
    pub default_tva_rate: f64,
    /// Ex. "FCFA"
    pub currency_symbol: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            company_name: "BKS Solutions".into(),
            company_address: "123 Rue de l'Innovation, Abidjan, Côte d'Ivoire".into(),
            company_phone: "+225 07 00 00 00 00".into(),
            company_email: "contact@bkssolutions.com".into(),
            default_tva_rate: 0.18,
            currency_symbol: "FCFA".into(),
        }
    }
}

impl SystemSettings {
    pub fn valider(&self) -> Result<(), SettingsValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(SettingsValidationError::NomRequis);
        }
        if self.company_address.trim().is_empty() {
            return Err(SettingsValidationError::AdresseRequise);
        }
        if self.company_phone.trim().is_empty() {
            return Err(SettingsValidationError::TelephoneRequis);
        }
        if !self.company_email.contains('@') {
            return Err(SettingsValidationError::EmailInvalide);
        }
        if valider_taux_tva(self.default_tva_rate).is_err() {
            return Err(SettingsValidationError::TauxTvaHorsBornes);
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(SettingsValidationError::SymboleRequis);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsValidationError {
    #[error("Le nom de l'entreprise est requis.")]
    NomRequis,
    #[error("L'adresse de l'entreprise est requise.")]
    AdresseRequise,
    #[error("Le numéro de téléphone est requis.")]
    TelephoneRequis,
    #[error("L'adresse email doit être valide.")]
    EmailInvalide,
    #[error("Le taux de TVA ne peut pas dépasser 100%.")]
    TauxTvaHorsBornes,
    #[error("Le symbole monétaire est requis.")]
    SymboleRequis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SystemSettings::default();
        assert_eq!(settings.default_tva_rate, 0.18);
        assert_eq!(settings.currency_symbol, "FCFA");
        assert!(settings.valider().is_ok());
    }

    #[test]
    fn test_taux_hors_bornes() {
        let mut settings = SystemSettings::default();
        settings.default_tva_rate = 1.5;
        assert!(matches!(
            settings.valider(),
            Err(SettingsValidationError::TauxTvaHorsBornes)
        ));
    }
}
