//! État métier de l'application, entièrement en mémoire.
//!
//! Aucune persistance : chaque démarrage repart de collections vides
//! (hormis les classes d'école pré-remplies et les paramètres par défaut).
//! Un seul écrivain logique : tout se mute de façon synchrone dans les
//! gestionnaires d'évènements de l'interface.

pub mod devis;
pub mod finance;
pub mod immobilier;
pub mod parcauto;
pub mod personnel;
pub mod school;
pub mod stock;

pub use devis::DevisStore;
pub use finance::FinanceStore;
pub use immobilier::ImmobilierStore;
pub use parcauto::ParcAutoStore;
pub use personnel::PersonnelStore;
pub use school::SchoolStore;
pub use stock::StockStore;

use crate::models::SystemSettings;
use crate::utils::AppResult;

/// Racine de l'état métier, un store par module
#[derive(Debug)]
pub struct Erp {
    pub finance: FinanceStore,
    pub personnel: PersonnelStore,
    pub stock: StockStore,
    pub immobilier: ImmobilierStore,
    pub parcauto: ParcAutoStore,
    pub school: SchoolStore,
    pub devis: DevisStore,
    settings: SystemSettings,
}

impl Default for Erp {
    fn default() -> Self {
        Self::new()
    }
}

impl Erp {
    pub fn new() -> Self {
        Self {
            finance: FinanceStore::default(),
            personnel: PersonnelStore::default(),
            stock: StockStore::default(),
            immobilier: ImmobilierStore::default(),
            parcauto: ParcAutoStore::default(),
            school: SchoolStore::avec_classes_par_defaut(),
            devis: DevisStore::default(),
            settings: SystemSettings::default(),
        }
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    /// Symbole monétaire courant, utilisé par tous les tableaux
    pub fn symbole_monetaire(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn enregistrer_settings(&mut self, settings: SystemSettings) -> AppResult<()> {
        settings
            .valider()
            .map_err(|e| crate::utils::AppError::validation(e.to_string()))?;
        self.settings = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etat_initial() {
        let erp = Erp::new();
        assert_eq!(erp.finance.nombre(), 0);
        assert_eq!(erp.school.classes().len(), 6);
        assert_eq!(erp.symbole_monetaire(), "FCFA");
    }

    #[test]
    fn test_settings_invalides_rejetes() {
        let mut erp = Erp::new();
        let mut settings = erp.settings().clone();
        settings.default_tva_rate = 2.0;
        assert!(erp.enregistrer_settings(settings).is_err());
        assert_eq!(erp.settings().default_tva_rate, 0.18);
    }
}
