use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Statut opérationnel d'un véhicule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatutVehicule {
    #[default]
    Actif,
    EnMaintenance,
    HorsService,
}

impl StatutVehicule {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Actif => "Actif",
            Self::EnMaintenance => "En maintenance",
            Self::HorsService => "Hors service",
        }
    }

    pub fn all() -> &'static [StatutVehicule] {
        &[Self::Actif, Self::EnMaintenance, Self::HorsService]
    }
}

/// Véhicule du parc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub marque: String,
    pub modele: String,
    pub annee: i32,
    pub immatriculation: String,
    pub kilometrage: u32,
    pub statut: StatutVehicule,
    pub date_acquisition: NaiveDate,
    pub description: Option<String>,
}

impl Vehicle {
    pub fn designation(&self) -> String {
        format!("{} {}", self.marque, self.modele)
    }

    pub fn valider(&self) -> Result<(), VehicleValidationError> {
        if self.marque.trim().is_empty() {
            return Err(VehicleValidationError::MarqueRequise);
        }
        if self.modele.trim().is_empty() {
            return Err(VehicleValidationError::ModeleRequis);
        }
        if self.immatriculation.trim().is_empty() {
            return Err(VehicleValidationError::ImmatriculationRequise);
        }
        let annee_max = Utc::now().year() + 1;
        if self.annee < 1950 || self.annee > annee_max {
            return Err(VehicleValidationError::AnneeInvalide);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VehicleValidationError {
    #[error("La marque est requise.")]
    MarqueRequise,
    #[error("Le modèle est requis.")]
    ModeleRequis,
    #[error("L'immatriculation est requise.")]
    ImmatriculationRequise,
    #[error("L'année n'est pas plausible.")]
    AnneeInvalide,
}

/// Intervention de maintenance sur un véhicule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maintenance {
    pub id: String,
    pub vehicle_id: String,
    pub date: NaiveDate,
    /// Ex : Vidange, Réparation, Contrôle technique
    pub type_maintenance: String,
    pub cout: f64,
    pub description: String,
}

impl Maintenance {
    pub fn valider(&self) -> Result<(), MaintenanceValidationError> {
        if self.type_maintenance.trim().is_empty() {
            return Err(MaintenanceValidationError::TypeRequis);
        }
        if self.cout < 0.0 {
            return Err(MaintenanceValidationError::CoutNegatif);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MaintenanceValidationError {
    #[error("Le type de maintenance est requis.")]
    TypeRequis,
    #[error("Le coût doit être positif ou nul.")]
    CoutNegatif,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicule() -> Vehicle {
        Vehicle {
            id: "v1".into(),
            marque: "Toyota".into(),
            modele: "Hilux".into(),
            annee: 2019,
            immatriculation: "1234 AB 01".into(),
            kilometrage: 85_000,
            statut: StatutVehicule::Actif,
            date_acquisition: NaiveDate::from_ymd_opt(2019, 3, 15).unwrap(),
            description: None,
        }
    }

    #[test]
    fn test_designation() {
        assert_eq!(vehicule().designation(), "Toyota Hilux");
    }

    #[test]
    fn test_validation() {
        assert!(vehicule().valider().is_ok());

        let mut v = vehicule();
        v.annee = 1900;
        assert!(matches!(
            v.valider(),
            Err(VehicleValidationError::AnneeInvalide)
        ));

        let mut v = vehicule();
        v.immatriculation = String::new();
        assert!(matches!(
            v.valider(),
            Err(VehicleValidationError::ImmatriculationRequise)
        ));
    }

    #[test]
    fn test_validation_maintenance() {
        let m = Maintenance {
            id: "m1".into(),
            vehicle_id: "v1".into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            type_maintenance: "Vidange".into(),
            cout: 45_000.0,
            description: "Huile + filtre".into(),
        };
        assert!(m.valider().is_ok());

        let mut m2 = m.clone();
        m2.cout = -1.0;
        assert!(matches!(
            m2.valider(),
            Err(MaintenanceValidationError::CoutNegatif)
        ));
    }
}
