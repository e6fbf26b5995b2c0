use crate::models::{Maintenance, Vehicle};
use crate::utils::format::nouvel_id;
use crate::utils::{AppError, AppResult};

/// Flotte de véhicules et interventions de maintenance
#[derive(Debug, Default)]
pub struct ParcAutoStore {
    vehicules: Vec<Vehicle>,
    maintenances: Vec<Maintenance>,
}

impl ParcAutoStore {
    pub fn ajouter(&mut self, mut vehicule: Vehicle) -> String {
        vehicule.id = nouvel_id();
        let id = vehicule.id.clone();
        self.vehicules.push(vehicule);
        id
    }

    pub fn modifier(&mut self, id: &str, mut remplacement: Vehicle) -> AppResult<()> {
        let existant = self
            .vehicules
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::not_found(format!("véhicule {id}")))?;
        remplacement.id = existant.id.clone();
        *existant = remplacement;
        Ok(())
    }

    /// Supprime le véhicule et tout son historique de maintenance
    pub fn supprimer(&mut self, id: &str) -> AppResult<()> {
        let avant = self.vehicules.len();
        self.vehicules.retain(|v| v.id != id);
        if self.vehicules.len() == avant {
            return Err(AppError::not_found(format!("véhicule {id}")));
        }
        self.maintenances.retain(|m| m.vehicle_id != id);
        Ok(())
    }

    pub fn par_id(&self, id: &str) -> Option<&Vehicle> {
        self.vehicules.iter().find(|v| v.id == id)
    }

    pub fn tous(&self) -> &[Vehicle] {
        &self.vehicules
    }

    pub fn ajouter_maintenance(
        &mut self,
        vehicle_id: &str,
        mut maintenance: Maintenance,
    ) -> AppResult<String> {
        if self.par_id(vehicle_id).is_none() {
            return Err(AppError::not_found(format!("véhicule {vehicle_id}")));
        }
        maintenance.id = nouvel_id();
        maintenance.vehicle_id = vehicle_id.to_string();
        let id = maintenance.id.clone();
        self.maintenances.push(maintenance);
        Ok(id)
    }

    pub fn maintenances_de(&self, vehicle_id: &str) -> Vec<&Maintenance> {
        self.maintenances
            .iter()
            .filter(|m| m.vehicle_id == vehicle_id)
            .collect()
    }

    /// Coût cumulé des interventions d'un véhicule
    pub fn cout_maintenance_de(&self, vehicle_id: &str) -> f64 {
        self.maintenances_de(vehicle_id)
            .iter()
            .map(|m| m.cout)
            .sum()
    }

    pub fn nombre(&self) -> usize {
        self.vehicules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatutVehicule;
    use chrono::NaiveDate;

    fn vehicule() -> Vehicle {
        Vehicle {
            id: String::new(),
            marque: "Renault".into(),
            modele: "Kangoo".into(),
            annee: 2017,
            immatriculation: "5678 CD 01".into(),
            kilometrage: 120_000,
            statut: StatutVehicule::Actif,
            date_acquisition: NaiveDate::from_ymd_opt(2017, 6, 1).unwrap(),
            description: None,
        }
    }

    fn maintenance(cout: f64) -> Maintenance {
        Maintenance {
            id: String::new(),
            vehicle_id: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            type_maintenance: "Vidange".into(),
            cout,
            description: String::new(),
        }
    }

    #[test]
    fn test_cout_cumule() {
        let mut store = ParcAutoStore::default();
        let id = store.ajouter(vehicule());
        store.ajouter_maintenance(&id, maintenance(45_000.0)).unwrap();
        store.ajouter_maintenance(&id, maintenance(80_000.0)).unwrap();
        assert_eq!(store.cout_maintenance_de(&id), 125_000.0);
    }

    #[test]
    fn test_suppression_cascade_maintenances() {
        let mut store = ParcAutoStore::default();
        let id = store.ajouter(vehicule());
        store.ajouter_maintenance(&id, maintenance(45_000.0)).unwrap();
        store.supprimer(&id).unwrap();
        assert!(store.maintenances_de(&id).is_empty());
    }

    #[test]
    fn test_maintenance_vehicule_inconnu() {
        let mut store = ParcAutoStore::default();
        assert!(store.ajouter_maintenance("xyz", maintenance(1.0)).is_err());
    }
}
