use crate::models::Property;
use crate::utils::format::nouvel_id;
use crate::utils::{AppError, AppResult};

/// Patrimoine immobilier
#[derive(Debug, Default)]
pub struct ImmobilierStore {
    biens: Vec<Property>,
}

impl ImmobilierStore {
    pub fn ajouter(&mut self, mut bien: Property) -> String {
        bien.id = nouvel_id();
        let id = bien.id.clone();
        self.biens.push(bien);
        id
    }

    pub fn modifier(&mut self, id: &str, mut remplacement: Property) -> AppResult<()> {
        let existant = self
            .biens
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::not_found(format!("bien {id}")))?;
        remplacement.id = existant.id.clone();
        *existant = remplacement;
        Ok(())
    }

    pub fn supprimer(&mut self, id: &str) -> AppResult<()> {
        let avant = self.biens.len();
        self.biens.retain(|b| b.id != id);
        if self.biens.len() == avant {
            return Err(AppError::not_found(format!("bien {id}")));
        }
        Ok(())
    }

    pub fn par_id(&self, id: &str) -> Option<&Property> {
        self.biens.iter().find(|b| b.id == id)
    }

    pub fn tous(&self) -> &[Property] {
        &self.biens
    }

    pub fn nombre(&self) -> usize {
        self.biens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatutBien, TypeBien};

    fn bien(adresse: &str) -> Property {
        Property {
            id: String::new(),
            adresse: adresse.into(),
            ville: "Abidjan".into(),
            code_postal: "01".into(),
            type_bien: TypeBien::Maison,
            nombre_pieces: 4,
            surface: 120.0,
            prix_achat: 60_000_000.0,
            prix_location_mensuel: None,
            statut: StatutBien::Disponible,
            description: None,
        }
    }

    #[test]
    fn test_crud() {
        let mut store = ImmobilierStore::default();
        let id = store.ajouter(bien("Rue des Jardins"));
        assert_eq!(store.nombre(), 1);

        let mut modif = store.par_id(&id).unwrap().clone();
        modif.statut = StatutBien::Loue;
        store.modifier(&id, modif).unwrap();
        assert_eq!(store.par_id(&id).unwrap().statut, StatutBien::Loue);

        store.supprimer(&id).unwrap();
        assert_eq!(store.nombre(), 0);
    }
}
