use crate::models::{StockItem, StockMovement};
use crate::utils::format::nouvel_id;
use crate::utils::{AppError, AppResult};

/// Articles en stock et historique des mouvements.
///
/// L'enregistrement d'un mouvement est atomique : un mouvement refusé
/// (stock qui deviendrait négatif) ne touche ni la quantité de l'article
/// ni l'historique.
#[derive(Debug, Default)]
pub struct StockStore {
    items: Vec<StockItem>,
    mouvements: Vec<StockMovement>,
}

impl StockStore {
    pub fn ajouter(&mut self, mut item: StockItem) -> String {
        item.id = nouvel_id();
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    pub fn modifier(&mut self, id: &str, mut remplacement: StockItem) -> AppResult<()> {
        let existant = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::not_found(format!("article {id}")))?;
        remplacement.id = existant.id.clone();
        *existant = remplacement;
        Ok(())
    }

    /// Supprime l'article et son historique de mouvements
    pub fn supprimer(&mut self, id: &str) -> AppResult<()> {
        let avant = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == avant {
            return Err(AppError::not_found(format!("article {id}")));
        }
        self.mouvements.retain(|m| m.item_id != id);
        Ok(())
    }

    pub fn par_id(&self, id: &str) -> Option<&StockItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn tous(&self) -> &[StockItem] {
        &self.items
    }

    /// Applique le mouvement à l'article puis l'ajoute à l'historique.
    /// Retourne l'identifiant du mouvement enregistré.
    pub fn enregistrer_mouvement(
        &mut self,
        item_id: &str,
        mut mouvement: StockMovement,
    ) -> AppResult<String> {
        mouvement
            .valider()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::not_found(format!("article {item_id}")))?;

        item.appliquer_mouvement(&mouvement)
            .map_err(|e| AppError::validation(e.to_string()))?;

        mouvement.id = nouvel_id();
        mouvement.item_id = item_id.to_string();
        let id = mouvement.id.clone();
        self.mouvements.push(mouvement);
        Ok(id)
    }

    pub fn mouvements_de(&self, item_id: &str) -> Vec<&StockMovement> {
        self.mouvements
            .iter()
            .filter(|m| m.item_id == item_id)
            .collect()
    }

    pub fn nombre(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TypeMouvement;
    use chrono::NaiveDate;

    fn article(quantite: u32) -> StockItem {
        StockItem {
            id: String::new(),
            nom: "Tôle ondulée".into(),
            description: String::new(),
            quantite_actuelle: quantite,
            prix_achat_unitaire: 3000.0,
            prix_vente_unitaire: 3800.0,
        }
    }

    fn mouvement(type_mouvement: TypeMouvement, quantite: u32) -> StockMovement {
        StockMovement {
            id: String::new(),
            item_id: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            type_mouvement,
            quantite,
            raison: "Livraison chantier".into(),
        }
    }

    #[test]
    fn test_sortie_puis_entree() {
        let mut store = StockStore::default();
        let id = store.ajouter(article(10));

        // Sortie de 15 sur un stock de 10 : refusée, rien ne change
        let err = store
            .enregistrer_mouvement(&id, mouvement(TypeMouvement::Sortie, 15))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.par_id(&id).unwrap().quantite_actuelle, 10);
        assert!(store.mouvements_de(&id).is_empty());

        // Entrée de 5 : le stock passe à 15
        store
            .enregistrer_mouvement(&id, mouvement(TypeMouvement::Entree, 5))
            .unwrap();
        assert_eq!(store.par_id(&id).unwrap().quantite_actuelle, 15);
        assert_eq!(store.mouvements_de(&id).len(), 1);
    }

    #[test]
    fn test_mouvement_invalide_rejete() {
        let mut store = StockStore::default();
        let id = store.ajouter(article(10));
        let err = store
            .enregistrer_mouvement(&id, mouvement(TypeMouvement::Entree, 0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.mouvements_de(&id).is_empty());
    }

    #[test]
    fn test_suppression_cascade_mouvements() {
        let mut store = StockStore::default();
        let id = store.ajouter(article(10));
        store
            .enregistrer_mouvement(&id, mouvement(TypeMouvement::Sortie, 3))
            .unwrap();
        store.supprimer(&id).unwrap();
        assert!(store.mouvements_de(&id).is_empty());
        assert_eq!(store.nombre(), 0);
    }
}
