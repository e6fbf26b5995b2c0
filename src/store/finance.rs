use crate::models::{Transaction, TypeTransaction};
use crate::utils::format::nouvel_id;
use crate::utils::{AppError, AppResult};

/// Caisse : revenus et dépenses, en mémoire uniquement
#[derive(Debug, Default)]
pub struct FinanceStore {
    transactions: Vec<Transaction>,
}

impl FinanceStore {
    pub fn ajouter(&mut self, mut transaction: Transaction) -> String {
        transaction.id = nouvel_id();
        let id = transaction.id.clone();
        self.transactions.push(transaction);
        id
    }

    /// Remplacement intégral, l'identifiant est conservé
    pub fn modifier(&mut self, id: &str, mut remplacement: Transaction) -> AppResult<()> {
        let existante = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("transaction {id}")))?;
        remplacement.id = existante.id.clone();
        *existante = remplacement;
        Ok(())
    }

    pub fn supprimer(&mut self, id: &str) -> AppResult<()> {
        let avant = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == avant {
            return Err(AppError::not_found(format!("transaction {id}")));
        }
        Ok(())
    }

    pub fn par_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn revenus(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.type_transaction == TypeTransaction::Revenu)
    }

    pub fn depenses(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.type_transaction == TypeTransaction::Depense)
    }

    pub fn total_revenus(&self) -> f64 {
        self.revenus().map(|t| t.prix_total).sum()
    }

    pub fn total_depenses(&self) -> f64 {
        self.depenses().map(|t| t.prix_total).sum()
    }

    /// Point de caisse : revenus − dépenses
    pub fn solde(&self) -> f64 {
        self.total_revenus() - self.total_depenses()
    }

    pub fn nombre(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn transaction(designation: &str, prix: f64, nombre: u32, t: TypeTransaction) -> Transaction {
        Transaction {
            id: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            designation: designation.into(),
            prix_unitaire: prix,
            nombre,
            prix_total: Transaction::calculer_total(prix, nombre),
            type_transaction: t,
        }
    }

    #[test]
    fn test_solde() {
        let mut store = FinanceStore::default();
        store.ajouter(transaction("Vente", 100.0, 3, TypeTransaction::Revenu));
        store.ajouter(transaction("Achat", 50.0, 2, TypeTransaction::Depense));
        assert_eq!(store.total_revenus(), 300.0);
        assert_eq!(store.total_depenses(), 100.0);
        assert_eq!(store.solde(), 200.0);
    }

    #[test]
    fn test_modifier_conserve_id_et_les_autres() {
        let mut store = FinanceStore::default();
        let id_a = store.ajouter(transaction("A", 10.0, 1, TypeTransaction::Revenu));
        let id_b = store.ajouter(transaction("B", 20.0, 1, TypeTransaction::Revenu));

        // Resoumission à l'identique : longueur et autres enregistrements intacts
        let inchangee = store.par_id(&id_a).unwrap().clone();
        store.modifier(&id_a, inchangee).unwrap();
        assert_eq!(store.nombre(), 2);
        assert_eq!(store.par_id(&id_b).unwrap().designation, "B");
        assert_eq!(store.par_id(&id_a).unwrap().id, id_a);
    }

    #[test]
    fn test_supprimer_inconnu() {
        let mut store = FinanceStore::default();
        assert!(store.supprimer("xyz").is_err());
    }
}
