//! Génération des fiches de paie.
//!
//! Règle fixe, non configurable : cotisations sociales 10 % du brut,
//! impôts 5 % du brut, le brut étant le salaire de base (ni prime ni
//! heures supplémentaires).

use chrono::Utc;

use crate::models::{FicheDePaie, Personnel};
use crate::utils::date::format_mois;
use crate::utils::format::nouvel_id;

const TAUX_COTISATIONS: f64 = 0.10;
const TAUX_IMPOTS: f64 = 0.05;

/// Calcule et date une fiche de paie pour le mois courant.
/// Chaque appel produit un instantané neuf et indépendant.
pub fn generer_fiche(personnel: &Personnel) -> FicheDePaie {
    let aujourd_hui = Utc::now().date_naive();
    let salaire_brut = personnel.salaire_de_base;
    let cotisations_sociales = salaire_brut * TAUX_COTISATIONS;
    let impots = salaire_brut * TAUX_IMPOTS;

    FicheDePaie {
        id: nouvel_id(),
        personnel_id: personnel.id.clone(),
        mois: format_mois(aujourd_hui),
        salaire_brut,
        cotisations_sociales,
        impots,
        salaire_net: salaire_brut - cotisations_sociales - impots,
        date_emission: aujourd_hui,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employe(salaire: f64) -> Personnel {
        Personnel {
            id: "p1".into(),
            nom: "Bamba".into(),
            prenoms: "Issouf".into(),
            date_naissance: NaiveDate::from_ymd_opt(1980, 2, 2).unwrap(),
            email: "i.bamba@bks.com".into(),
            contact: "0500000000".into(),
            date_embauche: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            date_fin_contrat: None,
            salaire_de_base: salaire,
            poste: "Magasinier".into(),
        }
    }

    #[test]
    fn test_deductions() {
        // 100 000 brut -> 10 000 de cotisations, 5 000 d'impôts, 85 000 net
        let fiche = generer_fiche(&employe(100_000.0));
        assert_eq!(fiche.salaire_brut, 100_000.0);
        assert_eq!(fiche.cotisations_sociales, 10_000.0);
        assert_eq!(fiche.impots, 5_000.0);
        assert_eq!(fiche.salaire_net, 85_000.0);
    }

    #[test]
    fn test_salaire_nul() {
        let fiche = generer_fiche(&employe(0.0));
        assert_eq!(fiche.salaire_net, 0.0);
    }

    #[test]
    fn test_instantanes_independants() {
        let employe = employe(200_000.0);
        let f1 = generer_fiche(&employe);
        let f2 = generer_fiche(&employe);
        assert_ne!(f1.id, f2.id);
        assert_eq!(f1.mois, f2.mois);
        assert_eq!(f1.salaire_net, f2.salaire_net);
    }
}
