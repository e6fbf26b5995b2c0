use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employé de l'entreprise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personnel {
    pub id: String,
    pub nom: String,
    pub prenoms: String,
    pub date_naissance: NaiveDate,
    pub email: String,
    pub contact: String,
    pub date_embauche: NaiveDate,
    pub date_fin_contrat: Option<NaiveDate>,
    pub salaire_de_base: f64,
    pub poste: String,
}

impl Personnel {
    pub fn nom_complet(&self) -> String {
        format!("{} {}", self.nom, self.prenoms)
    }

    pub fn valider(&self) -> Result<(), PersonnelValidationError> {
        if self.nom.trim().is_empty() {
            return Err(PersonnelValidationError::NomRequis);
        }
        if self.prenoms.trim().is_empty() {
            return Err(PersonnelValidationError::PrenomsRequis);
        }
        if !email_plausible(&self.email) {
            return Err(PersonnelValidationError::EmailInvalide);
        }
        if self.contact.trim().is_empty() {
            return Err(PersonnelValidationError::ContactRequis);
        }
        if self.salaire_de_base < 0.0 {
            return Err(PersonnelValidationError::SalaireNegatif);
        }
        if self.poste.trim().is_empty() {
            return Err(PersonnelValidationError::PosteRequis);
        }
        Ok(())
    }
}

/// Un "@" encadré de texte, sans espace
fn email_plausible(email: &str) -> bool {
    let email = email.trim();
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domaine)) => !local.is_empty() && domaine.contains('.') && !domaine.starts_with('.'),
        None => false,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersonnelValidationError {
    #[error("Le nom est requis.")]
    NomRequis,
    #[error("Les prénoms sont requis.")]
    PrenomsRequis,
    #[error("L'email doit être valide.")]
    EmailInvalide,
    #[error("Le contact est requis.")]
    ContactRequis,
    #[error("Le salaire de base doit être positif.")]
    SalaireNegatif,
    #[error("Le poste est requis.")]
    PosteRequis,
}

/// Fiche de paie : instantané calculé, jamais modifié après coup.
/// Chaque génération produit un nouvel enregistrement indépendant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FicheDePaie {
    pub id: String,
    pub personnel_id: String,
    /// YYYY-MM
    pub mois: String,
    pub salaire_brut: f64,
    pub cotisations_sociales: f64,
    pub impots: f64,
    pub salaire_net: f64,
    pub date_emission: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employe() -> Personnel {
        Personnel {
            id: "p1".into(),
            nom: "Kouassi".into(),
            prenoms: "Aya Berthe".into(),
            date_naissance: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            email: "a.kouassi@bkssolutions.com".into(),
            contact: "+225 07 00 00 00 00".into(),
            date_embauche: NaiveDate::from_ymd_opt(2021, 9, 1).unwrap(),
            date_fin_contrat: None,
            salaire_de_base: 250_000.0,
            poste: "Comptable".into(),
        }
    }

    #[test]
    fn test_nom_complet() {
        assert_eq!(employe().nom_complet(), "Kouassi Aya Berthe");
    }

    #[test]
    fn test_validation() {
        assert!(employe().valider().is_ok());

        let mut p = employe();
        p.email = "pas un email".into();
        assert!(matches!(
            p.valider(),
            Err(PersonnelValidationError::EmailInvalide)
        ));

        let mut p = employe();
        p.salaire_de_base = -1.0;
        assert!(matches!(
            p.valider(),
            Err(PersonnelValidationError::SalaireNegatif)
        ));
    }

    #[test]
    fn test_email_plausible() {
        assert!(email_plausible("contact@bkssolutions.com"));
        assert!(!email_plausible("contact"));
        assert!(!email_plausible("@bks.com"));
        assert!(!email_plausible("a b@bks.com"));
    }
}
