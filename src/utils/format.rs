//! Formatage des montants et génération d'identifiants.

use uuid::Uuid;

/// Nouvel identifiant aléatoire pour un enregistrement
pub fn nouvel_id() -> String {
    Uuid::new_v4().to_string()
}

/// Formate un montant pour l'affichage : 2 décimales + symbole monétaire.
/// Les valeurs ne sont jamais arrondies au stockage, uniquement à l'affichage.
pub fn format_montant(montant: f64, symbole: &str) -> String {
    format!("{:.2} {}", montant, symbole)
}

/// Formate un pourcentage stocké comme fraction (0.18 -> "18 %")
pub fn format_taux(taux: f64) -> String {
    format!("{} %", taux * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_montant() {
        assert_eq!(format_montant(1500.0, "FCFA"), "1500.00 FCFA");
        assert_eq!(format_montant(249.999, "FCFA"), "250.00 FCFA");
        assert_eq!(format_montant(0.0, "€"), "0.00 €");
    }

    #[test]
    fn test_format_taux() {
        assert_eq!(format_taux(0.18), "18 %");
        assert_eq!(format_taux(0.0), "0 %");
    }

    #[test]
    fn test_nouvel_id_unique() {
        assert_ne!(nouvel_id(), nouvel_id());
    }
}
