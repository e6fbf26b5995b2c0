use serde::{Deserialize, Serialize};

/// Type de bien immobilier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeBien {
    #[default]
    Appartement,
    Maison,
    Bureau,
    Terrain,
    LocalCommercial,
    Autre,
}

impl TypeBien {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Appartement => "Appartement",
            Self::Maison => "Maison",
            Self::Bureau => "Bureau",
            Self::Terrain => "Terrain",
            Self::LocalCommercial => "Local commercial",
            Self::Autre => "Autre",
        }
    }

    pub fn all() -> &'static [TypeBien] {
        &[
            Self::Appartement,
            Self::Maison,
            Self::Bureau,
            Self::Terrain,
            Self::LocalCommercial,
            Self::Autre,
        ]
    }
}

/// Statut d'occupation d'un bien
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatutBien {
    #[default]
    Disponible,
    Loue,
    Vendu,
    EnMaintenance,
}

impl StatutBien {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Disponible => "Disponible",
            Self::Loue => "Loué",
            Self::Vendu => "Vendu",
            Self::EnMaintenance => "En maintenance",
        }
    }

    pub fn all() -> &'static [StatutBien] {
        &[Self::Disponible, Self::Loue, Self::Vendu, Self::EnMaintenance]
    }
}

/// Bien du patrimoine immobilier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
    pub type_bien: TypeBien,
    pub nombre_pieces: u32,
    /// Surface en m²
    pub surface: f64,
    pub prix_achat: f64,
    pub prix_location_mensuel: Option<f64>,
    pub statut: StatutBien,
    pub description: Option<String>,
}

impl Property {
    pub fn valider(&self) -> Result<(), PropertyValidationError> {
        if self.adresse.trim().is_empty() {
            return Err(PropertyValidationError::AdresseRequise);
        }
        if self.ville.trim().is_empty() {
            return Err(PropertyValidationError::VilleRequise);
        }
        if self.nombre_pieces < 1 {
            return Err(PropertyValidationError::NombrePiecesInvalide);
        }
        if self.surface <= 0.0 {
            return Err(PropertyValidationError::SurfaceInvalide);
        }
        if self.prix_achat < 0.0 {
            return Err(PropertyValidationError::PrixAchatNegatif);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PropertyValidationError {
    #[error("L'adresse est requise.")]
    AdresseRequise,
    #[error("La ville est requise.")]
    VilleRequise,
    #[error("Le nombre de pièces doit être au moins 1.")]
    NombrePiecesInvalide,
    #[error("La surface doit être positive.")]
    SurfaceInvalide,
    #[error("Le prix d'achat doit être positif ou nul.")]
    PrixAchatNegatif,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bien() -> Property {
        Property {
            id: "b1".into(),
            adresse: "12 Boulevard Latrille".into(),
            ville: "Abidjan".into(),
            code_postal: "01".into(),
            type_bien: TypeBien::Appartement,
            nombre_pieces: 3,
            surface: 85.0,
            prix_achat: 45_000_000.0,
            prix_location_mensuel: Some(350_000.0),
            statut: StatutBien::Loue,
            description: None,
        }
    }

    #[test]
    fn test_validation() {
        assert!(bien().valider().is_ok());

        let mut b = bien();
        b.surface = 0.0;
        assert!(matches!(
            b.valider(),
            Err(PropertyValidationError::SurfaceInvalide)
        ));

        let mut b = bien();
        b.nombre_pieces = 0;
        assert!(matches!(
            b.valider(),
            Err(PropertyValidationError::NombrePiecesInvalide)
        ));
    }
}
