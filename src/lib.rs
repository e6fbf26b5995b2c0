//! GESTION BKS - Tableau de bord de gestion d'entreprise
//!
//! Application de bureau native construite avec Rust et egui.
//! L'état vit entièrement en mémoire : chaque lancement repart des
//! valeurs par défaut.

pub mod models;
pub mod services;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports
pub use models::*;
pub use store::Erp;
pub use ui::{AppState, View};
