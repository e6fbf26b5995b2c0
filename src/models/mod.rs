pub mod config;
pub mod devis;
pub mod finance;
pub mod immobilier;
pub mod parcauto;
pub mod personnel;
pub mod school;
pub mod settings;
pub mod stock;

pub use config::*;
pub use devis::*;
pub use finance::*;
pub use immobilier::*;
pub use parcauto::*;
pub use personnel::*;
pub use school::*;
pub use settings::*;
pub use stock::*;
