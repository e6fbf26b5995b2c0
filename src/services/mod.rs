//! Logique métier transverse, hors interface et hors stores.

pub mod bulletin;
pub mod paie;

pub use bulletin::{calculer_bulletin, Bulletin, LigneBulletin};
