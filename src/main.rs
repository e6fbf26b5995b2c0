//! GESTION BKS - Point d'entrée
//!
//! Tableau de bord de gestion d'entreprise : finance, personnel, stock,
//! immobilier, parc automobile, école, devis et factures.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)]

mod app;
mod models;
mod services;
mod store;
mod ui;
mod utils;

use app::GestionBksApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialisation du logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Démarrage de GESTION BKS v{}", env!("CARGO_PKG_VERSION"));

    let settings = models::AppSettings::load();

    // Paramètres de fenêtre
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("GESTION BKS v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_app_id("gestion-bks"),
        ..Default::default()
    };

    eframe::run_native(
        "GESTION BKS",
        options,
        Box::new(|cc| Ok(Box::new(GestionBksApp::new(cc)))),
    )
}
