use egui::{self, Color32, RichText};

use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
    View,
};
use crate::utils::format::format_montant;

pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        ui.vertical(|ui| {
            ui.heading(format!("{} Bienvenue sur GESTION BKS", Icons::DASHBOARD));
            ui.label(
                RichText::new(&erp.settings().company_name)
                    .color(Colors::TEXT_SECONDARY),
            );

            ui.add_space(16.0);

            // Synthèse financière
            let symbole = erp.symbole_monetaire().to_string();
            let revenus = erp.finance.total_revenus();
            let depenses = erp.finance.total_depenses();
            let solde = erp.finance.solde();
            let solde_color = if solde < 0.0 { Colors::ERROR } else { Colors::SUCCESS };

            ui.horizontal(|ui| {
                stat_card(ui, Icons::FINANCE, "Revenus", &format_montant(revenus, &symbole), Colors::SUCCESS);
                ui.add_space(8.0);
                stat_card(ui, Icons::FINANCE, "Dépenses", &format_montant(depenses, &symbole), Colors::ERROR);
                ui.add_space(8.0);
                stat_card(ui, Icons::DASHBOARD, "Solde", &format_montant(solde, &symbole), solde_color);
            });

            ui.add_space(24.0);

            ui.heading("Modules");
            ui.add_space(8.0);

            let cards = [
                (View::Finance, Icons::FINANCE, "Finance", format!("{} transactions", erp.finance.nombre())),
                (View::Personnel, Icons::PERSONNEL, "Personnel", format!("{} employés", erp.personnel.nombre())),
                (View::Stock, Icons::STOCK, "Stock", format!("{} articles", erp.stock.nombre())),
                (View::Immobilier, Icons::IMMOBILIER, "Immobilier", format!("{} biens", erp.immobilier.nombre())),
                (View::ParcAuto, Icons::VEHICULE, "Parc auto", format!("{} véhicules", erp.parcauto.nombre())),
                (View::School, Icons::ECOLE, "École", format!("{} classes", erp.school.classes().len())),
                (
                    View::DevisFactures,
                    Icons::DEVIS,
                    "Devis & Factures",
                    format!("{} devis, {} factures", erp.devis.nombre_devis(), erp.devis.nombre_factures()),
                ),
                (View::Configuration, Icons::SETTINGS, "Configuration", String::new()),
            ];

            // Deux rangées de quatre cartes
            for row in cards.chunks(4) {
                ui.horizontal(|ui| {
                    for (view, icon, title, detail) in row {
                        if module_card(ui, icon, title, detail) {
                            state.navigate(*view);
                        }
                        ui.add_space(8.0);
                    }
                });
                ui.add_space(8.0);
            }
        });
    }
}

fn stat_card(ui: &mut egui::Ui, icon: &str, label: &str, value: &str, color: Color32) {
    egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(180.0);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(20.0));
                    ui.label(RichText::new(label).color(Colors::TEXT_SECONDARY));
                });
                ui.add_space(8.0);
                ui.label(RichText::new(value).size(22.0).strong().color(color));
            });
        });
}

/// Carte de module cliquable. Retourne true au clic.
fn module_card(ui: &mut egui::Ui, icon: &str, title: &str, detail: &str) -> bool {
    let response = egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(170.0);
            ui.set_min_height(70.0);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(24.0));
                    ui.label(RichText::new(title).strong());
                });
                if !detail.is_empty() {
                    ui.label(RichText::new(detail).small().color(Colors::TEXT_SECONDARY));
                }
            });
        });

    response.response.interact(egui::Sense::click()).clicked()
}
