use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::{StatutVehicule, Vehicle};
use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::{date::format_date, format::format_montant};

pub struct ParcAutoView {
    search: String,
}

impl ParcAutoView {
    pub fn new() -> Self {
        Self { search: String::new() }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        let symbole = erp.symbole_monetaire().to_string();

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} Parc automobile", Icons::VEHICULE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("{} Nouveau véhicule", Icons::ADD)).clicked() {
                        state.open_vehicle_form(None);
                    }
                });
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("🔍");
                ui.add(
                    egui::TextEdit::singleline(&mut self.search)
                        .hint_text("Rechercher une marque ou une immatriculation...")
                        .desired_width(260.0),
                );
            });

            ui.add_space(8.0);

            let recherche = self.search.to_lowercase();
            let mut vehicules: Vec<Vehicle> = erp
                .parcauto
                .tous()
                .iter()
                .filter(|v| {
                    recherche.is_empty()
                        || v.designation().to_lowercase().contains(&recherche)
                        || v.immatriculation.to_lowercase().contains(&recherche)
                })
                .cloned()
                .collect();
            vehicules.sort_by(|a, b| a.marque.cmp(&b.marque).then(a.modele.cmp(&b.modele)));

            ui.label(
                RichText::new(format!("{} véhicules", vehicules.len()))
                    .small()
                    .color(Colors::TEXT_SECONDARY),
            );
            ui.separator();

            if vehicules.is_empty() {
                ui.label(RichText::new("Aucun véhicule").color(Colors::TEXT_MUTED));
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::remainder())
                    .column(Column::initial(120.0))
                    .column(Column::initial(70.0))
                    .column(Column::initial(100.0))
                    .column(Column::initial(110.0))
                    .column(Column::initial(130.0))
                    .column(Column::initial(100.0))
                    .column(Column::initial(140.0))
                    .header(22.0, |mut header| {
                        header.col(|ui| { ui.strong("Véhicule"); });
                        header.col(|ui| { ui.strong("Immatriculation"); });
                        header.col(|ui| { ui.strong("Année"); });
                        header.col(|ui| { ui.strong("Kilométrage"); });
                        header.col(|ui| { ui.strong("Acquisition"); });
                        header.col(|ui| { ui.strong("Coût maintenance"); });
                        header.col(|ui| { ui.strong("Statut"); });
                        header.col(|ui| { ui.strong("Actions"); });
                    })
                    .body(|mut body| {
                        for vehicule in &vehicules {
                            let cout = erp.parcauto.cout_maintenance_de(&vehicule.id);
                            body.row(24.0, |mut row| {
                                row.col(|ui| { ui.label(RichText::new(vehicule.designation()).strong()); });
                                row.col(|ui| { ui.label(&vehicule.immatriculation); });
                                row.col(|ui| { ui.label(vehicule.annee.to_string()); });
                                row.col(|ui| { ui.label(format!("{} km", vehicule.kilometrage)); });
                                row.col(|ui| { ui.label(format_date(&vehicule.date_acquisition)); });
                                row.col(|ui| { ui.label(format_montant(cout, &symbole)); });
                                row.col(|ui| {
                                    let color = match vehicule.statut {
                                        StatutVehicule::Actif => Colors::SUCCESS,
                                        StatutVehicule::EnMaintenance => Colors::WARNING,
                                        StatutVehicule::HorsService => Colors::ERROR,
                                    };
                                    ui.colored_label(color, vehicule.statut.label());
                                });
                                row.col(|ui| {
                                    ui.horizontal(|ui| {
                                        if ui
                                            .small_button(Icons::WRENCH)
                                            .on_hover_text("Ajouter une maintenance")
                                            .clicked()
                                        {
                                            state.open_maintenance_form(&vehicule.id);
                                        }
                                        if ui
                                            .small_button(Icons::HISTORY)
                                            .on_hover_text("Historique des maintenances")
                                            .clicked()
                                        {
                                            state.selected_vehicle_id = Some(vehicule.id.clone());
                                            state.show_maintenance_history = true;
                                        }
                                        if ui.small_button(Icons::EDIT).clicked() {
                                            state.open_vehicle_form(Some(vehicule.id.clone()));
                                        }
                                        if ui.small_button(Icons::DELETE).clicked() {
                                            state.show_confirm(
                                                &format!(
                                                    "Supprimer {} et ses maintenances ?",
                                                    vehicule.designation()
                                                ),
                                                ConfirmAction::DeleteVehicle(vehicule.id.clone()),
                                            );
                                        }
                                    });
                                });
                            });
                        }
                    });
            });
        });
    }
}
