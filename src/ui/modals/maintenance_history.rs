use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::store::Erp;
use crate::ui::{state::AppState, theme::Colors};
use crate::utils::{date::format_date, format::format_montant};

/// Historique des maintenances d'un véhicule, avec coût cumulé.
pub struct MaintenanceHistoryDialog;

impl MaintenanceHistoryDialog {
    /// Retourne true si le dialogue doit se fermer
    pub fn show(ctx: &egui::Context, state: &mut AppState, erp: &Erp) -> bool {
        let Some(vehicle_id) = state.selected_vehicle_id.clone() else {
            return true;
        };
        let Some(vehicule) = erp.parcauto.par_id(&vehicle_id) else {
            return true;
        };

        let mut should_close = false;
        let maintenances = erp.parcauto.maintenances_de(&vehicle_id);
        let cout_total = erp.parcauto.cout_maintenance_de(&vehicle_id);
        let symbole = erp.symbole_monetaire();

        egui::Window::new(format!("Maintenances — {}", vehicule.designation()))
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(460.0);

                if maintenances.is_empty() {
                    ui.label(
                        RichText::new("Aucune maintenance enregistrée").color(Colors::TEXT_MUTED),
                    );
                } else {
                    egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                        TableBuilder::new(ui)
                            .striped(true)
                            .column(Column::initial(90.0))
                            .column(Column::initial(120.0))
                            .column(Column::initial(110.0))
                            .column(Column::remainder())
                            .header(22.0, |mut header| {
                                header.col(|ui| { ui.strong("Date"); });
                                header.col(|ui| { ui.strong("Type"); });
                                header.col(|ui| { ui.strong("Coût"); });
                                header.col(|ui| { ui.strong("Description"); });
                            })
                            .body(|mut body| {
                                for maintenance in &maintenances {
                                    body.row(24.0, |mut row| {
                                        row.col(|ui| {
                                            ui.label(format_date(&maintenance.date));
                                        });
                                        row.col(|ui| {
                                            ui.label(&maintenance.type_maintenance);
                                        });
                                        row.col(|ui| {
                                            ui.label(format_montant(maintenance.cout, symbole));
                                        });
                                        row.col(|ui| {
                                            ui.label(&maintenance.description);
                                        });
                                    });
                                }
                            });
                    });

                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!(
                            "Coût total : {}",
                            format_montant(cout_total, symbole)
                        ))
                        .strong(),
                    );
                }

                ui.add_space(12.0);

                if ui.button("Fermer").clicked() {
                    should_close = true;
                }
            });

        if should_close {
            state.selected_vehicle_id = None;
        }

        should_close
    }
}
