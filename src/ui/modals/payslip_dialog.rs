use egui::{self, RichText};

use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::format::format_montant;

/// Aperçu d'une fiche de paie générée. Lecture seule : la fiche est déjà
/// archivée au moment de l'ouverture.
pub struct PaySlipDialog;

impl PaySlipDialog {
    /// Retourne true si le dialogue doit se fermer
    pub fn show(ctx: &egui::Context, state: &mut AppState, erp: &Erp) -> bool {
        let Some(fiche) = state.fiche_affichee.clone() else {
            return true;
        };

        let employe = erp.personnel.par_id(&fiche.personnel_id).cloned();
        let symbole = erp.symbole_monetaire();
        let mut should_close = false;
        let mut export_demande = false;

        egui::Window::new("Fiche de paie")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(360.0);

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&erp.settings().company_name).strong());
                    ui.label(
                        RichText::new(&erp.settings().company_address)
                            .small()
                            .color(Colors::TEXT_SECONDARY),
                    );
                });

                ui.add_space(8.0);
                ui.separator();

                egui::Grid::new("payslip_grid")
                    .num_columns(2)
                    .spacing([24.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Employé :");
                        match employe {
                            Some(ref e) => {
                                ui.label(RichText::new(e.nom_complet()).strong());
                            }
                            None => {
                                ui.label(RichText::new("(employé supprimé)").color(Colors::TEXT_MUTED));
                            }
                        }
                        ui.end_row();

                        if let Some(ref e) = employe {
                            ui.label("Poste :");
                            ui.label(&e.poste);
                            ui.end_row();
                        }

                        ui.label("Mois :");
                        ui.label(&fiche.mois);
                        ui.end_row();

                        ui.label("Salaire brut :");
                        ui.label(format_montant(fiche.salaire_brut, symbole));
                        ui.end_row();

                        ui.label("Cotisations sociales (10 %) :");
                        ui.colored_label(
                            Colors::ERROR,
                            format!("- {}", format_montant(fiche.cotisations_sociales, symbole)),
                        );
                        ui.end_row();

                        ui.label("Impôts (5 %) :");
                        ui.colored_label(
                            Colors::ERROR,
                            format!("- {}", format_montant(fiche.impots, symbole)),
                        );
                        ui.end_row();

                        ui.label("Salaire net :");
                        ui.label(
                            RichText::new(format_montant(fiche.salaire_net, symbole))
                                .strong()
                                .color(Colors::SUCCESS),
                        );
                        ui.end_row();
                    });

                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui.button("Fermer").clicked() {
                        should_close = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(format!("{} Exporter en PDF", Icons::PDF)).clicked() {
                            export_demande = true;
                        }
                    });
                });
            });

        if export_demande {
            state.show_info("Export PDF bientôt disponible");
        }
        if should_close {
            state.fiche_affichee = None;
            state.selected_personnel_id = None;
        }

        should_close
    }
}
