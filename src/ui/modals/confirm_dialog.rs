use egui::{self, RichText};

use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
    View,
};

pub struct ConfirmDialog;

impl ConfirmDialog {
    /// Affiche le dialogue et retourne Some(true) si l'action a été confirmée
    pub fn show(ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> Option<bool> {
        if !state.show_confirm_dialog {
            return None;
        }

        let mut result = None;

        egui::Window::new("Confirmer")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(Icons::DELETE).size(32.0).color(Colors::WARNING));
                    ui.add_space(8.0);
                    ui.label(&state.confirm_dialog_message);
                });

                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui.button("Annuler").clicked() {
                        state.close_confirm();
                        result = Some(false);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_button =
                            ui.button(RichText::new("Confirmer").color(Colors::ERROR));

                        if confirm_button.clicked() {
                            if let Some(action) = state.confirm_dialog_action.clone() {
                                Self::execute_action(&action, state, erp);
                            }
                            state.close_confirm();
                            result = Some(true);
                        }
                    });
                });
            });

        result
    }

    fn execute_action(action: &ConfirmAction, state: &mut AppState, erp: &mut Erp) {
        let outcome = match action {
            ConfirmAction::DeleteTransaction(id) => {
                erp.finance.supprimer(id).map(|_| "Transaction supprimée")
            }
            ConfirmAction::DeletePersonnel(id) => {
                erp.personnel.supprimer(id).map(|_| "Employé supprimé")
            }
            ConfirmAction::DeleteStockItem(id) => {
                erp.stock.supprimer(id).map(|_| "Article supprimé")
            }
            ConfirmAction::DeleteProperty(id) => {
                erp.immobilier.supprimer(id).map(|_| "Bien supprimé")
            }
            ConfirmAction::DeleteVehicle(id) => {
                erp.parcauto.supprimer(id).map(|_| "Véhicule supprimé")
            }
            ConfirmAction::DeleteClass(id) => {
                let res = erp.school.supprimer_classe(id).map(|_| "Classe supprimée");
                if res.is_ok() && state.selected_class_id.as_deref() == Some(id.as_str()) {
                    state.selected_class_id = None;
                    state.navigate(View::School);
                }
                res
            }
            ConfirmAction::DeleteStudent(id) => {
                let res = erp.school.supprimer_eleve(id).map(|_| "Élève supprimé");
                if res.is_ok() && state.selected_student_id.as_deref() == Some(id.as_str()) {
                    state.selected_student_id = None;
                    state.navigate(View::ClassDetail);
                }
                res
            }
            ConfirmAction::DeleteSubject(id) => {
                erp.school.supprimer_matiere(id).map(|_| "Matière supprimée")
            }
            ConfirmAction::DeleteGrade(id) => {
                erp.school.supprimer_note(id).map(|_| "Note supprimée")
            }
            ConfirmAction::DeleteDevis(id) => {
                erp.devis.supprimer_devis(id).map(|_| "Devis supprimé")
            }
            ConfirmAction::DeleteFacture(id) => {
                erp.devis.supprimer_facture(id).map(|_| "Facture supprimée")
            }
        };

        match outcome {
            Ok(message) => state.show_success(message),
            Err(e) => state.show_error(&format!("Suppression impossible : {}", e)),
        }
    }
}
