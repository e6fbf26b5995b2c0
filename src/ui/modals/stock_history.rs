use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::TypeMouvement;
use crate::store::Erp;
use crate::ui::{state::AppState, theme::Colors};
use crate::utils::date::format_date;

/// Historique des mouvements d'un article, ordre chronologique d'enregistrement.
pub struct StockHistoryDialog;

impl StockHistoryDialog {
    /// Retourne true si le dialogue doit se fermer
    pub fn show(ctx: &egui::Context, state: &mut AppState, erp: &Erp) -> bool {
        let Some(item_id) = state.selected_item_id.clone() else {
            return true;
        };
        let Some(item) = erp.stock.par_id(&item_id) else {
            return true;
        };

        let mut should_close = false;
        let mouvements = erp.stock.mouvements_de(&item_id);

        egui::Window::new(format!("Historique — {}", item.nom))
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(440.0);

                ui.label(
                    RichText::new(format!("Quantité actuelle : {}", item.quantite_actuelle))
                        .strong(),
                );

                ui.add_space(8.0);

                if mouvements.is_empty() {
                    ui.label(RichText::new("Aucun mouvement enregistré").color(Colors::TEXT_MUTED));
                } else {
                    egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                        TableBuilder::new(ui)
                            .striped(true)
                            .column(Column::initial(90.0))
                            .column(Column::initial(70.0))
                            .column(Column::initial(70.0))
                            .column(Column::remainder())
                            .header(22.0, |mut header| {
                                header.col(|ui| { ui.strong("Date"); });
                                header.col(|ui| { ui.strong("Type"); });
                                header.col(|ui| { ui.strong("Quantité"); });
                                header.col(|ui| { ui.strong("Raison"); });
                            })
                            .body(|mut body| {
                                for mouvement in &mouvements {
                                    body.row(24.0, |mut row| {
                                        row.col(|ui| {
                                            ui.label(format_date(&mouvement.date));
                                        });
                                        row.col(|ui| {
                                            let color = match mouvement.type_mouvement {
                                                TypeMouvement::Entree => Colors::SUCCESS,
                                                TypeMouvement::Sortie => Colors::ERROR,
                                            };
                                            ui.colored_label(
                                                color,
                                                mouvement.type_mouvement.label(),
                                            );
                                        });
                                        row.col(|ui| {
                                            let signe = match mouvement.type_mouvement {
                                                TypeMouvement::Entree => "+",
                                                TypeMouvement::Sortie => "-",
                                            };
                                            ui.label(format!("{}{}", signe, mouvement.quantite));
                                        });
                                        row.col(|ui| {
                                            ui.label(&mouvement.raison);
                                        });
                                    });
                                }
                            });
                    });
                }

                ui.add_space(12.0);

                if ui.button("Fermer").clicked() {
                    should_close = true;
                }
            });

        if should_close {
            state.selected_item_id = None;
        }

        should_close
    }
}
