use egui::{self, RichText};

use crate::models::{StockMovement, TypeMouvement};
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::date::{format_date, parse_date};

pub struct StockMovementFormModal {
    type_mouvement: TypeMouvement,
    date: String,
    quantite: String,
    raison: String,
    error_message: Option<String>,
    loaded: bool,
}

impl StockMovementFormModal {
    pub fn new() -> Self {
        Self {
            type_mouvement: TypeMouvement::Entree,
            date: String::new(),
            quantite: String::new(),
            raison: String::new(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let Some(item_id) = state.selected_item_id.clone() else {
            return true;
        };
        let Some(item) = erp.stock.par_id(&item_id).cloned() else {
            return true;
        };

        if !self.loaded {
            self.type_mouvement = TypeMouvement::Entree;
            self.date = format_date(&chrono::Utc::now().date_naive());
            self.quantite = "1".to_string();
            self.raison.clear();
            self.loaded = true;
        }

        let mut should_close = false;

        egui::Window::new("Mouvement de stock")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(380.0);

                ui.label(
                    RichText::new(format!(
                        "{} — quantité actuelle : {}",
                        item.nom, item.quantite_actuelle
                    ))
                    .strong(),
                );

                ui.add_space(8.0);

                egui::Grid::new("stock_movement_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Type :");
                        ui.horizontal(|ui| {
                            ui.selectable_value(
                                &mut self.type_mouvement,
                                TypeMouvement::Entree,
                                TypeMouvement::Entree.label(),
                            );
                            ui.selectable_value(
                                &mut self.type_mouvement,
                                TypeMouvement::Sortie,
                                TypeMouvement::Sortie.label(),
                            );
                        });
                        ui.end_row();

                        ui.label("Date :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.date).desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
                        });
                        ui.end_row();

                        ui.label("Quantité :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.quantite).desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Raison :");
                        ui.text_edit_singleline(&mut self.raison);
                        ui.end_row();
                    });

                if let Some(ref error) = self.error_message {
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).color(Colors::ERROR));
                }

                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui.button("Annuler").clicked() {
                        self.reset();
                        should_close = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(format!("{} Enregistrer", Icons::SAVE)).clicked() {
                            match self.save(erp, &item_id) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Mouvement enregistré !");
                                }
                                Err(e) => {
                                    self.error_message = Some(e.to_string());
                                }
                            }
                        }
                    });
                });
            });

        should_close
    }

    fn save(&mut self, erp: &mut Erp, item_id: &str) -> anyhow::Result<()> {
        let date = parse_date(self.date.trim())
            .ok_or_else(|| anyhow::anyhow!("Date invalide (utiliser AAAA-MM-JJ)"))?;
        let quantite: u32 = self
            .quantite
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("La quantité doit être un entier positif"))?;

        let mouvement = StockMovement {
            id: String::new(),
            item_id: item_id.to_string(),
            date,
            type_mouvement: self.type_mouvement,
            quantite,
            raison: self.raison.trim().to_string(),
        };

        // Un mouvement refusé ne modifie ni la quantité ni l'historique
        erp.stock.enregistrer_mouvement(item_id, mouvement)?;
        Ok(())
    }

    fn reset(&mut self) {
        self.type_mouvement = TypeMouvement::Entree;
        self.date.clear();
        self.quantite.clear();
        self.raison.clear();
        self.error_message = None;
        self.loaded = false;
    }
}
