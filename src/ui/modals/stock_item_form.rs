use egui::{self, RichText};

use crate::models::StockItem;
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};

#[derive(Default)]
struct StockItemFormData {
    nom: String,
    description: String,
    quantite_initiale: String,
    prix_achat_unitaire: String,
    prix_vente_unitaire: String,
}

pub struct StockItemFormModal {
    form_data: StockItemFormData,
    error_message: Option<String>,
    loaded: bool,
}

impl StockItemFormModal {
    pub fn new() -> Self {
        Self {
            form_data: StockItemFormData::default(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let mut should_close = false;

        if !self.loaded {
            if let Some(ref id) = state.editing_stock_item_id {
                if let Some(item) = erp.stock.par_id(id) {
                    self.form_data = StockItemFormData {
                        nom: item.nom.clone(),
                        description: item.description.clone(),
                        quantite_initiale: item.quantite_actuelle.to_string(),
                        prix_achat_unitaire: item.prix_achat_unitaire.to_string(),
                        prix_vente_unitaire: item.prix_vente_unitaire.to_string(),
                    };
                }
            } else {
                self.form_data = StockItemFormData {
                    quantite_initiale: "0".to_string(),
                    ..Default::default()
                };
            }
            self.loaded = true;
        }

        let editing = state.editing_stock_item_id.is_some();
        let title = if editing { "Modifier l'article" } else { "Nouvel article" };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(400.0);

                egui::Grid::new("stock_item_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Nom :");
                        ui.text_edit_singleline(&mut self.form_data.nom);
                        ui.end_row();

                        ui.label("Description :");
                        ui.text_edit_singleline(&mut self.form_data.description);
                        ui.end_row();

                        // La quantité d'un article existant évolue par mouvements
                        if !editing {
                            ui.label("Quantité initiale :");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form_data.quantite_initiale)
                                    .desired_width(100.0),
                            );
                            ui.end_row();
                        }

                        ui.label("Prix d'achat unitaire :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.prix_achat_unitaire)
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Prix de vente unitaire :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.prix_vente_unitaire)
                                .desired_width(100.0),
                        );
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
                            match self.save(state, erp) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Article enregistré !");
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

    fn save(&mut self, state: &AppState, erp: &mut Erp) -> anyhow::Result<()> {
        let prix_achat_unitaire: f64 = self
            .form_data
            .prix_achat_unitaire
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Prix d'achat invalide"))?;
        let prix_vente_unitaire: f64 = self
            .form_data
            .prix_vente_unitaire
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Prix de vente invalide"))?;

        if let Some(ref id) = state.editing_stock_item_id {
            let quantite_actuelle = erp
                .stock
                .par_id(id)
                .map(|i| i.quantite_actuelle)
                .unwrap_or(0);
            let item = StockItem {
                id: id.clone(),
                nom: self.form_data.nom.trim().to_string(),
                description: self.form_data.description.trim().to_string(),
                quantite_actuelle,
                prix_achat_unitaire,
                prix_vente_unitaire,
            };
            item.valider()?;
            erp.stock.modifier(id, item)?;
        } else {
            let quantite_actuelle: u32 = self
                .form_data
                .quantite_initiale
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("La quantité doit être un entier positif ou nul"))?;
            let item = StockItem {
                id: String::new(),
                nom: self.form_data.nom.trim().to_string(),
                description: self.form_data.description.trim().to_string(),
                quantite_actuelle,
                prix_achat_unitaire,
                prix_vente_unitaire,
            };
            item.valider()?;
            erp.stock.ajouter(item);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.form_data = StockItemFormData::default();
        self.error_message = None;
        self.loaded = false;
    }
}
