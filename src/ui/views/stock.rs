use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::StockItem;
use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::format::format_montant;

/// Seuil sous lequel un article est signalé en stock faible
const SEUIL_STOCK_FAIBLE: u32 = 5;

pub struct StockView {
    search: String,
}

impl StockView {
    pub fn new() -> Self {
        Self { search: String::new() }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        let symbole = erp.symbole_monetaire().to_string();

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} Stock", Icons::STOCK));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("{} Nouvel article", Icons::ADD)).clicked() {
                        state.open_stock_item_form(None);
                    }
                });
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("🔍");
                ui.add(
                    egui::TextEdit::singleline(&mut self.search)
                        .hint_text("Rechercher un article...")
                        .desired_width(220.0),
                );
            });

            ui.add_space(8.0);

            let recherche = self.search.to_lowercase();
            let mut items: Vec<StockItem> = erp
                .stock
                .tous()
                .iter()
                .filter(|i| recherche.is_empty() || i.nom.to_lowercase().contains(&recherche))
                .cloned()
                .collect();
            items.sort_by(|a, b| a.nom.cmp(&b.nom));

            let en_alerte = items
                .iter()
                .filter(|i| i.quantite_actuelle < SEUIL_STOCK_FAIBLE)
                .count();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{} articles", items.len()))
                        .small()
                        .color(Colors::TEXT_SECONDARY),
                );
                if en_alerte > 0 {
                    ui.label(
                        RichText::new(format!("⚠ {} en stock faible", en_alerte))
                            .small()
                            .color(Colors::WARNING),
                    );
                }
            });
            ui.separator();

            if items.is_empty() {
                ui.label(RichText::new("Aucun article").color(Colors::TEXT_MUTED));
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::remainder())
                    .column(Column::initial(80.0))
                    .column(Column::initial(130.0))
                    .column(Column::initial(130.0))
                    .column(Column::initial(170.0))
                    .header(22.0, |mut header| {
                        header.col(|ui| { ui.strong("Article"); });
                        header.col(|ui| { ui.strong("Quantité"); });
                        header.col(|ui| { ui.strong("Prix d'achat"); });
                        header.col(|ui| { ui.strong("Prix de vente"); });
                        header.col(|ui| { ui.strong("Actions"); });
                    })
                    .body(|mut body| {
                        for item in &items {
                            body.row(24.0, |mut row| {
                                row.col(|ui| {
                                    ui.vertical(|ui| {
                                        ui.label(RichText::new(&item.nom).strong());
                                        if !item.description.is_empty() {
                                            ui.label(
                                                RichText::new(&item.description)
                                                    .small()
                                                    .color(Colors::TEXT_MUTED),
                                            );
                                        }
                                    });
                                });
                                row.col(|ui| {
                                    let color = if item.quantite_actuelle < SEUIL_STOCK_FAIBLE {
                                        Colors::WARNING
                                    } else {
                                        Colors::SUCCESS
                                    };
                                    ui.colored_label(color, item.quantite_actuelle.to_string());
                                });
                                row.col(|ui| {
                                    ui.label(format_montant(item.prix_achat_unitaire, &symbole));
                                });
                                row.col(|ui| {
                                    ui.label(format_montant(item.prix_vente_unitaire, &symbole));
                                });
                                row.col(|ui| {
                                    ui.horizontal(|ui| {
                                        if ui
                                            .small_button(Icons::CONVERT)
                                            .on_hover_text("Entrée / sortie")
                                            .clicked()
                                        {
                                            state.open_stock_movement_form(&item.id);
                                        }
                                        if ui
                                            .small_button(Icons::HISTORY)
                                            .on_hover_text("Historique des mouvements")
                                            .clicked()
                                        {
                                            state.selected_item_id = Some(item.id.clone());
                                            state.show_stock_history = true;
                                        }
                                        if ui.small_button(Icons::EDIT).clicked() {
                                            state.open_stock_item_form(Some(item.id.clone()));
                                        }
                                        if ui.small_button(Icons::DELETE).clicked() {
                                            state.show_confirm(
                                                &format!(
                                                    "Supprimer « {} » et son historique ?",
                                                    item.nom
                                                ),
                                                ConfirmAction::DeleteStockItem(item.id.clone()),
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
