use egui::{self, RichText};

use crate::models::LineItem;
use crate::ui::theme::{Colors, Icons};
use crate::utils::format::{format_montant, nouvel_id};

/// Éditeur de lignes d'articles partagé par les formulaires de devis
/// et de facture : liste courante plus une ligne de saisie.
pub struct LineItemsEditor {
    items: Vec<LineItem>,
    description: String,
    quantite: String,
    prix_unitaire: String,
    error_message: Option<String>,
}

impl LineItemsEditor {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            description: String::new(),
            quantite: "1".to_string(),
            prix_unitaire: String::new(),
            error_message: None,
        }
    }

    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn reset(&mut self) {
        self.items.clear();
        self.description.clear();
        self.quantite = "1".to_string();
        self.prix_unitaire.clear();
        self.error_message = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, symbole: &str) {
        ui.label(RichText::new("Articles").strong());
        ui.add_space(4.0);

        // Lignes existantes
        let mut a_supprimer: Option<usize> = None;
        for (index, item) in self.items.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} × {} — {}",
                    item.quantite,
                    item.description,
                    format_montant(item.prix_total, symbole)
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button(Icons::DELETE).clicked() {
                        a_supprimer = Some(index);
                    }
                });
            });
        }
        if let Some(index) = a_supprimer {
            self.items.remove(index);
        }

        if self.items.is_empty() {
            ui.label(RichText::new("Aucun article").small().color(Colors::TEXT_MUTED));
        }

        ui.add_space(8.0);

        // Ligne de saisie
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.description)
                    .hint_text("Description")
                    .desired_width(160.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.quantite)
                    .hint_text("Qté")
                    .desired_width(40.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.prix_unitaire)
                    .hint_text("Prix unitaire")
                    .desired_width(90.0),
            );
            if ui.button(format!("{} Ajouter", Icons::ADD)).clicked() {
                match self.ajouter_ligne() {
                    Ok(()) => self.error_message = None,
                    Err(message) => self.error_message = Some(message),
                }
            }
        });

        if let Some(ref error) = self.error_message {
            ui.label(RichText::new(error).small().color(Colors::ERROR));
        }
    }

    fn ajouter_ligne(&mut self) -> Result<(), String> {
        let quantite: u32 = self
            .quantite
            .trim()
            .parse()
            .map_err(|_| "La quantité doit être un entier positif".to_string())?;
        let prix_unitaire: f64 = self
            .prix_unitaire
            .trim()
            .parse()
            .map_err(|_| "Prix unitaire invalide".to_string())?;

        let item = LineItem {
            id: nouvel_id(),
            description: self.description.trim().to_string(),
            quantite,
            prix_unitaire,
            prix_total: LineItem::calculer_total(quantite, prix_unitaire),
        };
        item.valider().map_err(|e| e.to_string())?;

        self.items.push(item);
        self.description.clear();
        self.quantite = "1".to_string();
        self.prix_unitaire.clear();
        Ok(())
    }
}
