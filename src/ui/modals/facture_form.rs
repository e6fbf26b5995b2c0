use egui::{self, RichText};

use crate::models::{calculer_totaux, Facture, StatutFacture};
use crate::store::Erp;
use crate::ui::{
    modals::line_items::LineItemsEditor,
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::{
    date::{format_date, parse_date},
    format::{format_montant, format_taux},
};

pub struct FactureFormModal {
    devis_id: Option<String>,
    client_name: String,
    date_emission: String,
    date_echeance: String,
    taux_tva: String,
    statut: StatutFacture,
    notes: String,
    items_editor: LineItemsEditor,
    error_message: Option<String>,
    loaded: bool,
}

impl FactureFormModal {
    pub fn new() -> Self {
        Self {
            devis_id: None,
            client_name: String::new(),
            date_emission: String::new(),
            date_echeance: String::new(),
            taux_tva: String::new(),
            statut: StatutFacture::NonPayee,
            notes: String::new(),
            items_editor: LineItemsEditor::new(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let mut should_close = false;

        if !self.loaded {
            if let Some(ref id) = state.editing_facture_id {
                if let Some(facture) = erp.devis.facture_par_id(id) {
                    self.charger(facture);
                }
            } else if let Some(prefill) = state.facture_prefill.clone() {
                // Facture pré-remplie issue d'une conversion de devis
                self.charger(&prefill);
            } else {
                let aujourd_hui = chrono::Utc::now().date_naive();
                self.devis_id = None;
                self.client_name.clear();
                self.date_emission = format_date(&aujourd_hui);
                self.date_echeance = format_date(&(aujourd_hui + chrono::Duration::days(30)));
                self.taux_tva = erp.settings().default_tva_rate.to_string();
                self.statut = StatutFacture::NonPayee;
                self.notes.clear();
                self.items_editor.reset();
            }
            self.loaded = true;
        }

        let title = if state.editing_facture_id.is_some() {
            "Modifier la facture"
        } else {
            "Nouvelle facture"
        };
        let symbole = erp.symbole_monetaire().to_string();

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(460.0);

                if self.devis_id.is_some() {
                    ui.label(
                        RichText::new("Issue de la conversion d'un devis")
                            .small()
                            .color(Colors::INFO),
                    );
                    ui.add_space(4.0);
                }

                egui::Grid::new("facture_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Client :");
                        ui.text_edit_singleline(&mut self.client_name);
                        ui.end_row();

                        ui.label("Date d'émission :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.date_emission)
                                    .desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
                        });
                        ui.end_row();

                        ui.label("Date d'échéance :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.date_echeance)
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Taux de TVA :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.taux_tva)
                                    .desired_width(60.0),
                            );
                            ui.label(
                                RichText::new("fraction entre 0 et 1")
                                    .small()
                                    .color(Colors::TEXT_MUTED),
                            );
                        });
                        ui.end_row();

                        ui.label("Statut :");
                        egui::ComboBox::from_id_salt("facture_statut")
                            .selected_text(self.statut.label())
                            .show_ui(ui, |ui| {
                                for &s in StatutFacture::all() {
                                    ui.selectable_value(&mut self.statut, s, s.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Notes :");
                        ui.text_edit_singleline(&mut self.notes);
                        ui.end_row();
                    });

                ui.add_space(12.0);
                ui.separator();

                self.items_editor.show(ui, &symbole);

                if let Ok(taux) = self.taux_tva.trim().parse::<f64>() {
                    let totaux = calculer_totaux(self.items_editor.items(), taux);
                    ui.add_space(8.0);
                    ui.separator();
                    ui.label(format!(
                        "Sous-total HT : {}",
                        format_montant(totaux.sous_total, &symbole)
                    ));
                    ui.label(format!(
                        "TVA ({}) : {}",
                        format_taux(taux),
                        format_montant(totaux.montant_tva, &symbole)
                    ));
                    ui.label(
                        RichText::new(format!(
                            "Total TTC : {}",
                            format_montant(totaux.montant_total, &symbole)
                        ))
                        .strong(),
                    );
                }

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
                                    state.show_success("Facture enregistrée !");
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

    fn charger(&mut self, facture: &Facture) {
        self.devis_id = facture.devis_id.clone();
        self.client_name = facture.client_name.clone();
        self.date_emission = format_date(&facture.date_emission);
        self.date_echeance = format_date(&facture.date_echeance);
        self.taux_tva = facture.taux_tva.to_string();
        self.statut = facture.statut;
        self.notes = facture.notes.clone().unwrap_or_default();
        self.items_editor.set_items(facture.items.clone());
    }

    fn save(&mut self, state: &AppState, erp: &mut Erp) -> anyhow::Result<()> {
        let date_emission = parse_date(self.date_emission.trim())
            .ok_or_else(|| anyhow::anyhow!("Date d'émission invalide (utiliser AAAA-MM-JJ)"))?;
        let date_echeance = parse_date(self.date_echeance.trim())
            .ok_or_else(|| anyhow::anyhow!("Date d'échéance invalide (utiliser AAAA-MM-JJ)"))?;
        let taux_tva: f64 = self
            .taux_tva
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Taux de TVA invalide"))?;
        let notes = {
            let n = self.notes.trim();
            if n.is_empty() { None } else { Some(n.to_string()) }
        };

        let mut facture = Facture {
            id: state.editing_facture_id.clone().unwrap_or_default(),
            devis_id: self.devis_id.clone(),
            client_name: self.client_name.trim().to_string(),
            date_emission,
            date_echeance,
            items: self.items_editor.items().to_vec(),
            sous_total: 0.0,
            taux_tva,
            montant_tva: 0.0,
            montant_total: 0.0,
            statut: self.statut,
            notes,
        };
        facture.recalculer();
        facture.valider()?;

        if let Some(ref id) = state.editing_facture_id {
            erp.devis.modifier_facture(id, facture)?;
        } else {
            erp.devis.ajouter_facture(facture);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.devis_id = None;
        self.client_name.clear();
        self.date_emission.clear();
        self.date_echeance.clear();
        self.taux_tva.clear();
        self.statut = StatutFacture::NonPayee;
        self.notes.clear();
        self.items_editor.reset();
        self.error_message = None;
        self.loaded = false;
    }
}
