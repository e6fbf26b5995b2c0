use egui::{self, RichText};

use crate::models::{calculer_totaux, Devis, StatutDevis};
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

pub struct DevisFormModal {
    client_name: String,
    date_emission: String,
    date_validite: String,
    taux_tva: String,
    statut: StatutDevis,
    notes: String,
    items_editor: LineItemsEditor,
    error_message: Option<String>,
    loaded: bool,
}

impl DevisFormModal {
    pub fn new() -> Self {
        Self {
            client_name: String::new(),
            date_emission: String::new(),
            date_validite: String::new(),
            taux_tva: String::new(),
            statut: StatutDevis::Brouillon,
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
            if let Some(ref id) = state.editing_devis_id {
                if let Some(devis) = erp.devis.devis_par_id(id) {
                    self.client_name = devis.client_name.clone();
                    self.date_emission = format_date(&devis.date_emission);
                    self.date_validite = format_date(&devis.date_validite);
                    self.taux_tva = devis.taux_tva.to_string();
                    self.statut = devis.statut;
                    self.notes = devis.notes.clone().unwrap_or_default();
                    self.items_editor.set_items(devis.items.clone());
                }
            } else {
                let aujourd_hui = chrono::Utc::now().date_naive();
                self.client_name.clear();
                self.date_emission = format_date(&aujourd_hui);
                self.date_validite = format_date(&(aujourd_hui + chrono::Duration::days(30)));
                self.taux_tva = erp.settings().default_tva_rate.to_string();
                self.statut = StatutDevis::Brouillon;
                self.notes.clear();
                self.items_editor.reset();
            }
            self.loaded = true;
        }

        let title = if state.editing_devis_id.is_some() {
            "Modifier le devis"
        } else {
            "Nouveau devis"
        };
        let symbole = erp.symbole_monetaire().to_string();

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(460.0);

                egui::Grid::new("devis_form_grid")
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

                        ui.label("Date de validité :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.date_validite)
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
                        egui::ComboBox::from_id_salt("devis_statut")
                            .selected_text(self.statut.label())
                            .show_ui(ui, |ui| {
                                for &s in StatutDevis::selectionnables() {
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

                // Totaux dérivés, recalculés à chaque frame
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
                                    state.show_success("Devis enregistré !");
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
        let date_emission = parse_date(self.date_emission.trim())
            .ok_or_else(|| anyhow::anyhow!("Date d'émission invalide (utiliser AAAA-MM-JJ)"))?;
        let date_validite = parse_date(self.date_validite.trim())
            .ok_or_else(|| anyhow::anyhow!("Date de validité invalide (utiliser AAAA-MM-JJ)"))?;
        let taux_tva: f64 = self
            .taux_tva
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Taux de TVA invalide"))?;
        let notes = {
            let n = self.notes.trim();
            if n.is_empty() { None } else { Some(n.to_string()) }
        };

        let mut devis = Devis {
            id: state.editing_devis_id.clone().unwrap_or_default(),
            client_name: self.client_name.trim().to_string(),
            date_emission,
            date_validite,
            items: self.items_editor.items().to_vec(),
            sous_total: 0.0,
            taux_tva,
            montant_tva: 0.0,
            montant_total: 0.0,
            statut: self.statut,
            notes,
        };
        devis.recalculer();
        devis.valider()?;

        if let Some(ref id) = state.editing_devis_id {
            erp.devis.modifier_devis(id, devis)?;
        } else {
            erp.devis.ajouter_devis(devis);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.client_name.clear();
        self.date_emission.clear();
        self.date_validite.clear();
        self.taux_tva.clear();
        self.statut = StatutDevis::Brouillon;
        self.notes.clear();
        self.items_editor.reset();
        self.error_message = None;
        self.loaded = false;
    }
}
