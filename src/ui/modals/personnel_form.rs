use egui::{self, RichText};

use crate::models::Personnel;
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::date::{format_date, parse_date};

#[derive(Default)]
struct PersonnelFormData {
    nom: String,
    prenoms: String,
    date_naissance: String,
    email: String,
    contact: String,
    date_embauche: String,
    date_fin_contrat: String,
    salaire_de_base: String,
    poste: String,
}

pub struct PersonnelFormModal {
    form_data: PersonnelFormData,
    error_message: Option<String>,
    loaded: bool,
}

impl PersonnelFormModal {
    pub fn new() -> Self {
        Self {
            form_data: PersonnelFormData::default(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let mut should_close = false;

        if !self.loaded {
            if let Some(ref id) = state.editing_personnel_id {
                if let Some(employe) = erp.personnel.par_id(id) {
                    self.form_data = PersonnelFormData {
                        nom: employe.nom.clone(),
                        prenoms: employe.prenoms.clone(),
                        date_naissance: format_date(&employe.date_naissance),
                        email: employe.email.clone(),
                        contact: employe.contact.clone(),
                        date_embauche: format_date(&employe.date_embauche),
                        date_fin_contrat: employe
                            .date_fin_contrat
                            .map(|d| format_date(&d))
                            .unwrap_or_default(),
                        salaire_de_base: employe.salaire_de_base.to_string(),
                        poste: employe.poste.clone(),
                    };
                }
            } else {
                self.form_data = PersonnelFormData::default();
            }
            self.loaded = true;
        }

        let title = if state.editing_personnel_id.is_some() {
            "Modifier l'employé"
        } else {
            "Nouvel employé"
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(420.0);

                egui::Grid::new("personnel_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Nom :");
                        ui.text_edit_singleline(&mut self.form_data.nom);
                        ui.end_row();

                        ui.label("Prénoms :");
                        ui.text_edit_singleline(&mut self.form_data.prenoms);
                        ui.end_row();

                        ui.label("Date de naissance :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form_data.date_naissance)
                                    .desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
                        });
                        ui.end_row();

                        ui.label("Email :");
                        ui.text_edit_singleline(&mut self.form_data.email);
                        ui.end_row();

                        ui.label("Contact :");
                        ui.text_edit_singleline(&mut self.form_data.contact);
                        ui.end_row();

                        ui.label("Date d'embauche :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form_data.date_embauche)
                                    .desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
                        });
                        ui.end_row();

                        ui.label("Fin de contrat :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form_data.date_fin_contrat)
                                    .desired_width(100.0),
                            );
                            ui.label(
                                RichText::new("optionnel").small().color(Colors::TEXT_MUTED),
                            );
                        });
                        ui.end_row();

                        ui.label("Salaire de base :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.salaire_de_base)
                               .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Poste :");
                        ui.text_edit_singleline(&mut self.form_data.poste);
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
                                    state.show_success("Employé enregistré !");
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
        let date_naissance = parse_date(self.form_data.date_naissance.trim())
            .ok_or_else(|| anyhow::anyhow!("Date de naissance invalide (utiliser AAAA-MM-JJ)"))?;
        let date_embauche = parse_date(self.form_data.date_embauche.trim())
            .ok_or_else(|| anyhow::anyhow!("Date d'embauche invalide (utiliser AAAA-MM-JJ)"))?;
        let date_fin_contrat = if self.form_data.date_fin_contrat.trim().is_empty() {
            None
        } else {
            Some(
                parse_date(self.form_data.date_fin_contrat.trim())
                    .ok_or_else(|| anyhow::anyhow!("Date de fin de contrat invalide"))?,
            )
        };
        let salaire_de_base: f64 = self
            .form_data
            .salaire_de_base
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Salaire de base invalide"))?;

        let employe = Personnel {
            id: state.editing_personnel_id.clone().unwrap_or_default(),
            nom: self.form_data.nom.trim().to_string(),
            prenoms: self.form_data.prenoms.trim().to_string(),
            date_naissance,
            email: self.form_data.email.trim().to_string(),
            contact: self.form_data.contact.trim().to_string(),
            date_embauche,
            date_fin_contrat,
            salaire_de_base,
            poste: self.form_data.poste.trim().to_string(),
        };
        employe.valider()?;

        if let Some(ref id) = state.editing_personnel_id {
            erp.personnel.modifier(id, employe)?;
        } else {
            erp.personnel.ajouter(employe);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.form_data = PersonnelFormData::default();
        self.error_message = None;
        self.loaded = false;
    }
}
