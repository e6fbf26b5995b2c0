use egui::{self, RichText};

use crate::models::{Genre, Student};
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::date::{format_date, parse_date};

#[derive(Default)]
struct StudentFormData {
    first_name: String,
    last_name: String,
    date_of_birth: String,
    gender: Genre,
    contact_parent: String,
}

pub struct StudentFormModal {
    form_data: StudentFormData,
    error_message: Option<String>,
    loaded: bool,
}

impl StudentFormModal {
    pub fn new() -> Self {
        Self {
            form_data: StudentFormData::default(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let Some(class_id) = state.selected_class_id.clone() else {
            return true;
        };

        if !self.loaded {
            if let Some(ref id) = state.editing_student_id {
                if let Some(eleve) = erp.school.eleve_par_id(id) {
                    self.form_data = StudentFormData {
                        first_name: eleve.first_name.clone(),
                        last_name: eleve.last_name.clone(),
                        date_of_birth: format_date(&eleve.date_of_birth),
                        gender: eleve.gender,
                        contact_parent: eleve.contact_parent.clone().unwrap_or_default(),
                    };
                }
            } else {
                self.form_data = StudentFormData::default();
            }
            self.loaded = true;
        }

        let title = if state.editing_student_id.is_some() {
            "Modifier l'élève"
        } else {
            "Nouvel élève"
        };

        let mut should_close = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(380.0);

                egui::Grid::new("student_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Prénom :");
                        ui.text_edit_singleline(&mut self.form_data.first_name);
                        ui.end_row();

                        ui.label("Nom :");
                        ui.text_edit_singleline(&mut self.form_data.last_name);
                        ui.end_row();

                        ui.label("Date de naissance :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form_data.date_of_birth)
                                    .desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
                        });
                        ui.end_row();

                        ui.label("Genre :");
                        egui::ComboBox::from_id_salt("student_gender")
                            .selected_text(self.form_data.gender.label())
                            .show_ui(ui, |ui| {
                                for &g in Genre::all() {
                                    ui.selectable_value(&mut self.form_data.gender, g, g.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Contact parent :");
                        ui.horizontal(|ui| {
                            ui.text_edit_singleline(&mut self.form_data.contact_parent);
                            ui.label(RichText::new("optionnel").small().color(Colors::TEXT_MUTED));
                        });
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
                            match self.save(state, erp, &class_id) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Élève enregistré !");
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

    fn save(&mut self, state: &AppState, erp: &mut Erp, class_id: &str) -> anyhow::Result<()> {
        let date_of_birth = parse_date(self.form_data.date_of_birth.trim())
            .ok_or_else(|| anyhow::anyhow!("Date de naissance invalide (utiliser AAAA-MM-JJ)"))?;
        let contact_parent = {
            let c = self.form_data.contact_parent.trim();
            if c.is_empty() { None } else { Some(c.to_string()) }
        };

        let eleve = Student {
            id: state.editing_student_id.clone().unwrap_or_default(),
            class_id: class_id.to_string(),
            first_name: self.form_data.first_name.trim().to_string(),
            last_name: self.form_data.last_name.trim().to_string(),
            date_of_birth,
            gender: self.form_data.gender,
            contact_parent,
        };
        eleve.valider()?;

        if let Some(ref id) = state.editing_student_id {
            erp.school.modifier_eleve(id, eleve)?;
        } else {
            erp.school.ajouter_eleve(eleve);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.form_data = StudentFormData::default();
        self.error_message = None;
        self.loaded = false;
    }
}
