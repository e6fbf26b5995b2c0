use egui::{self, RichText};

use crate::models::Subject;
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};

pub struct SubjectFormModal {
    name: String,
    coefficient: String,
    error_message: Option<String>,
    loaded: bool,
}

impl SubjectFormModal {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            coefficient: String::new(),
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
            if let Some(ref id) = state.editing_subject_id {
                if let Some(matiere) = erp.school.matiere_par_id(id) {
                    self.name = matiere.name.clone();
                    self.coefficient = matiere.coefficient.to_string();
                }
            } else {
                self.name.clear();
                self.coefficient = "1".to_string();
            }
            self.loaded = true;
        }

        let title = if state.editing_subject_id.is_some() {
            "Modifier la matière"
        } else {
            "Nouvelle matière"
        };

        let mut should_close = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);

                egui::Grid::new("subject_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Matière :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.name)
                                .hint_text("Mathématiques, Français..."),
                        );
                        ui.end_row();

                        ui.label("Coefficient :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.coefficient).desired_width(60.0),
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
                            match self.save(state, erp, &class_id) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Matière enregistrée !");
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
        let coefficient: u32 = self
            .coefficient
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Le coefficient doit être un entier positif"))?;

        let matiere = Subject {
            id: state.editing_subject_id.clone().unwrap_or_default(),
            class_id: class_id.to_string(),
            name: self.name.trim().to_string(),
            coefficient,
        };
        matiere.valider()?;

        if let Some(ref id) = state.editing_subject_id {
            erp.school.modifier_matiere(id, matiere)?;
        } else {
            erp.school.ajouter_matiere(matiere);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.name.clear();
        self.coefficient.clear();
        self.error_message = None;
        self.loaded = false;
    }
}
