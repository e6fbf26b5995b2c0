use egui::{self, RichText};

use crate::models::Grade;
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::date::{format_date, parse_date};

pub struct GradeFormModal {
    subject_id: Option<String>,
    score: String,
    composition_name: String,
    date: String,
    error_message: Option<String>,
    loaded: bool,
}

impl GradeFormModal {
    pub fn new() -> Self {
        Self {
            subject_id: None,
            score: String::new(),
            composition_name: String::new(),
            date: String::new(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let Some(student_id) = state.selected_student_id.clone() else {
            return true;
        };
        let Some(eleve) = erp.school.eleve_par_id(&student_id).cloned() else {
            return true;
        };

        if !self.loaded {
            if let Some(ref id) = state.editing_grade_id {
                if let Some(note) = erp.school.note_par_id(id) {
                    self.subject_id = Some(note.subject_id.clone());
                    self.score = note.score.to_string();
                    self.composition_name = note.composition_name.clone();
                    self.date = format_date(&note.date);
                }
            } else {
                self.subject_id = None;
                self.score.clear();
                self.composition_name = "Composition N°1".to_string();
                self.date = format_date(&chrono::Utc::now().date_naive());
            }
            self.loaded = true;
        }

        let title = if state.editing_grade_id.is_some() {
            "Modifier la note"
        } else {
            "Nouvelle note"
        };

        let matieres: Vec<_> = erp
            .school
            .matieres_de(&eleve.class_id)
            .into_iter()
            .cloned()
            .collect();

        let mut should_close = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(360.0);

                ui.label(RichText::new(eleve.nom_complet()).strong());
                ui.add_space(8.0);

                egui::Grid::new("grade_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Matière :");
                        let selected_label = self
                            .subject_id
                            .as_ref()
                            .and_then(|id| matieres.iter().find(|m| &m.id == id))
                            .map(|m| m.name.clone())
                            .unwrap_or_else(|| "Choisir...".to_string());
                        egui::ComboBox::from_id_salt("grade_subject")
                            .selected_text(selected_label)
                            .show_ui(ui, |ui| {
                                for matiere in &matieres {
                                    ui.selectable_value(
                                        &mut self.subject_id,
                                        Some(matiere.id.clone()),
                                        &matiere.name,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Composition :");
                        ui.text_edit_singleline(&mut self.composition_name);
                        ui.end_row();

                        ui.label("Note (/ 20) :");
                        ui.add(egui::TextEdit::singleline(&mut self.score).desired_width(60.0));
                        ui.end_row();

                        ui.label("Date :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.date).desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
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
                            match self.save(state, erp, &student_id) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Note enregistrée !");
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

    fn save(&mut self, state: &AppState, erp: &mut Erp, student_id: &str) -> anyhow::Result<()> {
        let subject_id = self
            .subject_id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Veuillez choisir une matière"))?;
        let score: f64 = self
            .score
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Note invalide"))?;
        let date = parse_date(self.date.trim())
            .ok_or_else(|| anyhow::anyhow!("Date invalide (utiliser AAAA-MM-JJ)"))?;

        let note = Grade {
            id: state.editing_grade_id.clone().unwrap_or_default(),
            student_id: student_id.to_string(),
            subject_id,
            score,
            composition_name: self.composition_name.trim().to_string(),
            date,
        };
        note.valider()?;

        if let Some(ref id) = state.editing_grade_id {
            erp.school.modifier_note(id, note)?;
        } else {
            erp.school.ajouter_note(note);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.subject_id = None;
        self.score.clear();
        self.composition_name.clear();
        self.date.clear();
        self.error_message = None;
        self.loaded = false;
    }
}
