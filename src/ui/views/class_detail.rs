use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::{Student, Subject};
use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
    View,
};
use crate::utils::date::format_date;

/// Détail d'une classe : liste des élèves et des matières.
pub struct ClassDetailView;

impl ClassDetailView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        let Some(class_id) = state.selected_class_id.clone() else {
            state.navigate(View::School);
            return;
        };

        let Some(classe) = erp.school.classe_par_id(&class_id).cloned() else {
            state.selected_class_id = None;
            state.navigate(View::School);
            return;
        };

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if ui.button(format!("{} Retour", Icons::ARROW_LEFT)).clicked() {
                    state.navigate(View::School);
                }
                ui.heading(format!("{} Classe {}", Icons::ECOLE, classe.name));
            });

            ui.add_space(12.0);

            let eleves: Vec<Student> =
                erp.school.eleves_de(&class_id).into_iter().cloned().collect();
            let matieres: Vec<Subject> =
                erp.school.matieres_de(&class_id).into_iter().cloned().collect();

            ui.columns(2, |cols| {
                // Élèves
                cols[0].vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new("Élèves")
                                .text_style(egui::TextStyle::Name("heading2".into())),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(format!("{} Nouvel élève", Icons::ADD)).clicked() {
                                state.show_student_form = true;
                                state.editing_student_id = None;
                            }
                        });
                    });
                    ui.add_space(4.0);

                    if eleves.is_empty() {
                        ui.label(RichText::new("Aucun élève").color(Colors::TEXT_MUTED));
                    } else {
                        ui.push_id("table_eleves", |ui| {
                            TableBuilder::new(ui)
                                .striped(true)
                                .column(Column::remainder())
                                .column(Column::initial(100.0))
                                .column(Column::initial(60.0))
                                .column(Column::initial(110.0))
                                .header(22.0, |mut header| {
                                    header.col(|ui| { ui.strong("Nom"); });
                                    header.col(|ui| { ui.strong("Naissance"); });
                                    header.col(|ui| { ui.strong("Genre"); });
                                    header.col(|ui| { ui.strong("Actions"); });
                                })
                                .body(|mut body| {
                                    for eleve in &eleves {
                                        body.row(24.0, |mut row| {
                                            row.col(|ui| {
                                                if ui.link(eleve.nom_complet()).clicked() {
                                                    state.navigate_to_student(&eleve.id);
                                                }
                                            });
                                            row.col(|ui| {
                                                ui.label(format_date(&eleve.date_of_birth));
                                            });
                                            row.col(|ui| { ui.label(eleve.gender.label()); });
                                            row.col(|ui| {
                                                ui.horizontal(|ui| {
                                                    if ui.small_button(Icons::EDIT).clicked() {
                                                        state.show_student_form = true;
                                                        state.editing_student_id =
                                                            Some(eleve.id.clone());
                                                    }
                                                    if ui.small_button(Icons::DELETE).clicked() {
                                                        state.show_confirm(
                                                            &format!(
                                                                "Supprimer {} et ses notes ?",
                                                                eleve.nom_complet()
                                                            ),
                                                            ConfirmAction::DeleteStudent(
                                                                eleve.id.clone(),
                                                            ),
                                                        );
                                                    }
                                                });
                                            });
                                        });
                                    }
                                });
                        });
                    }
                });

                // Matières
                cols[1].vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new("Matières")
                                .text_style(egui::TextStyle::Name("heading2".into())),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(format!("{} Nouvelle matière", Icons::ADD)).clicked() {
                                state.show_subject_form = true;
                                state.editing_subject_id = None;
                            }
                        });
                    });
                    ui.add_space(4.0);

                    if matieres.is_empty() {
                        ui.label(RichText::new("Aucune matière").color(Colors::TEXT_MUTED));
                    } else {
                        ui.push_id("table_matieres", |ui| {
                            TableBuilder::new(ui)
                                .striped(true)
                                .column(Column::remainder())
                                .column(Column::initial(90.0))
                                .column(Column::initial(110.0))
                                .header(22.0, |mut header| {
                                    header.col(|ui| { ui.strong("Matière"); });
                                    header.col(|ui| { ui.strong("Coefficient"); });
                                    header.col(|ui| { ui.strong("Actions"); });
                                })
                                .body(|mut body| {
                                    for matiere in &matieres {
                                        body.row(24.0, |mut row| {
                                            row.col(|ui| { ui.label(&matiere.name); });
                                            row.col(|ui| {
                                                ui.label(matiere.coefficient.to_string());
                                            });
                                            row.col(|ui| {
                                                ui.horizontal(|ui| {
                                                    if ui.small_button(Icons::EDIT).clicked() {
                                                        state.show_subject_form = true;
                                                        state.editing_subject_id =
                                                            Some(matiere.id.clone());
                                                    }
                                                    if ui.small_button(Icons::DELETE).clicked() {
                                                        state.show_confirm(
                                                            &format!(
                                                                "Supprimer la matière « {} » et ses notes ?",
                                                                matiere.name
                                                            ),
                                                            ConfirmAction::DeleteSubject(
                                                                matiere.id.clone(),
                                                            ),
                                                        );
                                                    }
                                                });
                                            });
                                        });
                                    }
                                });
                        });
                    }
                });
            });
        });
    }
}
