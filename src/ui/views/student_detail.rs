use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::{Grade, Subject};
use crate::services::calculer_bulletin;
use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
    View,
};
use crate::utils::date::format_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Onglet {
    Notes,
    Bulletin,
}

/// Détail d'un élève : notes saisies et bulletin calculé.
pub struct StudentDetailView {
    onglet: Onglet,
}

impl StudentDetailView {
    pub fn new() -> Self {
        Self { onglet: Onglet::Notes }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        let Some(student_id) = state.selected_student_id.clone() else {
            state.navigate(View::School);
            return;
        };

        let Some(eleve) = erp.school.eleve_par_id(&student_id).cloned() else {
            state.selected_student_id = None;
            state.navigate(View::School);
            return;
        };

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if ui.button(format!("{} Retour", Icons::ARROW_LEFT)).clicked() {
                    state.navigate(View::ClassDetail);
                }
                ui.heading(format!("{} {}", Icons::USER, eleve.nom_complet()));
            });

            if let Some(ref contact) = eleve.contact_parent {
                ui.label(
                    RichText::new(format!("Contact parent : {}", contact))
                        .small()
                        .color(Colors::TEXT_SECONDARY),
                );
            }

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.selectable_label(self.onglet == Onglet::Notes, "Notes").clicked() {
                    self.onglet = Onglet::Notes;
                }
                if ui.selectable_label(self.onglet == Onglet::Bulletin, "Bulletin").clicked() {
                    self.onglet = Onglet::Bulletin;
                }
            });

            ui.separator();

            match self.onglet {
                Onglet::Notes => self.show_notes(ui, state, erp, &eleve.id),
                Onglet::Bulletin => self.show_bulletin(ui, state, erp, &eleve.class_id, &eleve.id),
            }
        });
    }

    fn show_notes(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &Erp, student_id: &str) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Notes").text_style(egui::TextStyle::Name("heading2".into())));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(format!("{} Nouvelle note", Icons::ADD)).clicked() {
                    state.show_grade_form = true;
                    state.editing_grade_id = None;
                }
            });
        });

        ui.add_space(4.0);

        let notes: Vec<Grade> = erp.school.notes_de(student_id).into_iter().cloned().collect();
        if notes.is_empty() {
            ui.label(RichText::new("Aucune note saisie").color(Colors::TEXT_MUTED));
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::remainder())
                .column(Column::initial(150.0))
                .column(Column::initial(90.0))
                .column(Column::initial(100.0))
                .column(Column::initial(100.0))
                .header(22.0, |mut header| {
                    header.col(|ui| { ui.strong("Matière"); });
                    header.col(|ui| { ui.strong("Composition"); });
                    header.col(|ui| { ui.strong("Note / 20"); });
                    header.col(|ui| { ui.strong("Date"); });
                    header.col(|ui| { ui.strong("Actions"); });
                })
                .body(|mut body| {
                    for note in &notes {
                        let matiere = erp
                            .school
                            .matiere_par_id(&note.subject_id)
                            .map(|m| m.name.clone())
                            .unwrap_or_else(|| "?".to_string());
                        body.row(24.0, |mut row| {
                            row.col(|ui| { ui.label(matiere); });
                            row.col(|ui| { ui.label(&note.composition_name); });
                            row.col(|ui| {
                                let color = if note.score < 10.0 {
                                    Colors::ERROR
                                } else {
                                    Colors::SUCCESS
                                };
                                ui.colored_label(color, format!("{:.2}", note.score));
                            });
                            row.col(|ui| { ui.label(format_date(&note.date)); });
                            row.col(|ui| {
                                ui.horizontal(|ui| {
                                    if ui.small_button(Icons::EDIT).clicked() {
                                        state.show_grade_form = true;
                                        state.editing_grade_id = Some(note.id.clone());
                                    }
                                    if ui.small_button(Icons::DELETE).clicked() {
                                        state.show_confirm(
                                            "Supprimer cette note ?",
                                            ConfirmAction::DeleteGrade(note.id.clone()),
                                        );
                                    }
                                });
                            });
                        });
                    }
                });
        });
    }

    fn show_bulletin(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        erp: &Erp,
        class_id: &str,
        student_id: &str,
    ) {
        let matieres: Vec<&Subject> = erp.school.matieres_de(class_id);
        let notes: Vec<&Grade> = erp.school.notes_de(student_id);
        let bulletin = calculer_bulletin(&matieres, &notes);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Bulletin").text_style(egui::TextStyle::Name("heading2".into())));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(format!("{} Imprimer", Icons::PRINT)).clicked() {
                    state.show_info("Impression du bulletin bientôt disponible");
                }
            });
        });

        ui.add_space(4.0);

        if bulletin.lignes.is_empty() {
            ui.label(RichText::new("Aucune matière dans cette classe").color(Colors::TEXT_MUTED));
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::initial(90.0))
            .column(Column::initial(110.0))
            .header(22.0, |mut header| {
                header.col(|ui| { ui.strong("Matière"); });
                header.col(|ui| { ui.strong("Coefficient"); });
                header.col(|ui| { ui.strong("Moyenne / 20"); });
            })
            .body(|mut body| {
                for ligne in &bulletin.lignes {
                    body.row(24.0, |mut row| {
                        row.col(|ui| { ui.label(&ligne.matiere); });
                        row.col(|ui| { ui.label(ligne.coefficient.to_string()); });
                        row.col(|ui| { ui.label(format!("{:.2}", ligne.moyenne)); });
                    });
                }
            });

        ui.add_space(12.0);

        let color = if bulletin.moyenne_generale < 10.0 {
            Colors::ERROR
        } else {
            Colors::SUCCESS
        };
        ui.label(
            RichText::new(format!("Moyenne générale : {:.2} / 20", bulletin.moyenne_generale))
                .size(18.0)
                .strong()
                .color(color),
        );
    }
}
