use egui::{self, RichText};

use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};

pub struct SchoolView;

impl SchoolView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} École", Icons::ECOLE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("{} Nouvelle classe", Icons::ADD)).clicked() {
                        state.show_class_form = true;
                    }
                });
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "{} classes, {} élèves",
                    erp.school.classes().len(),
                    erp.school.nombre_eleves()
                ))
                .small()
                .color(Colors::TEXT_SECONDARY),
            );

            ui.add_space(12.0);

            let classes: Vec<_> = erp.school.classes().to_vec();
            if classes.is_empty() {
                ui.label(RichText::new("Aucune classe").color(Colors::TEXT_MUTED));
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for ligne in classes.chunks(3) {
                    ui.horizontal(|ui| {
                        for classe in ligne {
                            let eleves = erp.school.eleves_de(&classe.id).len();
                            let matieres = erp.school.matieres_de(&classe.id).len();

                            let response = egui::Frame::none()
                                .fill(ui.visuals().extreme_bg_color)
                                .rounding(8.0)
                                .inner_margin(16.0)
                                .show(ui, |ui| {
                                    ui.set_min_width(200.0);
                                    ui.vertical(|ui| {
                                        ui.horizontal(|ui| {
                                            ui.label(RichText::new(Icons::ECOLE).size(20.0));
                                            ui.label(RichText::new(&classe.name).strong().size(18.0));
                                            ui.with_layout(
                                                egui::Layout::right_to_left(egui::Align::Center),
                                                |ui| {
                                                    if ui.small_button(Icons::DELETE).clicked() {
                                                        state.show_confirm(
                                                            &format!(
                                                                "Supprimer la classe {} ainsi que ses élèves et matières ?",
                                                                classe.name
                                                            ),
                                                            ConfirmAction::DeleteClass(classe.id.clone()),
                                                        );
                                                    }
                                                },
                                            );
                                        });
                                        ui.label(
                                            RichText::new(format!(
                                                "{} élèves · {} matières",
                                                eleves, matieres
                                            ))
                                            .small()
                                            .color(Colors::TEXT_SECONDARY),
                                        );
                                    });
                                });

                            if response.response.interact(egui::Sense::click()).clicked() {
                                state.navigate_to_class(&classe.id);
                            }

                            ui.add_space(8.0);
                        }
                    });
                    ui.add_space(8.0);
                }
            });
        });
    }
}
