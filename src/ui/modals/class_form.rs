use egui::{self, RichText};

use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};

pub struct ClassFormModal {
    name: String,
    error_message: Option<String>,
}

impl ClassFormModal {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            error_message: None,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let mut should_close = false;

        egui::Window::new("Nouvelle classe")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);

                ui.horizontal(|ui| {
                    ui.label("Nom :");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.name)
                            .hint_text("CM2, 6e A...")
                            .desired_width(150.0),
                    );
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
                            match erp.school.ajouter_classe(self.name.trim()) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Classe créée !");
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

    fn reset(&mut self) {
        self.name.clear();
        self.error_message = None;
    }
}
