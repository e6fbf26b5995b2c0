use egui::{self, RichText};

use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
    View,
};

/// Écran de connexion. Aucune authentification réelle : le poste est
/// considéré comme un environnement de confiance et toute saisie passe.
pub struct LoginView {
    username: String,
    password: String,
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            egui::Frame::none()
                .fill(ui.visuals().extreme_bg_color)
                .rounding(8.0)
                .inner_margin(32.0)
                .show(ui, |ui| {
                    ui.set_min_width(320.0);

                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(Icons::LOCK).size(40.0));
                        ui.add_space(8.0);
                        ui.heading("GESTION BKS");
                        ui.label(
                            RichText::new("Tableau de bord d'entreprise")
                                .small()
                                .color(Colors::TEXT_SECONDARY),
                        );
                    });

                    ui.add_space(24.0);

                    egui::Grid::new("login_grid")
                        .num_columns(2)
                        .spacing([8.0, 12.0])
                        .show(ui, |ui| {
                            ui.label("Utilisateur :");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.username)
                                    .hint_text("admin")
                                    .desired_width(180.0),
                            );
                            ui.end_row();

                            ui.label("Mot de passe :");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.password)
                                    .password(true)
                                    .desired_width(180.0),
                            );
                            ui.end_row();
                        });

                    ui.add_space(16.0);

                    ui.vertical_centered(|ui| {
                        if ui
                            .button(format!("{} Se connecter", Icons::USER))
                            .clicked()
                        {
                            self.password.clear();
                            state.navigate(View::Dashboard);
                            state.show_success("Connexion réussie !");
                        }
                    });
                });
        });
    }
}
