use egui::{self, RichText};

use crate::models::SystemSettings;
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};

/// Paramètres de l'entreprise, édités en place (pas de modale).
pub struct ConfigurationView {
    form: SystemSettings,
    loaded: bool,
    error_message: Option<String>,
}

impl ConfigurationView {
    pub fn new() -> Self {
        Self {
            form: SystemSettings::default(),
            loaded: false,
            error_message: None,
        }
    }

    /// Recharge le formulaire depuis les paramètres courants
    pub fn reload(&mut self) {
        self.loaded = false;
        self.error_message = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        if !self.loaded {
            self.form = erp.settings().clone();
            self.loaded = true;
        }

        ui.vertical(|ui| {
            ui.heading(format!("{} Configuration", Icons::SETTINGS));
            ui.label(
                RichText::new("Paramètres utilisés par les devis, factures et affichages de montants")
                    .small()
                    .color(Colors::TEXT_SECONDARY),
            );

            ui.add_space(16.0);

            egui::Frame::none()
                .fill(ui.visuals().extreme_bg_color)
                .rounding(8.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    egui::Grid::new("settings_grid")
                        .num_columns(2)
                        .spacing([12.0, 10.0])
                        .show(ui, |ui| {
                            ui.label("Nom de l'entreprise :");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.company_name)
                                    .desired_width(280.0),
                            );
                            ui.end_row();

                            ui.label("Adresse :");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.company_address)
                                    .desired_width(280.0),
                            );
                            ui.end_row();

                            ui.label("Téléphone :");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.company_phone)
                                    .desired_width(280.0),
                            );
                            ui.end_row();

                            ui.label("Email :");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.company_email)
                                    .desired_width(280.0),
                            );
                            ui.end_row();

                            ui.label("Taux de TVA par défaut :");
                            ui.horizontal(|ui| {
                                ui.add(
                                    egui::DragValue::new(&mut self.form.default_tva_rate)
                                        .speed(0.01)
                                        .range(0.0..=1.0)
                                        .fixed_decimals(2),
                                );
                                ui.label(
                                    RichText::new(format!(
                                        "soit {:.0} %",
                                        self.form.default_tva_rate * 100.0
                                    ))
                                    .small()
                                    .color(Colors::TEXT_MUTED),
                                );
                            });
                            ui.end_row();

                            ui.label("Symbole monétaire :");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.currency_symbol)
                                    .desired_width(80.0),
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
                            self.form = erp.settings().clone();
                            self.error_message = None;
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(format!("{} Enregistrer", Icons::SAVE)).clicked() {
                                match erp.enregistrer_settings(self.form.clone()) {
                                    Ok(()) => {
                                        self.error_message = None;
                                        state.show_success("Configuration enregistrée !");
                                    }
                                    Err(e) => {
                                        self.error_message = Some(e.to_string());
                                    }
                                }
                            }
                        });
                    });
                });
        });
    }
}
