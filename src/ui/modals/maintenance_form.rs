use egui::{self, RichText};

use crate::models::Maintenance;
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::date::{format_date, parse_date};

pub struct MaintenanceFormModal {
    date: String,
    type_maintenance: String,
    cout: String,
    description: String,
    error_message: Option<String>,
    loaded: bool,
}

impl MaintenanceFormModal {
    pub fn new() -> Self {
        Self {
            date: String::new(),
            type_maintenance: String::new(),
            cout: String::new(),
            description: String::new(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let Some(vehicle_id) = state.selected_vehicle_id.clone() else {
            return true;
        };
        let Some(vehicule) = erp.parcauto.par_id(&vehicle_id).cloned() else {
            return true;
        };

        if !self.loaded {
            self.date = format_date(&chrono::Utc::now().date_naive());
            self.type_maintenance.clear();
            self.cout.clear();
            self.description.clear();
            self.loaded = true;
        }

        let mut should_close = false;

        egui::Window::new("Nouvelle maintenance")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(380.0);

                ui.label(RichText::new(vehicule.designation()).strong());

                ui.add_space(8.0);

                egui::Grid::new("maintenance_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Date :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.date).desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
                        });
                        ui.end_row();

                        ui.label("Type :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.type_maintenance)
                                .hint_text("Vidange, pneus, révision..."),
                        );
                        ui.end_row();

                        ui.label("Coût :");
                        ui.add(egui::TextEdit::singleline(&mut self.cout).desired_width(100.0));
                        ui.end_row();

                        ui.label("Description :");
                        ui.text_edit_singleline(&mut self.description);
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
                            match self.save(erp, &vehicle_id) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Maintenance enregistrée !");
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

    fn save(&mut self, erp: &mut Erp, vehicle_id: &str) -> anyhow::Result<()> {
        let date = parse_date(self.date.trim())
            .ok_or_else(|| anyhow::anyhow!("Date invalide (utiliser AAAA-MM-JJ)"))?;
        let cout: f64 = self
            .cout
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Coût invalide"))?;

        let maintenance = Maintenance {
            id: String::new(),
            vehicle_id: vehicle_id.to_string(),
            date,
            type_maintenance: self.type_maintenance.trim().to_string(),
            cout,
            description: self.description.trim().to_string(),
        };
        maintenance.valider()?;

        erp.parcauto.ajouter_maintenance(vehicle_id, maintenance)?;
        Ok(())
    }

    fn reset(&mut self) {
        self.date.clear();
        self.type_maintenance.clear();
        self.cout.clear();
        self.description.clear();
        self.error_message = None;
        self.loaded = false;
    }
}
