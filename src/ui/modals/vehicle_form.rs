use chrono::Datelike;
use egui::{self, RichText};

use crate::models::{StatutVehicule, Vehicle};
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::date::{format_date, parse_date};

#[derive(Default)]
struct VehicleFormData {
    marque: String,
    modele: String,
    annee: String,
    immatriculation: String,
    kilometrage: String,
    statut: StatutVehicule,
    date_acquisition: String,
    description: String,
}

pub struct VehicleFormModal {
    form_data: VehicleFormData,
    error_message: Option<String>,
    loaded: bool,
}

impl VehicleFormModal {
    pub fn new() -> Self {
        Self {
            form_data: VehicleFormData::default(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let mut should_close = false;

        if !self.loaded {
            if let Some(ref id) = state.editing_vehicle_id {
                if let Some(vehicule) = erp.parcauto.par_id(id) {
                    self.form_data = VehicleFormData {
                        marque: vehicule.marque.clone(),
                        modele: vehicule.modele.clone(),
                        annee: vehicule.annee.to_string(),
                        immatriculation: vehicule.immatriculation.clone(),
                        kilometrage: vehicule.kilometrage.to_string(),
                        statut: vehicule.statut,
                        date_acquisition: format_date(&vehicule.date_acquisition),
                        description: vehicule.description.clone().unwrap_or_default(),
                    };
                }
            } else {
                self.form_data = VehicleFormData {
                    annee: chrono::Utc::now().year().to_string(),
                    kilometrage: "0".to_string(),
                    ..Default::default()
                };
            }
            self.loaded = true;
        }

        let title = if state.editing_vehicle_id.is_some() {
            "Modifier le véhicule"
        } else {
            "Nouveau véhicule"
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(400.0);

                egui::Grid::new("vehicle_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Marque :");
                        ui.text_edit_singleline(&mut self.form_data.marque);
                        ui.end_row();

                        ui.label("Modèle :");
                        ui.text_edit_singleline(&mut self.form_data.modele);
                        ui.end_row();

                        ui.label("Année :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.annee)
                                .desired_width(80.0),
                        );
                        ui.end_row();

                        ui.label("Immatriculation :");
                        ui.text_edit_singleline(&mut self.form_data.immatriculation);
                        ui.end_row();

                        ui.label("Kilométrage :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.kilometrage)
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Statut :");
                        egui::ComboBox::from_id_salt("vehicle_statut")
                            .selected_text(self.form_data.statut.label())
                            .show_ui(ui, |ui| {
                                for &s in StatutVehicule::all() {
                                    ui.selectable_value(&mut self.form_data.statut, s, s.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Date d'acquisition :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form_data.date_acquisition)
                                    .desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
                        });
                        ui.end_row();

                        ui.label("Description :");
                        ui.text_edit_singleline(&mut self.form_data.description);
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
                            match self.save(state, erp) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Véhicule enregistré !");
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

    fn save(&mut self, state: &AppState, erp: &mut Erp) -> anyhow::Result<()> {
        let annee: i32 = self
            .form_data
            .annee
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Année invalide"))?;
        let kilometrage: u32 = self
            .form_data
            .kilometrage
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Le kilométrage doit être un entier positif ou nul"))?;
        let date_acquisition = parse_date(self.form_data.date_acquisition.trim())
            .ok_or_else(|| anyhow::anyhow!("Date d'acquisition invalide (utiliser AAAA-MM-JJ)"))?;
        let description = {
            let d = self.form_data.description.trim();
            if d.is_empty() { None } else { Some(d.to_string()) }
        };

        let vehicule = Vehicle {
            id: state.editing_vehicle_id.clone().unwrap_or_default(),
            marque: self.form_data.marque.trim().to_string(),
            modele: self.form_data.modele.trim().to_string(),
            annee,
            immatriculation: self.form_data.immatriculation.trim().to_string(),
            kilometrage,
            statut: self.form_data.statut,
            date_acquisition,
            description,
        };
        vehicule.valider()?;

        if let Some(ref id) = state.editing_vehicle_id {
            erp.parcauto.modifier(id, vehicule)?;
        } else {
            erp.parcauto.ajouter(vehicule);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.form_data = VehicleFormData::default();
        self.error_message = None;
        self.loaded = false;
    }
}
