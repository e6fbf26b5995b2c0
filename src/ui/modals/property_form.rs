use egui::{self, RichText};

use crate::models::{Property, StatutBien, TypeBien};
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};

#[derive(Default)]
struct PropertyFormData {
    adresse: String,
    ville: String,
    code_postal: String,
    type_bien: TypeBien,
    statut: StatutBien,
    nombre_pieces: String,
    surface: String,
    prix_achat: String,
    prix_location_mensuel: String,
    description: String,
}

pub struct PropertyFormModal {
    form_data: PropertyFormData,
    error_message: Option<String>,
    loaded: bool,
}

impl PropertyFormModal {
    pub fn new() -> Self {
        Self {
            form_data: PropertyFormData::default(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let mut should_close = false;

        if !self.loaded {
            if let Some(ref id) = state.editing_property_id {
                if let Some(bien) = erp.immobilier.par_id(id) {
                    self.form_data = PropertyFormData {
                        adresse: bien.adresse.clone(),
                        ville: bien.ville.clone(),
                        code_postal: bien.code_postal.clone(),
                        type_bien: bien.type_bien,
                        statut: bien.statut,
                        nombre_pieces: bien.nombre_pieces.to_string(),
                        surface: bien.surface.to_string(),
                        prix_achat: bien.prix_achat.to_string(),
                        prix_location_mensuel: bien
                            .prix_location_mensuel
                            .map(|p| p.to_string())
                            .unwrap_or_default(),
                        description: bien.description.clone().unwrap_or_default(),
                    };
                }
            } else {
                self.form_data = PropertyFormData::default();
            }
            self.loaded = true;
        }

        let title = if state.editing_property_id.is_some() {
            "Modifier le bien"
        } else {
            "Nouveau bien immobilier"
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(420.0);

                egui::Grid::new("property_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Adresse :");
                        ui.text_edit_singleline(&mut self.form_data.adresse);
                        ui.end_row();

                        ui.label("Ville :");
                        ui.text_edit_singleline(&mut self.form_data.ville);
                        ui.end_row();

                        ui.label("Code postal :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.code_postal)
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Type :");
                        egui::ComboBox::from_id_salt("property_type")
                            .selected_text(self.form_data.type_bien.label())
                            .show_ui(ui, |ui| {
                                for &t in TypeBien::all() {
                                    ui.selectable_value(&mut self.form_data.type_bien, t, t.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Statut :");
                        egui::ComboBox::from_id_salt("property_statut")
                            .selected_text(self.form_data.statut.label())
                            .show_ui(ui, |ui| {
                                for &s in StatutBien::all() {
                                    ui.selectable_value(&mut self.form_data.statut, s, s.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Nombre de pièces :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.nombre_pieces)
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Surface (m²) :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.surface)
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Prix d'achat :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.prix_achat)
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Loyer mensuel :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(
                                    &mut self.form_data.prix_location_mensuel,
                                )
                                .desired_width(100.0),
                            );
                            ui.label(RichText::new("optionnel").small().color(Colors::TEXT_MUTED));
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
                                    state.show_success("Bien enregistré !");
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
        let nombre_pieces: u32 = self
            .form_data
            .nombre_pieces
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Le nombre de pièces doit être un entier"))?;
        let surface: f64 = self
            .form_data
            .surface
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Surface invalide"))?;
        let prix_achat: f64 = self
            .form_data
            .prix_achat
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Prix d'achat invalide"))?;
        let prix_location_mensuel = if self.form_data.prix_location_mensuel.trim().is_empty() {
            None
        } else {
            Some(
                self.form_data
                    .prix_location_mensuel
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| anyhow::anyhow!("Loyer mensuel invalide"))?,
            )
        };
        let description = {
            let d = self.form_data.description.trim();
            if d.is_empty() { None } else { Some(d.to_string()) }
        };

        let bien = Property {
            id: state.editing_property_id.clone().unwrap_or_default(),
            adresse: self.form_data.adresse.trim().to_string(),
            ville: self.form_data.ville.trim().to_string(),
            code_postal: self.form_data.code_postal.trim().to_string(),
            type_bien: self.form_data.type_bien,
            nombre_pieces,
            surface,
            prix_achat,
            prix_location_mensuel,
            statut: self.form_data.statut,
            description,
        };
        bien.valider()?;

        if let Some(ref id) = state.editing_property_id {
            erp.immobilier.modifier(id, bien)?;
        } else {
            erp.immobilier.ajouter(bien);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.form_data = PropertyFormData::default();
        self.error_message = None;
        self.loaded = false;
    }
}
