use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::{Property, StatutBien};
use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::format::format_montant;

pub struct ImmobilierView {
    filtre_statut: Option<StatutBien>,
}

impl ImmobilierView {
    pub fn new() -> Self {
        Self { filtre_statut: None }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        let symbole = erp.symbole_monetaire().to_string();

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} Immobilier", Icons::IMMOBILIER));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("{} Nouveau bien", Icons::ADD)).clicked() {
                        state.open_property_form(None);
                    }
                });
            });

            ui.add_space(8.0);

            // Filtre par statut
            ui.horizontal(|ui| {
                if ui.selectable_label(self.filtre_statut.is_none(), "Tous").clicked() {
                    self.filtre_statut = None;
                }
                for &statut in StatutBien::all() {
                    if ui
                        .selectable_label(self.filtre_statut == Some(statut), statut.label())
                        .clicked()
                    {
                        self.filtre_statut = Some(statut);
                    }
                }
            });

            ui.add_space(8.0);

            let mut biens: Vec<Property> = erp
                .immobilier
                .tous()
                .iter()
                .filter(|b| self.filtre_statut.map_or(true, |s| b.statut == s))
                .cloned()
                .collect();
            biens.sort_by(|a, b| a.ville.cmp(&b.ville).then(a.adresse.cmp(&b.adresse)));

            ui.label(
                RichText::new(format!("{} biens", biens.len()))
                    .small()
                    .color(Colors::TEXT_SECONDARY),
            );
            ui.separator();

            if biens.is_empty() {
                ui.label(RichText::new("Aucun bien immobilier").color(Colors::TEXT_MUTED));
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::remainder())
                    .column(Column::initial(110.0))
                    .column(Column::initial(70.0))
                    .column(Column::initial(80.0))
                    .column(Column::initial(130.0))
                    .column(Column::initial(120.0))
                    .column(Column::initial(100.0))
                    .column(Column::initial(90.0))
                    .header(22.0, |mut header| {
                        header.col(|ui| { ui.strong("Adresse"); });
                        header.col(|ui| { ui.strong("Type"); });
                        header.col(|ui| { ui.strong("Pièces"); });
                        header.col(|ui| { ui.strong("Surface"); });
                        header.col(|ui| { ui.strong("Prix d'achat"); });
                        header.col(|ui| { ui.strong("Loyer mensuel"); });
                        header.col(|ui| { ui.strong("Statut"); });
                        header.col(|ui| { ui.strong("Actions"); });
                    })
                    .body(|mut body| {
                        for bien in &biens {
                            body.row(24.0, |mut row| {
                                row.col(|ui| {
                                    ui.vertical(|ui| {
                                        ui.label(RichText::new(&bien.adresse).strong());
                                        ui.label(
                                            RichText::new(format!("{} {}", bien.code_postal, bien.ville))
                                                .small()
                                                .color(Colors::TEXT_MUTED),
                                        );
                                    });
                                });
                                row.col(|ui| { ui.label(bien.type_bien.label()); });
                                row.col(|ui| { ui.label(bien.nombre_pieces.to_string()); });
                                row.col(|ui| { ui.label(format!("{:.0} m²", bien.surface)); });
                                row.col(|ui| { ui.label(format_montant(bien.prix_achat, &symbole)); });
                                row.col(|ui| {
                                    match bien.prix_location_mensuel {
                                        Some(loyer) => { ui.label(format_montant(loyer, &symbole)); }
                                        None => { ui.label(RichText::new("—").color(Colors::TEXT_MUTED)); }
                                    }
                                });
                                row.col(|ui| {
                                    let color = match bien.statut {
                                        StatutBien::Disponible => Colors::SUCCESS,
                                        StatutBien::Loue => Colors::INFO,
                                        StatutBien::Vendu => Colors::TEXT_MUTED,
                                        StatutBien::EnMaintenance => Colors::WARNING,
                                    };
                                    ui.colored_label(color, bien.statut.label());
                                });
                                row.col(|ui| {
                                    ui.horizontal(|ui| {
                                        if ui.small_button(Icons::EDIT).clicked() {
                                            state.open_property_form(Some(bien.id.clone()));
                                        }
                                        if ui.small_button(Icons::DELETE).clicked() {
                                            state.show_confirm(
                                                &format!("Supprimer le bien « {} » ?", bien.adresse),
                                                ConfirmAction::DeleteProperty(bien.id.clone()),
                                            );
                                        }
                                    });
                                });
                            });
                        }
                    });
            });
        });
    }
}
