use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::{Devis, Facture, StatutDevis, StatutFacture};
use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::{date::format_date, format::format_montant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Onglet {
    Devis,
    Factures,
}

pub struct DevisFacturesView {
    onglet: Onglet,
}

impl DevisFacturesView {
    pub fn new() -> Self {
        Self { onglet: Onglet::Devis }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        let symbole = erp.symbole_monetaire().to_string();

        ui.vertical(|ui| {
            ui.heading(format!("{} Devis & Factures", Icons::DEVIS));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .selectable_label(
                        self.onglet == Onglet::Devis,
                        format!("Devis ({})", erp.devis.nombre_devis()),
                    )
                    .clicked()
                {
                    self.onglet = Onglet::Devis;
                }
                if ui
                    .selectable_label(
                        self.onglet == Onglet::Factures,
                        format!("Factures ({})", erp.devis.nombre_factures()),
                    )
                    .clicked()
                {
                    self.onglet = Onglet::Factures;
                }
            });

            ui.separator();

            match self.onglet {
                Onglet::Devis => self.show_devis(ui, state, erp, &symbole),
                Onglet::Factures => self.show_factures(ui, state, erp, &symbole),
            }
        });
    }

    fn show_devis(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp, symbole: &str) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Devis").text_style(egui::TextStyle::Name("heading2".into())));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(format!("{} Nouveau devis", Icons::ADD)).clicked() {
                    state.open_devis_form(None);
                }
            });
        });

        ui.add_space(4.0);

        let mut devis: Vec<Devis> = erp.devis.tous_devis().to_vec();
        devis.sort_by(|a, b| b.date_emission.cmp(&a.date_emission));

        if devis.is_empty() {
            ui.label(RichText::new("Aucun devis").color(Colors::TEXT_MUTED));
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.push_id("table_devis", |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::remainder())
                    .column(Column::initial(100.0))
                    .column(Column::initial(100.0))
                    .column(Column::initial(120.0))
                    .column(Column::initial(100.0))
                    .column(Column::initial(170.0))
                    .header(22.0, |mut header| {
                        header.col(|ui| { ui.strong("Client"); });
                        header.col(|ui| { ui.strong("Émission"); });
                        header.col(|ui| { ui.strong("Validité"); });
                        header.col(|ui| { ui.strong("Montant TTC"); });
                        header.col(|ui| { ui.strong("Statut"); });
                        header.col(|ui| { ui.strong("Actions"); });
                    })
                    .body(|mut body| {
                        for d in &devis {
                            body.row(24.0, |mut row| {
                                row.col(|ui| { ui.label(RichText::new(&d.client_name).strong()); });
                                row.col(|ui| { ui.label(format_date(&d.date_emission)); });
                                row.col(|ui| { ui.label(format_date(&d.date_validite)); });
                                row.col(|ui| { ui.label(format_montant(d.montant_total, symbole)); });
                                row.col(|ui| {
                                    let color = match d.statut {
                                        StatutDevis::Brouillon => Colors::TEXT_MUTED,
                                        StatutDevis::Envoye => Colors::INFO,
                                        StatutDevis::Accepte => Colors::SUCCESS,
                                        StatutDevis::Refuse => Colors::ERROR,
                                        StatutDevis::Facture => Colors::WARNING,
                                    };
                                    ui.colored_label(color, d.statut.label());
                                });
                                row.col(|ui| {
                                    ui.horizontal(|ui| {
                                        // Conversion réservée aux devis acceptés
                                        if d.statut == StatutDevis::Accepte
                                            && ui
                                                .small_button(Icons::CONVERT)
                                                .on_hover_text("Convertir en facture")
                                                .clicked()
                                        {
                                            match erp.devis.convertir_en_facture(&d.id) {
                                                Ok(facture) => {
                                                    state.facture_prefill = Some(facture);
                                                    state.open_facture_form(None);
                                                    state.show_success("Devis converti en facture");
                                                }
                                                Err(e) => {
                                                    state.show_error(&format!(
                                                        "Conversion impossible : {}",
                                                        e
                                                    ));
                                                }
                                            }
                                        }
                                        if d.statut != StatutDevis::Facture
                                            && ui.small_button(Icons::EDIT).clicked()
                                        {
                                            state.open_devis_form(Some(d.id.clone()));
                                        }
                                        if ui.small_button(Icons::DELETE).clicked() {
                                            state.show_confirm(
                                                &format!("Supprimer le devis de {} ?", d.client_name),
                                                ConfirmAction::DeleteDevis(d.id.clone()),
                                            );
                                        }
                                        if ui
                                            .small_button(Icons::PDF)
                                            .on_hover_text("Exporter en PDF")
                                            .clicked()
                                        {
                                            state.show_info("Export PDF bientôt disponible");
                                        }
                                    });
                                });
                            });
                        }
                    });
            });
        });
    }

    fn show_factures(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        erp: &mut Erp,
        symbole: &str,
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Factures").text_style(egui::TextStyle::Name("heading2".into())));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(format!("{} Nouvelle facture", Icons::ADD)).clicked() {
                    state.open_facture_form(None);
                }
            });
        });

        ui.add_space(4.0);

        let mut factures: Vec<Facture> = erp.devis.toutes_factures().to_vec();
        factures.sort_by(|a, b| b.date_emission.cmp(&a.date_emission));

        if factures.is_empty() {
            ui.label(RichText::new("Aucune facture").color(Colors::TEXT_MUTED));
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.push_id("table_factures", |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::remainder())
                    .column(Column::initial(100.0))
                    .column(Column::initial(100.0))
                    .column(Column::initial(120.0))
                    .column(Column::initial(140.0))
                    .column(Column::initial(140.0))
                    .header(22.0, |mut header| {
                        header.col(|ui| { ui.strong("Client"); });
                        header.col(|ui| { ui.strong("Émission"); });
                        header.col(|ui| { ui.strong("Échéance"); });
                        header.col(|ui| { ui.strong("Montant TTC"); });
                        header.col(|ui| { ui.strong("Statut"); });
                        header.col(|ui| { ui.strong("Actions"); });
                    })
                    .body(|mut body| {
                        for f in &factures {
                            body.row(24.0, |mut row| {
                                row.col(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.label(RichText::new(&f.client_name).strong());
                                        if f.devis_id.is_some() {
                                            ui.label(
                                                RichText::new("(issue d'un devis)")
                                                    .small()
                                                    .color(Colors::TEXT_MUTED),
                                            );
                                        }
                                    });
                                });
                                row.col(|ui| { ui.label(format_date(&f.date_emission)); });
                                row.col(|ui| { ui.label(format_date(&f.date_echeance)); });
                                row.col(|ui| { ui.label(format_montant(f.montant_total, symbole)); });
                                row.col(|ui| {
                                    let color = match f.statut {
                                        StatutFacture::NonPayee => Colors::ERROR,
                                        StatutFacture::PartiellementPayee => Colors::WARNING,
                                        StatutFacture::Payee => Colors::SUCCESS,
                                        StatutFacture::Annulee => Colors::TEXT_MUTED,
                                    };
                                    ui.colored_label(color, f.statut.label());
                                });
                                row.col(|ui| {
                                    ui.horizontal(|ui| {
                                        if ui.small_button(Icons::EDIT).clicked() {
                                            state.open_facture_form(Some(f.id.clone()));
                                        }
                                        if ui.small_button(Icons::DELETE).clicked() {
                                            state.show_confirm(
                                                &format!(
                                                    "Supprimer la facture de {} ?",
                                                    f.client_name
                                                ),
                                                ConfirmAction::DeleteFacture(f.id.clone()),
                                            );
                                        }
                                        if ui
                                            .small_button(Icons::PDF)
                                            .on_hover_text("Exporter en PDF")
                                            .clicked()
                                        {
                                            state.show_info("Export PDF bientôt disponible");
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
