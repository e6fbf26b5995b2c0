use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::Personnel;
use crate::services::paie;
use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::{date::format_date, format::format_montant};

pub struct PersonnelView {
    search: String,
}

impl PersonnelView {
    pub fn new() -> Self {
        Self { search: String::new() }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        let symbole = erp.symbole_monetaire().to_string();

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} Personnel", Icons::PERSONNEL));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("{} Nouvel employé", Icons::ADD)).clicked() {
                        state.open_personnel_form(None);
                    }
                });
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("🔍");
                ui.add(
                    egui::TextEdit::singleline(&mut self.search)
                        .hint_text("Rechercher un nom ou un poste...")
                        .desired_width(220.0),
                );
            });

            ui.add_space(8.0);

            let recherche = self.search.to_lowercase();
            let mut employes: Vec<Personnel> = erp
                .personnel
                .tous()
                .iter()
                .filter(|p| {
                    recherche.is_empty()
                        || p.nom_complet().to_lowercase().contains(&recherche)
                        || p.poste.to_lowercase().contains(&recherche)
                })
                .cloned()
                .collect();
            employes.sort_by(|a, b| a.nom.cmp(&b.nom).then(a.prenoms.cmp(&b.prenoms)));

            ui.label(
                RichText::new(format!("{} employés", employes.len()))
                    .small()
                    .color(Colors::TEXT_SECONDARY),
            );
            ui.separator();

            if employes.is_empty() {
                ui.label(RichText::new("Aucun employé").color(Colors::TEXT_MUTED));
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::remainder())
                    .column(Column::initial(140.0))
                    .column(Column::initial(120.0))
                    .column(Column::initial(110.0))
                    .column(Column::initial(120.0))
                    .column(Column::initial(150.0))
                    .header(22.0, |mut header| {
                        header.col(|ui| { ui.strong("Nom complet"); });
                        header.col(|ui| { ui.strong("Poste"); });
                        header.col(|ui| { ui.strong("Contact"); });
                        header.col(|ui| { ui.strong("Embauche"); });
                        header.col(|ui| { ui.strong("Salaire de base"); });
                        header.col(|ui| { ui.strong("Actions"); });
                    })
                    .body(|mut body| {
                        for employe in &employes {
                            body.row(24.0, |mut row| {
                                row.col(|ui| { ui.label(employe.nom_complet()); });
                                row.col(|ui| { ui.label(&employe.poste); });
                                row.col(|ui| { ui.label(&employe.contact); });
                                row.col(|ui| { ui.label(format_date(&employe.date_embauche)); });
                                row.col(|ui| {
                                    ui.label(format_montant(employe.salaire_de_base, &symbole));
                                });
                                row.col(|ui| {
                                    ui.horizontal(|ui| {
                                        if ui
                                            .small_button(Icons::DEVIS)
                                            .on_hover_text("Fiche de paie")
                                            .clicked()
                                        {
                                            // Chaque ouverture archive un nouvel instantané
                                            let mut fiche = paie::generer_fiche(employe);
                                            fiche.id = erp.personnel.enregistrer_fiche(fiche.clone());
                                            state.selected_personnel_id = Some(employe.id.clone());
                                            state.fiche_affichee = Some(fiche);
                                        }
                                        if ui.small_button(Icons::EDIT).clicked() {
                                            state.open_personnel_form(Some(employe.id.clone()));
                                        }
                                        if ui.small_button(Icons::DELETE).clicked() {
                                            state.show_confirm(
                                                &format!(
                                                    "Supprimer {} et ses fiches de paie ?",
                                                    employe.nom_complet()
                                                ),
                                                ConfirmAction::DeletePersonnel(employe.id.clone()),
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
