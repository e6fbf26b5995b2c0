use egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::{Transaction, TypeTransaction};
use crate::store::Erp;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::{date::format_date, format::format_montant};

pub struct FinanceView {
    search: String,
}

impl FinanceView {
    pub fn new() -> Self {
        Self { search: String::new() }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, erp: &mut Erp) {
        let symbole = erp.symbole_monetaire().to_string();

        ui.vertical(|ui| {
            ui.heading(format!("{} Finance", Icons::FINANCE));
            ui.add_space(8.0);

            // Cartes de synthèse
            let revenus = erp.finance.total_revenus();
            let depenses = erp.finance.total_depenses();
            let solde = erp.finance.solde();
            let solde_color = if solde < 0.0 { Colors::ERROR } else { Colors::SUCCESS };

            ui.horizontal(|ui| {
                summary_card(ui, "Total revenus", &format_montant(revenus, &symbole), Colors::SUCCESS);
                ui.add_space(8.0);
                summary_card(ui, "Total dépenses", &format_montant(depenses, &symbole), Colors::ERROR);
                ui.add_space(8.0);
                summary_card(ui, "Solde", &format_montant(solde, &symbole), solde_color);
            });

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label("🔍");
                ui.add(
                    egui::TextEdit::singleline(&mut self.search)
                        .hint_text("Rechercher une désignation...")
                        .desired_width(220.0),
                );
            });

            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let revenus: Vec<Transaction> = self.filtrees(erp, TypeTransaction::Revenu);
                let depenses: Vec<Transaction> = self.filtrees(erp, TypeTransaction::Depense);

                self.section(ui, state, "Revenus", TypeTransaction::Revenu, &revenus, &symbole);
                ui.add_space(16.0);
                self.section(ui, state, "Dépenses", TypeTransaction::Depense, &depenses, &symbole);
            });
        });
    }

    fn filtrees(&self, erp: &Erp, type_transaction: TypeTransaction) -> Vec<Transaction> {
        let recherche = self.search.to_lowercase();
        let iter: Box<dyn Iterator<Item = &Transaction>> = match type_transaction {
            TypeTransaction::Revenu => Box::new(erp.finance.revenus()),
            TypeTransaction::Depense => Box::new(erp.finance.depenses()),
        };
        let mut result: Vec<Transaction> = iter
            .filter(|t| recherche.is_empty() || t.designation.to_lowercase().contains(&recherche))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        result
    }

    fn section(
        &self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        titre: &str,
        type_transaction: TypeTransaction,
        transactions: &[Transaction],
        symbole: &str,
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(titre).text_style(egui::TextStyle::Name("heading2".into())));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match type_transaction {
                    TypeTransaction::Revenu => "Nouveau revenu",
                    TypeTransaction::Depense => "Nouvelle dépense",
                };
                if ui.button(format!("{} {}", Icons::ADD, label)).clicked() {
                    state.open_transaction_form(type_transaction, None);
                }
            });
        });

        ui.add_space(4.0);

        if transactions.is_empty() {
            ui.label(RichText::new("Aucune transaction").color(Colors::TEXT_MUTED));
            return;
        }

        let id_salt = match type_transaction {
            TypeTransaction::Revenu => "table_revenus",
            TypeTransaction::Depense => "table_depenses",
        };

        ui.push_id(id_salt, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::initial(100.0))
                .column(Column::remainder())
                .column(Column::initial(110.0))
                .column(Column::initial(70.0))
                .column(Column::initial(120.0))
                .column(Column::initial(90.0))
                .header(22.0, |mut header| {
                    header.col(|ui| { ui.strong("Date"); });
                    header.col(|ui| { ui.strong("Désignation"); });
                    header.col(|ui| { ui.strong("Prix unitaire"); });
                    header.col(|ui| { ui.strong("Nombre"); });
                    header.col(|ui| { ui.strong("Prix total"); });
                    header.col(|ui| { ui.strong("Actions"); });
                })
                .body(|mut body| {
                    for transaction in transactions {
                        body.row(24.0, |mut row| {
                            row.col(|ui| { ui.label(format_date(&transaction.date)); });
                            row.col(|ui| { ui.label(&transaction.designation); });
                            row.col(|ui| { ui.label(format_montant(transaction.prix_unitaire, symbole)); });
                            row.col(|ui| { ui.label(transaction.nombre.to_string()); });
                            row.col(|ui| {
                                let color = match type_transaction {
                                    TypeTransaction::Revenu => Colors::SUCCESS,
                                    TypeTransaction::Depense => Colors::ERROR,
                                };
                                ui.colored_label(color, format_montant(transaction.prix_total, symbole));
                            });
                            row.col(|ui| {
                                ui.horizontal(|ui| {
                                    if ui.small_button(Icons::EDIT).clicked() {
                                        state.open_transaction_form(
                                            type_transaction,
                                            Some(transaction.id.clone()),
                                        );
                                    }
                                    if ui.small_button(Icons::DELETE).clicked() {
                                        state.show_confirm(
                                            &format!("Supprimer « {} » ?", transaction.designation),
                                            ConfirmAction::DeleteTransaction(transaction.id.clone()),
                                        );
                                    }
                                });
                            });
                        });
                    }
                });
        });
    }
}

fn summary_card(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(label).small().color(Colors::TEXT_SECONDARY));
                ui.label(RichText::new(value).size(20.0).strong().color(color));
            });
        });
}
