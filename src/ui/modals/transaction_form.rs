use egui::{self, RichText};

use crate::models::{Transaction, TypeTransaction};
use crate::store::Erp;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};
use crate::utils::{date::{format_date, parse_date}, format::format_montant};

#[derive(Default)]
struct TransactionFormData {
    date: String,
    designation: String,
    prix_unitaire: String,
    nombre: String,
}

pub struct TransactionFormModal {
    form_data: TransactionFormData,
    error_message: Option<String>,
    loaded: bool,
}

impl TransactionFormModal {
    pub fn new() -> Self {
        Self {
            form_data: TransactionFormData::default(),
            error_message: None,
            loaded: false,
        }
    }

    /// Affiche la modale et retourne true si elle doit se fermer
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, erp: &mut Erp) -> bool {
        let mut should_close = false;

        let type_transaction = state.transaction_form_type.unwrap_or(TypeTransaction::Revenu);

        if !self.loaded {
            if let Some(ref id) = state.editing_transaction_id {
                if let Some(transaction) = erp.finance.par_id(id) {
                    self.form_data = TransactionFormData {
                        date: format_date(&transaction.date),
                        designation: transaction.designation.clone(),
                        prix_unitaire: transaction.prix_unitaire.to_string(),
                        nombre: transaction.nombre.to_string(),
                    };
                }
            } else {
                self.form_data = TransactionFormData {
                    date: format_date(&chrono::Utc::now().date_naive()),
                    nombre: "1".to_string(),
                    ..Default::default()
                };
            }
            self.loaded = true;
        }

        let title = match (state.editing_transaction_id.is_some(), type_transaction) {
            (true, TypeTransaction::Revenu) => "Modifier le revenu",
            (true, TypeTransaction::Depense) => "Modifier la dépense",
            (false, TypeTransaction::Revenu) => "Nouveau revenu",
            (false, TypeTransaction::Depense) => "Nouvelle dépense",
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(380.0);

                egui::Grid::new("transaction_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Date :");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form_data.date)
                                    .desired_width(100.0),
                            );
                            ui.label(RichText::new("AAAA-MM-JJ").small().color(Colors::TEXT_MUTED));
                        });
                        ui.end_row();

                        ui.label("Désignation :");
                        ui.text_edit_singleline(&mut self.form_data.designation);
                        ui.end_row();

                        ui.label("Prix unitaire :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.prix_unitaire)
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Nombre :");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.nombre)
                                .desired_width(100.0),
                        );
                        ui.end_row();
                    });

                // Total dérivé, affiché en continu
                if let (Ok(prix), Ok(nombre)) = (
                    self.form_data.prix_unitaire.trim().parse::<f64>(),
                    self.form_data.nombre.trim().parse::<u32>(),
                ) {
                    let total = Transaction::calculer_total(prix, nombre);
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!(
                            "Prix total : {}",
                            format_montant(total, erp.symbole_monetaire())
                        ))
                        .strong(),
                    );
                }

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
                            match self.save(state, erp, type_transaction) {
                                Ok(_) => {
                                    self.reset();
                                    should_close = true;
                                    state.show_success("Transaction enregistrée !");
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

    fn save(
        &mut self,
        state: &AppState,
        erp: &mut Erp,
        type_transaction: TypeTransaction,
    ) -> anyhow::Result<()> {
        let date = parse_date(self.form_data.date.trim())
            .ok_or_else(|| anyhow::anyhow!("Date invalide (utiliser AAAA-MM-JJ)"))?;
        let prix_unitaire: f64 = self
            .form_data
            .prix_unitaire
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Prix unitaire invalide"))?;
        let nombre: u32 = self
            .form_data
            .nombre
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Le nombre doit être un entier positif"))?;

        let transaction = Transaction {
            id: state.editing_transaction_id.clone().unwrap_or_default(),
            date,
            designation: self.form_data.designation.trim().to_string(),
            prix_unitaire,
            nombre,
            prix_total: Transaction::calculer_total(prix_unitaire, nombre),
            type_transaction,
        };
        transaction.valider()?;

        if let Some(ref id) = state.editing_transaction_id {
            erp.finance.modifier(id, transaction)?;
        } else {
            erp.finance.ajouter(transaction);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.form_data = TransactionFormData::default();
        self.error_message = None;
        self.loaded = false;
    }
}
