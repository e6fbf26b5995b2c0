//! Application principale GESTION BKS

use eframe::egui;

use crate::models::AppSettings;
use crate::store::Erp;
use crate::ui::{
    modals::{
        ClassFormModal, ConfirmDialog, DevisFormModal, FactureFormModal, GradeFormModal,
        MaintenanceFormModal, MaintenanceHistoryDialog, PaySlipDialog, PersonnelFormModal,
        PropertyFormModal, StockHistoryDialog, StockItemFormModal, StockMovementFormModal,
        StudentFormModal, SubjectFormModal, TransactionFormModal, VehicleFormModal,
    },
    state::AppState,
    theme::configure_style,
    views::{
        ClassDetailView, ConfigurationView, DashboardView, DevisFacturesView, FinanceView,
        ImmobilierView, LoginView, ParcAutoView, PersonnelView, SchoolView, StockView,
        StudentDetailView,
    },
    View,
};

/// Application principale
pub struct GestionBksApp {
    erp: Erp,
    state: AppState,
    app_settings: AppSettings,

    // Vues
    login: LoginView,
    dashboard: DashboardView,
    finance: FinanceView,
    personnel: PersonnelView,
    stock: StockView,
    immobilier: ImmobilierView,
    parcauto: ParcAutoView,
    school: SchoolView,
    class_detail: ClassDetailView,
    student_detail: StudentDetailView,
    devis_factures: DevisFacturesView,
    configuration: ConfigurationView,

    // Modales
    transaction_form: TransactionFormModal,
    personnel_form: PersonnelFormModal,
    stock_item_form: StockItemFormModal,
    stock_movement_form: StockMovementFormModal,
    property_form: PropertyFormModal,
    vehicle_form: VehicleFormModal,
    maintenance_form: MaintenanceFormModal,
    class_form: ClassFormModal,
    student_form: StudentFormModal,
    subject_form: SubjectFormModal,
    grade_form: GradeFormModal,
    devis_form: DevisFormModal,
    facture_form: FactureFormModal,

    // Interne
    style_initialized: bool,
}

impl GestionBksApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let app_settings = AppSettings::load();

        let mut state = AppState::new();
        state.current_view = View::Login;
        state.dark_mode = app_settings.dark_mode;

        Self {
            erp: Erp::new(),
            state,
            app_settings,
            login: LoginView::new(),
            dashboard: DashboardView::new(),
            finance: FinanceView::new(),
            personnel: PersonnelView::new(),
            stock: StockView::new(),
            immobilier: ImmobilierView::new(),
            parcauto: ParcAutoView::new(),
            school: SchoolView::new(),
            class_detail: ClassDetailView::new(),
            student_detail: StudentDetailView::new(),
            devis_factures: DevisFacturesView::new(),
            configuration: ConfigurationView::new(),
            transaction_form: TransactionFormModal::new(),
            personnel_form: PersonnelFormModal::new(),
            stock_item_form: StockItemFormModal::new(),
            stock_movement_form: StockMovementFormModal::new(),
            property_form: PropertyFormModal::new(),
            vehicle_form: VehicleFormModal::new(),
            maintenance_form: MaintenanceFormModal::new(),
            class_form: ClassFormModal::new(),
            student_form: StudentFormModal::new(),
            subject_form: SubjectFormModal::new(),
            grade_form: GradeFormModal::new(),
            devis_form: DevisFormModal::new(),
            facture_form: FactureFormModal::new(),
            style_initialized: false,
        }
    }
}

impl eframe::App for GestionBksApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_initialized {
            configure_style(ctx, self.state.dark_mode);
            self.style_initialized = true;
        }

        self.state.clear_old_status();

        // Écran de connexion, sans barre de navigation
        if self.state.current_view == View::Login {
            egui::CentralPanel::default().show(ctx, |ui| {
                self.login.show(ui, &mut self.state);
            });
            return;
        }

        // Barre de navigation
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("GESTION BKS");
                ui.separator();

                let nav_items = [
                    (View::Dashboard, "📊 Accueil"),
                    (View::Finance, "💰 Finance"),
                    (View::Personnel, "👥 Personnel"),
                    (View::Stock, "📦 Stock"),
                    (View::Immobilier, "🏠 Immobilier"),
                    (View::ParcAuto, "🚗 Parc auto"),
                    (View::School, "🎓 École"),
                    (View::DevisFactures, "📄 Devis & Factures"),
                ];

                for (view, label) in nav_items {
                    let selected = self.state.current_view == view
                        || (view == View::School
                            && matches!(
                                self.state.current_view,
                                View::ClassDetail | View::StudentDetail
                            ));
                    if ui.selectable_label(selected, label).clicked() {
                        self.state.navigate(view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Déconnexion
                    if ui.button("🔒").on_hover_text("Se déconnecter").clicked() {
                        self.state.navigate(View::Login);
                        self.state.show_info("Vous êtes déconnecté");
                    }

                    // Mode sombre
                    let mode_icon = if self.state.dark_mode { "🌙" } else { "☀" };
                    if ui.button(mode_icon).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        configure_style(ctx, self.state.dark_mode);
                        self.app_settings.dark_mode = self.state.dark_mode;
                        if let Err(e) = self.app_settings.save() {
                            tracing::warn!("Impossible d'enregistrer les préférences : {e}");
                        }
                    }

                    // Configuration
                    if ui
                        .selectable_label(self.state.current_view == View::Configuration, "⚙")
                        .on_hover_text("Configuration")
                        .clicked()
                    {
                        self.configuration.reload();
                        self.state.navigate(View::Configuration);
                    }

                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .small()
                            .weak(),
                    );
                });
            });
        });

        // Barre de statut
        if let Some(ref status) = self.state.status_message {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                let color = match status.status_type {
                    crate::ui::StatusType::Success => crate::ui::theme::Colors::SUCCESS,
                    crate::ui::StatusType::Error => crate::ui::theme::Colors::ERROR,
                    crate::ui::StatusType::Warning => crate::ui::theme::Colors::WARNING,
                    crate::ui::StatusType::Info => crate::ui::theme::Colors::INFO,
                };
                ui.colored_label(color, &status.text);
            });
        }

        // Contenu principal
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_view {
                View::Login => {} // Traité plus haut avec retour anticipé
                View::Dashboard => self.dashboard.show(ui, &mut self.state, &mut self.erp),
                View::Finance => self.finance.show(ui, &mut self.state, &mut self.erp),
                View::Personnel => self.personnel.show(ui, &mut self.state, &mut self.erp),
                View::Stock => self.stock.show(ui, &mut self.state, &mut self.erp),
                View::Immobilier => self.immobilier.show(ui, &mut self.state, &mut self.erp),
                View::ParcAuto => self.parcauto.show(ui, &mut self.state, &mut self.erp),
                View::School => self.school.show(ui, &mut self.state, &mut self.erp),
                View::ClassDetail => self.class_detail.show(ui, &mut self.state, &mut self.erp),
                View::StudentDetail => {
                    self.student_detail.show(ui, &mut self.state, &mut self.erp)
                }
                View::DevisFactures => {
                    self.devis_factures.show(ui, &mut self.state, &mut self.erp)
                }
                View::Configuration => {
                    self.configuration.show(ui, &mut self.state, &mut self.erp)
                }
            }
        });

        // Modales
        if self.state.show_transaction_form
            && self.transaction_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_transaction_form();
        }

        if self.state.show_personnel_form
            && self.personnel_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_personnel_form();
        }

        if self.state.fiche_affichee.is_some()
            && PaySlipDialog::show(ctx, &mut self.state, &self.erp)
        {
            self.state.fiche_affichee = None;
        }

        if self.state.show_stock_item_form
            && self.stock_item_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_stock_item_form();
        }

        if self.state.show_stock_movement_form
            && self.stock_movement_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_stock_movement_form();
        }

        if self.state.show_stock_history
            && StockHistoryDialog::show(ctx, &mut self.state, &self.erp)
        {
            self.state.show_stock_history = false;
        }

        if self.state.show_property_form
            && self.property_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_property_form();
        }

        if self.state.show_vehicle_form
            && self.vehicle_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_vehicle_form();
        }

        if self.state.show_maintenance_form
            && self.maintenance_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_maintenance_form();
        }

        if self.state.show_maintenance_history
            && MaintenanceHistoryDialog::show(ctx, &mut self.state, &self.erp)
        {
            self.state.show_maintenance_history = false;
        }

        if self.state.show_class_form
            && self.class_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.show_class_form = false;
        }

        if self.state.show_student_form
            && self.student_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.show_student_form = false;
            self.state.editing_student_id = None;
        }

        if self.state.show_subject_form
            && self.subject_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.show_subject_form = false;
            self.state.editing_subject_id = None;
        }

        if self.state.show_grade_form
            && self.grade_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.show_grade_form = false;
            self.state.editing_grade_id = None;
        }

        if self.state.show_devis_form
            && self.devis_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_devis_form();
        }

        if self.state.show_facture_form
            && self.facture_form.show(ctx, &mut self.state, &mut self.erp)
        {
            self.state.close_facture_form();
        }

        if self.state.show_confirm_dialog {
            ConfirmDialog::show(ctx, &mut self.state, &mut self.erp);
        }
    }
}
