use crate::models::{FicheDePaie, TypeTransaction};

/// Vue courante de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard,
    Finance,
    Personnel,
    Stock,
    Immobilier,
    ParcAuto,
    School,
    ClassDetail,
    StudentDetail,
    DevisFactures,
    Configuration,
}

/// État centralisé de l'interface
#[derive(Debug, Default)]
pub struct AppState {
    /// Vue courante
    pub current_view: View,

    /// Sélections courantes (pour les vues de détail et les dialogues)
    pub selected_class_id: Option<String>,
    pub selected_student_id: Option<String>,
    pub selected_item_id: Option<String>,
    pub selected_vehicle_id: Option<String>,
    pub selected_personnel_id: Option<String>,

    // Finance
    pub show_transaction_form: bool,
    pub transaction_form_type: Option<TypeTransaction>,
    pub editing_transaction_id: Option<String>,

    // Personnel
    pub show_personnel_form: bool,
    pub editing_personnel_id: Option<String>,
    /// Fiche de paie affichée dans le dialogue (instantané courant)
    pub fiche_affichee: Option<FicheDePaie>,

    // Stock
    pub show_stock_item_form: bool,
    pub editing_stock_item_id: Option<String>,
    pub show_stock_movement_form: bool,
    pub show_stock_history: bool,

    // Immobilier
    pub show_property_form: bool,
    pub editing_property_id: Option<String>,

    // Parc auto
    pub show_vehicle_form: bool,
    pub editing_vehicle_id: Option<String>,
    pub show_maintenance_form: bool,
    pub show_maintenance_history: bool,

    // École
    pub show_class_form: bool,
    pub show_student_form: bool,
    pub editing_student_id: Option<String>,
    pub show_subject_form: bool,
    pub editing_subject_id: Option<String>,
    pub show_grade_form: bool,
    pub editing_grade_id: Option<String>,

    // Devis & factures
    pub show_devis_form: bool,
    pub editing_devis_id: Option<String>,
    pub show_facture_form: bool,
    pub editing_facture_id: Option<String>,
    /// Facture pré-remplie issue d'une conversion de devis
    pub facture_prefill: Option<crate::models::Facture>,

    /// Dialogue de confirmation
    pub show_confirm_dialog: bool,
    pub confirm_dialog_message: String,
    pub confirm_dialog_action: Option<ConfirmAction>,

    /// Message de statut (toast)
    pub status_message: Option<StatusMessage>,

    /// Mode sombre
    pub dark_mode: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigue vers une vue
    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
    }

    /// Ouvre le détail d'une classe
    pub fn navigate_to_class(&mut self, class_id: &str) {
        self.selected_class_id = Some(class_id.to_string());
        self.current_view = View::ClassDetail;
    }

    /// Ouvre le détail d'un élève
    pub fn navigate_to_student(&mut self, student_id: &str) {
        self.selected_student_id = Some(student_id.to_string());
        self.current_view = View::StudentDetail;
    }

    // ----- Formulaires -----

    pub fn open_transaction_form(&mut self, type_transaction: TypeTransaction, editing: Option<String>) {
        self.transaction_form_type = Some(type_transaction);
        self.editing_transaction_id = editing;
        self.show_transaction_form = true;
    }

    pub fn close_transaction_form(&mut self) {
        self.show_transaction_form = false;
        self.transaction_form_type = None;
        self.editing_transaction_id = None;
    }

    pub fn open_personnel_form(&mut self, editing: Option<String>) {
        self.editing_personnel_id = editing;
        self.show_personnel_form = true;
    }

    pub fn close_personnel_form(&mut self) {
        self.show_personnel_form = false;
        self.editing_personnel_id = None;
    }

    pub fn open_stock_item_form(&mut self, editing: Option<String>) {
        self.editing_stock_item_id = editing;
        self.show_stock_item_form = true;
    }

    pub fn close_stock_item_form(&mut self) {
        self.show_stock_item_form = false;
        self.editing_stock_item_id = None;
    }

    pub fn open_stock_movement_form(&mut self, item_id: &str) {
        self.selected_item_id = Some(item_id.to_string());
        self.show_stock_movement_form = true;
    }

    pub fn close_stock_movement_form(&mut self) {
        self.show_stock_movement_form = false;
        self.selected_item_id = None;
    }

    pub fn open_property_form(&mut self, editing: Option<String>) {
        self.editing_property_id = editing;
        self.show_property_form = true;
    }

    pub fn close_property_form(&mut self) {
        self.show_property_form = false;
        self.editing_property_id = None;
    }

    pub fn open_vehicle_form(&mut self, editing: Option<String>) {
        self.editing_vehicle_id = editing;
        self.show_vehicle_form = true;
    }

    pub fn close_vehicle_form(&mut self) {
        self.show_vehicle_form = false;
        self.editing_vehicle_id = None;
    }

    pub fn open_maintenance_form(&mut self, vehicle_id: &str) {
        self.selected_vehicle_id = Some(vehicle_id.to_string());
        self.show_maintenance_form = true;
    }

    pub fn close_maintenance_form(&mut self) {
        self.show_maintenance_form = false;
    }

    pub fn open_devis_form(&mut self, editing: Option<String>) {
        self.editing_devis_id = editing;
        self.show_devis_form = true;
    }

    pub fn close_devis_form(&mut self) {
        self.show_devis_form = false;
        self.editing_devis_id = None;
    }

    pub fn open_facture_form(&mut self, editing: Option<String>) {
        self.editing_facture_id = editing;
        self.show_facture_form = true;
    }

    pub fn close_facture_form(&mut self) {
        self.show_facture_form = false;
        self.editing_facture_id = None;
        self.facture_prefill = None;
    }

    // ----- Confirmation -----

    pub fn show_confirm(&mut self, message: &str, action: ConfirmAction) {
        self.confirm_dialog_message = message.to_string();
        self.confirm_dialog_action = Some(action);
        self.show_confirm_dialog = true;
    }

    pub fn close_confirm(&mut self) {
        self.show_confirm_dialog = false;
        self.confirm_dialog_action = None;
    }

    // ----- Messages de statut -----

    pub fn show_status(&mut self, message: &str, status_type: StatusType) {
        self.status_message = Some(StatusMessage {
            text: message.to_string(),
            status_type,
            created_at: std::time::Instant::now(),
        });
    }

    pub fn show_success(&mut self, message: &str) {
        self.show_status(message, StatusType::Success);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_status(message, StatusType::Error);
    }

    pub fn show_info(&mut self, message: &str) {
        self.show_status(message, StatusType::Info);
    }

    /// Efface le message de statut s'il est trop ancien
    pub fn clear_old_status(&mut self) {
        if let Some(ref status) = self.status_message {
            if status.created_at.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }
}

/// Action à confirmer avant exécution
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteTransaction(String),
    DeletePersonnel(String),
    DeleteStockItem(String),
    DeleteProperty(String),
    DeleteVehicle(String),
    DeleteClass(String),
    DeleteStudent(String),
    DeleteSubject(String),
    DeleteGrade(String),
    DeleteDevis(String),
    DeleteFacture(String),
}

/// Message de statut affiché dans la barre du bas
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub status_type: StatusType,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Success,
    Error,
    Info,
    Warning,
}
