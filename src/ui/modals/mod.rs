pub mod class_form;
pub mod confirm_dialog;
pub mod devis_form;
pub mod facture_form;
pub mod grade_form;
pub mod line_items;
pub mod maintenance_form;
pub mod maintenance_history;
pub mod payslip_dialog;
pub mod personnel_form;
pub mod property_form;
pub mod stock_history;
pub mod stock_item_form;
pub mod stock_movement_form;
pub mod student_form;
pub mod subject_form;
pub mod transaction_form;
pub mod vehicle_form;

pub use class_form::ClassFormModal;
pub use confirm_dialog::ConfirmDialog;
pub use devis_form::DevisFormModal;
pub use facture_form::FactureFormModal;
pub use grade_form::GradeFormModal;
pub use maintenance_form::MaintenanceFormModal;
pub use maintenance_history::MaintenanceHistoryDialog;
pub use payslip_dialog::PaySlipDialog;
pub use personnel_form::PersonnelFormModal;
pub use property_form::PropertyFormModal;
pub use stock_history::StockHistoryDialog;
pub use stock_item_form::StockItemFormModal;
pub use stock_movement_form::StockMovementFormModal;
pub use student_form::StudentFormModal;
pub use subject_form::SubjectFormModal;
pub use transaction_form::TransactionFormModal;
pub use vehicle_form::VehicleFormModal;
