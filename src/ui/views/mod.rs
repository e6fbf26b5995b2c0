mod class_detail;
mod configuration;
mod dashboard;
mod devis_factures;
mod finance;
mod immobilier;
mod login;
mod parcauto;
mod personnel;
mod school;
mod stock;
mod student_detail;

pub use class_detail::ClassDetailView;
pub use configuration::ConfigurationView;
pub use dashboard::DashboardView;
pub use devis_factures::DevisFacturesView;
pub use finance::FinanceView;
pub use immobilier::ImmobilierView;
pub use login::LoginView;
pub use parcauto::ParcAutoView;
pub use personnel::PersonnelView;
pub use school::SchoolView;
pub use stock::StockView;
pub use student_detail::StudentDetailView;
