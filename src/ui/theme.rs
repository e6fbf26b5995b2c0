use egui::{Color32, FontFamily, FontId, TextStyle, Visuals};

/// Configure l'apparence de l'application
pub fn configure_style(ctx: &egui::Context, dark_mode: bool) {
    let mut style = (*ctx.style()).clone();

    // Typographie
    style.text_styles = [
        (TextStyle::Heading, FontId::new(24.0, FontFamily::Proportional)),
        (TextStyle::Name("heading2".into()), FontId::new(20.0, FontFamily::Proportional)),
        (TextStyle::Name("heading3".into()), FontId::new(16.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
    ]
    .into();

    // Espacement
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12.0);

    if dark_mode {
        style.visuals = dark_visuals();
    } else {
        style.visuals = light_visuals();
    }

    ctx.set_style(style);
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    // Fonds
    visuals.panel_fill = Color32::from_rgb(28, 30, 34);
    visuals.window_fill = Color32::from_rgb(38, 40, 45);
    visuals.extreme_bg_color = Color32::from_rgb(20, 21, 24);

    // Widgets
    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(44, 46, 52);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(50, 52, 58);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(60, 64, 74);
    visuals.widgets.active.bg_fill = Color32::from_rgb(70, 76, 90);

    // Accent (bleu)
    visuals.selection.bg_fill = Color32::from_rgb(50, 100, 180);
    visuals.hyperlink_color = Color32::from_rgb(100, 155, 255);

    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    // Fonds
    visuals.panel_fill = Color32::from_rgb(248, 249, 250);
    visuals.window_fill = Color32::from_rgb(255, 255, 255);
    visuals.extreme_bg_color = Color32::from_rgb(240, 241, 243);

    // Widgets
    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(235, 236, 240);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(230, 231, 236);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(220, 222, 230);
    visuals.widgets.active.bg_fill = Color32::from_rgb(202, 206, 220);

    // Accent (bleu)
    visuals.selection.bg_fill = Color32::from_rgb(180, 210, 255);
    visuals.hyperlink_color = Color32::from_rgb(0, 100, 200);

    visuals
}

/// Palette de couleurs de l'application
pub struct Colors;

impl Colors {
    // Primaire
    pub const PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);
    pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(37, 99, 235);

    // Succès (revenus, soldes positifs)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    pub const SUCCESS_BG: Color32 = Color32::from_rgb(220, 252, 231);

    // Avertissement (stock faible, échéances)
    pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
    pub const WARNING_BG: Color32 = Color32::from_rgb(254, 249, 195);

    // Erreur (dépenses, soldes négatifs)
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
    pub const ERROR_BG: Color32 = Color32::from_rgb(254, 226, 226);

    // Info
    pub const INFO: Color32 = Color32::from_rgb(59, 130, 246);
    pub const INFO_BG: Color32 = Color32::from_rgb(219, 234, 254);

    // Texte
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);
}

/// Icônes (Unicode)
pub struct Icons;

impl Icons {
    pub const FINANCE: &'static str = "💰";
    pub const PERSONNEL: &'static str = "👥";
    pub const STOCK: &'static str = "📦";
    pub const IMMOBILIER: &'static str = "🏠";
    pub const VEHICULE: &'static str = "🚗";
    pub const ECOLE: &'static str = "🎓";
    pub const DEVIS: &'static str = "📄";
    pub const FACTURE: &'static str = "🧾";
    pub const SETTINGS: &'static str = "⚙";
    pub const DASHBOARD: &'static str = "📊";
    pub const ADD: &'static str = "➕";
    pub const EDIT: &'static str = "✏";
    pub const DELETE: &'static str = "🗑";
    pub const SAVE: &'static str = "💾";
    pub const PDF: &'static str = "📤";
    pub const PRINT: &'static str = "🖨";
    pub const HISTORY: &'static str = "📜";
    pub const WRENCH: &'static str = "🔧";
    pub const CONVERT: &'static str = "🔁";
    pub const CHECK: &'static str = "✓";
    pub const CROSS: &'static str = "✗";
    pub const ARROW_LEFT: &'static str = "←";
    pub const ARROW_RIGHT: &'static str = "→";
    pub const CALENDAR: &'static str = "📅";
    pub const LOCK: &'static str = "🔒";
    pub const USER: &'static str = "👤";
}
