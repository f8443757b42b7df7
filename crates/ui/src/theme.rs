use folio_core::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Catppuccin Mocha palette
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        Surface => ResolvedColor::rgb(0x18, 0x18, 0x25),    // Mantle
        Divider => ResolvedColor::rgb(0x31, 0x32, 0x44),    // Surface0

        HeaderBackground => ResolvedColor::rgb(0x18, 0x18, 0x25), // Mantle
        NavActive => ResolvedColor::rgb(0x89, 0xb4, 0xfa),        // Blue
        NavInactive => ResolvedColor::rgb(0xa6, 0xad, 0xc8),      // Subtext0
        Brand => ResolvedColor::rgb(0x89, 0xb4, 0xfa),            // Blue

        Card => ResolvedColor::rgb(0x1e, 0x1e, 0x2e),           // Base
        CardBorder => ResolvedColor::rgb(0x31, 0x32, 0x44),     // Surface0
        CardBorderAccent => ResolvedColor::rgba(0x89, 0xb4, 0xfa, 120),

        TextPrimary => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),   // Text
        TextSecondary => ResolvedColor::rgb(0xba, 0xc2, 0xde), // Subtext1
        TextMuted => ResolvedColor::rgb(0xa6, 0xad, 0xc8),     // Subtext0

        Accent => ResolvedColor::rgb(0x89, 0xb4, 0xfa),          // Blue
        AccentSoft => ResolvedColor::rgba(0x89, 0xb4, 0xfa, 60),

        ChipBackground => ResolvedColor::rgb(0x45, 0x47, 0x5a), // Surface1
        ChipText => ResolvedColor::rgb(0xba, 0xc2, 0xde),       // Subtext1
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(255, 255, 255),
        Surface => ResolvedColor::rgb(245, 245, 248),
        Divider => ResolvedColor::rgb(210, 210, 220),

        HeaderBackground => ResolvedColor::rgb(248, 248, 250),
        NavActive => ResolvedColor::rgb(50, 110, 220),
        NavInactive => ResolvedColor::rgb(100, 100, 110),
        Brand => ResolvedColor::rgb(50, 110, 220),

        Card => ResolvedColor::rgb(250, 250, 252),
        CardBorder => ResolvedColor::rgb(210, 210, 220),
        CardBorderAccent => ResolvedColor::rgba(50, 110, 220, 120),

        TextPrimary => ResolvedColor::rgb(20, 20, 30),
        TextSecondary => ResolvedColor::rgb(80, 80, 100),
        TextMuted => ResolvedColor::rgb(100, 100, 110),

        Accent => ResolvedColor::rgb(50, 110, 220),
        AccentSoft => ResolvedColor::rgba(50, 110, 220, 50),

        ChipBackground => ResolvedColor::rgb(230, 230, 235),
        ChipText => ResolvedColor::rgb(60, 60, 70),
    }
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 44.0;
pub const FONT_TITLE: f32 = 24.0;
pub const FONT_EMPHASIS: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_CAPTION: f32 = 12.0;

// ── egui visual presets ────────────────────────────────────────────────────

/// Catppuccin Mocha dark visuals for egui widgets.
pub fn dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.window_fill = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.extreme_bg_color = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.faint_bg_color = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(0x31, 0x32, 0x44);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xba, 0xc2, 0xde));
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0x31, 0x32, 0x44));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x31, 0x32, 0x44);
    v.widgets.inactive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xba, 0xc2, 0xde));
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x45, 0x47, 0x5a);
    v.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0xcd, 0xd6, 0xf4));
    v.widgets.active.bg_fill = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x1e, 0x1e, 0x2e));
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x89, 0xb4, 0xfa, 60);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x89, 0xb4, 0xfa));
    v.window_corner_radius = egui::CornerRadius::same(8);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    v.widgets.active.corner_radius = egui::CornerRadius::same(6);
    v.widgets.open.corner_radius = egui::CornerRadius::same(6);
    v.hyperlink_color = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);
    v
}

/// Light visuals for egui widgets.
pub fn light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(255, 255, 255);
    v.window_fill = egui::Color32::from_rgb(250, 250, 252);
    v.extreme_bg_color = egui::Color32::from_rgb(255, 255, 255);
    v.faint_bg_color = egui::Color32::from_rgb(245, 245, 248);
    v.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(240, 240, 243);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(60, 60, 70));
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(210, 210, 215));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(230, 230, 235);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(220, 220, 228);
    v.widgets.active.bg_fill = egui::Color32::from_rgb(50, 110, 220);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(50, 110, 220, 50);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(50, 110, 220));
    v.window_corner_radius = egui::CornerRadius::same(8);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    v.widgets.active.corner_radius = egui::CornerRadius::same(6);
    v.widgets.open.corner_radius = egui::CornerRadius::same(6);
    v.hyperlink_color = egui::Color32::from_rgb(50, 110, 220);
    v
}

/// Apply the page's typography scale to egui styles.
pub fn apply_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_TITLE),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.spacing.interact_size.y = 26.0;
    ctx.set_style(style);
}
