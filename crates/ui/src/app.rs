use eframe::egui;
use folio_core::{Content, NavController, Reveal, SectionId, SectionLayout, ThemeToken};

use crate::sections;
use crate::theme::{self, ThemeMode};

/// Main application state.
pub struct PortfolioApp {
    content: Content,
    /// Owns the active-section highlight.
    nav: NavController,
    /// Section anchor offsets in content space, refreshed every frame.
    layout: SectionLayout,
    /// Entrance-animation bookkeeping.
    reveal: Reveal,
    theme_mode: ThemeMode,
    /// Section a just-issued navigation command wants scrolled into view.
    /// Consumed (at most once) while laying out the page, then dropped:
    /// a target without a rendered anchor is silently a no-op.
    pending_scroll: Option<SectionId>,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(theme::dark_visuals());
        theme::apply_typography(&cc.egui_ctx);

        Self {
            content: Content::builtin(),
            nav: NavController::new(),
            layout: SectionLayout::new(),
            reveal: Reveal::new(),
            theme_mode: ThemeMode::Dark,
            pending_scroll: None,
        }
    }

    fn header(&mut self, ctx: &egui::Context, now: f64) {
        let frame = egui::Frame::new()
            .fill(theme::resolve(ThemeToken::HeaderBackground, self.theme_mode))
            .inner_margin(egui::Margin::symmetric(16, 10));

        egui::TopBottomPanel::top("header").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("folio")
                        .size(theme::FONT_EMPHASIS)
                        .strong()
                        .color(theme::resolve(ThemeToken::Brand, self.theme_mode)),
                );
                ui.separator();

                for id in SectionId::ALL {
                    let active = self.nav.active() == id;
                    let color = theme::resolve(
                        if active {
                            ThemeToken::NavActive
                        } else {
                            ThemeToken::NavInactive
                        },
                        self.theme_mode,
                    );
                    let mut text = egui::RichText::new(id.label()).color(color);
                    if active {
                        text = text.underline();
                    }
                    let button = egui::Button::new(text).frame(false);
                    if ui.add(button).clicked() {
                        let request = self.nav.navigate_to(id, now);
                        self.pending_scroll = Some(request.target);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = match self.theme_mode {
                        ThemeMode::Dark => "🌙 Dark",
                        ThemeMode::Light => "☀ Light",
                    };
                    if ui.button(label).clicked() {
                        self.theme_mode = match self.theme_mode {
                            ThemeMode::Dark => {
                                ui.ctx().set_visuals(theme::light_visuals());
                                ThemeMode::Light
                            }
                            ThemeMode::Light => {
                                ui.ctx().set_visuals(theme::dark_visuals());
                                ThemeMode::Dark
                            }
                        };
                    }
                });
            });
        });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        self.header(ctx, now);

        let background = theme::resolve(ThemeToken::Background, self.theme_mode);
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(background))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let viewport = ui.clip_rect();
                        let mut anchors: Vec<(SectionId, egui::Rect)> =
                            Vec::with_capacity(SectionId::ALL.len());

                        sections::hero(ui, &self.content, self.theme_mode);

                        for id in SectionId::ALL {
                            ui.add_space(48.0);
                            let rect = sections::section(
                                ui,
                                id,
                                &self.content,
                                &self.reveal,
                                now,
                                self.theme_mode,
                            );
                            if rect.intersects(viewport) {
                                self.reveal.mark_visible(id, now);
                            }
                            if self.pending_scroll == Some(id) {
                                // egui animates programmatic scrolls; the
                                // request is not awaited.
                                ui.scroll_to_rect(rect, Some(egui::Align::Min));
                            }
                            anchors.push((id, rect));
                        }

                        ui.add_space(48.0);
                        sections::footer(ui, &self.content, self.theme_mode);
                        anchors
                    });

                // Translate this frame's screen rects into content-space
                // anchor offsets, then feed the controller the live offset.
                let offset = output.state.offset.y;
                for (id, rect) in &output.inner {
                    self.layout
                        .set(*id, rect.top() - output.inner_rect.top() + offset);
                }
                self.nav.on_scroll(offset, &self.layout, now);
            });

        self.pending_scroll = None;

        // Keep painting while the suppression window or an entrance is
        // running, so expiry is observed without any input.
        if self.nav.is_suppressed(now) || self.reveal.animating(now) {
            ctx.request_repaint();
        }
    }
}
