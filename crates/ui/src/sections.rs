use eframe::egui;
use folio_core::{Content, Project, Reveal, SectionId, ThemeToken};

use crate::theme::{self, ThemeMode};

const SECTION_GAP: f32 = 24.0;

/// Render one section and return its rect, which doubles as the anchor for
/// smooth-scroll targets and scroll-offset detection.
pub fn section(
    ui: &mut egui::Ui,
    id: SectionId,
    content: &Content,
    reveal: &Reveal,
    now: f64,
    mode: ThemeMode,
) -> egui::Rect {
    let inner = ui.scope(|ui| {
        heading(ui, id.label(), mode);
        ui.add_space(SECTION_GAP);
        match id {
            SectionId::About => about(ui, content, reveal, now, mode),
            SectionId::Experience => experience(ui, content, reveal, now, mode),
            SectionId::Projects => projects(ui, content, reveal, now, mode),
            SectionId::Education => education(ui, content, reveal, now, mode),
            SectionId::Skills => skills(ui, content, mode),
            SectionId::Extras => extras(ui, content, reveal, now, mode),
        }
    });
    inner.response.rect
}

pub fn hero(ui: &mut egui::Ui, content: &Content, mode: ThemeMode) {
    let primary = theme::resolve(ThemeToken::TextPrimary, mode);
    let accent = theme::resolve(ThemeToken::Accent, mode);

    ui.add_space(56.0);
    ui.vertical_centered(|ui| {
        let mut name = egui::text::LayoutJob::default();
        let display = egui::FontId::proportional(theme::FONT_DISPLAY);
        name.append(
            &content.personal.first_name,
            0.0,
            egui::TextFormat {
                font_id: display.clone(),
                color: primary,
                ..Default::default()
            },
        );
        name.append(
            &format!(" '{}' ", content.personal.nickname),
            0.0,
            egui::TextFormat {
                font_id: display.clone(),
                color: accent,
                ..Default::default()
            },
        );
        name.append(
            &content.personal.last_name,
            0.0,
            egui::TextFormat {
                font_id: display,
                color: primary,
                ..Default::default()
            },
        );
        ui.label(name);

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(&content.personal.title)
                .size(theme::FONT_EMPHASIS)
                .color(theme::resolve(ThemeToken::TextSecondary, mode)),
        );

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            // Center-ish: pad with half the leftover width.
            let link_width = 160.0;
            let pad = ((ui.available_width() - link_width) / 2.0).max(0.0);
            ui.add_space(pad);
            ui.hyperlink_to("GitHub", &content.links.github);
            ui.label(egui::RichText::new("|").color(theme::resolve(ThemeToken::Divider, mode)));
            ui.hyperlink_to("LinkedIn", &content.links.linkedin);
        });

        ui.add_space(24.0);
        let (bar, _) =
            ui.allocate_exact_size(egui::vec2(128.0, 1.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(bar, egui::CornerRadius::ZERO, theme::resolve(ThemeToken::Divider, mode));
    });

    ui.add_space(32.0);
    ui.columns(3, |cols| {
        let intros = [
            ("{ }", "import folio", "Building useful, impactful programs."),
            ("💼", "Experience", "Incoming intern, announcement pending."),
            ("🎓", "Academics", "Engineering undergrad, systems leaning."),
        ];
        for (col, (icon, title, body)) in cols.iter_mut().zip(intros) {
            card(col, mode, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(icon)
                            .size(theme::FONT_TITLE)
                            .color(theme::resolve(ThemeToken::Accent, mode)),
                    );
                    ui.label(
                        egui::RichText::new(title)
                            .size(theme::FONT_EMPHASIS)
                            .strong()
                            .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                    );
                    ui.label(
                        egui::RichText::new(body)
                            .color(theme::resolve(ThemeToken::TextMuted, mode)),
                    );
                });
            });
        }
    });
}

pub fn footer(ui: &mut egui::Ui, content: &Content, mode: ThemeMode) {
    ui.separator();
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(content.personal.display_name())
                .size(theme::FONT_EMPHASIS)
                .strong()
                .color(theme::resolve(ThemeToken::Brand, mode)),
        );
        ui.label(
            egui::RichText::new(format!(
                "{} at {}",
                content.personal.title, content.personal.university
            ))
            .color(theme::resolve(ThemeToken::TextMuted, mode)),
        );
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            let link_width = 160.0;
            let pad = ((ui.available_width() - link_width) / 2.0).max(0.0);
            ui.add_space(pad);
            ui.hyperlink_to("GitHub", &content.links.github);
            ui.hyperlink_to("LinkedIn", &content.links.linkedin);
        });
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!(
                "© 2026 {} {}. All rights reserved.",
                content.personal.first_name, content.personal.last_name
            ))
            .small()
            .color(theme::resolve(ThemeToken::TextMuted, mode)),
        );
    });
    ui.add_space(24.0);
}

fn about(ui: &mut egui::Ui, content: &Content, reveal: &Reveal, now: f64, mode: ThemeMode) {
    ui.columns(2, |cols| {
        revealed(&mut cols[0], reveal.progress(SectionId::About, 0, now), |ui| {
            card(ui, mode, |ui| {
                ui.label(
                    egui::RichText::new("Personal Info")
                        .size(theme::FONT_EMPHASIS)
                        .strong()
                        .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                );
                ui.add_space(8.0);
                let rows = [
                    ("University", content.personal.university.as_str()),
                    ("Year", content.personal.year.as_str()),
                    ("Location", content.personal.location.as_str()),
                    ("Email", content.personal.email.as_str()),
                ];
                for (label, value) in rows {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(label)
                                .color(theme::resolve(ThemeToken::TextMuted, mode)),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(value).color(
                                        theme::resolve(ThemeToken::TextPrimary, mode),
                                    ),
                                );
                            },
                        );
                    });
                }
            });
        });

        revealed(&mut cols[1], reveal.progress(SectionId::About, 1, now), |ui| {
            for paragraph in &content.tagline {
                ui.label(
                    egui::RichText::new(paragraph)
                        .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                );
                ui.add_space(8.0);
            }
        });
    });
}

fn experience(ui: &mut egui::Ui, content: &Content, reveal: &Reveal, now: f64, mode: ThemeMode) {
    for (i, exp) in content.experiences.iter().enumerate() {
        revealed(ui, reveal.progress(SectionId::Experience, i, now), |ui| {
            card(ui, mode, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&exp.title)
                                .size(theme::FONT_EMPHASIS)
                                .strong()
                                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                        );
                        ui.label(
                            egui::RichText::new(&exp.company)
                                .color(theme::resolve(ThemeToken::Accent, mode)),
                        );
                    });
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Min),
                        |ui| {
                            ui.label(
                                egui::RichText::new(&exp.duration)
                                    .color(theme::resolve(ThemeToken::TextMuted, mode)),
                            );
                        },
                    );
                });
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(&exp.description)
                        .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                );
                ui.add_space(6.0);
                chips(ui, &exp.technologies, mode);
            });
        });
        ui.add_space(12.0);
    }
}

fn projects(ui: &mut egui::Ui, content: &Content, reveal: &Reveal, now: f64, mode: ThemeMode) {
    ui.columns(2, |cols| {
        for (i, project) in content.projects.iter().enumerate() {
            let col = &mut cols[i % 2];
            revealed(col, reveal.progress(SectionId::Projects, i, now), |ui| {
                project_card(ui, project, mode);
            });
            col.add_space(12.0);
        }
    });
}

fn project_card(ui: &mut egui::Ui, project: &Project, mode: ThemeMode) {
    card(ui, mode, |ui| {
        // Initials banner in place of a screenshot.
        let (banner, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 72.0),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(
            banner,
            egui::CornerRadius::same(6),
            theme::resolve(ThemeToken::AccentSoft, mode),
        );
        ui.painter().text(
            banner.center(),
            egui::Align2::CENTER_CENTER,
            project.initials(),
            egui::FontId::proportional(28.0),
            theme::resolve(ThemeToken::TextPrimary, mode),
        );

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(&project.title)
                .size(theme::FONT_EMPHASIS)
                .strong()
                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
        );
        ui.label(
            egui::RichText::new(&project.description)
                .color(theme::resolve(ThemeToken::TextSecondary, mode)),
        );
        ui.add_space(6.0);
        chips(ui, &project.technologies, mode);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.hyperlink_to("Code", &project.repo);
            if let Some(link) = &project.link {
                ui.hyperlink_to("Live", link);
            }
        });
    });
}

fn education(ui: &mut egui::Ui, content: &Content, reveal: &Reveal, now: f64, mode: ThemeMode) {
    for (i, edu) in content.education.iter().enumerate() {
        revealed(ui, reveal.progress(SectionId::Education, i, now), |ui| {
            card(ui, mode, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&edu.degree)
                                .size(theme::FONT_EMPHASIS)
                                .strong()
                                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                        );
                        ui.label(
                            egui::RichText::new(&edu.school)
                                .color(theme::resolve(ThemeToken::Accent, mode)),
                        );
                    });
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Min),
                        |ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} • {}",
                                    edu.duration, edu.credential
                                ))
                                .color(theme::resolve(ThemeToken::TextMuted, mode)),
                            );
                        },
                    );
                });
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Relevant Coursework:")
                        .strong()
                        .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                );
                ui.add_space(4.0);
                chips(ui, &edu.coursework, mode);
            });
        });
        ui.add_space(12.0);
    }
}

fn skills(ui: &mut egui::Ui, content: &Content, mode: ThemeMode) {
    ui.columns(3, |cols| {
        for (i, skill) in content.skills.iter().enumerate() {
            let col = &mut cols[i % 3];
            card(col, mode, |ui| {
                ui.label(
                    egui::RichText::new(&skill.name)
                        .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                );
            });
            col.add_space(8.0);
        }
    });
}

fn extras(ui: &mut egui::Ui, content: &Content, reveal: &Reveal, now: f64, mode: ThemeMode) {
    for (i, extra) in content.extras.iter().enumerate() {
        revealed(ui, reveal.progress(SectionId::Extras, i, now), |ui| {
            card(ui, mode, |ui| {
                ui.label(
                    egui::RichText::new(&extra.title)
                        .size(theme::FONT_EMPHASIS)
                        .strong()
                        .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                );
                ui.label(
                    egui::RichText::new(&extra.detail)
                        .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                );
            });
        });
        ui.add_space(12.0);
    }
}

// ── building blocks ────────────────────────────────────────────────────────

fn heading(ui: &mut egui::Ui, text: &str, mode: ThemeMode) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
        );
        ui.add_space(4.0);
        let (bar, _) = ui.allocate_exact_size(egui::vec2(64.0, 3.0), egui::Sense::hover());
        ui.painter().rect_filled(
            bar,
            egui::CornerRadius::same(2),
            theme::resolve(ThemeToken::Accent, mode),
        );
    });
}

fn card(ui: &mut egui::Ui, mode: ThemeMode, add: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(theme::resolve(ThemeToken::Card, mode))
        .stroke(egui::Stroke::new(
            1.0,
            theme::resolve(ThemeToken::CardBorder, mode),
        ))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui);
        });
}

fn chips(ui: &mut egui::Ui, items: &[String], mode: ThemeMode) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            egui::Frame::new()
                .fill(theme::resolve(ThemeToken::ChipBackground, mode))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(item)
                            .small()
                            .color(theme::resolve(ThemeToken::ChipText, mode)),
                    );
                });
        }
    });
}

/// Wrap an entrance-animated block: opacity follows the reveal progress.
fn revealed(ui: &mut egui::Ui, progress: f32, add: impl FnOnce(&mut egui::Ui)) {
    ui.scope(|ui| {
        ui.set_opacity(progress);
        add(ui);
    });
}
