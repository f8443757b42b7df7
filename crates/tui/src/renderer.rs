use std::io::stdout;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::{Content, NavController, SectionId, SectionLayout};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

/// Rows are mapped into the controller's logical-pixel domain at 20 units
/// per row, so the 100-unit lookahead bias works out to 5 rows.
const ROW_UNITS: f32 = 20.0;

struct Page<'a> {
    lines: Vec<Line<'a>>,
    layout: SectionLayout,
}

pub fn render_tui(content: &Content) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let page = build_page(content);
    let started = Instant::now();

    let mut nav = NavController::new();
    let mut scroll: f32 = 0.0;
    // Row the animated scroll is easing toward, when a navigation command
    // is in flight.
    let mut target: Option<f32> = None;

    loop {
        let now = started.elapsed().as_secs_f64();
        let term_size = terminal.size()?;
        let body_height = term_size.height.saturating_sub(2);
        let max_scroll = (page.lines.len() as f32 - f32::from(body_height)).max(0.0);

        // Ease toward a commanded section; the suppression window in the
        // controller covers the whole glide.
        if let Some(t) = target {
            scroll += (t - scroll) * 0.35;
            if (t - scroll).abs() < 0.5 {
                scroll = t;
                target = None;
            }
        }
        scroll = scroll.clamp(0.0, max_scroll);

        nav.on_scroll(scroll * ROW_UNITS, &page.layout, now);

        terminal.draw(|frame| {
            let area = frame.area();

            let labels: Vec<&str> = SectionId::ALL.iter().map(|s| s.label()).collect();
            let selected = SectionId::ALL
                .iter()
                .position(|s| *s == nav.active())
                .unwrap_or(0);
            let tabs = Tabs::new(labels)
                .select(selected)
                .style(Style::default().fg(Color::Gray).bg(Color::Black))
                .highlight_style(
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                );
            frame.render_widget(tabs, Rect::new(0, 0, area.width, 1));

            let body = Rect::new(0, 1, area.width, area.height.saturating_sub(2));
            let paragraph = Paragraph::new(page.lines.clone())
                .scroll((scroll as u16, 0))
                .style(Style::default().bg(Color::Black));
            frame.render_widget(paragraph, body);

            let hints = Line::from(
                " ↑/↓ scroll | ←/→ or 1-6 jump to section | q quit ",
            )
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(
                Paragraph::new(hints),
                Rect::new(0, area.height.saturating_sub(1), area.width, 1),
            );
        })?;

        // Handle input; the poll interval doubles as the animation tick.
        if event::poll(std::time::Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up => {
                        scroll = (scroll - 1.0).max(0.0);
                        target = None;
                    }
                    KeyCode::Down => {
                        scroll += 1.0;
                        target = None;
                    }
                    KeyCode::PageUp => {
                        scroll = (scroll - f32::from(body_height)).max(0.0);
                        target = None;
                    }
                    KeyCode::PageDown => {
                        scroll += f32::from(body_height);
                        target = None;
                    }
                    KeyCode::Left => {
                        let prev = SectionId::ALL
                            .iter()
                            .position(|s| *s == nav.active())
                            .unwrap_or(0)
                            .saturating_sub(1);
                        navigate(&mut nav, SectionId::ALL[prev], now, &page.layout, &mut target);
                    }
                    KeyCode::Right => {
                        let next = (SectionId::ALL
                            .iter()
                            .position(|s| *s == nav.active())
                            .unwrap_or(0)
                            + 1)
                        .min(SectionId::ALL.len() - 1);
                        navigate(&mut nav, SectionId::ALL[next], now, &page.layout, &mut target);
                    }
                    KeyCode::Char(c @ '1'..='6') => {
                        let idx = c as usize - '1' as usize;
                        navigate(&mut nav, SectionId::ALL[idx], now, &page.layout, &mut target);
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => {
                        scroll += 3.0;
                        target = None;
                    }
                    MouseEventKind::ScrollUp => {
                        scroll = (scroll - 3.0).max(0.0);
                        target = None;
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Issue a navigation command and start the glide toward its anchor.
/// A section without a recorded anchor still becomes active; the scroll
/// request just has nowhere to go.
fn navigate(
    nav: &mut NavController,
    id: SectionId,
    now: f64,
    layout: &SectionLayout,
    target: &mut Option<f32>,
) {
    let request = nav.navigate_to(id, now);
    if let Some(top) = layout.top(request.target) {
        *target = Some(top / ROW_UNITS);
    }
}

fn build_page(content: &Content) -> Page<'_> {
    let mut lines: Vec<Line<'_>> = Vec::new();
    let mut layout = SectionLayout::new();

    let title = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(Color::Blue);
    let body = Style::default().fg(Color::Gray);
    let muted = Style::default().fg(Color::DarkGray);

    // Hero
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(content.personal.first_name.clone(), title),
        Span::styled(format!(" '{}' ", content.personal.nickname), accent),
        Span::styled(content.personal.last_name.clone(), title),
    ]));
    lines.push(Line::styled(content.personal.title.clone(), body));
    lines.push(Line::styled(
        format!("{}  |  {}", content.links.github, content.links.linkedin),
        muted,
    ));
    lines.push(Line::default());

    for id in SectionId::ALL {
        layout.set(id, lines.len() as f32 * ROW_UNITS);
        lines.push(Line::styled(format!("── {} ──", id.label()), title));
        lines.push(Line::default());
        match id {
            SectionId::About => {
                lines.push(Line::styled(
                    format!(
                        "{} | {} | {}",
                        content.personal.university,
                        content.personal.year,
                        content.personal.location
                    ),
                    body,
                ));
                lines.push(Line::styled(content.personal.email.clone(), muted));
                lines.push(Line::default());
                for paragraph in &content.tagline {
                    lines.push(Line::styled(paragraph.clone(), body));
                    lines.push(Line::default());
                }
            }
            SectionId::Experience => {
                for exp in &content.experiences {
                    lines.push(Line::from(vec![
                        Span::styled(exp.title.clone(), title),
                        Span::styled(format!("  {}", exp.company), accent),
                        Span::styled(format!("  ({})", exp.duration), muted),
                    ]));
                    lines.push(Line::styled(exp.description.clone(), body));
                    lines.push(Line::styled(exp.technologies.join(" · "), muted));
                    lines.push(Line::default());
                }
            }
            SectionId::Projects => {
                for project in &content.projects {
                    lines.push(Line::styled(project.title.clone(), title));
                    lines.push(Line::styled(project.description.clone(), body));
                    lines.push(Line::styled(project.technologies.join(" · "), muted));
                    let mut links = format!("code: {}", project.repo);
                    if let Some(link) = &project.link {
                        links.push_str(&format!("  live: {link}"));
                    }
                    lines.push(Line::styled(links, accent));
                    lines.push(Line::default());
                }
            }
            SectionId::Education => {
                for edu in &content.education {
                    lines.push(Line::from(vec![
                        Span::styled(edu.degree.clone(), title),
                        Span::styled(format!("  {}", edu.school), accent),
                        Span::styled(
                            format!("  ({} • {})", edu.duration, edu.credential),
                            muted,
                        ),
                    ]));
                    lines.push(Line::styled(
                        format!("Coursework: {}", edu.coursework.join(" · ")),
                        body,
                    ));
                    lines.push(Line::default());
                }
            }
            SectionId::Skills => {
                let names: Vec<&str> =
                    content.skills.iter().map(|s| s.name.as_str()).collect();
                lines.push(Line::styled(names.join("  |  "), body));
                lines.push(Line::default());
            }
            SectionId::Extras => {
                for extra in &content.extras {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{}: ", extra.title), title),
                        Span::styled(extra.detail.clone(), body),
                    ]));
                }
                lines.push(Line::default());
            }
        }
        lines.push(Line::default());
    }

    lines.push(Line::styled(
        format!(
            "© 2026 {} {}",
            content.personal.first_name, content.personal.last_name
        ),
        muted,
    ));

    Page { lines, layout }
}
