//! Overlay widgets: key binding help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Views");
    key(&mut lines, "1-9", "Jump to view by number");
    key(&mut lines, "] / [", "Next / previous view");
    lines.push(Line::from(""));

    section(&mut lines, "Tabs");
    key(&mut lines, "Tab / Shift+Tab", "Next / previous tab");
    key(&mut lines, "l / h", "Next / previous tab");
    lines.push(Line::from(""));

    section(&mut lines, "Sections");
    key(&mut lines, "j / k", "Focus next / previous section");
    key(&mut lines, "g / G", "Focus first / last section");
    key(&mut lines, "Space / Enter", "Expand or collapse focused section");
    lines.push(Line::from(""));

    section(&mut lines, "General");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Each tab keeps its own expanded sections and focus.",
        theme::neutral(),
    )));

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
