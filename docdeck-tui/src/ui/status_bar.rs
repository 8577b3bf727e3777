//! Bottom status bar: key hints, last status message, revision.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let views = app.nav.view_selector().views().len();
    spans.push(Span::styled(
        format!(" 1-{views}:view Tab:tab j/k:section Space:toggle ?:help q:quit"),
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let open = app.nav.expanded_count();
    if open > 0 {
        spans.push(Span::styled(format!("  {open} open"), theme::positive()));
    }

    spans.push(Span::styled(
        format!("  r{}", app.nav.revision()),
        theme::muted(),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
