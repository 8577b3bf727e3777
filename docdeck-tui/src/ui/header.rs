//! Header: catalog title, view bar and the active view's tab bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let catalog = app.nav.catalog();
    let mut title = vec![Span::styled(format!(" {}", catalog.title()), theme::accent_bold())];
    if let Some(subtitle) = catalog.subtitle() {
        title.push(Span::styled(format!("  {subtitle}"), theme::muted()));
    }
    f.render_widget(Paragraph::new(Line::from(title)), rows[0]);

    let views = app.nav.view_selector();
    let view_titles: Vec<Line> = catalog
        .views()
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!("{} {}", i + 1, v.label)))
        .collect();
    let view_bar = Tabs::new(view_titles)
        .select(views.index())
        .style(theme::muted())
        .highlight_style(theme::focused())
        .divider(Span::styled("│", theme::muted()));
    f.render_widget(view_bar, rows[1]);

    if let (Some(view), Some(state)) = (
        app.nav.current_view_spec(),
        app.nav.view_state(app.nav.current_view().as_str()),
    ) {
        let tab_titles: Vec<Line> = view.tabs.iter().map(|t| Line::from(t.label.as_str())).collect();
        let tab_bar = Tabs::new(tab_titles)
            .select(state.tabs().index())
            .style(theme::muted())
            .highlight_style(theme::accent_bold())
            .divider(Span::styled("·", theme::muted()));
        f.render_widget(tab_bar, rows[2]);
    }
}
