//! Content panel: lays out the active `ContentTree` as terminal lines.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use docdeck_core::{ContentNode, ContentPayload, ContentTree};

use crate::app::AppState;
use crate::theme;

const INDENT: usize = 4;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let tree = match app.nav.render() {
        Ok(tree) => tree,
        Err(err) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::negative())
                .title(" Render failed ")
                .title_style(theme::negative());
            let para = Paragraph::new(Span::styled(err.to_string(), theme::negative()))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(para, area);
            return;
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} › {} ", tree.view_label, tree.tab_label))
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let focused = app.focused_section();
    let (lines, focus_line) = tree_lines(&tree, focused.as_ref().map(|s| s.as_str()));

    let offset = focus_line.map_or(0, |line| scroll_offset(&lines[..line], inner));

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(para, inner);
}

/// Rows to scroll so the line after `above` sits in the upper third of
/// `area`. Counts wrapped rows, not logical lines.
pub fn scroll_offset(above: &[Line<'static>], area: Rect) -> u16 {
    let rows = Paragraph::new(above.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(area.width);
    let offset = rows.saturating_sub(usize::from(area.height) / 3);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Lay out `tree`, returning the lines and the index of the focused
/// section's summary line.
pub fn tree_lines(tree: &ContentTree<'_>, focused: Option<&str>) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut focus_line = None;

    for node in &tree.nodes {
        match node {
            ContentNode::Heading { text } => {
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(text.to_string(), theme::accent_bold())));
            }
            ContentNode::Block { payload, .. } => {
                lines.push(Line::from(""));
                payload_lines(&mut lines, payload, 1);
            }
            ContentNode::Section {
                id,
                summary,
                expanded,
                body,
            } => {
                let is_focused = focused == Some(id.as_str());
                if is_focused {
                    focus_line = Some(lines.len());
                }
                let marker = if *expanded { "▾" } else { "▸" };
                let summary_style = if is_focused {
                    theme::focused()
                } else {
                    theme::text()
                };
                lines.push(Line::from(vec![
                    Span::styled(format!(" {marker} "), theme::disclosure(*expanded)),
                    Span::styled(summary.to_string(), summary_style),
                ]));
                if let Some(payload) = body {
                    payload_lines(&mut lines, payload, INDENT);
                    lines.push(Line::from(""));
                }
            }
        }
    }
    (lines, focus_line)
}

fn payload_lines(lines: &mut Vec<Line<'static>>, payload: &ContentPayload, indent: usize) {
    let pad = " ".repeat(indent);
    let style = theme::payload(payload.kind());

    if let Some(title) = payload.title() {
        lines.push(Line::from(Span::styled(format!("{pad}{title}"), theme::bold())));
    }

    match payload {
        ContentPayload::Text { body, .. } => {
            lines.push(Line::from(Span::styled(format!("{pad}{body}"), style)));
        }
        ContentPayload::List { items, .. } => {
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled(format!("{pad}• "), theme::accent()),
                    Span::styled(item.clone(), style),
                ]));
            }
        }
        ContentPayload::Table { columns, rows, .. } => {
            let widths = column_widths(columns, rows);
            lines.push(Line::from(Span::styled(
                format!("{pad}{}", table_row(columns, &widths)),
                theme::accent_bold(),
            )));
            let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
            lines.push(Line::from(Span::styled(
                format!("{pad}{}", rule.join("──")),
                theme::muted(),
            )));
            for row in rows {
                lines.push(Line::from(Span::styled(
                    format!("{pad}{}", table_row(row, &widths)),
                    style,
                )));
            }
        }
        ContentPayload::Diagram { source, .. } => {
            for src_line in source.lines() {
                lines.push(Line::from(Span::styled(format!("{pad}{src_line}"), style)));
            }
        }
        ContentPayload::Fields { fields, .. } => {
            let width = fields.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
            for (name, value) in fields {
                lines.push(Line::from(vec![
                    Span::styled(format!("{pad}{name:<width$}  "), theme::accent()),
                    Span::styled(value.clone(), style),
                ]));
            }
        }
    }
}

/// Widest cell per column, counting the header; rows may be ragged.
fn column_widths(columns: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let count = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(columns.len()))
        .max()
        .unwrap_or(0);
    (0..count)
        .map(|i| {
            std::iter::once(columns)
                .chain(rows.iter().map(Vec::as_slice))
                .filter_map(|r| r.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{cell:<w$}")
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn ragged_table_pads_columns() {
        let columns = vec!["Col".to_string(), "Notes".to_string()];
        let rows = vec![
            vec!["user_id".to_string(), "PK".to_string()],
            vec!["email".to_string()],
        ];
        let widths = column_widths(&columns, &rows);
        assert_eq!(widths, vec![7, 5]);
        assert_eq!(table_row(&rows[1], &widths), "email");
        assert_eq!(table_row(&columns, &widths), "Col      Notes");
    }

    #[test]
    fn fields_align_names() {
        let payload = ContentPayload::Fields {
            title: None,
            fields: vec![
                ("Backend".into(), "FastAPI".into()),
                ("DB".into(), "PostgreSQL".into()),
            ],
        };
        let mut lines = Vec::new();
        payload_lines(&mut lines, &payload, 0);
        assert_eq!(text_of(&lines[0]), "Backend  FastAPI");
        assert_eq!(text_of(&lines[1]), "DB       PostgreSQL");
    }

    #[test]
    fn scroll_offset_counts_wrapped_rows() {
        let above: Vec<Line<'static>> = (0..6).map(|_| Line::from("x".repeat(25))).collect();
        let wide = Rect::new(0, 0, 40, 9);
        let narrow = Rect::new(0, 0, 10, 9);
        // 6 rows vs 18 rows above the focus, minus a third of the height.
        assert_eq!(scroll_offset(&above, wide), 3);
        assert_eq!(scroll_offset(&above, narrow), 15);
        assert_eq!(scroll_offset(&[], narrow), 0);
    }

    #[test]
    fn diagram_keeps_every_line() {
        let payload = ContentPayload::Diagram {
            title: Some("Flow".into()),
            source: "a -> b\n  b -> c".into(),
        };
        let mut lines = Vec::new();
        payload_lines(&mut lines, &payload, 2);
        let texts: Vec<_> = lines.iter().map(text_of).collect();
        assert_eq!(texts, ["  Flow", "  a -> b", "    b -> c"]);
    }
}
