use crate::todos::VisibilityFilter;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter links plus key hints. The active filter is shown highlighted.
pub struct Footer {
    filter: VisibilityFilter,
}

impl Footer {
    pub fn new(filter: VisibilityFilter) -> Self {
        Self { filter }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let hint_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(" Show: ", text_style)];
        for (idx, filter) in VisibilityFilter::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(", ", text_style));
            }
            let label = format!("{} F{}", filter.label(), idx + 1);
            if *filter == self.filter {
                spans.push(Span::styled(
                    label,
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    label,
                    text_style.add_modifier(Modifier::UNDERLINED),
                ));
            }
        }

        let hints = " │ Tab: Focus │ Space: Toggle │ Ctrl+Q: Quit ";
        let version = format!("v{} ", VERSION);
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        spans.push(Span::styled(hints, hint_style));
        spans.push(Span::styled(" ".repeat(padding), hint_style));
        spans.push(Span::styled(version, hint_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
