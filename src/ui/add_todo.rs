use crate::ui::theme::{ACCENT, FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, TEXT};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Input box for new todos.
pub struct AddTodo<'a> {
    draft: &'a str,
    focused: bool,
}

impl<'a> AddTodo<'a> {
    pub fn new(draft: &'a str, focused: bool) -> Self {
        Self { draft, focused }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let line = if self.draft.is_empty() && !self.focused {
            Line::from(Span::styled(
                "Tab to add a todo",
                Style::default().fg(MUTED_TEXT),
            ))
        } else {
            Line::from(Span::styled(self.draft, Style::default().fg(TEXT)))
        };

        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(" Add Todo ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    /// Terminal cursor position at the end of the draft, when focused.
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        if !self.focused || area.width < 3 || area.height < 3 {
            return None;
        }
        let inner_width = area.width - 2;
        let draft_width = Span::raw(self.draft).width();
        let offset = draft_width.min(usize::from(inner_width - 1)) as u16;
        Some(Position::new(area.x + 1 + offset, area.y + 1))
    }
}
