use crate::todos::Todo;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, DONE, FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// The visible todos. Completed ones are struck through.
pub struct TodoList<'a> {
    todos: &'a [Todo],
    selected: usize,
    focused: bool,
}

impl<'a> TodoList<'a> {
    pub fn new(todos: &'a [Todo], selected: usize, focused: bool) -> Self {
        Self {
            todos,
            selected,
            focused,
        }
    }

    pub fn widget(&self) -> List<'a> {
        let items: Vec<ListItem<'a>> = if self.todos.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "Nothing to show",
                Style::default().fg(MUTED_TEXT),
            )))]
        } else {
            self.todos.iter().map(todo_item).collect()
        };

        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        List::new(items)
            .block(
                Block::default()
                    .title(format!(" Todos ({}) ", self.todos.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("> ")
    }

    pub fn state(&self) -> ListState {
        let selected = if self.focused && !self.todos.is_empty() {
            Some(self.selected.min(self.todos.len() - 1))
        } else {
            None
        };
        ListState::default().with_selected(selected)
    }
}

fn todo_item(todo: &Todo) -> ListItem<'_> {
    let (mark, style) = if todo.completed() {
        (
            "[x] ",
            Style::default().fg(DONE).add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(TEXT))
    };
    ListItem::new(Line::from(vec![
        Span::styled(mark, Style::default().fg(MUTED_TEXT)),
        Span::styled(todo.text(), style),
    ]))
}
