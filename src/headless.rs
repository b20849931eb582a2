//! Script mode: dispatch a file of actions without a terminal.
//!
//! Scripts are JSON lines, one action per line. Blank lines and lines
//! starting with `#` are skipped:
//!
//! ```text
//! {"type":"ADD_TODO","text":"a"}
//! # toggles the first todo
//! {"type":"COMPLETE_TODO","id":0}
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use crate::todos::{RootProps, TodoAction, TodoStore};
use crate::ui::connect::ConnectedRoot;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid action on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_script(content: &str) -> Result<Vec<TodoAction>, ScriptError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| ScriptError::Parse {
                line: index + 1,
                source,
            })
        })
        .collect()
}

pub fn load_script(path: &Path) -> Result<Vec<TodoAction>, ScriptError> {
    let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&content)
}

/// Dispatch `actions` in order through a connected root and return the
/// props it ends up with.
pub fn run_script(store: Rc<TodoStore>, actions: Vec<TodoAction>) -> RootProps {
    let root = ConnectedRoot::connect(Rc::clone(&store));
    let count = actions.len();
    for action in actions {
        store.dispatch(action);
    }
    tracing::info!(actions = count, revision = store.revision(), "Script applied");
    let props = root.props().clone();
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::{TodoId, VisibilityFilter};

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let actions = parse_script(
            "# setup\n{\"type\":\"ADD_TODO\",\"text\":\"a\"}\n\n{\"type\":\"COMPLETE_TODO\",\"id\":0}\n",
        )
        .unwrap();
        assert_eq!(
            actions,
            vec![TodoAction::add_todo("a"), TodoAction::complete_todo(TodoId(0))]
        );
    }

    #[test]
    fn parse_error_reports_line_number() {
        let err = parse_script("{\"type\":\"ADD_TODO\",\"text\":\"a\"}\nnot json\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { line: 2, .. }));
    }

    #[test]
    fn run_script_returns_final_props() {
        let actions = vec![
            TodoAction::add_todo("a"),
            TodoAction::add_todo("b"),
            TodoAction::complete_todo(TodoId(0)),
            TodoAction::set_visibility_filter(VisibilityFilter::ShowActive),
        ];
        let props = run_script(Rc::new(TodoStore::default()), actions);
        assert_eq!(props.visibility_filter, VisibilityFilter::ShowActive);
        assert_eq!(props.visible_todos.len(), 1);
        assert_eq!(props.visible_todos[0].text(), "b");
    }
}
