use crate::store::Action;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    InsertChar(char),
    Backspace,
    /// Draft was submitted or discarded.
    ClearDraft,
    ToggleFocus,
    /// Move the list cursor; `len` is the number of visible todos.
    MoveUp { len: usize },
    MoveDown { len: usize },
    /// Visible list changed size; keep the cursor in range.
    Clamp { len: usize },
}

impl Action for EditorIntent {}
