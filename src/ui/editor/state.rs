use crate::store::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    pub focus: Focus,
    pub draft: String,
    /// Row in the visible list.
    pub selected: usize,
}

impl State for EditorState {}

impl EditorState {
    pub fn is_editing(&self) -> bool {
        self.focus == Focus::Input
    }
}
