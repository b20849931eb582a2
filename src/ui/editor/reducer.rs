use crate::store::Reducer;

use super::intent::EditorIntent;
use super::state::{EditorState, Focus};

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Action = EditorIntent;

    fn reduce(mut state: Self::State, intent: Self::Action) -> Self::State {
        match intent {
            EditorIntent::InsertChar(ch) => {
                if !ch.is_control() {
                    state.draft.push(ch);
                }
                state
            }
            EditorIntent::Backspace => {
                state.draft.pop();
                state
            }
            EditorIntent::ClearDraft => EditorState {
                draft: String::new(),
                ..state
            },
            EditorIntent::ToggleFocus => {
                let focus = match state.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
                EditorState { focus, ..state }
            }
            EditorIntent::MoveUp { len } => {
                let selected = if len == 0 {
                    0
                } else if state.selected == 0 {
                    len - 1
                } else {
                    state.selected.min(len) - 1
                };
                EditorState { selected, ..state }
            }
            EditorIntent::MoveDown { len } => {
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                EditorState { selected, ..state }
            }
            EditorIntent::Clamp { len } => EditorState {
                selected: state.selected.min(len.saturating_sub(1)),
                ..state
            },
        }
    }
}
