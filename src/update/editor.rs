//! Expression editor message handlers

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::{AppModel, FocusTarget};

/// Handle expression editor messages
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::InsertToken(token) => {
            model.editor.on_token(token);
            model.set_focus(Some(FocusTarget::Expression));
            Some(Cmd::Redraw)
        }

        EditorMsg::DirectEdit { value, selection } => {
            model.editor.on_direct_edit(&value, selection);
            Some(Cmd::Redraw)
        }

        EditorMsg::SetSelection { start, end } => {
            model.editor.set_selection(start, end);
            Some(Cmd::Redraw)
        }

        EditorMsg::Undo => model.editor.undo().then_some(Cmd::Redraw),

        EditorMsg::Redo => model.editor.redo().then_some(Cmd::Redraw),

        EditorMsg::Verify => Some(Cmd::Verify(model.editor.request_verification())),

        EditorMsg::SelectError(index) => {
            if model.editor.select_error(index) {
                model.set_focus(Some(FocusTarget::Expression));
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        EditorMsg::NextError => {
            model.editor.next_error()?;
            model.set_focus(Some(FocusTarget::Expression));
            Some(Cmd::Redraw)
        }
    }
}
