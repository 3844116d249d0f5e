//! UI message handlers (focus, keyboard routing, notices)

use crate::commands::Cmd;
use crate::grammar::{EditorCommand, Keystroke};
use crate::messages::{EditorMsg, ProseMsg, UiMsg};
use crate::model::editor::apply_chord;
use crate::model::{AppModel, FocusTarget, KeystrokeOutcome};

use super::{update_editor, update_prose};

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Focus(target) => {
            model.set_focus(target);
            Some(Cmd::Redraw)
        }

        UiMsg::Keystroke(keystroke) => handle_keystroke(model, &keystroke),

        UiMsg::DismissNotice(index) => {
            if index < model.notices.len() {
                model.notices.remove(index);
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::ExpireNotices => model.expire_notices().then_some(Cmd::Redraw),
    }
}

/// Route a keystroke to the focused field.
///
/// Returns `None` when nothing intercepted it.
fn handle_keystroke(model: &mut AppModel, keystroke: &Keystroke) -> Option<Cmd> {
    let outcome = match model.focus()? {
        FocusTarget::Expression => model.editor.on_keystroke(keystroke, &model.chords),
        FocusTarget::Prose => model.prose.on_keystroke(keystroke, &model.chords),
        FocusTarget::Argument(index) => {
            let mode = model.notation_mode();
            let action = model.chords.chord_for(keystroke, mode)?.clone();
            let field = model.instantiation.as_mut()?.argument_field_mut(index)?;
            apply_chord(field, &action)
        }
    };

    match outcome {
        KeystrokeOutcome::PassThrough => None,
        KeystrokeOutcome::Applied => Some(Cmd::Redraw),
        KeystrokeOutcome::Handled => Some(Cmd::None),
        KeystrokeOutcome::Command(command) => run_command(model, command),
    }
}

fn run_command(model: &mut AppModel, command: EditorCommand) -> Option<Cmd> {
    match (model.focus(), command) {
        (Some(FocusTarget::Expression), EditorCommand::Verify) => {
            update_editor(model, EditorMsg::Verify)
        }
        (Some(FocusTarget::Prose), EditorCommand::ResolveReferences) => {
            update_prose(model, ProseMsg::ResolveReferences)
        }
        // Bound, but meaningless for this field: still swallow the key
        _ => Some(Cmd::None),
    }
}
