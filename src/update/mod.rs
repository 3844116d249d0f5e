//! `update`: the only place the model changes.
//!
//! Each message family has its own handler module. A handler returns the side
//! effect to run, or `None` when it did not handle the message (for keystrokes,
//! the host then inserts the character itself).

mod editor;
mod prose;
mod template;
mod ui;
mod verification;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::EditorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use editor::update_editor;
pub use prose::update_prose;
pub use template::update_template;
pub use ui::update_ui;
pub use verification::update_verification;

/// Apply one message to the model.
///
/// Debug builds log each message and the resulting editor state change.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(m) => update_editor(model, m),
        Msg::Prose(m) => update_prose(model, m),
        Msg::Verification(m) => update_verification(model, m),
        Msg::Template(m) => update_template(model, m),
        Msg::Ui(m) => update_ui(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    // Notice expiry fires on a timer
    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::ExpireNotices));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = EditorSnapshot::from_editor(&model.editor);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let cmd = update_inner(model, msg);

    let after = EditorSnapshot::from_editor(&model.editor);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "editor", %diff, "state changed");
    }
    if cmd.as_ref().is_some_and(Cmd::is_remote) {
        let pending = model.has_pending_requests();
        debug!(target: "verification", pending, "remote call issued");
    }

    let selection = model.editor.selection();
    debug_assert!(
        selection.end <= model.editor.field().len_chars(),
        "selection out of bounds after {msg_name}"
    );

    cmd
}

/// `Family::Variant(args)`, e.g. `Editor::InsertToken(Forall)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Prose(m) => format!("Prose::{:?}", m),
        Msg::Verification(m) => format!("Verification::{:?}", m),
        Msg::Template(m) => format!("Template::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
    }
}
