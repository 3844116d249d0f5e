//! Prose field message handlers

use crate::commands::Cmd;
use crate::messages::ProseMsg;
use crate::model::AppModel;

pub fn update_prose(model: &mut AppModel, msg: ProseMsg) -> Option<Cmd> {
    match msg {
        ProseMsg::DirectEdit { value, selection } => {
            model.prose.on_direct_edit(&value, selection);
            Some(Cmd::Redraw)
        }
        ProseMsg::Undo => model.prose.undo().then_some(Cmd::Redraw),
        ProseMsg::Redo => model.prose.redo().then_some(Cmd::Redraw),
        ProseMsg::ResolveReferences => Some(Cmd::ResolveReferences(
            model.prose.request_resolution(),
        )),
    }
}
