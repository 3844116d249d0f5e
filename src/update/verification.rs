//! Handlers for remote call results
//!
//! Failures become notices here and never reach the editing flow.

use crate::commands::Cmd;
use crate::messages::VerificationMsg;
use crate::model::AppModel;

pub fn update_verification(model: &mut AppModel, msg: VerificationMsg) -> Option<Cmd> {
    match msg {
        VerificationMsg::Completed { id, report } => {
            // Stale and unknown responses still clear the pending indicator
            model.editor.on_verification_response(id, report);
            Some(Cmd::Redraw)
        }

        VerificationMsg::Failed { id, error } => {
            let notice = model.editor.on_verification_failure(id, &error)?;
            model.push_notice(notice);
            Some(Cmd::Redraw)
        }

        VerificationMsg::ReferencesResolved { id, payload } => {
            model.prose.on_resolution_response(id, payload);
            Some(Cmd::Redraw)
        }

        VerificationMsg::ReferencesFailed { id, error } => {
            let notice = model.prose.on_resolution_failure(id, &error)?;
            model.push_notice(notice);
            Some(Cmd::Redraw)
        }
    }
}
