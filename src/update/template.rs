//! Template instantiation message handlers

use crate::commands::Cmd;
use crate::grammar::rule_for;
use crate::messages::TemplateMsg;
use crate::model::{AppModel, FocusTarget, Notice};
use crate::template::TemplateInstantiation;

pub fn update_template(model: &mut AppModel, msg: TemplateMsg) -> Option<Cmd> {
    match msg {
        TemplateMsg::Begin(template) => {
            if !template.kind.is_template() {
                model.push_notice(Notice::warning(format!(
                    "{} is a {} and takes no arguments",
                    template.alias, template.kind
                )));
                return Some(Cmd::Redraw);
            }
            let focus = (!template.arguments.is_empty()).then_some(FocusTarget::Argument(0));
            model.instantiation = Some(TemplateInstantiation::new(template));
            model.set_focus(focus);
            Some(Cmd::Redraw)
        }

        TemplateMsg::SetArgument { alias, value } => {
            let inst = model.instantiation.as_mut()?;
            inst.set_argument_value(&alias, &value).then_some(Cmd::Redraw)
        }

        TemplateMsg::InsertToken { index, token } => {
            let field = model.instantiation.as_mut()?.argument_field_mut(index)?;
            rule_for(token).apply(field);
            model.set_focus(Some(FocusTarget::Argument(index)));
            Some(Cmd::Redraw)
        }

        TemplateMsg::Commit { alias } => {
            let inst = model.instantiation.take()?;
            model.editor = inst.commit(alias, &model.inference_rules, model.config.history_limit);
            model.set_focus(Some(FocusTarget::Expression));
            Some(Cmd::Redraw)
        }

        TemplateMsg::Cancel => {
            model.instantiation.take()?.cancel();
            if matches!(model.focus(), Some(FocusTarget::Argument(_))) {
                model.set_focus(None);
            }
            Some(Cmd::Redraw)
        }
    }
}
