//! Template substitution and result kind inference
//!
//! Both [`substitute`] and [`InferenceRules::infer`] are pure and take the full
//! binding list each call, so they can be re-run after every argument edit.

mod inference;
mod instantiation;
mod substitute;

pub use inference::{infer_result_kind, supplied_typifications, BindingPattern, InferenceRules};
pub use instantiation::{Template, TemplateArgument, TemplateInstantiation};
pub use substitute::{drop_bound_parameters, instantiate, substitute, ArgumentBinding};
