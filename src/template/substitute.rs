//! Placeholder substitution in template expressions

use serde::{Deserialize, Serialize};

/// One template argument and the value supplied for it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgumentBinding {
    pub argument_alias: String,
    pub declared_typification: String,
    /// Empty means unbound
    #[serde(default)]
    pub supplied_value: String,
}

impl ArgumentBinding {
    pub fn new(
        argument_alias: impl Into<String>,
        declared_typification: impl Into<String>,
        supplied_value: impl Into<String>,
    ) -> Self {
        Self {
            argument_alias: argument_alias.into(),
            declared_typification: declared_typification.into(),
            supplied_value: supplied_value.into(),
        }
    }

    pub fn is_bound(&self) -> bool {
        !self.supplied_value.is_empty()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn bound_value<'a>(bindings: &'a [ArgumentBinding], word: &str) -> Option<&'a str> {
    bindings
        .iter()
        .find(|b| b.is_bound() && b.argument_alias == word)
        .map(|b| b.supplied_value.as_str())
}

/// Replace every whole-identifier occurrence of a bound argument alias.
///
/// The template is scanned once, so supplied values are never rescanned and an
/// alias appearing inside a supplied value stays literal. Unbound arguments keep
/// their alias text.
pub fn substitute(template: &str, bindings: &[ArgumentBinding]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(is_identifier_char) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(tail.len());
        let word = &tail[..end];
        out.push_str(bound_value(bindings, word).unwrap_or(word));
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

/// Split a leading `[decl, decl] body` parameter list into its declarations
/// and the body that follows it
fn split_parameter_head(template: &str) -> Option<(Vec<&str>, &str)> {
    let head = template.trim_start().strip_prefix('[')?;
    let mut depth = 0usize;
    let mut declarations = Vec::new();
    let mut start = 0;
    for (i, c) in head.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | '}' => depth = depth.checked_sub(1)?,
            ']' if depth == 0 => {
                declarations.push(head[start..i].trim());
                return Some((declarations, head[i + 1..].trim_start()));
            }
            ']' => depth -= 1,
            ',' if depth == 0 => {
                declarations.push(head[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    None
}

fn declared_alias(declaration: &str) -> &str {
    declaration
        .split_once('∈')
        .map_or(declaration, |(alias, _)| alias)
        .trim()
}

/// Remove the declarations of bound arguments from a leading `[...]`
/// parameter list. The list is dropped once every declaration in it is bound.
///
/// Templates without a parameter list, or with nothing bound, are returned as is.
pub fn drop_bound_parameters(template: &str, bindings: &[ArgumentBinding]) -> String {
    let Some((declarations, body)) = split_parameter_head(template) else {
        return template.to_string();
    };
    let declared = declarations.len();
    let free: Vec<&str> = declarations
        .into_iter()
        .filter(|decl| bound_value(bindings, declared_alias(decl)).is_none())
        .collect();

    if free.len() == declared {
        template.to_string()
    } else if free.is_empty() {
        body.to_string()
    } else {
        format!("[{}] {body}", free.join(", "))
    }
}

/// The expression an instantiation produces: bound parameters removed from the
/// declaration list, then bound aliases substituted in what remains
pub fn instantiate(template: &str, bindings: &[ArgumentBinding]) -> String {
    substitute(&drop_bound_parameters(template, bindings), bindings)
}
