//! Template expansion.
//!
//! Rendering is split in two: the renderer decides *what* to emit and packs
//! it into a [`RenderRequest`]; a [`TemplateEngine`] turns a template id and
//! that request into text. [`BuiltinTemplates`] is the default engine.

use serde::Serialize;
use std::fmt::Write;

/// Identifies one surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemplateId {
    /// `type Name = T`
    TypeStatement,
    /// `Name = TypeAliasType("Name", T)`
    TypeAliasType,
    /// `Name: TypeAlias = T`
    TypeAliasAnnotation,
    /// pydantic 1.x `class Name(BaseModel): __root__: T`
    CustomRootType,
    /// pydantic 2.x `class Name(RootModel[T]): root: T`
    RootModel,
    /// `Name = T`
    RootAssignment,
}

impl TemplateId {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::TypeStatement => "type_alias/statement",
            TemplateId::TypeAliasType => "type_alias/alias_type",
            TemplateId::TypeAliasAnnotation => "type_alias/annotation",
            TemplateId::CustomRootType => "root/custom_root_type",
            TemplateId::RootModel => "root/root_model",
            TemplateId::RootAssignment => "root/assignment",
        }
    }
}

/// Everything a template may reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderRequest<'a> {
    pub class_name: &'a str,
    pub description: Option<&'a str>,
    /// Right-hand side type, already in annotated form when applicable.
    pub type_hint: &'a str,
    /// Base class for class-shaped templates. Empty for aliases.
    pub base_class: &'a str,
    /// Default value as a Python literal.
    pub default: Option<String>,
    pub frozen: bool,
}

/// Turns a template id and its bindings into source text.
///
/// Implementations must be pure: the same id and request always expand to
/// the same text.
pub trait TemplateEngine: Send + Sync {
    fn expand(&self, template: TemplateId, request: &RenderRequest<'_>) -> String;
}

/// The built-in Python templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateEngine for BuiltinTemplates {
    fn expand(&self, template: TemplateId, request: &RenderRequest<'_>) -> String {
        let name = request.class_name;
        let ty = request.type_hint;
        match template {
            TemplateId::TypeStatement => {
                with_comment(request.description, format!("type {name} = {ty}"))
            }
            TemplateId::TypeAliasType => with_comment(
                request.description,
                format!("{name} = TypeAliasType(\"{name}\", {ty})"),
            ),
            TemplateId::TypeAliasAnnotation => {
                with_comment(request.description, format!("{name}: TypeAlias = {ty}"))
            }
            TemplateId::RootAssignment => {
                with_comment(request.description, format!("{name} = {ty}"))
            }
            TemplateId::CustomRootType => {
                let config = request
                    .frozen
                    .then_some("class Config:\n        allow_mutation = False");
                class_body(request, request.base_class, config, "__root__")
            }
            TemplateId::RootModel => {
                let base = format!("{}[{ty}]", request.base_class);
                let config = request
                    .frozen
                    .then_some("model_config = ConfigDict(frozen=True)");
                class_body(request, &base, config, "root")
            }
        }
    }
}

fn with_comment(description: Option<&str>, statement: String) -> String {
    let Some(description) = description else {
        return statement;
    };
    let mut out = String::new();
    for line in description.lines() {
        if line.is_empty() {
            out.push_str("#\n");
        } else {
            let _ = writeln!(out, "# {line}");
        }
    }
    out.push_str(&statement);
    out
}

fn class_body(request: &RenderRequest<'_>, base: &str, config: Option<&str>, root: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "class {}({base}):", request.class_name);

    if let Some(description) = request.description {
        let description = docstring_text(description);
        if description.contains('\n') {
            out.push_str("    \"\"\"\n");
            for line in description.lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    let _ = writeln!(out, "    {line}");
                }
            }
            out.push_str("    \"\"\"\n\n");
        } else {
            let _ = write!(out, "    \"\"\"{description}\"\"\"\n\n");
        }
    }

    if let Some(config) = config {
        let _ = write!(out, "    {config}\n\n");
    }

    let _ = write!(out, "    {root}: {}", request.type_hint);
    if let Some(default) = &request.default {
        let _ = write!(out, " = {default}");
    }
    out
}

/// Escape text for a `"""` docstring body.
fn docstring_text(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Format a JSON value as a Python literal.
pub fn python_literal(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => "None".into(),
        Value::Bool(true) => "True".into(),
        Value::Bool(false) => "False".into(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => python_str(s),
        Value::Array(items) => {
            let items: Vec<_> = items.iter().map(python_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<_> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", python_str(k), python_literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn python_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request<'a>(name: &'a str, ty: &'a str) -> RenderRequest<'a> {
        RenderRequest {
            class_name: name,
            type_hint: ty,
            ..Default::default()
        }
    }

    #[test]
    fn alias_forms() {
        let engine = BuiltinTemplates;
        let req = request("UserId", "str");
        assert_eq!(engine.expand(TemplateId::TypeStatement, &req), "type UserId = str");
        assert_eq!(
            engine.expand(TemplateId::TypeAliasType, &req),
            "UserId = TypeAliasType(\"UserId\", str)"
        );
        assert_eq!(
            engine.expand(TemplateId::TypeAliasAnnotation, &req),
            "UserId: TypeAlias = str"
        );
        assert_eq!(engine.expand(TemplateId::RootAssignment, &req), "UserId = str");
    }

    #[test]
    fn multi_line_description_becomes_comment_block() {
        let req = RenderRequest {
            description: Some("First line\n\nThird line"),
            ..request("Note", "str")
        };
        assert_eq!(
            BuiltinTemplates.expand(TemplateId::TypeStatement, &req),
            "# First line\n#\n# Third line\ntype Note = str"
        );
    }

    #[test]
    fn root_model_class() {
        let req = RenderRequest {
            base_class: "RootModel",
            description: Some("The total count"),
            default: Some("0".into()),
            frozen: true,
            ..request("Total", "int")
        };
        assert_eq!(
            BuiltinTemplates.expand(TemplateId::RootModel, &req),
            "class Total(RootModel[int]):\n    \"\"\"The total count\"\"\"\n\n    model_config = ConfigDict(frozen=True)\n\n    root: int = 0"
        );
    }

    #[test]
    fn custom_root_type_class() {
        let req = RenderRequest {
            base_class: "BaseModel",
            ..request("Filters", "Union[A, B]")
        };
        assert_eq!(
            BuiltinTemplates.expand(TemplateId::CustomRootType, &req),
            "class Filters(BaseModel):\n    __root__: Union[A, B]"
        );
    }

    #[test]
    fn docstring_quotes_are_escaped() {
        let req = RenderRequest {
            base_class: "BaseModel",
            description: Some("He said \"x\"\nC:\\dir"),
            ..request("Quote", "str")
        };
        assert_eq!(
            BuiltinTemplates.expand(TemplateId::CustomRootType, &req),
            "class Quote(BaseModel):\n    \"\"\"\n    He said \\\"x\\\"\n    C:\\\\dir\n    \"\"\"\n\n    __root__: str"
        );
    }

    #[test]
    fn literals() {
        assert_eq!(python_literal(&json!(null)), "None");
        assert_eq!(python_literal(&json!(true)), "True");
        assert_eq!(python_literal(&json!(1.5)), "1.5");
        assert_eq!(python_literal(&json!("it's")), "'it\\'s'");
        assert_eq!(python_literal(&json!(["a", 1])), "['a', 1]");
        assert_eq!(python_literal(&json!({"k": false})), "{'k': False}");
        assert_eq!(python_literal(&json!("a\u{0}b\u{7f}")), "'a\\x00b\\x7f'");
    }
}
