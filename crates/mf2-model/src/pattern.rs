//! Patterns, expressions and operands

use mf2_common::VariableName;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Function names whose selection is driven by plural categories.
pub const PLURAL_FUNCTIONS: [&str; 2] = ["number", "integer"];

/// The argument of an expression, or the value of an option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operand {
    /// A quoted or unquoted literal.
    Literal {
        /// Literal text
        value: String,
    },
    /// A `$variable` reference.
    Variable {
        /// Variable name
        name: VariableName,
    },
}

impl Operand {
    /// The variable name, if this is a variable reference.
    pub const fn as_variable(&self) -> Option<&VariableName> {
        match self {
            Self::Variable { name } => Some(name),
            Self::Literal { .. } => None,
        }
    }
}

/// A function annotation such as `:number`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FunctionRef {
    /// Function name without the leading `:`
    pub name: String,
    /// Function options
    #[serde(default)]
    pub options: BTreeMap<String, Operand>,
}

impl FunctionRef {
    /// An annotation without options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: BTreeMap::new(),
        }
    }

    /// Whether selection through this function uses plural categories.
    pub fn is_plural(&self) -> bool {
        PLURAL_FUNCTIONS.contains(&self.name.as_str())
    }
}

/// A `{...}` expression.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Expression {
    /// The operand, absent for function-only expressions like `{:datetime}`
    #[serde(default)]
    pub arg: Option<Operand>,
    /// The annotation, if any
    #[serde(default)]
    pub function: Option<FunctionRef>,
}

impl Expression {
    /// `{$name}`
    pub fn variable(name: impl Into<VariableName>) -> Self {
        Self {
            arg: Some(Operand::Variable { name: name.into() }),
            function: None,
        }
    }

    /// `{|value|}`
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            arg: Some(Operand::Literal {
                value: value.into(),
            }),
            function: None,
        }
    }

    /// Attach an annotation.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(FunctionRef::new(name));
        self
    }

    /// The variable operand, if any.
    pub fn variable_operand(&self) -> Option<&VariableName> {
        self.arg.as_ref().and_then(Operand::as_variable)
    }
}

/// Whether a markup element opens, closes or stands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupKind {
    /// `{#b}`
    Open,
    /// `{#img/}`
    Standalone,
    /// `{/b}`
    Close,
}

/// A markup placeholder. Markup never references message variables for the
/// purposes of placeholder checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Markup {
    /// Open, standalone or close
    pub kind: MarkupKind,
    /// Element name
    pub name: String,
}

/// One element of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPart")]
pub enum PatternPart {
    /// Literal text
    Text(String),
    /// An expression placeholder
    Expression(Expression),
    /// A markup placeholder
    Markup(Markup),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPart {
    Text(String),
    Tagged(TaggedPart),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedPart {
    Expression(Expression),
    Markup(Markup),
}

impl From<RawPart> for PatternPart {
    fn from(raw: RawPart) -> Self {
        match raw {
            RawPart::Text(text) => Self::Text(text),
            RawPart::Tagged(TaggedPart::Expression(expression)) => Self::Expression(expression),
            RawPart::Tagged(TaggedPart::Markup(markup)) => Self::Markup(markup),
        }
    }
}

impl PatternPart {
    /// Literal text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// `{$name}`
    pub fn variable(name: impl Into<VariableName>) -> Self {
        Self::Expression(Expression::variable(name))
    }

    /// The variable this part references, if any.
    pub fn placeholder(&self) -> Option<&VariableName> {
        match self {
            Self::Expression(expression) => expression.variable_operand(),
            Self::Text(_) | Self::Markup(_) => None,
        }
    }
}

/// The body of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<PatternPart>);

impl Pattern {
    /// Wrap parts.
    pub const fn new(parts: Vec<PatternPart>) -> Self {
        Self(parts)
    }

    /// The parts in order.
    pub fn parts(&self) -> &[PatternPart] {
        &self.0
    }

    /// Variables referenced by placeholders, in order, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &VariableName> {
        self.0.iter().filter_map(PatternPart::placeholder)
    }

    /// Whether some placeholder references `name`.
    pub fn references(&self, name: &VariableName) -> bool {
        self.placeholders().any(|placeholder| placeholder == name)
    }
}

impl FromIterator<PatternPart> for Pattern {
    fn from_iter<T: IntoIterator<Item = PatternPart>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_pattern() {
        let pattern: Pattern = serde_json::from_str(
            r#"[
                "You have ",
                {"type": "expression", "arg": {"type": "variable", "name": "count"},
                 "function": {"type": "function", "name": "number",
                              "options": {"minimumFractionDigits": {"type": "variable", "name": "digits"}}}},
                {"type": "markup", "kind": "open", "name": "b"},
                " items",
                {"type": "markup", "kind": "close", "name": "b"}
            ]"#,
        )
        .unwrap();

        assert_eq!(pattern.parts().len(), 5);
        assert_eq!(pattern.parts()[0], PatternPart::text("You have "));
        let names: Vec<_> = pattern.placeholders().collect();
        assert_eq!(names, vec![&VariableName::new("count")]);
        assert!(pattern.references(&VariableName::new("count")));
        assert!(!pattern.references(&VariableName::new("digits")));
    }

    #[test]
    fn test_literal_expression_is_not_a_placeholder() {
        let pattern = Pattern::new(vec![PatternPart::Expression(Expression::literal("x"))]);
        assert_eq!(pattern.placeholders().count(), 0);
    }

    #[test]
    fn test_plural_functions() {
        assert!(FunctionRef::new("number").is_plural());
        assert!(FunctionRef::new("integer").is_plural());
        assert!(!FunctionRef::new("string").is_plural());
    }
}
