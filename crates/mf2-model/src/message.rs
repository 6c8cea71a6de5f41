//! Messages, declarations and variants

use crate::key::VariantKeySet;
use crate::pattern::{Expression, FunctionRef, Operand, Pattern};
use mf2_common::VariableName;
use serde::Deserialize;

/// A `.input` or `.local` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Declaration {
    /// `.input {$name ...}`
    Input {
        /// Declared variable
        name: VariableName,
        /// Bound expression
        value: Expression,
    },
    /// `.local $name = {...}`
    Local {
        /// Declared variable
        name: VariableName,
        /// Bound expression
        value: Expression,
    },
}

impl Declaration {
    /// `.input {$name :function}`
    pub fn input(name: impl Into<VariableName>, function: &str) -> Self {
        let name = name.into();
        Self::Input {
            value: Expression::variable(name.clone()).with_function(function),
            name,
        }
    }

    /// `.local $name = {value}`
    pub fn local(name: impl Into<VariableName>, value: Expression) -> Self {
        Self::Local {
            name: name.into(),
            value,
        }
    }

    /// The declared variable.
    pub const fn name(&self) -> &VariableName {
        match self {
            Self::Input { name, .. } | Self::Local { name, .. } => name,
        }
    }

    /// The bound expression.
    pub const fn value(&self) -> &Expression {
        match self {
            Self::Input { value, .. } | Self::Local { value, .. } => value,
        }
    }
}

/// One arm of a `.match`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variant {
    /// Keys, one per selector
    pub keys: VariantKeySet,
    /// Pattern used when the keys are selected
    #[serde(rename = "value")]
    pub pattern: Pattern,
}

impl Variant {
    /// Build a variant.
    pub const fn new(keys: VariantKeySet, pattern: Pattern) -> Self {
        Self { keys, pattern }
    }
}

/// Whether the message had a `.match` construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// A single pattern
    Pattern,
    /// A `.match` with variants
    Select,
}

/// What a selector's declaration says about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAnnotation<'a> {
    /// The selector has no declaration at all.
    Unbound,
    /// The declaration chain ends without a function annotation.
    Unannotated,
    /// The first annotation found along the alias chain.
    Annotated(&'a FunctionRef),
}

/// A parsed message.
///
/// A pattern message is represented as a single variant with an empty key
/// set, so placeholder checks treat both message kinds uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMessage")]
pub struct DataModel {
    kind: MessageKind,
    declarations: Vec<Declaration>,
    selectors: Vec<VariableName>,
    variants: Vec<Variant>,
}

#[derive(Deserialize)]
struct VariableRef {
    name: VariableName,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawMessage {
    #[serde(rename = "message")]
    Pattern {
        #[serde(default)]
        declarations: Vec<Declaration>,
        pattern: Pattern,
    },
    #[serde(rename = "select")]
    Select {
        #[serde(default)]
        declarations: Vec<Declaration>,
        selectors: Vec<VariableRef>,
        variants: Vec<Variant>,
    },
}

impl From<RawMessage> for DataModel {
    fn from(raw: RawMessage) -> Self {
        match raw {
            RawMessage::Pattern {
                declarations,
                pattern,
            } => Self::pattern(declarations, pattern),
            RawMessage::Select {
                declarations,
                selectors,
                variants,
            } => Self::select(
                declarations,
                selectors.into_iter().map(|s| s.name).collect(),
                variants,
            ),
        }
    }
}

impl DataModel {
    /// A message without `.match`.
    pub fn pattern(declarations: Vec<Declaration>, pattern: Pattern) -> Self {
        Self {
            kind: MessageKind::Pattern,
            declarations,
            selectors: Vec::new(),
            variants: vec![Variant::new(VariantKeySet::default(), pattern)],
        }
    }

    /// A `.match` message.
    pub fn select(
        declarations: Vec<Declaration>,
        selectors: Vec<VariableName>,
        variants: Vec<Variant>,
    ) -> Self {
        Self {
            kind: MessageKind::Select,
            declarations,
            selectors,
            variants,
        }
    }

    /// Pattern or select.
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Declarations in source order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Selectors in source order.
    pub fn selectors(&self) -> &[VariableName] {
        &self.selectors
    }

    /// Variants in source order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// The first declaration binding `name`.
    pub fn declaration_of(&self, name: &VariableName) -> Option<&Declaration> {
        self.declarations.iter().find(|decl| decl.name() == name)
    }

    /// Follow `.local $x = {$y}` aliases from `name` until an annotation is
    /// found, the chain reaches an unbound variable, or it cycles.
    pub fn selector_annotation(&self, name: &VariableName) -> SelectorAnnotation<'_> {
        let mut visited: Vec<&VariableName> = Vec::new();
        let mut current = name;
        loop {
            let Some(declaration) = self.declaration_of(current) else {
                return if visited.is_empty() {
                    SelectorAnnotation::Unbound
                } else {
                    SelectorAnnotation::Unannotated
                };
            };
            visited.push(current);

            let value = declaration.value();
            if let Some(function) = &value.function {
                return SelectorAnnotation::Annotated(function);
            }
            match &value.arg {
                Some(Operand::Variable { name: alias }) if !visited.contains(&alias) => {
                    current = alias;
                }
                _ => return SelectorAnnotation::Unannotated,
            }
        }
    }

    /// Whether `name` selects on plural categories: its declaration, directly
    /// or through aliases, is annotated with `:number` or `:integer`.
    pub fn is_plural_selector(&self, name: &VariableName) -> bool {
        matches!(
            self.selector_annotation(name),
            SelectorAnnotation::Annotated(function) if function.is_plural()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use crate::pattern::PatternPart;

    fn model(declarations: Vec<Declaration>) -> DataModel {
        DataModel::select(
            declarations,
            vec![VariableName::new("x")],
            vec![Variant::new(
                [Key::Wildcard].into_iter().collect(),
                Pattern::new(vec![PatternPart::text("any")]),
            )],
        )
    }

    #[test]
    fn test_direct_number_annotation() {
        let model = model(vec![Declaration::input("x", "number")]);
        assert!(model.is_plural_selector(&VariableName::new("x")));
    }

    #[test]
    fn test_non_plural_annotation() {
        let model = model(vec![Declaration::input("x", "string")]);
        assert!(!model.is_plural_selector(&VariableName::new("x")));
        assert!(matches!(
            model.selector_annotation(&VariableName::new("x")),
            SelectorAnnotation::Annotated(f) if f.name == "string"
        ));
    }

    #[test]
    fn test_alias_inherits_annotation() {
        let model = model(vec![
            Declaration::input("y", "number"),
            Declaration::local("x", Expression::variable("y")),
        ]);
        assert!(model.is_plural_selector(&VariableName::new("x")));
    }

    #[test]
    fn test_alias_to_unannotated_input() {
        let model = model(vec![
            Declaration::Input {
                name: VariableName::new("y"),
                value: Expression::variable("y"),
            },
            Declaration::local("x", Expression::variable("y")),
        ]);
        assert_eq!(
            model.selector_annotation(&VariableName::new("x")),
            SelectorAnnotation::Unannotated
        );
        assert!(!model.is_plural_selector(&VariableName::new("x")));
    }

    #[test]
    fn test_literal_binding_is_unannotated() {
        let model = model(vec![Declaration::local("x", Expression::literal("3"))]);
        assert_eq!(
            model.selector_annotation(&VariableName::new("x")),
            SelectorAnnotation::Unannotated
        );
    }

    #[test]
    fn test_unbound_selector() {
        let model = model(Vec::new());
        assert_eq!(
            model.selector_annotation(&VariableName::new("x")),
            SelectorAnnotation::Unbound
        );
        assert!(!model.is_plural_selector(&VariableName::new("x")));
    }

    #[test]
    fn test_alias_cycle_terminates() {
        let model = model(vec![
            Declaration::local("x", Expression::variable("y")),
            Declaration::local("y", Expression::variable("x")),
        ]);
        assert_eq!(
            model.selector_annotation(&VariableName::new("x")),
            SelectorAnnotation::Unannotated
        );
    }

    #[test]
    fn test_pattern_message_has_one_keyless_variant() {
        let model = DataModel::pattern(Vec::new(), Pattern::new(vec![PatternPart::variable("n")]));
        assert_eq!(model.kind(), MessageKind::Pattern);
        assert!(model.selectors().is_empty());
        assert_eq!(model.variants().len(), 1);
        assert!(model.variants()[0].keys.is_empty());
    }
}
