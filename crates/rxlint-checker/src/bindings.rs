//! Binding occurrences.
//!
//! Enumerates every identifier that introduces a named binding a naming rule
//! may want to check: variables, parameters, destructured names, class and
//! interface properties, object literal keys and accessors. Each occurrence
//! carries its `BindingKind`, which decides the option switch that enables it.

use rxlint_parser::{ModifierFlags, Node, NodeArena, NodeIndex, SyntaxKind};
use tracing::trace;

/// The construct a destructuring pattern belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingOwner {
    /// `const [a, b] = source;`
    Variable,
    /// `function f([a, b]) {}`
    Function,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingKind {
    /// Identifier element of an array binding pattern.
    ArrayDestructure { owner: BindingOwner },
    /// Identifier bound by an element of an object binding pattern.
    ObjectDestructure { owner: BindingOwner },
    /// Identifier parameter of a function, arrow, method, constructor or
    /// accessor.
    Parameter,
    /// Identifier parameter of a call, construct or method signature.
    SignatureParameter,
    /// `constructor(private readonly name: T)`
    ParameterProperty,
    /// Non-computed class property key not ending in `$`.
    ClassProperty,
    /// Non-computed interface property key not ending in `$`.
    PropertySignature,
    /// Non-computed identifier key of an object literal property or
    /// object literal `get`/`set` accessor.
    ObjectLiteralKey,
    /// Non-computed key of a class `get`/`set` accessor.
    Accessor,
    /// Identifier declared by a variable declaration.
    VariableDeclarator,
}

/// Option switches that enable binding kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindingSwitches {
    pub parameters: bool,
    pub properties: bool,
    pub variables: bool,
}

impl Default for BindingSwitches {
    fn default() -> Self {
        Self {
            parameters: true,
            properties: true,
            variables: true,
        }
    }
}

impl BindingKind {
    /// Whether occurrences of this kind are checked under `switches`.
    pub const fn is_enabled(self, switches: BindingSwitches) -> bool {
        match self {
            Self::ArrayDestructure { owner } | Self::ObjectDestructure { owner } => match owner {
                BindingOwner::Variable => switches.variables,
                BindingOwner::Function => switches.parameters,
            },
            Self::Parameter | Self::SignatureParameter => switches.parameters,
            Self::ParameterProperty => switches.parameters || switches.properties,
            Self::ClassProperty
            | Self::PropertySignature
            | Self::ObjectLiteralKey
            | Self::Accessor => switches.properties,
            Self::VariableDeclarator => switches.variables,
        }
    }
}

/// One binding to check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindingOccurrence {
    pub kind: BindingKind,
    /// The name node; diagnostics are anchored here.
    pub name: NodeIndex,
    /// The node whose type is tested: the name itself, or the accessor
    /// declaration for class and object literal accessors.
    pub type_node: NodeIndex,
}

impl BindingOccurrence {
    const fn at_name(kind: BindingKind, name: NodeIndex) -> Self {
        Self {
            kind,
            name,
            type_node: name,
        }
    }
}

/// All binding occurrences under `root`, in source order.
pub fn collect_bindings(arena: &NodeArena, root: NodeIndex) -> Vec<BindingOccurrence> {
    let mut out = Vec::new();
    arena.for_each_preorder(root, |index| {
        if let Some(occurrence) = classify_binding(arena, index) {
            out.push(occurrence);
        }
    });
    trace!(count = out.len(), "collected bindings");
    out
}

/// The binding occurrence a node introduces, if any.
pub fn classify_binding(arena: &NodeArena, index: NodeIndex) -> Option<BindingOccurrence> {
    let node = arena.get(index)?;
    match node.kind {
        SyntaxKind::VariableDeclaration => {
            if is_catch_variable(arena, node) {
                return None;
            }
            let var = arena.get_variable(node)?;
            is_identifier(arena, var.name)
                .then(|| BindingOccurrence::at_name(BindingKind::VariableDeclarator, var.name))
        }
        SyntaxKind::BindingElement => classify_binding_element(arena, index, node),
        SyntaxKind::Parameter => classify_parameter(arena, node),
        SyntaxKind::PropertyDeclaration => {
            let prop = arena.get_property(node)?;
            is_checked_member_key(arena, prop.name, true)
                .then(|| BindingOccurrence::at_name(BindingKind::ClassProperty, prop.name))
        }
        SyntaxKind::PropertySignature => {
            let prop = arena.get_property(node)?;
            is_checked_member_key(arena, prop.name, false)
                .then(|| BindingOccurrence::at_name(BindingKind::PropertySignature, prop.name))
        }
        SyntaxKind::PropertyAssignment | SyntaxKind::ShorthandPropertyAssignment => {
            let parent = arena.get(node.parent)?;
            if parent.kind != SyntaxKind::ObjectLiteralExpression {
                return None;
            }
            let prop = arena.get_property(node)?;
            is_identifier(arena, prop.name)
                .then(|| BindingOccurrence::at_name(BindingKind::ObjectLiteralKey, prop.name))
        }
        SyntaxKind::GetAccessor | SyntaxKind::SetAccessor => {
            let parent = arena.get(node.parent)?;
            let func = arena.get_function(node)?;
            let key_checked = match parent.kind {
                SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => {
                    is_non_computed_key(arena, func.name).then_some(BindingKind::Accessor)
                }
                SyntaxKind::ObjectLiteralExpression => {
                    is_identifier(arena, func.name).then_some(BindingKind::ObjectLiteralKey)
                }
                _ => None,
            };
            key_checked.map(|kind| BindingOccurrence {
                kind,
                name: func.name,
                type_node: index,
            })
        }
        _ => None,
    }
}

fn classify_binding_element(
    arena: &NodeArena,
    index: NodeIndex,
    node: &Node,
) -> Option<BindingOccurrence> {
    let element = arena.get_binding_element(node)?;
    // Rest elements and elements with defaults are not plain identifiers.
    if element.dot_dot_dot_token || element.initializer.is_some() {
        return None;
    }
    if !is_identifier(arena, element.name) {
        return None;
    }
    let pattern = arena.get(node.parent)?;
    let owner = destructuring_owner(arena, index)?;
    let kind = match pattern.kind {
        SyntaxKind::ArrayBindingPattern => BindingKind::ArrayDestructure { owner },
        SyntaxKind::ObjectBindingPattern => BindingKind::ObjectDestructure { owner },
        _ => return None,
    };
    Some(BindingOccurrence::at_name(kind, element.name))
}

/// Nearest enclosing variable declaration or function-like node. Caught
/// value declarations are not owners.
fn destructuring_owner(arena: &NodeArena, index: NodeIndex) -> Option<BindingOwner> {
    let found = arena.find_ancestor(index, |node| {
        (node.kind == SyntaxKind::VariableDeclaration && !is_catch_variable(arena, node))
            || node.kind.is_function_like()
    })?;
    Some(match arena.kind(found)? {
        SyntaxKind::VariableDeclaration => BindingOwner::Variable,
        _ => BindingOwner::Function,
    })
}

fn classify_parameter(arena: &NodeArena, node: &Node) -> Option<BindingOccurrence> {
    let param = arena.get_parameter(node)?;
    if param.dot_dot_dot_token || param.initializer.is_some() || !is_identifier(arena, param.name) {
        return None;
    }
    let owner = arena.get(node.parent)?;
    let kind = if owner.kind.is_signature_declaration() {
        BindingKind::SignatureParameter
    } else if !owner.kind.is_function_like() {
        return None;
    } else if param.modifiers.intersects(ModifierFlags::PARAMETER_PROPERTY)
        && owner.kind == SyntaxKind::Constructor
    {
        BindingKind::ParameterProperty
    } else {
        BindingKind::Parameter
    };
    Some(BindingOccurrence::at_name(kind, param.name))
}

/// `catch (e)`: the declaration of a caught value.
fn is_catch_variable(arena: &NodeArena, node: &Node) -> bool {
    arena.kind(node.parent) == Some(SyntaxKind::CatchClause)
}

fn is_identifier(arena: &NodeArena, index: NodeIndex) -> bool {
    arena.kind(index) == Some(SyntaxKind::Identifier)
}

/// Class (`allow_private`) or interface property key that is an identifier
/// whose text does not end in `$`.
fn is_checked_member_key(arena: &NodeArena, index: NodeIndex, allow_private: bool) -> bool {
    let key_kind_ok = match arena.kind(index) {
        Some(SyntaxKind::Identifier) => true,
        Some(SyntaxKind::PrivateIdentifier) => allow_private,
        _ => false,
    };
    key_kind_ok
        && arena
            .name_text(index)
            .is_some_and(|text| text.chars().last().is_some_and(|c| c != '$'))
}

fn is_non_computed_key(arena: &NodeArena, index: NodeIndex) -> bool {
    matches!(
        arena.kind(index),
        Some(
            SyntaxKind::Identifier
                | SyntaxKind::PrivateIdentifier
                | SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
        )
    )
}
