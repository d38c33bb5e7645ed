//! Node kinds, node headers and per-kind node data.
//!
//! Each [`Node`] is a small header (kind, span, parent link) that points into
//! one of the typed data pools of the [`NodeArena`] through `data_index`.
//! The shapes follow the TypeScript syntax tree: parameters are `Parameter`
//! nodes wrapping a name, destructuring uses binding patterns made of
//! `BindingElement`s, and so on.

use super::base::{NodeIndex, NodeList};
use bitflags::bitflags;

/// Syntax node kinds understood by the lint rules.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Unknown = 0,
    SourceFile,

    // Names and literals
    Identifier,
    PrivateIdentifier,
    StringLiteral,
    NumericLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,
    ComputedPropertyName,

    // Keywords
    ThisKeyword,
    SuperKeyword,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    TypeOfKeyword,
    VoidKeyword,
    DeleteKeyword,
    InKeyword,
    InstanceOfKeyword,

    // Operator tokens
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionQuestionToken,
    CommaToken,
    ExclamationToken,
    PlusPlusToken,
    MinusMinusToken,

    // Statements
    Block,
    EmptyStatement,
    ExpressionStatement,
    ReturnStatement,
    ThrowStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    BreakStatement,
    ContinueStatement,
    SwitchStatement,
    CaseBlock,
    CaseClause,
    DefaultClause,
    LabeledStatement,
    TryStatement,
    CatchClause,
    DebuggerStatement,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,
    OmittedExpression,

    // Functions
    Parameter,
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunction,

    // Classes
    ClassDeclaration,
    ClassExpression,
    PropertyDeclaration,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,

    // Interfaces, type aliases and type members
    InterfaceDeclaration,
    TypeAliasDeclaration,
    PropertySignature,
    MethodSignature,
    CallSignature,
    ConstructSignature,

    // Type nodes
    TypeReference,
    TypeLiteral,
    UnionType,
    IntersectionType,

    // Modules
    ModuleDeclaration,
    ModuleBlock,
    ExportDeclaration,
    ExportAssignment,

    // Expressions
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    ArrayLiteralExpression,
    SpreadElement,
    CallExpression,
    NewExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    ParenthesizedExpression,
    NonNullExpression,
    AsExpression,
    SatisfiesExpression,
    BinaryExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    ConditionalExpression,
    AwaitExpression,
    YieldExpression,
    TemplateExpression,
    TemplateSpan,
    TaggedTemplateExpression,
}

impl SyntaxKind {
    /// Functions, arrows, methods, constructors and accessors.
    pub const fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration
                | Self::FunctionExpression
                | Self::ArrowFunction
                | Self::MethodDeclaration
                | Self::Constructor
                | Self::GetAccessor
                | Self::SetAccessor
        )
    }

    /// Call, construct and method signatures of interfaces and type literals.
    pub const fn is_signature_declaration(self) -> bool {
        matches!(
            self,
            Self::CallSignature | Self::ConstructSignature | Self::MethodSignature
        )
    }

    pub const fn is_binding_pattern(self) -> bool {
        matches!(self, Self::ObjectBindingPattern | Self::ArrayBindingPattern)
    }

    pub const fn is_accessor(self) -> bool {
        matches!(self, Self::GetAccessor | Self::SetAccessor)
    }

    pub const fn is_identifier_like(self) -> bool {
        matches!(self, Self::Identifier | Self::PrivateIdentifier)
    }

    /// Literals that carry their text in the literal pool.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::StringLiteral
                | Self::NumericLiteral
                | Self::NoSubstitutionTemplateLiteral
                | Self::TemplateHead
                | Self::TemplateMiddle
                | Self::TemplateTail
        )
    }

    /// `for`, `for-in`, `for-of`, `while` and `do` statements.
    pub const fn is_iteration_statement(self) -> bool {
        matches!(
            self,
            Self::ForStatement
                | Self::ForInStatement
                | Self::ForOfStatement
                | Self::WhileStatement
                | Self::DoStatement
        )
    }

    /// Fixed source text of keyword and operator tokens.
    pub const fn token_text(self) -> Option<&'static str> {
        Some(match self {
            Self::ThisKeyword => "this",
            Self::SuperKeyword => "super",
            Self::TrueKeyword => "true",
            Self::FalseKeyword => "false",
            Self::NullKeyword => "null",
            Self::TypeOfKeyword => "typeof",
            Self::VoidKeyword => "void",
            Self::DeleteKeyword => "delete",
            Self::InKeyword => "in",
            Self::InstanceOfKeyword => "instanceof",
            Self::EqualsToken => "=",
            Self::PlusEqualsToken => "+=",
            Self::MinusEqualsToken => "-=",
            Self::BarBarEqualsToken => "||=",
            Self::AmpersandAmpersandEqualsToken => "&&=",
            Self::QuestionQuestionEqualsToken => "??=",
            Self::PlusToken => "+",
            Self::MinusToken => "-",
            Self::AsteriskToken => "*",
            Self::SlashToken => "/",
            Self::PercentToken => "%",
            Self::LessThanToken => "<",
            Self::GreaterThanToken => ">",
            Self::LessThanEqualsToken => "<=",
            Self::GreaterThanEqualsToken => ">=",
            Self::EqualsEqualsToken => "==",
            Self::ExclamationEqualsToken => "!=",
            Self::EqualsEqualsEqualsToken => "===",
            Self::ExclamationEqualsEqualsToken => "!==",
            Self::AmpersandAmpersandToken => "&&",
            Self::BarBarToken => "||",
            Self::QuestionQuestionToken => "??",
            Self::CommaToken => ",",
            Self::ExclamationToken => "!",
            Self::PlusPlusToken => "++",
            Self::MinusMinusToken => "--",
            Self::EmptyStatement => ";",
            Self::DebuggerStatement => "debugger",
            _ => return None,
        })
    }
}

bitflags! {
    /// Modifiers that can appear on parameters and class members.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u16 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const READONLY = 1 << 3;
        const OVERRIDE = 1 << 4;
        const STATIC = 1 << 5;

        /// Modifiers that turn a constructor parameter into a property.
        const PARAMETER_PROPERTY = Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::READONLY.bits()
            | Self::OVERRIDE.bits();
    }
}

/// Node header stored in the arena.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
    pub parent: NodeIndex,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub const fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }
}

// =============================================================================
// Node data pools
// =============================================================================

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub escaped_text: String,
}

#[derive(Clone, Debug)]
pub struct LiteralData {
    pub text: String,
}

/// `SourceFile`, `Block`, `ModuleBlock`, `CaseBlock`, `VariableStatement`,
/// `VariableDeclarationList` and `ArrayLiteralExpression` element lists.
#[derive(Clone, Debug)]
pub struct ListData {
    pub nodes: NodeList,
}

/// Single-expression nodes: expression, `return` and `throw` statements,
/// computed names, parenthesized and non-null expressions, spreads,
/// `await` and `export =` / `export default` assignments.
#[derive(Clone, Debug)]
pub struct WrapperData {
    pub expression: NodeIndex,
}

/// `VariableDeclaration`: `name = initializer`.
#[derive(Clone, Debug)]
pub struct VariableData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// `ObjectBindingPattern` / `ArrayBindingPattern`.
#[derive(Clone, Debug)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

/// `BindingElement`: `...property_name: name = initializer`.
#[derive(Clone, Debug)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ParameterData {
    pub modifiers: ModifierFlags,
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

impl ParameterData {
    pub const fn is_parameter_property(&self) -> bool {
        self.modifiers.intersects(ModifierFlags::PARAMETER_PROPERTY)
    }
}

/// Functions, arrows, methods, constructors and accessors.
#[derive(Clone, Debug)]
pub struct FunctionData {
    /// Function name, method key or accessor key (`NONE` for arrows and
    /// constructors).
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub body: NodeIndex,
    pub modifiers: ModifierFlags,
}

/// Classes and interfaces.
#[derive(Clone, Debug)]
pub struct ClassData {
    pub name: NodeIndex,
    pub members: NodeList,
}

/// `PropertyDeclaration`, `PropertySignature`, `PropertyAssignment` and
/// `ShorthandPropertyAssignment`.
#[derive(Clone, Debug)]
pub struct PropertyData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
    pub modifiers: ModifierFlags,
}

/// Call, construct and method signatures.
#[derive(Clone, Debug)]
pub struct SignatureData {
    /// Method name (`NONE` for call and construct signatures).
    pub name: NodeIndex,
    pub parameters: NodeList,
}

#[derive(Clone, Debug)]
pub struct ObjectLiteralData {
    pub properties: NodeList,
}

/// `CallExpression` / `NewExpression`.
#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

/// `PropertyAccessExpression` / `ElementAccessExpression`.
#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
    pub question_dot_token: bool,
}

#[derive(Clone, Debug)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: SyntaxKind,
    pub right: NodeIndex,
}

/// `PrefixUnaryExpression` / `PostfixUnaryExpression`.
#[derive(Clone, Debug)]
pub struct UnaryExprData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

/// `condition ? when_true : when_false`
#[derive(Clone, Debug)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// `yield` / `yield*`
#[derive(Clone, Debug)]
pub struct YieldExprData {
    pub expression: NodeIndex,
    pub asterisk_token: bool,
}

/// `AsExpression` / `SatisfiesExpression`.
#[derive(Clone, Debug)]
pub struct TypeAssertionData {
    pub expression: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TemplateExprData {
    pub head: NodeIndex,
    pub template_spans: NodeList,
}

#[derive(Clone, Debug)]
pub struct TemplateSpanData {
    pub expression: NodeIndex,
    pub literal: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TaggedTemplateData {
    pub tag: NodeIndex,
    pub template: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// `for`, `while` and `do` loops. `while` and `do` leave `initializer` and
/// `incrementor` empty.
#[derive(Clone, Debug)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ForInOfData {
    pub await_modifier: bool,
    /// `VariableDeclarationList` or an assignment target expression.
    pub initializer: NodeIndex,
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct SwitchData {
    pub expression: NodeIndex,
    pub case_block: NodeIndex,
}

/// `CaseClause` / `DefaultClause` (`expression` is `NONE` for `default`).
#[derive(Clone, Debug)]
pub struct CaseClauseData {
    pub expression: NodeIndex,
    pub statements: NodeList,
}

#[derive(Clone, Debug)]
pub struct TryData {
    pub try_block: NodeIndex,
    pub catch_clause: NodeIndex,
    pub finally_block: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CatchClauseData {
    /// `VariableDeclaration` of the caught value, or `NONE`.
    pub variable_declaration: NodeIndex,
    pub block: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct LabeledData {
    pub label: NodeIndex,
    pub statement: NodeIndex,
}

/// `break` / `continue` with an optional label.
#[derive(Clone, Debug)]
pub struct JumpData {
    pub label: NodeIndex,
}

/// `module`/`namespace` declarations.
#[derive(Clone, Debug)]
pub struct ModuleData {
    pub name: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TypeAliasData {
    pub name: NodeIndex,
    pub type_node: NodeIndex,
}

/// `export <declaration>` / `export default <declaration>`.
#[derive(Clone, Debug)]
pub struct ExportDeclData {
    pub is_default_export: bool,
    pub export_clause: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
    pub type_arguments: NodeList,
}

/// `TypeLiteral` members, `UnionType` / `IntersectionType` constituents.
#[derive(Clone, Debug)]
pub struct CompositeTypeData {
    pub types: NodeList,
}

/// Arena holding every node of one source file.
///
/// `text` is the source text the node spans point into. Hosts that build the
/// tree from real source pass it to [`NodeArena::with_source`]; otherwise the
/// builder synthesizes text for identifiers and literals as they are added.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) text: String,
    pub(crate) synthesize_text: bool,
    pub(crate) nodes: Vec<Node>,
    pub(crate) identifiers: Vec<IdentifierData>,
    pub(crate) literals: Vec<LiteralData>,
    pub(crate) lists: Vec<ListData>,
    pub(crate) wrappers: Vec<WrapperData>,
    pub(crate) variables: Vec<VariableData>,
    pub(crate) binding_patterns: Vec<BindingPatternData>,
    pub(crate) binding_elements: Vec<BindingElementData>,
    pub(crate) parameters: Vec<ParameterData>,
    pub(crate) functions: Vec<FunctionData>,
    pub(crate) classes: Vec<ClassData>,
    pub(crate) properties: Vec<PropertyData>,
    pub(crate) signatures: Vec<SignatureData>,
    pub(crate) object_literals: Vec<ObjectLiteralData>,
    pub(crate) call_exprs: Vec<CallExprData>,
    pub(crate) access_exprs: Vec<AccessExprData>,
    pub(crate) binary_exprs: Vec<BinaryExprData>,
    pub(crate) unary_exprs: Vec<UnaryExprData>,
    pub(crate) conditional_exprs: Vec<ConditionalExprData>,
    pub(crate) yield_exprs: Vec<YieldExprData>,
    pub(crate) type_assertions: Vec<TypeAssertionData>,
    pub(crate) template_exprs: Vec<TemplateExprData>,
    pub(crate) template_spans: Vec<TemplateSpanData>,
    pub(crate) tagged_templates: Vec<TaggedTemplateData>,
    pub(crate) if_statements: Vec<IfStatementData>,
    pub(crate) loops: Vec<LoopData>,
    pub(crate) for_in_of: Vec<ForInOfData>,
    pub(crate) switch_statements: Vec<SwitchData>,
    pub(crate) case_clauses: Vec<CaseClauseData>,
    pub(crate) try_statements: Vec<TryData>,
    pub(crate) catch_clauses: Vec<CatchClauseData>,
    pub(crate) labeled_statements: Vec<LabeledData>,
    pub(crate) jumps: Vec<JumpData>,
    pub(crate) modules: Vec<ModuleData>,
    pub(crate) type_aliases: Vec<TypeAliasData>,
    pub(crate) export_decls: Vec<ExportDeclData>,
    pub(crate) type_refs: Vec<TypeRefData>,
    pub(crate) composite_types: Vec<CompositeTypeData>,
}
