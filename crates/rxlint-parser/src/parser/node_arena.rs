//! NodeArena creation methods (add_* methods).
//!
//! Trees are built bottom-up: children are created first and passed to the
//! constructor of their parent, which records itself as their parent and
//! spans from the first child to the last. Leaves (identifiers, literals)
//! either take an explicit span or, for arenas created with
//! [`NodeArena::new`], get synthesized source text appended in creation order.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use tracing::trace;

impl NodeArena {
    /// Create an arena that synthesizes source text for its leaves.
    pub fn new() -> NodeArena {
        NodeArena {
            synthesize_text: true,
            ..NodeArena::default()
        }
    }

    /// Create an arena over existing source text. Leaves must be added with
    /// the `*_at` methods so their spans point into `text`.
    pub fn with_source(text: impl Into<String>) -> NodeArena {
        NodeArena {
            text: text.into(),
            synthesize_text: false,
            ..NodeArena::default()
        }
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Override the span of a node (hosts with real positions).
    pub fn set_span(&mut self, index: NodeIndex, pos: u32, end: u32) {
        if let Some(node) = self.get_mut(index) {
            node.pos = pos;
            node.end = end;
        }
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn push_node(&mut self, kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            pos,
            end,
            parent: NodeIndex::NONE,
            data_index,
        });
        index
    }

    /// Push a node whose span covers `children`, and adopt them.
    fn push_parent(
        &mut self,
        kind: SyntaxKind,
        data_index: u32,
        children: &[NodeIndex],
    ) -> NodeIndex {
        let (pos, end) = self.covering_span(children);
        let index = self.push_node(kind, pos, end, data_index);
        for &child in children {
            if let Some(node) = self.get_mut(child) {
                node.parent = index;
            }
        }
        index
    }

    fn covering_span(&self, children: &[NodeIndex]) -> (u32, u32) {
        let mut pos = u32::MAX;
        let mut end = 0;
        for node in children.iter().filter_map(|&child| self.get(child)) {
            pos = pos.min(node.pos);
            end = end.max(node.end);
        }
        if pos == u32::MAX {
            let at = self.text.len() as u32;
            (at, at)
        } else {
            (pos, end)
        }
    }

    fn synthesize(&mut self, text: &str) -> (u32, u32) {
        if !self.synthesize_text {
            return (0, 0);
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        let pos = self.text.len() as u32;
        self.text.push_str(text);
        (pos, self.text.len() as u32)
    }

    fn push_identifier(&mut self, kind: SyntaxKind, text: &str, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData {
            escaped_text: text.to_string(),
        });
        let index = self.push_node(kind, pos, end, data_index);
        trace!(index = index.0, text, "add identifier");
        index
    }

    fn push_literal(&mut self, kind: SyntaxKind, text: &str) -> NodeIndex {
        let (pos, end) = self.synthesize(text);
        let data_index = self.literals.len() as u32;
        self.literals.push(LiteralData {
            text: text.to_string(),
        });
        self.push_node(kind, pos, end, data_index)
    }

    fn push_list(&mut self, kind: SyntaxKind, nodes: Vec<NodeIndex>) -> NodeIndex {
        let data_index = self.lists.len() as u32;
        let index = self.push_parent(kind, data_index, &nodes);
        self.lists.push(ListData {
            nodes: NodeList::new(nodes),
        });
        index
    }

    fn push_wrapper(&mut self, kind: SyntaxKind, expression: NodeIndex) -> NodeIndex {
        let data_index = self.wrappers.len() as u32;
        let index = self.push_parent(kind, data_index, &[expression]);
        self.wrappers.push(WrapperData { expression });
        index
    }

    // =========================================================================
    // Names and literals
    // =========================================================================

    pub fn add_identifier(&mut self, text: &str) -> NodeIndex {
        let (pos, end) = self.synthesize(text);
        self.push_identifier(SyntaxKind::Identifier, text, pos, end)
    }

    pub fn add_identifier_at(&mut self, text: &str, pos: u32, end: u32) -> NodeIndex {
        self.push_identifier(SyntaxKind::Identifier, text, pos, end)
    }

    /// Add a `#name` identifier. `text` excludes the leading `#`.
    pub fn add_private_identifier(&mut self, text: &str) -> NodeIndex {
        let (pos, end) = self.synthesize(&format!("#{text}"));
        self.push_identifier(SyntaxKind::PrivateIdentifier, text, pos, end)
    }

    pub fn add_private_identifier_at(&mut self, text: &str, pos: u32, end: u32) -> NodeIndex {
        self.push_identifier(SyntaxKind::PrivateIdentifier, text, pos, end)
    }

    pub fn add_string_literal(&mut self, text: &str) -> NodeIndex {
        self.push_literal(SyntaxKind::StringLiteral, text)
    }

    pub fn add_numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.push_literal(SyntaxKind::NumericLiteral, text)
    }

    pub fn add_this_keyword(&mut self) -> NodeIndex {
        self.add_token(SyntaxKind::ThisKeyword)
    }

    /// Keyword, operator token or data-less statement (`;`, `debugger`).
    /// Text is synthesized from [`SyntaxKind::token_text`].
    pub fn add_token(&mut self, kind: SyntaxKind) -> NodeIndex {
        let (pos, end) = match kind.token_text() {
            Some(text) => self.synthesize(text),
            None => {
                trace!(?kind, "token without fixed text");
                let at = self.text.len() as u32;
                (at, at)
            }
        };
        self.push_node(kind, pos, end, Node::NO_DATA)
    }

    pub fn add_token_at(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(kind, pos, end, Node::NO_DATA)
    }

    /// Template literal piece: `NoSubstitutionTemplateLiteral`,
    /// `TemplateHead`, `TemplateMiddle` or `TemplateTail`.
    pub fn add_template_literal(&mut self, kind: SyntaxKind, text: &str) -> NodeIndex {
        debug_assert!(kind.is_literal());
        self.push_literal(kind, text)
    }

    pub fn add_computed_property_name(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ComputedPropertyName, expression)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn add_source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push_list(SyntaxKind::SourceFile, statements)
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push_list(SyntaxKind::Block, statements)
    }

    pub fn add_expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ExpressionStatement, expression)
    }

    pub fn add_return_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ReturnStatement, expression)
    }

    pub fn add_variable_statement(&mut self, declarations: Vec<NodeIndex>) -> NodeIndex {
        self.push_list(SyntaxKind::VariableStatement, declarations)
    }

    /// Declarations of a `for`/`for-in`/`for-of` initializer.
    pub fn add_variable_declaration_list(&mut self, declarations: Vec<NodeIndex>) -> NodeIndex {
        self.push_list(SyntaxKind::VariableDeclarationList, declarations)
    }

    pub fn add_throw_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ThrowStatement, expression)
    }

    /// `if (expression) then_statement else else_statement`; `else_statement`
    /// may be `NodeIndex::NONE`.
    pub fn add_if_statement(
        &mut self,
        expression: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.if_statements.len() as u32;
        let index = self.push_parent(
            SyntaxKind::IfStatement,
            data_index,
            &[expression, then_statement, else_statement],
        );
        self.if_statements.push(IfStatementData {
            expression,
            then_statement,
            else_statement,
        });
        index
    }

    fn push_loop(
        &mut self,
        kind: SyntaxKind,
        initializer: NodeIndex,
        condition: NodeIndex,
        incrementor: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.loops.len() as u32;
        let children = if kind == SyntaxKind::DoStatement {
            [statement, condition, NodeIndex::NONE, NodeIndex::NONE]
        } else {
            [initializer, condition, incrementor, statement]
        };
        let index = self.push_parent(kind, data_index, &children);
        self.loops.push(LoopData {
            initializer,
            condition,
            incrementor,
            statement,
        });
        index
    }

    /// `for (initializer; condition; incrementor) statement`. Any header part
    /// may be `NodeIndex::NONE`.
    pub fn add_for_statement(
        &mut self,
        initializer: NodeIndex,
        condition: NodeIndex,
        incrementor: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.push_loop(
            SyntaxKind::ForStatement,
            initializer,
            condition,
            incrementor,
            statement,
        )
    }

    pub fn add_while_statement(&mut self, condition: NodeIndex, statement: NodeIndex) -> NodeIndex {
        self.push_loop(
            SyntaxKind::WhileStatement,
            NodeIndex::NONE,
            condition,
            NodeIndex::NONE,
            statement,
        )
    }

    /// `do statement while (condition)`
    pub fn add_do_statement(&mut self, statement: NodeIndex, condition: NodeIndex) -> NodeIndex {
        self.push_loop(
            SyntaxKind::DoStatement,
            NodeIndex::NONE,
            condition,
            NodeIndex::NONE,
            statement,
        )
    }

    fn push_for_in_of(
        &mut self,
        kind: SyntaxKind,
        await_modifier: bool,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.for_in_of.len() as u32;
        let index = self.push_parent(kind, data_index, &[initializer, expression, statement]);
        self.for_in_of.push(ForInOfData {
            await_modifier,
            initializer,
            expression,
            statement,
        });
        index
    }

    pub fn add_for_in_statement(
        &mut self,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.push_for_in_of(SyntaxKind::ForInStatement, false, initializer, expression, statement)
    }

    /// `for (initializer of expression) statement`, or `for await` when
    /// `await_modifier` is set.
    pub fn add_for_of_statement(
        &mut self,
        await_modifier: bool,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.push_for_in_of(
            SyntaxKind::ForOfStatement,
            await_modifier,
            initializer,
            expression,
            statement,
        )
    }

    fn push_jump(&mut self, kind: SyntaxKind, label: NodeIndex) -> NodeIndex {
        let data_index = self.jumps.len() as u32;
        let index = if label.is_some() {
            self.push_parent(kind, data_index, &[label])
        } else {
            let text = if kind == SyntaxKind::BreakStatement { "break" } else { "continue" };
            let (pos, end) = self.synthesize(text);
            self.push_node(kind, pos, end, data_index)
        };
        self.jumps.push(JumpData { label });
        index
    }

    /// `break label`; `label` may be `NodeIndex::NONE`.
    pub fn add_break_statement(&mut self, label: NodeIndex) -> NodeIndex {
        self.push_jump(SyntaxKind::BreakStatement, label)
    }

    pub fn add_continue_statement(&mut self, label: NodeIndex) -> NodeIndex {
        self.push_jump(SyntaxKind::ContinueStatement, label)
    }

    pub fn add_labeled_statement(&mut self, label: NodeIndex, statement: NodeIndex) -> NodeIndex {
        let data_index = self.labeled_statements.len() as u32;
        let index = self.push_parent(
            SyntaxKind::LabeledStatement,
            data_index,
            &[label, statement],
        );
        self.labeled_statements.push(LabeledData { label, statement });
        index
    }

    /// `switch (expression) case_block`, where `case_block` comes from
    /// [`add_case_block`](Self::add_case_block).
    pub fn add_switch_statement(&mut self, expression: NodeIndex, case_block: NodeIndex) -> NodeIndex {
        let data_index = self.switch_statements.len() as u32;
        let index = self.push_parent(
            SyntaxKind::SwitchStatement,
            data_index,
            &[expression, case_block],
        );
        self.switch_statements.push(SwitchData {
            expression,
            case_block,
        });
        index
    }

    pub fn add_case_block(&mut self, clauses: Vec<NodeIndex>) -> NodeIndex {
        self.push_list(SyntaxKind::CaseBlock, clauses)
    }

    pub fn add_case_clause(&mut self, expression: NodeIndex, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push_case_clause(SyntaxKind::CaseClause, expression, statements)
    }

    pub fn add_default_clause(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push_case_clause(SyntaxKind::DefaultClause, NodeIndex::NONE, statements)
    }

    fn push_case_clause(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        statements: Vec<NodeIndex>,
    ) -> NodeIndex {
        let mut children = Vec::with_capacity(statements.len() + 1);
        children.push(expression);
        children.extend(statements.iter().copied());

        let data_index = self.case_clauses.len() as u32;
        let index = self.push_parent(kind, data_index, &children);
        self.case_clauses.push(CaseClauseData {
            expression,
            statements: NodeList::new(statements),
        });
        index
    }

    /// `try try_block catch_clause finally finally_block`; either of the last
    /// two may be `NodeIndex::NONE`.
    pub fn add_try_statement(
        &mut self,
        try_block: NodeIndex,
        catch_clause: NodeIndex,
        finally_block: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.try_statements.len() as u32;
        let index = self.push_parent(
            SyntaxKind::TryStatement,
            data_index,
            &[try_block, catch_clause, finally_block],
        );
        self.try_statements.push(TryData {
            try_block,
            catch_clause,
            finally_block,
        });
        index
    }

    /// `catch (variable_declaration) block`; the declaration may be
    /// `NodeIndex::NONE`.
    pub fn add_catch_clause(&mut self, variable_declaration: NodeIndex, block: NodeIndex) -> NodeIndex {
        let data_index = self.catch_clauses.len() as u32;
        let index = self.push_parent(
            SyntaxKind::CatchClause,
            data_index,
            &[variable_declaration, block],
        );
        self.catch_clauses.push(CatchClauseData {
            variable_declaration,
            block,
        });
        index
    }

    /// `name = initializer`; `initializer` may be `NodeIndex::NONE`.
    pub fn add_variable_declaration(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let data_index = self.variables.len() as u32;
        let index = self.push_parent(
            SyntaxKind::VariableDeclaration,
            data_index,
            &[name, initializer],
        );
        self.variables.push(VariableData { name, initializer });
        index
    }

    // =========================================================================
    // Binding patterns
    // =========================================================================

    pub fn add_object_binding_pattern(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.push_binding_pattern(SyntaxKind::ObjectBindingPattern, elements)
    }

    pub fn add_array_binding_pattern(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.push_binding_pattern(SyntaxKind::ArrayBindingPattern, elements)
    }

    fn push_binding_pattern(&mut self, kind: SyntaxKind, elements: Vec<NodeIndex>) -> NodeIndex {
        let data_index = self.binding_patterns.len() as u32;
        let index = self.push_parent(kind, data_index, &elements);
        self.binding_patterns.push(BindingPatternData {
            elements: NodeList::new(elements),
        });
        index
    }

    /// `...property_name: name = initializer`. Unused parts are `NodeIndex::NONE`.
    pub fn add_binding_element(
        &mut self,
        dot_dot_dot_token: bool,
        property_name: NodeIndex,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.binding_elements.len() as u32;
        let index = self.push_parent(
            SyntaxKind::BindingElement,
            data_index,
            &[property_name, name, initializer],
        );
        self.binding_elements.push(BindingElementData {
            dot_dot_dot_token,
            property_name,
            name,
            initializer,
        });
        index
    }

    /// A hole in an array binding pattern: `[, b]`.
    pub fn add_omitted_expression(&mut self) -> NodeIndex {
        let at = self.text.len() as u32;
        self.push_node(SyntaxKind::OmittedExpression, at, at, Node::NO_DATA)
    }

    // =========================================================================
    // Functions
    // =========================================================================

    pub fn add_parameter(
        &mut self,
        modifiers: ModifierFlags,
        dot_dot_dot_token: bool,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.parameters.len() as u32;
        let index = self.push_parent(SyntaxKind::Parameter, data_index, &[name, initializer]);
        self.parameters.push(ParameterData {
            modifiers,
            dot_dot_dot_token,
            name,
            initializer,
        });
        index
    }

    /// Plain `name` parameter without modifiers, rest or initializer.
    pub fn add_simple_parameter(&mut self, name: NodeIndex) -> NodeIndex {
        self.add_parameter(ModifierFlags::empty(), false, name, NodeIndex::NONE)
    }

    fn push_function(
        &mut self,
        kind: SyntaxKind,
        modifiers: ModifierFlags,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        let mut children = Vec::with_capacity(parameters.len() + 2);
        children.push(name);
        children.extend(parameters.iter().copied());
        children.push(body);

        let data_index = self.functions.len() as u32;
        let index = self.push_parent(kind, data_index, &children);
        self.functions.push(FunctionData {
            name,
            parameters: NodeList::new(parameters),
            body,
            modifiers,
        });
        index
    }

    pub fn add_function_declaration(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.push_function(
            SyntaxKind::FunctionDeclaration,
            ModifierFlags::empty(),
            name,
            parameters,
            body,
        )
    }

    pub fn add_function_expression(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.push_function(
            SyntaxKind::FunctionExpression,
            ModifierFlags::empty(),
            name,
            parameters,
            body,
        )
    }

    pub fn add_arrow_function(&mut self, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.push_function(
            SyntaxKind::ArrowFunction,
            ModifierFlags::empty(),
            NodeIndex::NONE,
            parameters,
            body,
        )
    }

    pub fn add_method_declaration(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.push_function(
            SyntaxKind::MethodDeclaration,
            modifiers,
            name,
            parameters,
            body,
        )
    }

    pub fn add_constructor(&mut self, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.push_function(
            SyntaxKind::Constructor,
            ModifierFlags::empty(),
            NodeIndex::NONE,
            parameters,
            body,
        )
    }

    pub fn add_get_accessor(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.push_function(SyntaxKind::GetAccessor, modifiers, name, Vec::new(), body)
    }

    pub fn add_set_accessor(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        parameter: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.push_function(SyntaxKind::SetAccessor, modifiers, name, vec![parameter], body)
    }

    // =========================================================================
    // Classes and interfaces
    // =========================================================================

    fn push_class(&mut self, kind: SyntaxKind, name: NodeIndex, members: Vec<NodeIndex>) -> NodeIndex {
        let mut children = Vec::with_capacity(members.len() + 1);
        children.push(name);
        children.extend(members.iter().copied());

        let data_index = self.classes.len() as u32;
        let index = self.push_parent(kind, data_index, &children);
        self.classes.push(ClassData {
            name,
            members: NodeList::new(members),
        });
        index
    }

    pub fn add_class_declaration(&mut self, name: NodeIndex, members: Vec<NodeIndex>) -> NodeIndex {
        self.push_class(SyntaxKind::ClassDeclaration, name, members)
    }

    pub fn add_class_expression(&mut self, name: NodeIndex, members: Vec<NodeIndex>) -> NodeIndex {
        self.push_class(SyntaxKind::ClassExpression, name, members)
    }

    pub fn add_interface_declaration(
        &mut self,
        name: NodeIndex,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.push_class(SyntaxKind::InterfaceDeclaration, name, members)
    }

    fn push_property(
        &mut self,
        kind: SyntaxKind,
        modifiers: ModifierFlags,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.properties.len() as u32;
        let index = self.push_parent(kind, data_index, &[name, initializer]);
        self.properties.push(PropertyData {
            name,
            initializer,
            modifiers,
        });
        index
    }

    pub fn add_property_declaration(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        self.push_property(SyntaxKind::PropertyDeclaration, modifiers, name, initializer)
    }

    pub fn add_property_signature(&mut self, name: NodeIndex) -> NodeIndex {
        self.push_property(
            SyntaxKind::PropertySignature,
            ModifierFlags::empty(),
            name,
            NodeIndex::NONE,
        )
    }

    fn push_signature(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
    ) -> NodeIndex {
        let mut children = Vec::with_capacity(parameters.len() + 1);
        children.push(name);
        children.extend(parameters.iter().copied());

        let data_index = self.signatures.len() as u32;
        let index = self.push_parent(kind, data_index, &children);
        self.signatures.push(SignatureData {
            name,
            parameters: NodeList::new(parameters),
        });
        index
    }

    pub fn add_method_signature(&mut self, name: NodeIndex, parameters: Vec<NodeIndex>) -> NodeIndex {
        self.push_signature(SyntaxKind::MethodSignature, name, parameters)
    }

    pub fn add_call_signature(&mut self, parameters: Vec<NodeIndex>) -> NodeIndex {
        self.push_signature(SyntaxKind::CallSignature, NodeIndex::NONE, parameters)
    }

    pub fn add_construct_signature(&mut self, parameters: Vec<NodeIndex>) -> NodeIndex {
        self.push_signature(SyntaxKind::ConstructSignature, NodeIndex::NONE, parameters)
    }

    // =========================================================================
    // Type aliases and type nodes
    // =========================================================================

    /// `type name = type_node`
    pub fn add_type_alias_declaration(&mut self, name: NodeIndex, type_node: NodeIndex) -> NodeIndex {
        let data_index = self.type_aliases.len() as u32;
        let index = self.push_parent(
            SyntaxKind::TypeAliasDeclaration,
            data_index,
            &[name, type_node],
        );
        self.type_aliases.push(TypeAliasData { name, type_node });
        index
    }

    /// `{ members }` in type position.
    pub fn add_type_literal(&mut self, members: Vec<NodeIndex>) -> NodeIndex {
        self.push_composite_type(SyntaxKind::TypeLiteral, members)
    }

    pub fn add_union_type(&mut self, types: Vec<NodeIndex>) -> NodeIndex {
        self.push_composite_type(SyntaxKind::UnionType, types)
    }

    pub fn add_intersection_type(&mut self, types: Vec<NodeIndex>) -> NodeIndex {
        self.push_composite_type(SyntaxKind::IntersectionType, types)
    }

    fn push_composite_type(&mut self, kind: SyntaxKind, types: Vec<NodeIndex>) -> NodeIndex {
        let data_index = self.composite_types.len() as u32;
        let index = self.push_parent(kind, data_index, &types);
        self.composite_types.push(CompositeTypeData {
            types: NodeList::new(types),
        });
        index
    }

    /// `type_name<type_arguments>`
    pub fn add_type_reference(
        &mut self,
        type_name: NodeIndex,
        type_arguments: Vec<NodeIndex>,
    ) -> NodeIndex {
        let mut children = Vec::with_capacity(type_arguments.len() + 1);
        children.push(type_name);
        children.extend(type_arguments.iter().copied());

        let data_index = self.type_refs.len() as u32;
        let index = self.push_parent(SyntaxKind::TypeReference, data_index, &children);
        self.type_refs.push(TypeRefData {
            type_name,
            type_arguments: NodeList::new(type_arguments),
        });
        index
    }

    // =========================================================================
    // Modules
    // =========================================================================

    /// `namespace name body`, where `body` is a module block or a nested
    /// module declaration (`namespace a.b {}`).
    pub fn add_module_declaration(&mut self, name: NodeIndex, body: NodeIndex) -> NodeIndex {
        let data_index = self.modules.len() as u32;
        let index = self.push_parent(SyntaxKind::ModuleDeclaration, data_index, &[name, body]);
        self.modules.push(ModuleData { name, body });
        index
    }

    pub fn add_module_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push_list(SyntaxKind::ModuleBlock, statements)
    }

    /// `export <declaration>` or `export default <declaration>`.
    pub fn add_export_declaration(
        &mut self,
        is_default_export: bool,
        declaration: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.export_decls.len() as u32;
        let index = self.push_parent(SyntaxKind::ExportDeclaration, data_index, &[declaration]);
        self.export_decls.push(ExportDeclData {
            is_default_export,
            export_clause: declaration,
        });
        index
    }

    /// `export default expression` / `export = expression`.
    pub fn add_export_assignment(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ExportAssignment, expression)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn add_object_literal(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        let data_index = self.object_literals.len() as u32;
        let index = self.push_parent(SyntaxKind::ObjectLiteralExpression, data_index, &properties);
        self.object_literals.push(ObjectLiteralData {
            properties: NodeList::new(properties),
        });
        index
    }

    pub fn add_property_assignment(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        self.push_property(
            SyntaxKind::PropertyAssignment,
            ModifierFlags::empty(),
            name,
            initializer,
        )
    }

    pub fn add_shorthand_property_assignment(&mut self, name: NodeIndex) -> NodeIndex {
        self.push_property(
            SyntaxKind::ShorthandPropertyAssignment,
            ModifierFlags::empty(),
            name,
            NodeIndex::NONE,
        )
    }

    fn push_call(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        arguments: Vec<NodeIndex>,
    ) -> NodeIndex {
        let mut children = Vec::with_capacity(arguments.len() + 1);
        children.push(expression);
        children.extend(arguments.iter().copied());

        let data_index = self.call_exprs.len() as u32;
        let index = self.push_parent(kind, data_index, &children);
        self.call_exprs.push(CallExprData {
            expression,
            arguments: NodeList::new(arguments),
        });
        index
    }

    pub fn add_call_expression(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.push_call(SyntaxKind::CallExpression, expression, arguments)
    }

    pub fn add_new_expression(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.push_call(SyntaxKind::NewExpression, expression, arguments)
    }

    fn push_access(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        name_or_argument: NodeIndex,
        question_dot_token: bool,
    ) -> NodeIndex {
        let data_index = self.access_exprs.len() as u32;
        let index = self.push_parent(kind, data_index, &[expression, name_or_argument]);
        self.access_exprs.push(AccessExprData {
            expression,
            name_or_argument,
            question_dot_token,
        });
        index
    }

    /// `expression.name`
    pub fn add_property_access(&mut self, expression: NodeIndex, name: NodeIndex) -> NodeIndex {
        self.push_access(SyntaxKind::PropertyAccessExpression, expression, name, false)
    }

    /// `expression?.name`
    pub fn add_optional_property_access(
        &mut self,
        expression: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        self.push_access(SyntaxKind::PropertyAccessExpression, expression, name, true)
    }

    /// `expression[argument]`
    pub fn add_element_access(&mut self, expression: NodeIndex, argument: NodeIndex) -> NodeIndex {
        self.push_access(SyntaxKind::ElementAccessExpression, expression, argument, false)
    }

    /// `...expression` in an object literal.
    pub fn add_spread_assignment(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::SpreadAssignment, expression)
    }

    /// `...expression` in an array literal or argument list.
    pub fn add_spread_element(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::SpreadElement, expression)
    }

    pub fn add_array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.push_list(SyntaxKind::ArrayLiteralExpression, elements)
    }

    pub fn add_parenthesized_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ParenthesizedExpression, expression)
    }

    /// `expression!`
    pub fn add_non_null_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::NonNullExpression, expression)
    }

    pub fn add_await_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push_wrapper(SyntaxKind::AwaitExpression, expression)
    }

    /// `yield expression` / `yield* expression`; `expression` may be
    /// `NodeIndex::NONE`.
    pub fn add_yield_expression(&mut self, asterisk_token: bool, expression: NodeIndex) -> NodeIndex {
        let data_index = self.yield_exprs.len() as u32;
        let index = self.push_parent(SyntaxKind::YieldExpression, data_index, &[expression]);
        self.yield_exprs.push(YieldExprData {
            expression,
            asterisk_token,
        });
        index
    }

    fn push_type_assertion(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.type_assertions.len() as u32;
        let index = self.push_parent(kind, data_index, &[expression, type_node]);
        self.type_assertions.push(TypeAssertionData {
            expression,
            type_node,
        });
        index
    }

    /// `expression as type_node`
    pub fn add_as_expression(&mut self, expression: NodeIndex, type_node: NodeIndex) -> NodeIndex {
        self.push_type_assertion(SyntaxKind::AsExpression, expression, type_node)
    }

    /// `expression satisfies type_node`
    pub fn add_satisfies_expression(
        &mut self,
        expression: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.push_type_assertion(SyntaxKind::SatisfiesExpression, expression, type_node)
    }

    /// `left operator_token right`, including assignments and the comma
    /// operator.
    pub fn add_binary_expression(
        &mut self,
        left: NodeIndex,
        operator_token: SyntaxKind,
        right: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.binary_exprs.len() as u32;
        let index = self.push_parent(SyntaxKind::BinaryExpression, data_index, &[left, right]);
        self.binary_exprs.push(BinaryExprData {
            left,
            operator_token,
            right,
        });
        index
    }

    /// `!operand`, `typeof operand`, `++operand`, ...
    pub fn add_prefix_unary_expression(&mut self, operator: SyntaxKind, operand: NodeIndex) -> NodeIndex {
        self.push_unary(SyntaxKind::PrefixUnaryExpression, operator, operand)
    }

    /// `operand++` / `operand--`
    pub fn add_postfix_unary_expression(
        &mut self,
        operand: NodeIndex,
        operator: SyntaxKind,
    ) -> NodeIndex {
        self.push_unary(SyntaxKind::PostfixUnaryExpression, operator, operand)
    }

    fn push_unary(&mut self, kind: SyntaxKind, operator: SyntaxKind, operand: NodeIndex) -> NodeIndex {
        let data_index = self.unary_exprs.len() as u32;
        let index = self.push_parent(kind, data_index, &[operand]);
        self.unary_exprs.push(UnaryExprData { operator, operand });
        index
    }

    /// `condition ? when_true : when_false`
    pub fn add_conditional_expression(
        &mut self,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        let data_index = self.conditional_exprs.len() as u32;
        let index = self.push_parent(
            SyntaxKind::ConditionalExpression,
            data_index,
            &[condition, when_true, when_false],
        );
        self.conditional_exprs.push(ConditionalExprData {
            condition,
            when_true,
            when_false,
        });
        index
    }

    /// `` `head${span.expression}span.literal...` ``
    pub fn add_template_expression(
        &mut self,
        head: NodeIndex,
        template_spans: Vec<NodeIndex>,
    ) -> NodeIndex {
        let mut children = Vec::with_capacity(template_spans.len() + 1);
        children.push(head);
        children.extend(template_spans.iter().copied());

        let data_index = self.template_exprs.len() as u32;
        let index = self.push_parent(SyntaxKind::TemplateExpression, data_index, &children);
        self.template_exprs.push(TemplateExprData {
            head,
            template_spans: NodeList::new(template_spans),
        });
        index
    }

    pub fn add_template_span(&mut self, expression: NodeIndex, literal: NodeIndex) -> NodeIndex {
        let data_index = self.template_spans.len() as u32;
        let index = self.push_parent(SyntaxKind::TemplateSpan, data_index, &[expression, literal]);
        self.template_spans.push(TemplateSpanData {
            expression,
            literal,
        });
        index
    }

    /// `` tag`template` ``
    pub fn add_tagged_template(&mut self, tag: NodeIndex, template: NodeIndex) -> NodeIndex {
        let data_index = self.tagged_templates.len() as u32;
        let index = self.push_parent(
            SyntaxKind::TaggedTemplateExpression,
            data_index,
            &[tag, template],
        );
        self.tagged_templates.push(TaggedTemplateData { tag, template });
        index
    }
}
