//! NodeArena access methods: typed data lookups, parent/child navigation and
//! preorder traversal.

use super::base::NodeIndex;
use super::node::*;
use rxlint_common::Span;
use rxlint_common::limits::{MAX_AST_DEPTH, MAX_PARENT_WALK};
use smallvec::SmallVec;

/// Children of a node, in source order.
pub type ChildList = SmallVec<[NodeIndex; 8]>;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    /// Parent of a node (`NodeIndex::NONE` for the root or unknown nodes).
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    #[inline]
    pub fn span(&self, index: NodeIndex) -> Option<Span> {
        self.get(index).map(|node| Span::new(node.pos, node.end))
    }

    /// The source text the node spans point into.
    #[inline]
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// Source text covered by a node.
    pub fn node_text(&self, index: NodeIndex) -> Option<&str> {
        self.span(index)?.slice(&self.text)
    }

    // =========================================================================
    // Typed data access
    // =========================================================================

    /// Get identifier data for a node.
    /// Returns None if node is not an identifier or has no data.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind.is_identifier_like() {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data() && node.kind.is_literal() {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Statement, clause, declaration and array element lists.
    #[inline]
    pub fn get_list(&self, node: &Node) -> Option<&ListData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::SourceFile
                    | SyntaxKind::Block
                    | SyntaxKind::ModuleBlock
                    | SyntaxKind::CaseBlock
                    | SyntaxKind::VariableStatement
                    | SyntaxKind::VariableDeclarationList
                    | SyntaxKind::ArrayLiteralExpression
            )
        {
            self.lists.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_wrapper(&self, node: &Node) -> Option<&WrapperData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::ExpressionStatement
                    | SyntaxKind::ReturnStatement
                    | SyntaxKind::ThrowStatement
                    | SyntaxKind::ComputedPropertyName
                    | SyntaxKind::ParenthesizedExpression
                    | SyntaxKind::NonNullExpression
                    | SyntaxKind::AwaitExpression
                    | SyntaxKind::SpreadElement
                    | SyntaxKind::SpreadAssignment
                    | SyntaxKind::ExportAssignment
            )
        {
            self.wrappers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable(&self, node: &Node) -> Option<&VariableData> {
        if node.has_data() && node.kind == SyntaxKind::VariableDeclaration {
            self.variables.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binding_pattern(&self, node: &Node) -> Option<&BindingPatternData> {
        if node.has_data() && node.kind.is_binding_pattern() {
            self.binding_patterns.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binding_element(&self, node: &Node) -> Option<&BindingElementData> {
        if node.has_data() && node.kind == SyntaxKind::BindingElement {
            self.binding_elements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_parameter(&self, node: &Node) -> Option<&ParameterData> {
        if node.has_data() && node.kind == SyntaxKind::Parameter {
            self.parameters.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        if node.has_data() && node.kind.is_function_like() {
            self.functions.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Classes and interfaces.
    #[inline]
    pub fn get_class(&self, node: &Node) -> Option<&ClassData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::ClassDeclaration
                    | SyntaxKind::ClassExpression
                    | SyntaxKind::InterfaceDeclaration
            )
        {
            self.classes.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_property(&self, node: &Node) -> Option<&PropertyData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::PropertyDeclaration
                    | SyntaxKind::PropertySignature
                    | SyntaxKind::PropertyAssignment
                    | SyntaxKind::ShorthandPropertyAssignment
            )
        {
            self.properties.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_signature(&self, node: &Node) -> Option<&SignatureData> {
        if node.has_data() && node.kind.is_signature_declaration() {
            self.signatures.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_object_literal(&self, node: &Node) -> Option<&ObjectLiteralData> {
        if node.has_data() && node.kind == SyntaxKind::ObjectLiteralExpression {
            self.object_literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get call expression data.
    /// Returns None if node is not a call/new expression or has no data.
    #[inline]
    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        if node.has_data()
            && matches!(node.kind, SyntaxKind::CallExpression | SyntaxKind::NewExpression)
        {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get access expression data (property access or element access).
    #[inline]
    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::PropertyAccessExpression | SyntaxKind::ElementAccessExpression
            )
        {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binary_expr(&self, node: &Node) -> Option<&BinaryExprData> {
        if node.has_data() && node.kind == SyntaxKind::BinaryExpression {
            self.binary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Prefix and postfix unary expressions.
    #[inline]
    pub fn get_unary_expr(&self, node: &Node) -> Option<&UnaryExprData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::PrefixUnaryExpression | SyntaxKind::PostfixUnaryExpression
            )
        {
            self.unary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_conditional_expr(&self, node: &Node) -> Option<&ConditionalExprData> {
        if node.has_data() && node.kind == SyntaxKind::ConditionalExpression {
            self.conditional_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_yield_expr(&self, node: &Node) -> Option<&YieldExprData> {
        if node.has_data() && node.kind == SyntaxKind::YieldExpression {
            self.yield_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// `as` and `satisfies` expressions.
    #[inline]
    pub fn get_type_assertion(&self, node: &Node) -> Option<&TypeAssertionData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::AsExpression | SyntaxKind::SatisfiesExpression
            )
        {
            self.type_assertions.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_template_expr(&self, node: &Node) -> Option<&TemplateExprData> {
        if node.has_data() && node.kind == SyntaxKind::TemplateExpression {
            self.template_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_template_span(&self, node: &Node) -> Option<&TemplateSpanData> {
        if node.has_data() && node.kind == SyntaxKind::TemplateSpan {
            self.template_spans.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_tagged_template(&self, node: &Node) -> Option<&TaggedTemplateData> {
        if node.has_data() && node.kind == SyntaxKind::TaggedTemplateExpression {
            self.tagged_templates.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_if_statement(&self, node: &Node) -> Option<&IfStatementData> {
        if node.has_data() && node.kind == SyntaxKind::IfStatement {
            self.if_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// `for`, `while` and `do` loops.
    #[inline]
    pub fn get_loop(&self, node: &Node) -> Option<&LoopData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::ForStatement | SyntaxKind::WhileStatement | SyntaxKind::DoStatement
            )
        {
            self.loops.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_for_in_of(&self, node: &Node) -> Option<&ForInOfData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement
            )
        {
            self.for_in_of.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_switch(&self, node: &Node) -> Option<&SwitchData> {
        if node.has_data() && node.kind == SyntaxKind::SwitchStatement {
            self.switch_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_case_clause(&self, node: &Node) -> Option<&CaseClauseData> {
        if node.has_data()
            && matches!(node.kind, SyntaxKind::CaseClause | SyntaxKind::DefaultClause)
        {
            self.case_clauses.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_try(&self, node: &Node) -> Option<&TryData> {
        if node.has_data() && node.kind == SyntaxKind::TryStatement {
            self.try_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_catch_clause(&self, node: &Node) -> Option<&CatchClauseData> {
        if node.has_data() && node.kind == SyntaxKind::CatchClause {
            self.catch_clauses.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_labeled_statement(&self, node: &Node) -> Option<&LabeledData> {
        if node.has_data() && node.kind == SyntaxKind::LabeledStatement {
            self.labeled_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// `break` and `continue` statements.
    #[inline]
    pub fn get_jump(&self, node: &Node) -> Option<&JumpData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement
            )
        {
            self.jumps.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_module(&self, node: &Node) -> Option<&ModuleData> {
        if node.has_data() && node.kind == SyntaxKind::ModuleDeclaration {
            self.modules.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_type_alias(&self, node: &Node) -> Option<&TypeAliasData> {
        if node.has_data() && node.kind == SyntaxKind::TypeAliasDeclaration {
            self.type_aliases.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_export_decl(&self, node: &Node) -> Option<&ExportDeclData> {
        if node.has_data() && node.kind == SyntaxKind::ExportDeclaration {
            self.export_decls.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_type_ref(&self, node: &Node) -> Option<&TypeRefData> {
        if node.has_data() && node.kind == SyntaxKind::TypeReference {
            self.type_refs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Type literals, union and intersection types.
    #[inline]
    pub fn get_composite_type(&self, node: &Node) -> Option<&CompositeTypeData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::TypeLiteral | SyntaxKind::UnionType | SyntaxKind::IntersectionType
            )
        {
            self.composite_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Identifier text of an `Identifier` or `PrivateIdentifier` node
    /// (without the `#` of private names).
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node)
            .map(|data| data.escaped_text.as_str())
    }

    /// Text used to compare a declared name against naming rules: the
    /// source text when available, otherwise the identifier text with `#`
    /// restored for private names.
    pub fn name_text(&self, index: NodeIndex) -> Option<std::borrow::Cow<'_, str>> {
        if let Some(text) = self.node_text(index).filter(|text| !text.is_empty()) {
            return Some(std::borrow::Cow::Borrowed(text));
        }
        let node = self.get(index)?;
        let data = self.get_identifier(node)?;
        Some(if node.kind == SyntaxKind::PrivateIdentifier {
            std::borrow::Cow::Owned(format!("#{}", data.escaped_text))
        } else {
            std::borrow::Cow::Borrowed(data.escaped_text.as_str())
        })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Children of a node in source order, skipping absent slots.
    pub fn children(&self, index: NodeIndex) -> ChildList {
        let mut out = ChildList::new();
        let Some(node) = self.get(index) else {
            return out;
        };
        let mut push = |child: NodeIndex| {
            if child.is_some() {
                out.push(child);
            }
        };

        match node.kind {
            SyntaxKind::SourceFile
            | SyntaxKind::Block
            | SyntaxKind::ModuleBlock
            | SyntaxKind::CaseBlock
            | SyntaxKind::VariableStatement
            | SyntaxKind::VariableDeclarationList
            | SyntaxKind::ArrayLiteralExpression => {
                if let Some(list) = self.get_list(node) {
                    list.nodes.iter().for_each(&mut push);
                }
            }
            SyntaxKind::ExpressionStatement
            | SyntaxKind::ReturnStatement
            | SyntaxKind::ThrowStatement
            | SyntaxKind::ComputedPropertyName
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::NonNullExpression
            | SyntaxKind::AwaitExpression
            | SyntaxKind::SpreadElement
            | SyntaxKind::SpreadAssignment
            | SyntaxKind::ExportAssignment => {
                if let Some(wrapper) = self.get_wrapper(node) {
                    push(wrapper.expression);
                }
            }
            SyntaxKind::VariableDeclaration => {
                if let Some(var) = self.get_variable(node) {
                    push(var.name);
                    push(var.initializer);
                }
            }
            SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern => {
                if let Some(pattern) = self.get_binding_pattern(node) {
                    pattern.elements.iter().for_each(&mut push);
                }
            }
            SyntaxKind::BindingElement => {
                if let Some(element) = self.get_binding_element(node) {
                    push(element.property_name);
                    push(element.name);
                    push(element.initializer);
                }
            }
            SyntaxKind::Parameter => {
                if let Some(param) = self.get_parameter(node) {
                    push(param.name);
                    push(param.initializer);
                }
            }
            kind if kind.is_function_like() => {
                if let Some(func) = self.get_function(node) {
                    push(func.name);
                    func.parameters.iter().for_each(&mut push);
                    push(func.body);
                }
            }
            SyntaxKind::ClassDeclaration
            | SyntaxKind::ClassExpression
            | SyntaxKind::InterfaceDeclaration => {
                if let Some(class) = self.get_class(node) {
                    push(class.name);
                    class.members.iter().for_each(&mut push);
                }
            }
            SyntaxKind::PropertyDeclaration
            | SyntaxKind::PropertySignature
            | SyntaxKind::PropertyAssignment
            | SyntaxKind::ShorthandPropertyAssignment => {
                if let Some(prop) = self.get_property(node) {
                    push(prop.name);
                    push(prop.initializer);
                }
            }
            kind if kind.is_signature_declaration() => {
                if let Some(sig) = self.get_signature(node) {
                    push(sig.name);
                    sig.parameters.iter().for_each(&mut push);
                }
            }
            SyntaxKind::ObjectLiteralExpression => {
                if let Some(obj) = self.get_object_literal(node) {
                    obj.properties.iter().for_each(&mut push);
                }
            }
            SyntaxKind::CallExpression | SyntaxKind::NewExpression => {
                if let Some(call) = self.get_call_expr(node) {
                    push(call.expression);
                    call.arguments.iter().for_each(&mut push);
                }
            }
            SyntaxKind::PropertyAccessExpression | SyntaxKind::ElementAccessExpression => {
                if let Some(access) = self.get_access_expr(node) {
                    push(access.expression);
                    push(access.name_or_argument);
                }
            }
            SyntaxKind::BinaryExpression => {
                if let Some(binary) = self.get_binary_expr(node) {
                    push(binary.left);
                    push(binary.right);
                }
            }
            SyntaxKind::PrefixUnaryExpression | SyntaxKind::PostfixUnaryExpression => {
                if let Some(unary) = self.get_unary_expr(node) {
                    push(unary.operand);
                }
            }
            SyntaxKind::ConditionalExpression => {
                if let Some(cond) = self.get_conditional_expr(node) {
                    push(cond.condition);
                    push(cond.when_true);
                    push(cond.when_false);
                }
            }
            SyntaxKind::YieldExpression => {
                if let Some(yield_expr) = self.get_yield_expr(node) {
                    push(yield_expr.expression);
                }
            }
            SyntaxKind::AsExpression | SyntaxKind::SatisfiesExpression => {
                if let Some(assertion) = self.get_type_assertion(node) {
                    push(assertion.expression);
                    push(assertion.type_node);
                }
            }
            SyntaxKind::TemplateExpression => {
                if let Some(template) = self.get_template_expr(node) {
                    push(template.head);
                    template.template_spans.iter().for_each(&mut push);
                }
            }
            SyntaxKind::TemplateSpan => {
                if let Some(span) = self.get_template_span(node) {
                    push(span.expression);
                    push(span.literal);
                }
            }
            SyntaxKind::TaggedTemplateExpression => {
                if let Some(tagged) = self.get_tagged_template(node) {
                    push(tagged.tag);
                    push(tagged.template);
                }
            }
            SyntaxKind::IfStatement => {
                if let Some(if_stmt) = self.get_if_statement(node) {
                    push(if_stmt.expression);
                    push(if_stmt.then_statement);
                    push(if_stmt.else_statement);
                }
            }
            SyntaxKind::ForStatement | SyntaxKind::WhileStatement => {
                if let Some(loop_data) = self.get_loop(node) {
                    push(loop_data.initializer);
                    push(loop_data.condition);
                    push(loop_data.incrementor);
                    push(loop_data.statement);
                }
            }
            SyntaxKind::DoStatement => {
                if let Some(loop_data) = self.get_loop(node) {
                    push(loop_data.statement);
                    push(loop_data.condition);
                }
            }
            SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => {
                if let Some(for_data) = self.get_for_in_of(node) {
                    push(for_data.initializer);
                    push(for_data.expression);
                    push(for_data.statement);
                }
            }
            SyntaxKind::SwitchStatement => {
                if let Some(switch) = self.get_switch(node) {
                    push(switch.expression);
                    push(switch.case_block);
                }
            }
            SyntaxKind::CaseClause | SyntaxKind::DefaultClause => {
                if let Some(clause) = self.get_case_clause(node) {
                    push(clause.expression);
                    clause.statements.iter().for_each(&mut push);
                }
            }
            SyntaxKind::TryStatement => {
                if let Some(try_stmt) = self.get_try(node) {
                    push(try_stmt.try_block);
                    push(try_stmt.catch_clause);
                    push(try_stmt.finally_block);
                }
            }
            SyntaxKind::CatchClause => {
                if let Some(catch) = self.get_catch_clause(node) {
                    push(catch.variable_declaration);
                    push(catch.block);
                }
            }
            SyntaxKind::LabeledStatement => {
                if let Some(labeled) = self.get_labeled_statement(node) {
                    push(labeled.label);
                    push(labeled.statement);
                }
            }
            SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement => {
                if let Some(jump) = self.get_jump(node) {
                    push(jump.label);
                }
            }
            SyntaxKind::ModuleDeclaration => {
                if let Some(module) = self.get_module(node) {
                    push(module.name);
                    push(module.body);
                }
            }
            SyntaxKind::TypeAliasDeclaration => {
                if let Some(alias) = self.get_type_alias(node) {
                    push(alias.name);
                    push(alias.type_node);
                }
            }
            SyntaxKind::ExportDeclaration => {
                if let Some(export) = self.get_export_decl(node) {
                    push(export.export_clause);
                }
            }
            SyntaxKind::TypeReference => {
                if let Some(type_ref) = self.get_type_ref(node) {
                    push(type_ref.type_name);
                    type_ref.type_arguments.iter().for_each(&mut push);
                }
            }
            SyntaxKind::TypeLiteral | SyntaxKind::UnionType | SyntaxKind::IntersectionType => {
                if let Some(composite) = self.get_composite_type(node) {
                    composite.types.iter().for_each(&mut push);
                }
            }
            // Leaves: names, literals, keywords, tokens, `;`, `debugger`
            // and omitted expressions.
            _ => {}
        }
        out
    }

    /// Nearest proper ancestor of `index` satisfying `pred`.
    pub fn find_ancestor(
        &self,
        index: NodeIndex,
        mut pred: impl FnMut(&Node) -> bool,
    ) -> Option<NodeIndex> {
        let mut current = self.parent(index);
        let mut steps = 0;
        while current.is_some() && steps < MAX_PARENT_WALK {
            let node = self.get(current)?;
            if pred(node) {
                return Some(current);
            }
            current = node.parent;
            steps += 1;
        }
        None
    }

    /// Visit `root` and all of its descendants in preorder (source order).
    ///
    /// The walk keeps an explicit stack; subtrees nested deeper than
    /// `MAX_AST_DEPTH` are not visited.
    pub fn for_each_preorder(&self, root: NodeIndex, mut visit: impl FnMut(NodeIndex)) {
        let mut stack: Vec<(NodeIndex, u32)> = vec![(root, 0)];
        while let Some((index, depth)) = stack.pop() {
            if self.get(index).is_none() {
                continue;
            }
            visit(index);
            if depth >= MAX_AST_DEPTH {
                continue;
            }
            for child in self.children(index).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// All nodes under `root` in preorder.
    pub fn preorder(&self, root: NodeIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        self.for_each_preorder(root, |index| out.push(index));
        out
    }
}
