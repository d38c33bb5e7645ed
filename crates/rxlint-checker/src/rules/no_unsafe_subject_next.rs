//! `no-unsafe-subject-next`: forbids `subject.next()` without a value when
//! the subject's element type cannot be absent.
//!
//! ```typescript
//! const numbers = new Subject<number>();
//! numbers.next();        // reported
//! numbers.next(1);       // fine
//!
//! const ticks = new Subject<void>();
//! ticks.next();          // fine
//! ```

use super::{Rule, RuleMeta};
use crate::context::LintContext;
use rxlint_common::diagnostics::rule_messages::NO_UNSAFE_SUBJECT_NEXT_FORBIDDEN;
use rxlint_parser::{NodeIndex, SyntaxKind};
use rxlint_solver::{TypeFlags, TypeId, TypePattern};
use tracing::debug;

pub const NAME: &str = "no-unsafe-subject-next";

pub static META: RuleMeta = RuleMeta {
    name: NAME,
    description: "Forbids unsafe optional `next` calls.",
    has_options: false,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct NoUnsafeSubjectNext;

impl Rule for NoUnsafeSubjectNext {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext<'_>, root: NodeIndex) {
        let subject = TypePattern::name("Subject");
        for index in ctx.arena.preorder(root) {
            if let Some(property) = unsafe_next_call(ctx, index, &subject) {
                ctx.report(property, &NO_UNSAFE_SUBJECT_NEXT_FORBIDDEN, &[]);
            }
        }
    }
}

/// The `next` name node of an unsafe `<subject>.next()` call at `index`.
fn unsafe_next_call(ctx: &LintContext<'_>, index: NodeIndex, subject: &TypePattern) -> Option<NodeIndex> {
    let arena = ctx.arena;
    let node = arena.get(index)?;
    if node.kind != SyntaxKind::CallExpression {
        return None;
    }
    let call = arena.get_call_expr(node)?;
    if !call.arguments.is_empty() {
        return None;
    }
    let callee = arena.get(call.expression)?;
    if callee.kind != SyntaxKind::PropertyAccessExpression {
        return None;
    }
    let access = arena.get_access_expr(callee)?;
    if arena.kind(access.name_or_argument) != Some(SyntaxKind::Identifier)
        || arena.identifier_text(access.name_or_argument) != Some("next")
    {
        return None;
    }

    let types = &ctx.types;
    let receiver = types.type_of(access.expression);
    if !types.is_reference(receiver) || !types.could_be_type(receiver, subject) {
        return None;
    }
    let Some(&element) = types.type_arguments(receiver).first() else {
        return None;
    };
    if can_be_absent(ctx, element) {
        debug!(
            receiver = %types.display(receiver),
            "next() without a value is safe"
        );
        return None;
    }
    Some(access.name_or_argument)
}

/// `any`, `unknown`, `void`, or a union with such a member.
fn can_be_absent(ctx: &LintContext<'_>, element: TypeId) -> bool {
    let absent = TypeFlags::ANY | TypeFlags::UNKNOWN | TypeFlags::VOID;
    let types = &ctx.types;
    types.has_flag(element, absent) || types.union_has_member_with_flag(element, absent)
}
