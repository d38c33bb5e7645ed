//! Type formatting for logs and test failure messages.

use crate::intern::TypeInterner;
use crate::types::{LiteralValue, TypeData, TypeId};

/// Renders types in TypeScript surface syntax (`Subject<number | void>`).
pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
    max_depth: u32,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        Self {
            interner,
            max_depth: 8,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn format(&self, type_id: TypeId) -> String {
        let mut out = String::new();
        self.write(&mut out, type_id, 0);
        out
    }

    fn write(&self, out: &mut String, type_id: TypeId, depth: u32) {
        if depth > self.max_depth {
            out.push_str("...");
            return;
        }
        let Some(data) = self.interner.lookup(type_id) else {
            out.push_str("error");
            return;
        };
        match data {
            TypeData::Intrinsic(kind) => out.push_str(kind.name()),
            TypeData::Literal(LiteralValue::String(value)) => {
                out.push('"');
                out.push_str(value);
                out.push('"');
            }
            TypeData::Literal(LiteralValue::Number(text)) => out.push_str(text),
            TypeData::Literal(LiteralValue::Boolean(value)) => {
                out.push_str(if *value { "true" } else { "false" });
            }
            TypeData::Object(def) => self.write_def_name(out, *def),
            TypeData::Reference { target, args } | TypeData::Alias {
                def: target, args, ..
            } => {
                self.write_def_name(out, *target);
                if !args.is_empty() {
                    out.push('<');
                    self.write_list(out, args, ", ", depth);
                    out.push('>');
                }
            }
            TypeData::Union(members) => self.write_list(out, members, " | ", depth),
            TypeData::Intersection(members) => self.write_list(out, members, " & ", depth),
            TypeData::TypeParameter { name } => out.push_str(name),
        }
    }

    fn write_list(&self, out: &mut String, list: &[TypeId], separator: &str, depth: u32) {
        for (i, &member) in list.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.write(out, member, depth + 1);
        }
    }

    fn write_def_name(&self, out: &mut String, def: crate::def::DefId) {
        match self.interner.definitions().get(def) {
            Some(info) => out.push_str(&info.name),
            None => out.push_str("<unknown>"),
        }
    }
}
