//! Ordered include/exclude table of type patterns.

use crate::error::ConfigError;
use crate::type_query::TypeQuery;
use indexmap::IndexMap;
use rxlint_solver::{TypeId, TypePattern};

/// One table entry: types matching `pattern` are checked when `validate`
/// is true and exempt when it is false.
#[derive(Clone, Debug)]
pub struct PatternRule {
    pub pattern: TypePattern,
    pub validate: bool,
}

/// Pattern rules evaluated in declaration order; the first matching entry
/// decides.
#[derive(Clone, Debug, Default)]
pub struct OrderedPatternList {
    rules: Vec<PatternRule>,
}

impl OrderedPatternList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The exemption table used when no `types` option is given:
    /// `EventEmitter` is not a subject for naming purposes.
    pub fn default_exemptions() -> Self {
        let mut list = Self::new();
        list.push(TypePattern::name("EventEmitter"), false);
        list
    }

    /// Compile a user `types` map (regular expression source to validate
    /// flag), keeping its order.
    pub fn from_map(types: &IndexMap<String, bool>) -> Result<Self, ConfigError> {
        let mut list = Self::new();
        for (source, &validate) in types {
            let pattern =
                TypePattern::regex(source).map_err(|source_err| ConfigError::InvalidTypePattern {
                    pattern: source.clone(),
                    source: source_err,
                })?;
            list.push(pattern, validate);
        }
        Ok(list)
    }

    /// `types` replaces the defaults entirely when present.
    pub fn from_option(types: Option<&IndexMap<String, bool>>) -> Result<Self, ConfigError> {
        match types {
            Some(types) => Self::from_map(types),
            None => Ok(Self::default_exemptions()),
        }
    }

    pub fn push(&mut self, pattern: TypePattern, validate: bool) {
        self.rules.push(PatternRule { pattern, validate });
    }

    /// First rule whose pattern the type could be.
    pub fn first_match(&self, types: &TypeQuery<'_>, type_id: TypeId) -> Option<&PatternRule> {
        self.rules
            .iter()
            .find(|rule| types.could_be_type(type_id, &rule.pattern))
    }

    /// Whether a type that could be a subject is still checked: the first
    /// matching rule decides, no match means checked.
    pub fn should_validate(&self, types: &TypeQuery<'_>, type_id: TypeId) -> bool {
        self.first_match(types, type_id)
            .is_none_or(|rule| rule.validate)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter()
    }
}
