//! Named rules and the two-phase grammar builder.
//!
//! Recursive grammars need to mention a rule before its body exists:
//!
//! ```text
//! expr   = term (op term)*
//! term   = factor (op factor)*
//! factor = "(" expr ")" | number
//! ```
//!
//! [`GrammarBuilder::declare`] hands out a [`Rule`] placeholder that can be
//! used inside other parsers straight away. [`GrammarBuilder::bind`]
//! installs the body later, exactly once. [`GrammarBuilder::build`] refuses
//! to produce a [`Grammar`] while any declared rule is still unbound, so a
//! placeholder can never be reached at match time without a body.
//!
//! Rules are handles (an index plus the owning grammar's id), not owners of
//! their bodies. Bodies live in the grammar's arena, which is why rules are
//! `Copy` and why self-reference creates no ownership cycle.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU32, Ordering};

use rustc_hash::FxHashMap;
use tracing::{debug, error, trace};

use crate::stack::ensure_sufficient_stack;
use crate::{BoxedParser, Context, Cursor, Parser};

/// Identity of one builder and the grammar it produces.
///
/// Zero is reserved for the empty grammar used by standalone sessions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct GrammarId(u32);

static NEXT_GRAMMAR_ID: AtomicU32 = AtomicU32::new(1);

impl GrammarId {
    fn fresh() -> Self {
        GrammarId(NEXT_GRAMMAR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Index of a rule in its grammar's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(u32);

impl RuleId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error building a grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("rule `{name}` was declared but never bound")]
    UnboundRule { name: &'static str },

    #[error("rule `{name}` is already bound")]
    AlreadyBound { name: &'static str },

    #[error("rule `{name}` belongs to a different grammar")]
    ForeignRule { name: &'static str },

    #[error("rule name `{name}` is declared more than once")]
    DuplicateRule { name: &'static str },
}

/// Named grammar production producing `T`.
///
/// Obtained from [`GrammarBuilder::declare`]. Matching a rule delegates to
/// the body bound in the grammar of the current session.
pub struct Rule<T> {
    id: RuleId,
    grammar: GrammarId,
    name: &'static str,
    _output: PhantomData<fn() -> T>,
}

impl<T> Rule<T> {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn id(&self) -> RuleId {
        self.id
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Rule<T> {}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({} #{})", self.name, self.id.0)
    }
}

impl<T: 'static> Parser for Rule<T> {
    type Output = T;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(T, Cursor)> {
        let Some(body) = ctx.grammar().body(self) else {
            error!(rule = self.name, "rule is not part of the session's grammar");
            return None;
        };

        trace!(rule = self.name, pos = at.position(), "enter rule");
        let result = ensure_sufficient_stack(|| body.parse(ctx, at));
        trace!(
            rule = self.name,
            matched = result.is_some(),
            pos = result.as_ref().map_or(at, |(_, next)| *next).position(),
            "exit rule"
        );
        result
    }
}

/// Rule body with its output type erased. Always a `BoxedParser<T>` for the
/// `T` of the rule that owns the slot.
type ErasedBody = Box<dyn Any + Send + Sync>;

struct RuleSlot {
    name: &'static str,
    body: Option<ErasedBody>,
}

/// First phase of grammar construction: declare rules, then bind bodies.
pub struct GrammarBuilder {
    id: GrammarId,
    slots: Vec<RuleSlot>,
    names: FxHashMap<&'static str, RuleId>,
    duplicate: Option<&'static str>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        GrammarBuilder {
            id: GrammarId::fresh(),
            slots: Vec::new(),
            names: FxHashMap::default(),
            duplicate: None,
        }
    }

    /// Declare a rule producing `T`. Its body is bound later.
    ///
    /// Names are for diagnostics and tracing; declaring the same name twice
    /// is reported by [`build`](Self::build).
    pub fn declare<T: 'static>(&mut self, name: &'static str) -> Rule<T> {
        let id = RuleId(u32::try_from(self.slots.len()).unwrap_or(u32::MAX));
        if self.names.insert(name, id).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(name);
        }
        self.slots.push(RuleSlot { name, body: None });

        Rule {
            id,
            grammar: self.id,
            name,
            _output: PhantomData,
        }
    }

    /// Install the body of `rule`.
    pub fn bind<T, P>(&mut self, rule: &Rule<T>, body: P) -> Result<(), GrammarError>
    where
        T: 'static,
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        if rule.grammar != self.id {
            return Err(GrammarError::ForeignRule { name: rule.name });
        }
        let slot = self
            .slots
            .get_mut(rule.id.index())
            .ok_or(GrammarError::ForeignRule { name: rule.name })?;
        if slot.body.is_some() {
            return Err(GrammarError::AlreadyBound { name: rule.name });
        }

        let body: BoxedParser<T> = Box::new(body);
        slot.body = Some(Box::new(body));
        Ok(())
    }

    /// Declare and bind in one step, for rules nothing refers to before
    /// their body exists.
    pub fn define<T, P>(&mut self, name: &'static str, body: P) -> Result<Rule<T>, GrammarError>
    where
        T: 'static,
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        let rule = self.declare(name);
        self.bind(&rule, body)?;
        Ok(rule)
    }

    /// Finish construction, checking that every declared rule was bound.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(name) = self.duplicate {
            return Err(GrammarError::DuplicateRule { name });
        }

        let rules = self
            .slots
            .into_iter()
            .map(|slot| match slot.body {
                Some(body) => Ok(BoundRule {
                    name: slot.name,
                    body,
                }),
                None => Err(GrammarError::UnboundRule { name: slot.name }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rules = rules.len(), "grammar built");
        Ok(Grammar { id: self.id, rules })
    }
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct BoundRule {
    name: &'static str,
    body: ErasedBody,
}

/// A finished grammar: every rule declared in its builder, each with a body.
///
/// Immutable, `Send + Sync`, and reusable across any number of sessions.
pub struct Grammar {
    id: GrammarId,
    rules: Vec<BoundRule>,
}

/// Grammar with no rules, for sessions that only use rule-free parsers.
static EMPTY_GRAMMAR: Grammar = Grammar {
    id: GrammarId(0),
    rules: Vec::new(),
};

impl Grammar {
    pub(crate) fn empty() -> &'static Grammar {
        &EMPTY_GRAMMAR
    }

    /// Number of rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in declaration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Whether `rule` was declared by this grammar's builder.
    pub fn contains<T>(&self, rule: &Rule<T>) -> bool {
        rule.grammar == self.id && rule.id.index() < self.rules.len()
    }

    fn body<T: 'static>(&self, rule: &Rule<T>) -> Option<&BoxedParser<T>> {
        if !self.contains(rule) {
            return None;
        }
        self.rules[rule.id.index()].body.downcast_ref::<BoxedParser<T>>()
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("rules", &self.rules.iter().map(|r| r.name).collect::<Vec<_>>())
            .finish()
    }
}
