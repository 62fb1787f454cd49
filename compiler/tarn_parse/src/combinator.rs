//! Combinators composing parser nodes into larger ones.
//!
//! | Function | Result | Fails when |
//! |----------|--------|------------|
//! | [`sequence`] | `(A, B)` | either side fails |
//! | [`alternative`] | shared `T` | both sides fail |
//! | [`either`] | [`Either<A, B>`] | both sides fail |
//! | [`many`] | `Vec<T>` | never |
//! | [`many1`] | `Vec<T>` | the first attempt fails |
//! | [`exclude`] | `A` | `a` fails, or `b` also matches at the same start |
//! | [`discard`] | `()` | the inner parser fails |
//! | [`optional`] | `Option<T>` | never |
//! | [`map`] | `U` | the inner parser fails |
//!
//! Alternatives are ordered: the left branch is tried first and, if it
//! matches, wins even when the right branch would consume more input. No
//! precedence or longest-match resolution happens here.
//!
//! Every combinator inherits the cursor contract from [`Parser`]: a failure
//! hands nothing back, so the caller resumes from its own cursor.

use crate::{Context, Cursor, Either, Parser};

/// `a` followed by `b`.
#[derive(Clone, Debug)]
pub struct Sequence<A, B> {
    first: A,
    second: B,
}

impl<A, B> Sequence<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Sequence { first, second }
    }
}

impl<A: Parser, B: Parser> Parser for Sequence<A, B> {
    type Output = (A::Output, B::Output);

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        let (a, mid) = self.first.parse(ctx, at)?;
        let (b, end) = self.second.parse(ctx, mid)?;
        Some(((a, b), end))
    }
}

/// `a` followed by `b`, keeping `a`.
#[derive(Clone, Debug)]
pub struct ThenIgnore<A, B> {
    kept: A,
    ignored: B,
}

impl<A, B> ThenIgnore<A, B> {
    pub(crate) fn new(kept: A, ignored: B) -> Self {
        ThenIgnore { kept, ignored }
    }
}

impl<A: Parser, B: Parser> Parser for ThenIgnore<A, B> {
    type Output = A::Output;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        let (a, mid) = self.kept.parse(ctx, at)?;
        let (_, end) = self.ignored.parse(ctx, mid)?;
        Some((a, end))
    }
}

/// `a` followed by `b`, keeping `b`.
#[derive(Clone, Debug)]
pub struct IgnoreThen<A, B> {
    ignored: A,
    kept: B,
}

impl<A, B> IgnoreThen<A, B> {
    pub(crate) fn new(ignored: A, kept: B) -> Self {
        IgnoreThen { ignored, kept }
    }
}

impl<A: Parser, B: Parser> Parser for IgnoreThen<A, B> {
    type Output = B::Output;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        let (_, mid) = self.ignored.parse(ctx, at)?;
        self.kept.parse(ctx, mid)
    }
}

/// First of `a` or `b` to match, both producing the same type.
#[derive(Clone, Debug)]
pub struct Alternative<A, B> {
    left: A,
    right: B,
}

impl<A, B> Alternative<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        Alternative { left, right }
    }
}

impl<A, B> Parser for Alternative<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    type Output = A::Output;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        self.left
            .parse(ctx, at)
            .or_else(|| self.right.parse(ctx, at))
    }
}

/// First of `a` or `b` to match, tagged with the branch taken.
#[derive(Clone, Debug)]
pub struct EitherOf<A, B> {
    left: A,
    right: B,
}

impl<A, B> EitherOf<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        EitherOf { left, right }
    }
}

impl<A: Parser, B: Parser> Parser for EitherOf<A, B> {
    type Output = Either<A::Output, B::Output>;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        if let Some((a, next)) = self.left.parse(ctx, at) {
            return Some((Either::Left(a), next));
        }
        let (b, next) = self.right.parse(ctx, at)?;
        Some((Either::Right(b), next))
    }
}

/// Zero or more repetitions.
#[derive(Clone, Debug)]
pub struct Many<P> {
    inner: P,
}

impl<P> Many<P> {
    pub(crate) fn new(inner: P) -> Self {
        Many { inner }
    }
}

impl<P: Parser> Parser for Many<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        Some(repeat(&self.inner, ctx, at))
    }
}

/// One or more repetitions.
#[derive(Clone, Debug)]
pub struct Many1<P> {
    inner: P,
}

impl<P> Many1<P> {
    pub(crate) fn new(inner: P) -> Self {
        Many1 { inner }
    }
}

impl<P: Parser> Parser for Many1<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        let (items, next) = repeat(&self.inner, ctx, at);
        if items.is_empty() {
            return None;
        }
        Some((items, next))
    }
}

/// Apply `inner` until it fails.
///
/// An iteration that succeeds without consuming anything is kept and ends
/// the loop; repeating it would never terminate.
fn repeat<P: Parser>(inner: &P, ctx: &Context<'_, '_>, at: Cursor) -> (Vec<P::Output>, Cursor) {
    let mut items = Vec::new();
    let mut cursor = at;
    while let Some((item, next)) = inner.parse(ctx, cursor) {
        items.push(item);
        if next <= cursor {
            break;
        }
        cursor = next;
    }
    (items, cursor)
}

/// `a`, unless `b` also matches at the same start.
#[derive(Clone, Debug)]
pub struct Exclude<A, B> {
    inner: A,
    excluded: B,
}

impl<A, B> Exclude<A, B> {
    pub(crate) fn new(inner: A, excluded: B) -> Self {
        Exclude { inner, excluded }
    }
}

impl<A: Parser, B: Parser> Parser for Exclude<A, B> {
    type Output = A::Output;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        let matched = self.inner.parse(ctx, at)?;
        if self.excluded.parse(ctx, at).is_some() {
            return None;
        }
        Some(matched)
    }
}

/// Match and consume, contributing no value.
#[derive(Clone, Debug)]
pub struct Discard<P> {
    inner: P,
}

impl<P> Discard<P> {
    pub(crate) fn new(inner: P) -> Self {
        Discard { inner }
    }
}

impl<P: Parser> Parser for Discard<P> {
    type Output = ();

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        let (_, next) = self.inner.parse(ctx, at)?;
        Some(((), next))
    }
}

/// Match if possible; never fails.
#[derive(Clone, Debug)]
pub struct Optional<P> {
    inner: P,
}

impl<P> Optional<P> {
    pub(crate) fn new(inner: P) -> Self {
        Optional { inner }
    }
}

impl<P: Parser> Parser for Optional<P> {
    type Output = Option<P::Output>;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        match self.inner.parse(ctx, at) {
            Some((value, next)) => Some((Some(value), next)),
            None => Some((None, at)),
        }
    }
}

/// Transform a parser's result.
#[derive(Clone)]
pub struct Map<P, F> {
    inner: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub(crate) fn new(inner: P, f: F) -> Self {
        Map { inner, f }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        let (value, next) = self.inner.parse(ctx, at)?;
        Some(((self.f)(value), next))
    }
}

/// Match `a`, then `b` from where `a` stopped.
pub fn sequence<A: Parser, B: Parser>(a: A, b: B) -> Sequence<A, B> {
    Sequence::new(a, b)
}

/// Try `a`; if it fails, try `b` from the same start.
pub fn alternative<A, B>(a: A, b: B) -> Alternative<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    Alternative::new(a, b)
}

/// Like [`alternative`], for branches with different result types.
pub fn either<A: Parser, B: Parser>(a: A, b: B) -> EitherOf<A, B> {
    EitherOf::new(a, b)
}

/// Repeat `p` until it fails. Always succeeds.
pub fn many<P: Parser>(p: P) -> Many<P> {
    Many::new(p)
}

/// Repeat `p` until it fails. Fails iff the first attempt fails.
pub fn many1<P: Parser>(p: P) -> Many1<P> {
    Many1::new(p)
}

/// Accept what `a` matches only where `b` does not match at the same start.
/// The cursor advances as far as `a` consumed.
pub fn exclude<A: Parser, B: Parser>(a: A, b: B) -> Exclude<A, B> {
    Exclude::new(a, b)
}

/// Match `p` and drop its value.
pub fn discard<P: Parser>(p: P) -> Discard<P> {
    Discard::new(p)
}

/// Match `p` if it can; otherwise succeed with `None` without consuming.
pub fn optional<P: Parser>(p: P) -> Optional<P> {
    Optional::new(p)
}

/// Match `p` and transform its value with `f`.
pub fn map<P, F, U>(p: P, f: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(p, f)
}
