//! The parser-node abstraction and its method-style combinator API.

use std::sync::Arc;

use crate::combinator::{
    Alternative, Discard, EitherOf, Exclude, IgnoreThen, Many, Many1, Map, Optional, Sequence,
    ThenIgnore,
};
use crate::{Context, Cursor};

/// A grammar node: primitive, rule, or combinator.
///
/// `parse` attempts a match starting at `at`, bounded by the context's end
/// position and skip parser. On success it returns the typed result and the
/// cursor just past the consumed input. On failure it returns `None`; since
/// cursors are values, the caller's position is untouched.
pub trait Parser {
    type Output;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)>;
}

/// Type-erased parser, used for rule bodies and wherever a concrete
/// combinator type would get unwieldy.
pub type BoxedParser<T> = Box<dyn Parser<Output = T> + Send + Sync>;

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    #[inline]
    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        (**self).parse(ctx, at)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        (**self).parse(ctx, at)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(Self::Output, Cursor)> {
        (**self).parse(ctx, at)
    }
}

/// Method-call spelling of the free combinator functions.
///
/// `a.then(b).then_ignore(c).map(f)` reads left to right the way the
/// grammar does.
pub trait ParserExt: Parser + Sized {
    /// See [`sequence`](crate::sequence).
    fn then<B: Parser>(self, next: B) -> Sequence<Self, B> {
        Sequence::new(self, next)
    }

    /// Match `self` then `next`, keeping only `self`'s result.
    fn then_ignore<B: Parser>(self, next: B) -> ThenIgnore<Self, B> {
        ThenIgnore::new(self, next)
    }

    /// Match `self` then `next`, keeping only `next`'s result.
    fn ignore_then<B: Parser>(self, next: B) -> IgnoreThen<Self, B> {
        IgnoreThen::new(self, next)
    }

    /// See [`alternative`](crate::alternative).
    fn or<B: Parser<Output = Self::Output>>(self, other: B) -> Alternative<Self, B> {
        Alternative::new(self, other)
    }

    /// See [`either`](crate::either).
    fn or_either<B: Parser>(self, other: B) -> EitherOf<Self, B> {
        EitherOf::new(self, other)
    }

    /// See [`exclude`](crate::exclude).
    fn exclude<B: Parser>(self, excluded: B) -> Exclude<Self, B> {
        Exclude::new(self, excluded)
    }

    /// See [`many`](crate::many).
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    /// See [`many1`](crate::many1).
    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }

    /// See [`discard`](crate::discard).
    fn discard(self) -> Discard<Self> {
        Discard::new(self)
    }

    /// See [`optional`](crate::optional).
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// See [`map`](crate::map).
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<P: Parser> ParserExt for P {}
