//! A tutorial-style tour of the crate.
//!
//! This module contains no code. It exists only for the documentation you're
//! reading right now, which walks through the concepts in the order they are
//! easiest to learn: shapes and forcing first, then finite lists, then the
//! combinators, then metafunctions, and finally infinite sequences of your
//! own.
//!
//! # Lists, shapes, and forcing
//!
//! A type-level list is any type implementing
//! [`TypeList`](crate::list::TypeList). The trait has a single associated
//! type, `Forced`, which evaluates the list by exactly one step, yielding
//! its *shape*: either [`Nil`](crate::list::Nil), the empty list, or
//! [`Cons<H, T>`](crate::list::Cons), a head element and a tail. The tail of
//! a `Cons` is itself an unevaluated list expression — writing it down costs
//! nothing, and only projecting `Forced` on *it* evaluates the next step.
//!
//! That one level of indirection is the whole trick. Because evaluation
//! happens step by step, strictly on demand, a list need not be finite; it
//! only needs to be able to produce its next cell when asked.
//!
//! # Finite lists come from tuples
//!
//! The ergonomic way to write a finite list is a tuple, converted by
//! [`FromTuple`](crate::list::FromTuple) and extracted back by
//! [`ToTuple`](crate::list::ToTuple); the two are mutually inverse:
//!
//! ```
//! use apeiron::list::{FromTuple, Head, Tail, ToTuple};
//! use static_assertions::assert_type_eq_all;
//!
//! type L = FromTuple<(u8, u16, u32)>;
//!
//! assert_type_eq_all!(Head<L>, u8);
//! assert_type_eq_all!(Head<Tail<L>>, u16);
//! assert_type_eq_all!(ToTuple<L>, (u8, u16, u32));
//! ```
//!
//! [`Head`](crate::list::Head) and [`Tail`](crate::list::Tail) are the
//! element accessors. They only exist for non-empty lists — asking for the
//! head of an empty list is not a runtime panic but a missing trait impl:
//!
//! ```compile_fail
//! use apeiron::list::{Head, Nil};
//!
//! type Boom = Head<Nil>;
//! fn force(_: Boom) {}
//! ```
//!
//! # Combinators compose lazily
//!
//! Every combinator constructs a new list expression without forcing its
//! operands. The composition below touches an infinite list twice, yet
//! compiles in bounded time, because [`Take`](crate::list::Take) caps how
//! much of the source anything downstream can demand:
//!
//! ```
//! use apeiron::list::{Map, Take, ToTuple};
//! use apeiron::seq::{Nats, Succ};
//! use apeiron::unary::UnaryOf;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(
//!     ToTuple<Map<Succ, Take<UnaryOf<3>, Nats>>>,
//!     (UnaryOf<1>, UnaryOf<2>, UnaryOf<3>),
//! );
//! ```
//!
//! # Metafunctions are types
//!
//! Combinators like [`Map`](crate::list::Map) and
//! [`Filter`](crate::list::Filter) are parameterized by *metafunctions*:
//! zero-sized types implementing [`Fun`](crate::fun::Fun) or
//! [`Fun2`](crate::fun::Fun2). Defining one is a two-liner, and predicates
//! are just metafunctions whose output is a type-level boolean:
//!
//! ```
//! use apeiron::fun::Fun;
//! use apeiron::list::{Map, Take, ToTuple};
//! use apeiron::seq::Nats;
//! use apeiron::unary::UnaryOf;
//! use static_assertions::assert_type_eq_all;
//!
//! struct Boxed;
//!
//! impl<T> Fun<T> for Boxed {
//!     type Output = Box<T>;
//! }
//!
//! assert_type_eq_all!(
//!     ToTuple<Map<Boxed, Take<UnaryOf<2>, Nats>>>,
//!     (Box<UnaryOf<0>>, Box<UnaryOf<1>>),
//! );
//! ```
//!
//! # Rolling your own infinite sequence
//!
//! [`TypeList`](crate::list::TypeList) is an open trait: implement it for a
//! marker type whose `Forced` is a `Cons` mentioning the marker (or a
//! successor state of it) and you have an infinite sequence. The crate's own
//! [`Fib`](crate::seq::Fib) works exactly this way, carrying its generator
//! state in two type parameters; [`Primes`](crate::seq::Primes) additionally
//! threads an accumulator of everything it has emitted so far. A minimal
//! example:
//!
//! ```
//! use apeiron::list::{Cons, Take, ToTuple, TypeList};
//! use apeiron::unary::UnaryOf;
//! use static_assertions::assert_type_eq_all;
//!
//! // true, false, true, false, ...
//! struct Alternating<Bit>(std::marker::PhantomData<Bit>);
//!
//! struct T;
//! struct F;
//!
//! impl TypeList for Alternating<T> {
//!     type Forced = Cons<T, Alternating<F>>;
//! }
//!
//! impl TypeList for Alternating<F> {
//!     type Forced = Cons<F, Alternating<T>>;
//! }
//!
//! assert_type_eq_all!(
//!     ToTuple<Take<UnaryOf<4>, Alternating<T>>>,
//!     (T, F, T, F),
//! );
//! ```
//!
//! # When things go wrong
//!
//! There are no runtime errors anywhere in this crate; the failure modes are
//! compile-time rejections. A composition that treats an empty list as
//! non-empty fails with a missing impl. A composition that demands an
//! unbounded amount of an infinite list — folding it, measuring its
//! [`Length`](crate::list::Length), dropping more elements than a finite
//! list has — fails by exceeding the recursion limit. The compiler's error
//! in that second case is less tidy, but it is still an error at the right
//! time: before the program exists.
