/*!
> **apeiron (noun):** In pre-Socratic philosophy, the boundless and
> inexhaustible origin from which all things arise.
>
> **apeiron (crate):** Lazy, potentially infinite type-level lists for Rust.

This crate provides compile-time sequences of *types* and a closed set of
higher-order combinators over them, evaluated entirely by the trait solver.
A list here is a zero-sized expression type; asking for its next element is a
trait projection; and because projections are only normalized on demand,
lists may be infinite — `Repeat`, `Iterate`, the natural numbers, the
Fibonacci numbers, a prime sieve — as long as no consumer demands an
unbounded number of elements. Such a wrapped computation:

- has **no runtime cost** in time or memory — every value is zero-sized and
  every "call" happens during type checking;
- is **lazy by construction**: constructing a combinator's result forces
  nothing, and forcing its head forces only what that head requires;
- rejects **ill-formed compositions at compile time**, with no runtime
  error surface at all.

## Quick reference

The [`prelude`] module exports the common traits and aliases. Finite lists
are seeded from ordinary tuples and extracted back into them; infinite ones
come from the generators below or from your own [`TypeList`] impls.

| Expression | Result |
| :--------- | :----- |
| [`FromTuple<TT>`](list::FromTuple) / [`ToTuple<TL>`](list::ToTuple) | conversion between flat tuples and lazy lists |
| [`Repeat<T>`](list::Repeat) | `T` forever |
| [`Take<N, TL>`](list::Take) | first `min(N, len)` elements; total even on infinite input |
| [`Drop<N, TL>`](list::Drop) | everything after the first `N` elements |
| [`Replicate<N, T>`](list::Replicate) | exactly `N` copies of `T` |
| [`Map<F, TL>`](list::Map) | elementwise image under a [`Fun`](fun::Fun) |
| [`Filter<P, TL>`](list::Filter) | elements whose predicate holds, in order |
| [`Iterate<F, T>`](list::Iterate) | `T`, `F(T)`, `F(F(T))`, … |
| [`Cycle<TL>`](list::Cycle) | a finite list repeated endlessly |
| [`Inits<TL>`](list::Inits) / [`Tails<TL>`](list::Tails) | all prefixes / all suffixes |
| [`Scanl<OP, T, TL>`](list::Scanl) | running left fold, seeded with `T` |
| [`Foldl<OP, T, TL>`](list::Foldl) | strict left fold of a finite list |
| [`Zip2<L, R>`](list::Zip2) / [`Zip<Ls>`](list::Zip) | pairwise / n-ary tupling, truncated to the shortest |
| [`GroupBy<EQ, TL>`](list::GroupBy) | maximal runs of consecutively "equal" elements |
| [`Nats`](seq::Nats), [`Fib`](seq::Fib), [`Primes`](seq::Primes) | example infinite integer sequences |

If you are new to type-level programming, start with the [`tutorial`]
module, which walks through shapes, forcing, and writing your own
metafunctions.

## A taste

```
use apeiron::list::{Take, ToTuple};
use apeiron::seq::Nats;
use apeiron::unary::UnaryOf;
use static_assertions::assert_type_eq_all;

assert_type_eq_all!(
    ToTuple<Take<UnaryOf<3>, Nats>>,
    (UnaryOf<0>, UnaryOf<1>, UnaryOf<2>),
);
```
*/

#![recursion_limit = "512"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod fun;
pub mod list;
pub mod seq;
pub mod tuple;
pub mod tutorial;
pub mod unary;

pub use list::{Cons, Nil, TypeList};

/// The prelude module for quickly getting started with Apeiron.
///
/// This module is designed to be imported as `use apeiron::prelude::*;`,
/// which brings into scope the traits and aliases needed for most programs
/// built on this crate.
///
/// [`list::Drop`] is deliberately not re-exported here, because a glob
/// import of it would shadow [`core::ops::Drop`]; refer to it by path.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::fun::{Bool, False, Fun, Fun2, True};
    #[doc(no_inline)]
    pub use crate::list::{
        Cons, Cycle, Evaluate, Filter, Fold, Foldl, FromList, FromTuple, GroupBy, Head, Inits,
        Iterate, Length, Map, Nil, Repeat, Replicate, Scanl, Sequence, Shape, Tail, Tails, Take,
        ToTuple, TypeList, Zip, Zip2,
    };
    #[doc(no_inline)]
    pub use crate::seq::{Fib, Nats, Primes, Succ};
    #[doc(no_inline)]
    pub use crate::tuple::{Append, HasLength, List, Prepend, PushBack, Tuple};
    #[doc(no_inline)]
    pub use crate::unary::{S, Unary, UnaryOf, Z};
}
