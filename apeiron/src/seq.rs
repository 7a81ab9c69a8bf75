//! Example value sequences: the natural numbers, the Fibonacci numbers, and
//! the primes, all as infinite lazy lists of unary type-level numbers.
//!
//! These exist both as useful sequences in their own right and as worked
//! examples of the three ways to build an infinite list: applying
//! [`Iterate`] to a metafunction, writing a self-referential generator with
//! explicit state ([`Fib`]), and threading an accumulator through mutual
//! recursion ([`Primes`]).

use std::marker::PhantomData;

use crate::fun::{Bool, False, Fun, True};
use crate::list::{Cons, Head, Iterate, Shape, TypeList};
use crate::unary::{Add, IsZero, Rem, S, Unary, UnaryOf, Z};

/// The successor metafunction: applying it to `N` yields `S<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Succ;

impl<N: Unary> Fun<N> for Succ {
    type Output = S<N>;
}

/// The natural numbers 0, 1, 2, … as an infinite lazy list.
///
/// # Examples
///
/// ```
/// use apeiron::list::{Take, ToTuple};
/// use apeiron::seq::Nats;
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<5>, Nats>>,
///     (UnaryOf<0>, UnaryOf<1>, UnaryOf<2>, UnaryOf<3>, UnaryOf<4>),
/// );
/// ```
pub type Nats = Iterate<Succ, Z>;

/// The Fibonacci sequence 0, 1, 1, 2, 3, 5, 8, 13, … as an infinite lazy
/// list.
///
/// # Examples
///
/// ```
/// use apeiron::list::{Take, ToTuple};
/// use apeiron::seq::Fib;
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<6>, Fib>>,
///     (UnaryOf<0>, UnaryOf<1>, UnaryOf<1>, UnaryOf<2>, UnaryOf<3>, UnaryOf<5>),
/// );
/// ```
pub type Fib = FibFrom<Z, S<Z>>;

/// The Fibonacci generator: its state is the pair (current, next), it emits
/// `Cur`, and its tail recurses with (`Next`, `Cur + Next`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FibFrom<Cur, Next>(PhantomData<fn() -> Cur>, PhantomData<fn() -> Next>);

impl<Cur, Next> Default for FibFrom<Cur, Next> {
    fn default() -> Self {
        FibFrom(PhantomData, PhantomData)
    }
}

impl<Cur, Next> TypeList for FibFrom<Cur, Next>
where
    (Cur, Next): Add,
{
    type Forced = Cons<Cur, FibFrom<Next, <(Cur, Next) as Add>::Result>>;
}

/// The primes 2, 3, 5, 7, 11, 13, … as an infinite lazy list, by incremental
/// trial division.
///
/// The generator scans candidates upward from 2, dividing each by every
/// previously emitted prime; a candidate nothing divides is emitted and
/// prepended to the accumulator the following candidates are tested against.
/// The work for the n-th element grows roughly quadratically with n, so ask
/// for bounded prefixes.
///
/// # Examples
///
/// ```
/// # #![recursion_limit = "512"]
/// use apeiron::list::{Take, ToTuple};
/// use apeiron::seq::Primes;
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<4>, Primes>>,
///     (UnaryOf<2>, UnaryOf<3>, UnaryOf<5>, UnaryOf<7>),
/// );
/// ```
pub type Primes = PrimesFrom<UnaryOf<2>>;

/// The prime generator: `N` is the next candidate and `Seen` the inductive
/// list of primes found so far, most recent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimesFrom<N, Seen = ()>(PhantomData<fn() -> N>, PhantomData<fn() -> Seen>);

impl<N, Seen> Default for PrimesFrom<N, Seen> {
    fn default() -> Self {
        PrimesFrom(PhantomData, PhantomData)
    }
}

impl<N, Seen> TypeList for PrimesFrom<N, Seen>
where
    Seen: PrimeTest<N>,
    Seen::Output: PrimesStep<N, Seen>,
{
    type Forced = <Seen::Output as PrimesStep<N, Seen>>::Forced;
}

/// Dispatch on the outcome of the primality test: emit the candidate and
/// extend the accumulator, or move on to the next candidate.
pub trait PrimesStep<N, Seen> {
    /// The forced result of the generator at this candidate.
    type Forced: Shape;
}

impl<N, Seen> PrimesStep<N, Seen> for True {
    type Forced = Cons<N, PrimesFrom<S<N>, (N, Seen)>>;
}

impl<N, Seen> PrimesStep<N, Seen> for False
where
    PrimesFrom<S<N>, Seen>: TypeList,
{
    type Forced = <PrimesFrom<S<N>, Seen> as TypeList>::Forced;
}

/// Trial division of the candidate `N` against an inductive list of known
/// primes: [`True`] when nothing in the list divides `N`, and in particular
/// on an empty list.
pub trait PrimeTest<N> {
    /// Whether `N` is coprime to every listed prime.
    type Output: Bool;
}

impl<N> PrimeTest<N> for () {
    type Output = True;
}

impl<N, P, Rest> PrimeTest<N> for (P, Rest)
where
    (N, P): Rem,
    <(N, P) as Rem>::Result: IsZero,
    <<(N, P) as Rem>::Result as IsZero>::Output: PrimeDivides<N, Rest>,
{
    type Output = <<<(N, P) as Rem>::Result as IsZero>::Output as PrimeDivides<N, Rest>>::Output;
}

/// Dispatch on one division: an exact divisor settles the test, otherwise it
/// continues down the accumulator.
pub trait PrimeDivides<N, Rest> {
    /// The verdict for `N` given this division's outcome.
    type Output: Bool;
}

impl<N, Rest> PrimeDivides<N, Rest> for True {
    type Output = False;
}

impl<N, Rest: PrimeTest<N>> PrimeDivides<N, Rest> for False {
    type Output = <Rest as PrimeTest<N>>::Output;
}

// Pin down the first element of each sequence where it is cheap to do so.
static_assertions::assert_type_eq_all!(Head<Nats>, Z);
static_assertions::assert_type_eq_all!(Head<Fib>, Z);
static_assertions::assert_type_eq_all!(Head<Primes>, UnaryOf<2>);
