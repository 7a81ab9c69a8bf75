use std::marker::PhantomData;

use super::*;
use crate::fun::Fun2;

/// The running left fold of `L` by `Op`, seeded with `T`.
///
/// The first element is exactly `T`, unmodified; each later element is
/// `Op(previous, next source element)`. The result always has one more
/// element than `L` — in particular, scanning an empty list yields the
/// single-element list `T` — and scanning an infinite list is itself
/// infinite.
///
/// # Examples
///
/// ```
/// use apeiron::fun::Fun2;
/// use apeiron::list::{Scanl, Take, ToTuple};
/// use apeiron::seq::Nats;
/// use apeiron::unary::{Add, UnaryOf, Z};
/// use static_assertions::assert_type_eq_all;
///
/// struct Plus;
///
/// impl<A, B> Fun2<A, B> for Plus
/// where
///     (A, B): Add,
/// {
///     type Output = <(A, B) as Add>::Result;
/// }
///
/// // Partial sums of 0, 1, 2, 3: the seed, then 0, 1, 3, 6.
/// assert_type_eq_all!(
///     ToTuple<Scanl<Plus, Z, Take<UnaryOf<4>, Nats>>>,
///     (Z, UnaryOf<0>, UnaryOf<1>, UnaryOf<3>, UnaryOf<6>),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scanl<Op, T, L>(
    PhantomData<fn() -> Op>,
    PhantomData<fn() -> T>,
    PhantomData<fn() -> L>,
);

impl<Op, T, L> Default for Scanl<Op, T, L> {
    fn default() -> Self {
        Scanl(PhantomData, PhantomData, PhantomData)
    }
}

impl<Op, T, L: TypeList> TypeList for Scanl<Op, T, L>
where
    L::Forced: ScanlStep<Op, T>,
{
    type Forced = <L::Forced as ScanlStep<Op, T>>::Forced;
}

pub trait ScanlStep<Op, T> {
    type Forced: Shape;
}

impl<Op, T> ScanlStep<Op, T> for Nil {
    type Forced = Cons<T, Nil>;
}

impl<Op: Fun2<T, H>, T, H, R> ScanlStep<Op, T> for Cons<H, R> {
    type Forced = Cons<T, Scanl<Op, Op::Output, R>>;
}
