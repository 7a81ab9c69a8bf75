use std::marker::PhantomData;

use super::*;
use crate::fun::Fun;

/// The infinite list `T`, `F(T)`, `F(F(T))`, and so on.
///
/// Each forcing step applies `F` once more; nothing beyond the demanded
/// prefix is ever computed.
///
/// # Examples
///
/// ```
/// use apeiron::list::{Iterate, Take, ToTuple};
/// use apeiron::seq::Succ;
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<3>, Iterate<Succ, UnaryOf<5>>>>,
///     (UnaryOf<5>, UnaryOf<6>, UnaryOf<7>),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iterate<F, T>(PhantomData<fn() -> F>, PhantomData<fn() -> T>);

impl<F, T> Default for Iterate<F, T> {
    fn default() -> Self {
        Iterate(PhantomData, PhantomData)
    }
}

impl<F: Fun<T>, T> TypeList for Iterate<F, T> {
    type Forced = Cons<T, Iterate<F, F::Output>>;
}
