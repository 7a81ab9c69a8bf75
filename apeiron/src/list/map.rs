use std::marker::PhantomData;

use super::*;
use crate::fun::Fun;

/// The elementwise image of `L` under the metafunction `F`.
///
/// Length is preserved, as is (in)finiteness: an empty list maps to an empty
/// list, and mapping over an infinite list is itself infinite. The function
/// is applied lazily, one element per forcing step.
///
/// # Examples
///
/// ```
/// use apeiron::list::{Map, Take, ToTuple};
/// use apeiron::seq::{Nats, Succ};
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<3>, Map<Succ, Nats>>>,
///     (UnaryOf<1>, UnaryOf<2>, UnaryOf<3>),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Map<F, L>(PhantomData<fn() -> F>, PhantomData<fn() -> L>);

impl<F, L> Default for Map<F, L> {
    fn default() -> Self {
        Map(PhantomData, PhantomData)
    }
}

impl<F, L: TypeList> TypeList for Map<F, L>
where
    L::Forced: MapStep<F>,
{
    type Forced = <L::Forced as MapStep<F>>::Forced;
}

pub trait MapStep<F> {
    type Forced: Shape;
}

impl<F> MapStep<F> for Nil {
    type Forced = Nil;
}

impl<F: Fun<H>, H, T> MapStep<F> for Cons<H, T> {
    type Forced = Cons<F::Output, Map<F, T>>;
}
