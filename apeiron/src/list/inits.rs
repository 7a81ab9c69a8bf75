use std::marker::PhantomData;

use super::*;
use crate::tuple::PushBack;

/// Every prefix of `L`, shortest first.
///
/// The first element is the empty list and each subsequent element extends
/// the previous prefix by one, so a finite `L` of length `n` produces `n + 1`
/// prefixes, the last being the whole of `L`. Each prefix is itself a finite
/// list. An infinite `L` yields an infinite list of finite prefixes.
///
/// The second parameter is the accumulated prefix; it defaults to empty and
/// is internal state, not meant to be supplied.
///
/// # Examples
///
/// ```
/// use apeiron::list::{FromTuple, Head, Inits, Length, Tail, ToTuple};
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type I = Inits<FromTuple<(u8, u16)>>;
///
/// assert_type_eq_all!(Length<I>, UnaryOf<3>);
/// assert_type_eq_all!(ToTuple<Head<I>>, ());
/// assert_type_eq_all!(ToTuple<Head<Tail<I>>>, (u8,));
/// assert_type_eq_all!(ToTuple<Head<Tail<Tail<I>>>>, (u8, u16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Inits<L, A = ()>(PhantomData<fn() -> L>, PhantomData<fn() -> A>);

impl<L, A> Default for Inits<L, A> {
    fn default() -> Self {
        Inits(PhantomData, PhantomData)
    }
}

impl<L: TypeList, A> TypeList for Inits<L, A>
where
    L::Forced: InitsStep<A>,
{
    type Forced = <L::Forced as InitsStep<A>>::Forced;
}

pub trait InitsStep<A> {
    type Forced: Shape;
}

impl<A> InitsStep<A> for Nil {
    type Forced = Cons<FromList<A>, Nil>;
}

impl<A: PushBack<H>, H, T> InitsStep<A> for Cons<H, T> {
    type Forced = Cons<FromList<A>, Inits<T, A::Output>>;
}
