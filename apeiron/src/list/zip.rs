use std::marker::PhantomData;

use super::*;
use crate::tuple::{List, PushBack, Tuple};

/// Pairwise tupling of two lists, truncated to the shorter.
///
/// Each element of the result is the flat pair of the operands' elements at
/// the same position; the result ends as soon as either operand does.
///
/// # Examples
///
/// ```
/// use apeiron::list::{Nil, Take, ToTuple, Zip2};
/// use apeiron::seq::Nats;
/// use apeiron::unary::{UnaryOf, Z};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Zip2<Take<UnaryOf<2>, Nats>, Take<UnaryOf<5>, Nats>>>,
///     ((Z, Z), (UnaryOf<1>, UnaryOf<1>)),
/// );
/// assert_type_eq_all!(ToTuple<Zip2<Nats, Nil>>, ());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zip2<L, R>(PhantomData<fn() -> L>, PhantomData<fn() -> R>);

impl<L, R> Default for Zip2<L, R> {
    fn default() -> Self {
        Zip2(PhantomData, PhantomData)
    }
}

impl<L: TypeList, R: TypeList> TypeList for Zip2<L, R>
where
    (L::Forced, R::Forced): Zip2Step,
{
    type Forced = <(L::Forced, R::Forced) as Zip2Step>::Forced;
}

pub trait Zip2Step {
    type Forced: Shape;
}

impl<R: Shape> Zip2Step for (Nil, R) {
    type Forced = Nil;
}

impl<H, T> Zip2Step for (Cons<H, T>, Nil) {
    type Forced = Nil;
}

impl<HL, TL, HR, TR> Zip2Step for (Cons<HL, TL>, Cons<HR, TR>) {
    type Forced = Cons<(HL, HR), Zip2<TL, TR>>;
}

/// N-ary tupling over a tuple of lists: each element of the result is the
/// flat tuple of all operands' elements at the same position.
///
/// The result is empty as soon as *any* operand is empty, and the operands
/// after the first empty one are never forced.
///
/// # Examples
///
/// ```
/// use apeiron::list::{FromTuple, Repeat, Take, ToTuple, Zip};
/// use apeiron::seq::Nats;
/// use apeiron::unary::{UnaryOf, Z};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Zip<(Take<UnaryOf<2>, Nats>, Repeat<bool>, FromTuple<(u8, u16, u32)>)>>,
///     ((Z, bool, u8), (UnaryOf<1>, bool, u16)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zip<Ls>(PhantomData<fn() -> Ls>);

impl<Ls> Default for Zip<Ls> {
    fn default() -> Self {
        Zip(PhantomData)
    }
}

impl<Ls: Tuple> TypeList for Zip<Ls>
where
    Ls::AsList: ZipWalk<(), ()>,
{
    type Forced = <Ls::AsList as ZipWalk<(), ()>>::Forced;
}

/// Walk the operands left to right, forcing each in turn and gathering heads
/// and tails in order. Reaching the end means every operand had a head, so a
/// result element can be emitted; hitting an empty operand short-circuits
/// the whole walk to [`Nil`].
pub trait ZipWalk<AccH, AccT> {
    type Forced: Shape;
}

impl<AccH: List, AccT: List> ZipWalk<AccH, AccT> for () {
    type Forced = Cons<AccH::AsTuple, Zip<AccT::AsTuple>>;
}

impl<L: TypeList, Rest, AccH, AccT> ZipWalk<AccH, AccT> for (L, Rest)
where
    L::Forced: ZipWalkHead<Rest, AccH, AccT>,
{
    type Forced = <L::Forced as ZipWalkHead<Rest, AccH, AccT>>::Forced;
}

pub trait ZipWalkHead<Rest, AccH, AccT> {
    type Forced: Shape;
}

impl<Rest, AccH, AccT> ZipWalkHead<Rest, AccH, AccT> for Nil {
    type Forced = Nil;
}

impl<H, T, Rest, AccH, AccT> ZipWalkHead<Rest, AccH, AccT> for Cons<H, T>
where
    AccH: PushBack<H>,
    AccT: PushBack<T>,
    Rest: ZipWalk<AccH::Output, AccT::Output>,
{
    type Forced = <Rest as ZipWalk<AccH::Output, AccT::Output>>::Forced;
}
