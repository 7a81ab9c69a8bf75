use std::marker::PhantomData;

use super::*;
use crate::unary::{S, Unary, Z};

/// The first `min(N, len(L))` elements of `L`.
///
/// `Take` is total even over infinite input: it forces no more of `L` than
/// the elements it yields, so taking a finite prefix of an endless list
/// terminates. Taking [`Z`] elements is empty without inspecting `L` at all,
/// and when `L` runs out before `N` does, the result is simply all of `L` —
/// nothing is padded.
///
/// # Examples
///
/// ```
/// use apeiron::list::{FromTuple, Take, ToTuple};
/// use apeiron::seq::Nats;
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<3>, Nats>>,
///     (UnaryOf<0>, UnaryOf<1>, UnaryOf<2>),
/// );
///
/// // Taking past the end yields the whole list, unpadded.
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<5>, FromTuple<(u8, u16)>>>,
///     (u8, u16),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Take<N, L>(PhantomData<fn() -> N>, PhantomData<fn() -> L>);

impl<N, L> Default for Take<N, L> {
    fn default() -> Self {
        Take(PhantomData, PhantomData)
    }
}

impl<N, L> TypeList for Take<N, L>
where
    N: TakeList<L>,
{
    type Forced = N::Forced;
}

/// One step of [`Take`], dispatched on the count first so that a zero count
/// never forces the operand.
pub trait TakeList<L> {
    type Forced: Shape;
}

impl<L> TakeList<L> for Z {
    type Forced = Nil;
}

impl<N: Unary, L: TypeList> TakeList<L> for S<N>
where
    L::Forced: TakeStep<N>,
{
    type Forced = <L::Forced as TakeStep<N>>::Forced;
}

pub trait TakeStep<N> {
    type Forced: Shape;
}

impl<N> TakeStep<N> for Nil {
    type Forced = Nil;
}

impl<N, H, T> TakeStep<N> for Cons<H, T> {
    type Forced = Cons<H, Take<N, T>>;
}
