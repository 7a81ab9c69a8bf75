use std::marker::PhantomData;

use super::*;

/// Endless repetition of the finite list `L`.
///
/// The second parameter is the cursor into the current pass; it defaults to
/// the start of `L` and is internal state, not meant to be supplied. When
/// the cursor exhausts, the cycle re-forces `L` from the top — which is also
/// how `Cycle` of an empty list comes out empty: repeating nothing yields
/// nothing, rather than looping forever.
///
/// # Examples
///
/// ```
/// use apeiron::list::{Cycle, FromTuple, Nil, Take, ToTuple};
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<5>, Cycle<FromTuple<(u8, u16)>>>>,
///     (u8, u16, u8, u16, u8),
/// );
/// assert_type_eq_all!(ToTuple<Cycle<Nil>>, ());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cycle<L, C = L>(PhantomData<fn() -> L>, PhantomData<fn() -> C>);

impl<L, C> Default for Cycle<L, C> {
    fn default() -> Self {
        Cycle(PhantomData, PhantomData)
    }
}

impl<L, C: TypeList> TypeList for Cycle<L, C>
where
    C::Forced: CycleStep<L>,
{
    type Forced = <C::Forced as CycleStep<L>>::Forced;
}

pub trait CycleStep<L> {
    type Forced: Shape;
}

impl<L, H, T> CycleStep<L> for Cons<H, T> {
    type Forced = Cons<H, Cycle<L, T>>;
}

impl<L: TypeList> CycleStep<L> for Nil
where
    L::Forced: CycleRestart<L>,
{
    type Forced = <L::Forced as CycleRestart<L>>::Forced;
}

// The wrap-around check: an empty original terminates the cycle instead of
// restarting it.
pub trait CycleRestart<L> {
    type Forced: Shape;
}

impl<L> CycleRestart<L> for Nil {
    type Forced = Nil;
}

impl<L, H, T> CycleRestart<L> for Cons<H, T> {
    type Forced = Cons<H, Cycle<L, T>>;
}
