use std::marker::PhantomData;

use super::*;
use crate::unary::{S, Unary, Z};

/// All elements of `L` after the first `N`.
///
/// Dropping [`Z`] elements is exactly the operand's sequence, with nothing
/// forced at construction and emptiness preserved. Dropping past the end of
/// a finite list is rejected at compile time: there is no step for an
/// exhausted operand, so the composition fails to resolve rather than
/// quietly producing an empty list.
///
/// Note that this type shadows [`core::ops::Drop`] when imported, which is
/// why the crate prelude leaves it out; refer to it by path.
///
/// # Examples
///
/// ```
/// use apeiron::list::{Drop, FromTuple, ToTuple};
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Drop<UnaryOf<2>, FromTuple<(u8, u16, u32)>>>,
///     (u32,),
/// );
/// assert_type_eq_all!(
///     ToTuple<Drop<UnaryOf<0>, FromTuple<(u8, u16, u32)>>>,
///     (u8, u16, u32),
/// );
/// ```
///
/// Dropping more elements than the list has does not compile:
///
/// ```compile_fail
/// use apeiron::list::{Drop, FromTuple, ToTuple};
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Drop<UnaryOf<3>, FromTuple<(u8,)>>>, ());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Drop<N, L>(PhantomData<fn() -> N>, PhantomData<fn() -> L>);

impl<N, L> Default for Drop<N, L> {
    fn default() -> Self {
        Drop(PhantomData, PhantomData)
    }
}

impl<N, L> TypeList for Drop<N, L>
where
    N: DropList<L>,
{
    type Forced = N::Forced;
}

/// One step of [`Drop`], dispatched on the count first so that a zero count
/// passes the operand through untouched.
pub trait DropList<L> {
    type Forced: Shape;
}

impl<L: TypeList> DropList<L> for Z {
    type Forced = L::Forced;
}

impl<N: Unary, L: TypeList> DropList<L> for S<N>
where
    L::Forced: DropStep<N>,
{
    type Forced = <L::Forced as DropStep<N>>::Forced;
}

// No impl for `Nil`: dropping from an exhausted list has no meaning here.
pub trait DropStep<N> {
    type Forced: Shape;
}

impl<N, H, T> DropStep<N> for Cons<H, T>
where
    N: DropList<T>,
{
    type Forced = <N as DropList<T>>::Forced;
}
