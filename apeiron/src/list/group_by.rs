use std::marker::PhantomData;

use super::*;
use crate::fun::{False, Fun2, True};
use crate::tuple::PushBack;

/// The maximal runs of consecutive elements of `L` considered equal by the
/// binary metafunction `Eq`.
///
/// Each group is a finite list; concatenating the groups gives back `L`'s
/// elements in their original order. An empty input produces no groups at
/// all — not one empty group.
///
/// A candidate element joins the current run iff `Eq(last, candidate)` is
/// [`True`], where `last` is the *most recently accumulated* element of the
/// run, not the run's first element, and the candidate sits in the second
/// argument position. Neither choice is an accident: when `Eq` is not
/// transitive the last-element comparison changes which runs form, and when
/// it is not symmetric the argument order changes the verdict, so both are
/// part of this combinator's contract.
///
/// # Examples
///
/// ```
/// use apeiron::fun::{False, Fun2, True};
/// use apeiron::list::{FromTuple, GroupBy, Head, Tail, ToTuple};
/// use apeiron::unary::{Compare, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// struct NatEq;
///
/// impl<A, B> Fun2<A, B> for NatEq
/// where
///     (A, B): Compare<False, True, False>,
/// {
///     type Output = <(A, B) as Compare<False, True, False>>::Result;
/// }
///
/// type U1 = UnaryOf<1>;
/// type U2 = UnaryOf<2>;
///
/// type G = GroupBy<NatEq, FromTuple<(U1, U1, U2)>>;
///
/// assert_type_eq_all!(ToTuple<Head<G>>, (U1, U1));
/// assert_type_eq_all!(ToTuple<Head<Tail<G>>>, (U2,));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupBy<Eq, L>(PhantomData<fn() -> Eq>, PhantomData<fn() -> L>);

impl<Eq, L> Default for GroupBy<Eq, L> {
    fn default() -> Self {
        GroupBy(PhantomData, PhantomData)
    }
}

impl<Eq, L: TypeList> TypeList for GroupBy<Eq, L>
where
    L::Forced: GroupStart<Eq>,
{
    type Forced = <L::Forced as GroupStart<Eq>>::Forced;
}

pub trait GroupStart<Eq> {
    type Forced: Shape;
}

impl<Eq> GroupStart<Eq> for Nil {
    type Forced = Nil;
}

impl<Eq, H, T: TypeList> GroupStart<Eq> for Cons<H, T>
where
    T::Forced: GroupScan<Eq, (H, ()), H>,
{
    type Forced = <T::Forced as GroupScan<Eq, (H, ()), H>>::Forced;
}

/// Scan the rest of the source, extending the current run (`Run`, whose most
/// recently added element is `Last`) until the predicate breaks it or the
/// source ends.
pub trait GroupScan<Eq, Run, Last> {
    type Forced: Shape;
}

impl<Eq, Run, Last> GroupScan<Eq, Run, Last> for Nil {
    type Forced = Cons<FromList<Run>, Nil>;
}

impl<Eq, Run, Last, H, T> GroupScan<Eq, Run, Last> for Cons<H, T>
where
    Eq: Fun2<Last, H>,
    Eq::Output: GroupCase<Eq, Run, H, T>,
{
    type Forced = <Eq::Output as GroupCase<Eq, Run, H, T>>::Forced;
}

pub trait GroupCase<Eq, Run, H, T> {
    type Forced: Shape;
}

impl<Eq, Run: PushBack<H>, H, T: TypeList> GroupCase<Eq, Run, H, T> for True
where
    T::Forced: GroupScan<Eq, Run::Output, H>,
{
    type Forced = <T::Forced as GroupScan<Eq, Run::Output, H>>::Forced;
}

impl<Eq, Run, H, T> GroupCase<Eq, Run, H, T> for False {
    type Forced = Cons<FromList<Run>, GroupBy<Eq, Cons<H, T>>>;
}
