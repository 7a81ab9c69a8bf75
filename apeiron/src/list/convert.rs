use std::marker::PhantomData;

use super::*;
use crate::tuple::{List, Tuple};

/// The lazy list holding the elements of the inductive list `A`, in order:
/// `FromList<(u8, (u16, ()))>` is the two-element list `u8`, `u16`.
///
/// This is the lower-level cousin of [`FromTuple`], operating directly on
/// the inductive representation; combinators that accumulate prefixes or
/// runs use it to hand their finite results back as lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FromList<A>(PhantomData<fn() -> A>);

impl<A> Default for FromList<A> {
    fn default() -> Self {
        FromList(PhantomData)
    }
}

impl<A> TypeList for FromList<A>
where
    A: FromListStep,
{
    type Forced = A::Forced;
}

pub trait FromListStep {
    type Forced: Shape;
}

impl FromListStep for () {
    type Forced = Nil;
}

impl<H, T> FromListStep for (H, T) {
    type Forced = Cons<H, FromList<T>>;
}

/// The lazy list holding the elements of the tuple `TT`, in order.
///
/// # Examples
///
/// ```
/// use apeiron::list::{FromTuple, Head, Tail};
/// use static_assertions::assert_type_eq_all;
///
/// type L = FromTuple<(u8, u16)>;
///
/// assert_type_eq_all!(Head<L>, u8);
/// assert_type_eq_all!(Head<Tail<L>>, u16);
/// ```
pub type FromTuple<TT> = FromList<<TT as Tuple>::AsList>;

/// Full evaluation of a finite lazy list into its inductive representation.
///
/// Where forcing evaluates one step, `Evaluate` runs the whole list down to
/// its terminating [`Nil`]; applied to an infinite list it does not
/// terminate. Every [`TypeList`] implements it.
pub trait Evaluate {
    /// The fully evaluated list, as nested pairs terminated by `()`.
    type Evaluated;
}

impl<L: TypeList> Evaluate for L
where
    L::Forced: EvaluateStep,
{
    type Evaluated = <L::Forced as EvaluateStep>::Evaluated;
}

pub trait EvaluateStep {
    type Evaluated;
}

impl EvaluateStep for Nil {
    type Evaluated = ();
}

impl<H, T: Evaluate> EvaluateStep for Cons<H, T> {
    type Evaluated = (H, T::Evaluated);
}

/// The flat tuple holding all elements of the finite list `L`, in order.
///
/// `ToTuple` and [`FromTuple`] are mutually inverse: converting a tuple to a
/// list and back yields the same tuple, and converting a finite list to a
/// tuple and back yields a list with the same elements in the same order.
///
/// # Examples
///
/// ```
/// use apeiron::list::{FromTuple, ToTuple};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<FromTuple<(u8, u16, u32)>>, (u8, u16, u32));
/// assert_type_eq_all!(ToTuple<FromTuple<()>>, ());
/// ```
pub type ToTuple<L> = <<L as Evaluate>::Evaluated as List>::AsTuple;
