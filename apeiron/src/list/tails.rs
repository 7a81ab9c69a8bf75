use std::marker::PhantomData;

use super::*;

/// Every suffix of `L`, longest first.
///
/// The first element is `L`'s own sequence and each subsequent element
/// sheds one more leading element, so a finite `L` of length `n` produces
/// `n + 1` suffixes, the last being the empty list. Over an infinite `L`
/// the result is infinite and no empty suffix is ever reached.
///
/// # Examples
///
/// ```
/// use apeiron::list::{FromTuple, Head, Length, Tail, Tails, ToTuple};
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type T = Tails<FromTuple<(u8, u16)>>;
///
/// assert_type_eq_all!(Length<T>, UnaryOf<3>);
/// assert_type_eq_all!(ToTuple<Head<T>>, (u8, u16));
/// assert_type_eq_all!(ToTuple<Head<Tail<T>>>, (u16,));
/// assert_type_eq_all!(ToTuple<Head<Tail<Tail<T>>>>, ());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tails<L>(PhantomData<fn() -> L>);

impl<L> Default for Tails<L> {
    fn default() -> Self {
        Tails(PhantomData)
    }
}

impl<L: TypeList> TypeList for Tails<L>
where
    L::Forced: TailsStep,
{
    type Forced = <L::Forced as TailsStep>::Forced;
}

pub trait TailsStep {
    type Forced: Shape;
}

impl TailsStep for Nil {
    type Forced = Cons<Nil, Nil>;
}

impl<H, T> TailsStep for Cons<H, T> {
    type Forced = Cons<Cons<H, T>, Tails<T>>;
}
