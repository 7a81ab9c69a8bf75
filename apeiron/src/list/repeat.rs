use std::marker::PhantomData;

use super::*;

/// The infinite list repeating `T` forever.
///
/// # Examples
///
/// ```
/// use apeiron::list::{Repeat, Take, ToTuple};
/// use apeiron::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Repeat<bool>>>, (bool, bool, bool));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Repeat<T>(PhantomData<fn() -> T>);

impl<T> Default for Repeat<T> {
    fn default() -> Self {
        Repeat(PhantomData)
    }
}

impl<T> TypeList for Repeat<T> {
    type Forced = Cons<T, Repeat<T>>;
}
