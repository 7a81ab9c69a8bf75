//! Conversions back and forth between flat tuples and their corresponding
//! inductive list structures.
//!
//! Internally, this crate uses inductive type-level lists `(T1, (T2, ()))`,
//! but presents an external interface in terms of tuples `(T1, T2)`, for
//! readability. The traits here convert between the two equivalent
//! representations, measure them, and grow them one element at a time.
//!
//! At present, tuples up to size 64 are supported.

use crate::unary::{S, Unary, Z};

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Append a single element at the end of an inductive list.
///
/// This is the primitive behind [`Append`]; the accumulator-threading
/// combinators in [`list`](crate::list) also use it directly to grow their
/// state in order, without reversing.
pub trait PushBack<X> {
    /// The same list with `X` as its new final element.
    type Output;
}

impl<X> PushBack<X> for () {
    type Output = (X, ());
}

impl<X, T, Ts: PushBack<X>> PushBack<X> for (T, Ts) {
    type Output = (T, Ts::Output);
}

/// A new tuple with `T` as its first element, followed by all elements of
/// `TT` in order. `TT` is not modified: there is no mutation at the type
/// level, only construction of new tuples.
///
/// # Examples
///
/// ```
/// use apeiron::tuple::Prepend;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Prepend<(), u8>, (u8,));
/// assert_type_eq_all!(Prepend<(u16, u32), u8>, (u8, u16, u32));
/// ```
pub type Prepend<TT, T> = <(T, <TT as Tuple>::AsList) as List>::AsTuple;

/// A new tuple with all elements of `TT` in order, followed by `T` as its
/// new final element.
///
/// # Examples
///
/// ```
/// use apeiron::tuple::Append;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Append<(), u8>, (u8,));
/// assert_type_eq_all!(Append<(u8, u16), u32>, (u8, u16, u32));
/// ```
pub type Append<TT, T> = <<<TT as Tuple>::AsList as PushBack<T>>::Output as List>::AsTuple;

apeiron_macro::impl_tuples!(64);
