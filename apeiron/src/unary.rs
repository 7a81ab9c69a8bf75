//! The unary numbers, represented by zero [`Z`] and successor [`S`], together
//! with the type-level arithmetic the rest of the crate builds on.

use crate::fun::{Bool, False, True};

/// The number zero.
///
/// # Examples
///
/// ```
/// use apeiron::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use apeiron::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A convenient type synonym for writing out unary types using constants.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// use apeiron::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<2>>::VALUE, 2);
/// // ...
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Compare two unary numbers and branch on their comparison, at the type level.
///
/// # Examples
///
/// ```
/// use apeiron::unary::{Compare, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u8);
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u16);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u32);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Compare {
    /// The result of the comparison: one of the three branch types, according
    /// to how the pair's first component compares to its second.
    type Result;
}

impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<N>) {
    type Result = IfLess;
}

/// Add two unary numbers at the type level.
///
/// # Examples
///
/// ```
/// use apeiron::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Add>::Result, UnaryOf<2>);
/// assert_type_eq_all!(<(UnaryOf<5>, UnaryOf<7>) as Add>::Result, UnaryOf<12>);
/// ```
pub trait Add: sealed::Add {
    /// The result of the addition.
    type Result: Unary;
}

impl<N: Unary> Add for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Add for (N, S<M>)
where
    (N, M): Add,
{
    type Result = S<<(N, M) as Add>::Result>;
}

/// Subtract one unary number from another at the type level. Only defined
/// when the subtrahend is no greater than the minuend; going below zero is
/// rejected at compile time.
///
/// # Examples
///
/// ```
/// use apeiron::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<7>, UnaryOf<3>) as Sub>::Result, UnaryOf<4>);
/// assert_type_eq_all!(<(UnaryOf<3>, UnaryOf<3>) as Sub>::Result, UnaryOf<0>);
/// ```
pub trait Sub: sealed::Sub {
    /// The result of the subtraction.
    type Result: Unary;
}

impl<N: Unary> Sub for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Sub for (S<N>, S<M>)
where
    (N, M): Sub,
{
    type Result = <(N, M) as Sub>::Result;
}

/// The remainder of dividing one unary number by another, at the type level,
/// by repeated subtraction. Division by zero has no impl and is rejected at
/// compile time.
///
/// # Examples
///
/// ```
/// use apeiron::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<7>, UnaryOf<3>) as Rem>::Result, UnaryOf<1>);
/// assert_type_eq_all!(<(UnaryOf<6>, UnaryOf<2>) as Rem>::Result, UnaryOf<0>);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<5>) as Rem>::Result, UnaryOf<2>);
/// ```
pub trait Rem: sealed::Rem {
    /// The remainder.
    type Result: Unary;
}

impl<N: Unary, M: Unary> Rem for (N, S<M>)
where
    (N, S<M>): Compare<RemDone, RemStep, RemStep>,
    <(N, S<M>) as Compare<RemDone, RemStep, RemStep>>::Result: RemCase<N, S<M>>,
{
    type Result =
        <<(N, S<M>) as Compare<RemDone, RemStep, RemStep>>::Result as RemCase<N, S<M>>>::Result;
}

#[doc(hidden)]
pub struct RemDone;
#[doc(hidden)]
pub struct RemStep;

#[doc(hidden)]
pub trait RemCase<N, M> {
    type Result: Unary;
}

impl<N: Unary, M> RemCase<N, M> for RemDone {
    type Result = N;
}

impl<N, M> RemCase<N, M> for RemStep
where
    (N, M): Sub,
    (<(N, M) as Sub>::Result, M): Rem,
{
    type Result = <(<(N, M) as Sub>::Result, M) as Rem>::Result;
}

/// Test a unary number for zero, producing a type-level boolean.
///
/// # Examples
///
/// ```
/// use apeiron::fun::{False, True};
/// use apeiron::unary::{IsZero, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<UnaryOf<0> as IsZero>::Output, True);
/// assert_type_eq_all!(<UnaryOf<3> as IsZero>::Output, False);
/// ```
pub trait IsZero: sealed::Unary {
    /// [`True`] iff the number is [`Z`].
    type Output: Bool;
}

impl IsZero for Z {
    type Output = True;
}

impl<N: Unary> IsZero for S<N> {
    type Output = False;
}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A wrapper for type-level `usize` values to allow implementing traits on them.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// A trait which allows conversion from a wrapper type over a type-level
/// `usize` to a unary type-level number representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// A trait which allows conversion from a unary type-level representation to
/// a wrapper over a type-level `usize`.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

apeiron_macro::generate_unary_conversion_impls!(64);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Compare {}
    impl<N: Unary, M: Unary> Compare for (N, M) {}

    pub trait Add {}
    impl<N: Unary, M: Unary> Add for (N, M) {}

    pub trait Sub {}
    impl<N: Unary, M: Unary> Sub for (N, M) {}

    pub trait Rem {}
    impl<N: Unary, M: Unary> Rem for (N, M) {}
}
