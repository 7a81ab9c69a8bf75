use super::*;
use crate::fun::Fun2;

/// The strict left fold of the finite list `L` by `Op`, seeded with `T`:
/// `Op(… Op(Op(T, L[0]), L[1]) …)`.
///
/// Unlike every other combinator here, the result is a single type, not a
/// list, so the whole of `L` is forced at once. Folding an infinite list is
/// undefined and fails to resolve.
///
/// # Examples
///
/// ```
/// use apeiron::fun::Fun2;
/// use apeiron::list::{Foldl, Take};
/// use apeiron::seq::Nats;
/// use apeiron::unary::{Add, UnaryOf, Z};
/// use static_assertions::assert_type_eq_all;
///
/// struct Plus;
///
/// impl<A, B> Fun2<A, B> for Plus
/// where
///     (A, B): Add,
/// {
///     type Output = <(A, B) as Add>::Result;
/// }
///
/// // 0 + 1 + 2 + 3 + 4
/// assert_type_eq_all!(Foldl<Plus, Z, Take<UnaryOf<5>, Nats>>, UnaryOf<10>);
/// ```
pub type Foldl<Op, T, L> = <L as Fold<Op, T>>::Output;

/// The trait behind [`Foldl`]. Every [`TypeList`] implements it; bound on it
/// to fold in generic code.
pub trait Fold<Op, Acc> {
    /// The folded result.
    type Output;
}

impl<Op, Acc, L: TypeList> Fold<Op, Acc> for L
where
    L::Forced: FoldStep<Op, Acc>,
{
    type Output = <L::Forced as FoldStep<Op, Acc>>::Output;
}

pub trait FoldStep<Op, Acc> {
    type Output;
}

impl<Op, Acc> FoldStep<Op, Acc> for Nil {
    type Output = Acc;
}

impl<Op: Fun2<Acc, H>, Acc, H, T> FoldStep<Op, Acc> for Cons<H, T>
where
    T: Fold<Op, Op::Output>,
{
    type Output = <T as Fold<Op, Op::Output>>::Output;
}
