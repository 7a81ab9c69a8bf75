#![recursion_limit = "512"]

use apeiron::fun::{False, Fun, Fun2, True};
use apeiron::list::{
    Cycle, Drop, Filter, Foldl, FromTuple, GroupBy, Head, Inits, Iterate, Length, Map, Nil,
    Repeat, Replicate, Scanl, Sequence, Tail, Tails, Take, ToTuple, Zip, Zip2,
};
use apeiron::seq::{Nats, Succ};
use apeiron::unary::{Add, Compare, IsZero, Rem, Unary, UnaryOf, Z};
use static_assertions::{assert_not_impl_any, assert_type_eq_all};

// An empty list is never a sequence: there is no head to project.
assert_not_impl_any!(Nil: Sequence);

type U0 = UnaryOf<0>;
type U1 = UnaryOf<1>;
type U2 = UnaryOf<2>;
type U3 = UnaryOf<3>;
type U4 = UnaryOf<4>;
type U5 = UnaryOf<5>;
type U6 = UnaryOf<6>;

// Metafunctions used throughout: addition, evenness, and equality of unary
// numbers, plus a deliberately non-symmetric "less or equal".

struct Plus;

impl<A, B> Fun2<A, B> for Plus
where
    (A, B): Add,
{
    type Output = <(A, B) as Add>::Result;
}

struct IsEven;

impl<N> Fun<N> for IsEven
where
    (N, U2): Rem,
    <(N, U2) as Rem>::Result: IsZero,
{
    type Output = <<(N, U2) as Rem>::Result as IsZero>::Output;
}

struct NatEq;

impl<A, B> Fun2<A, B> for NatEq
where
    (A, B): Compare<False, True, False>,
{
    type Output = <(A, B) as Compare<False, True, False>>::Result;
}

struct NatLeq;

impl<A, B> Fun2<A, B> for NatLeq
where
    (A, B): Compare<True, True, False>,
{
    type Output = <(A, B) as Compare<True, True, False>>::Result;
}

// Repeat and Take: a bounded prefix of an unbounded list.
assert_type_eq_all!(ToTuple<Take<U0, Repeat<u8>>>, ());
assert_type_eq_all!(ToTuple<Take<U4, Repeat<u8>>>, (u8, u8, u8, u8));

// Take never pads: past the end it yields the whole list.
assert_type_eq_all!(ToTuple<Take<U5, FromTuple<(u8, u16)>>>, (u8, u16));

// Take of zero inspects nothing: the operand here would not even resolve if
// it were forced.
assert_type_eq_all!(ToTuple<Take<U0, Drop<U1, Nil>>>, ());

// Drop: zero is the identity, emptiness included.
assert_type_eq_all!(ToTuple<Drop<U0, Nil>>, ());
assert_type_eq_all!(ToTuple<Drop<U0, FromTuple<(u8, u16)>>>, (u8, u16));
assert_type_eq_all!(ToTuple<Drop<U2, FromTuple<(u8, u16, u32)>>>, (u32,));
assert_type_eq_all!(ToTuple<Drop<U3, FromTuple<(u8, u16, u32)>>>, ());

// Drop composes with infinite lists as long as the demand stays finite.
assert_type_eq_all!(ToTuple<Take<U2, Drop<U3, Nats>>>, (U3, U4));

// Replicate.
assert_type_eq_all!(ToTuple<Replicate<U0, u8>>, ());
assert_type_eq_all!(ToTuple<Replicate<U3, u8>>, (u8, u8, u8));

// Map preserves length and emptiness.
assert_type_eq_all!(ToTuple<Map<Succ, Nil>>, ());
assert_type_eq_all!(ToTuple<Map<Succ, FromTuple<(U0, U4)>>>, (U1, U5));

// Filter keeps order and survives infinite sources under bounded demand.
assert_type_eq_all!(ToTuple<Filter<IsEven, Take<U5, Nats>>>, (U0, U2, U4));
assert_type_eq_all!(ToTuple<Take<U3, Filter<IsEven, Nats>>>, (U0, U2, U4));
assert_type_eq_all!(ToTuple<Filter<IsEven, Nil>>, ());

// The composition from the other direction: mapping over a filtered,
// truncated infinite list forces only the truncated prefix.
assert_type_eq_all!(
    ToTuple<Map<Succ, Filter<IsEven, Take<U6, Nats>>>>,
    (U1, U3, U5)
);

// Iterate.
assert_type_eq_all!(ToTuple<Take<U3, Iterate<Succ, U5>>>, (U5, U6, UnaryOf<7>));

// Cycle repeats a finite list endlessly; cycling nothing is nothing.
assert_type_eq_all!(
    ToTuple<Take<U5, Cycle<FromTuple<(u8, u16)>>>>,
    (u8, u16, u8, u16, u8)
);
assert_type_eq_all!(ToTuple<Cycle<Nil>>, ());

// Inits: n + 1 prefixes, shortest first.
type TwoList = FromTuple<(u8, u16)>;

assert_type_eq_all!(Length<Inits<TwoList>>, U3);
assert_type_eq_all!(ToTuple<Head<Inits<TwoList>>>, ());
assert_type_eq_all!(ToTuple<Head<Tail<Inits<TwoList>>>>, (u8,));
assert_type_eq_all!(ToTuple<Head<Tail<Tail<Inits<TwoList>>>>>, (u8, u16));

// The prefixes of an infinite list are themselves an infinite list of
// finite lists.
assert_type_eq_all!(ToTuple<Head<Tail<Tail<Inits<Nats>>>>>, (U0, U1));

// Tails: n + 1 suffixes, longest first, ending empty.
assert_type_eq_all!(Length<Tails<TwoList>>, U3);
assert_type_eq_all!(ToTuple<Head<Tails<TwoList>>>, (u8, u16));
assert_type_eq_all!(ToTuple<Head<Tail<Tails<TwoList>>>>, (u16,));
assert_type_eq_all!(ToTuple<Head<Tail<Tail<Tails<TwoList>>>>>, ());

// Over an infinite list the suffixes never bottom out; each one is still
// infinite.
assert_type_eq_all!(ToTuple<Take<U2, Head<Tail<Tails<Nats>>>>>, (U1, U2));

// Scanl: seed first, then running results; one element longer than the
// source.
assert_type_eq_all!(ToTuple<Scanl<Plus, U5, Nil>>, (U5,));
assert_type_eq_all!(
    ToTuple<Scanl<Plus, Z, Take<U4, Nats>>>,
    (Z, U0, U1, U3, U6)
);
assert_type_eq_all!(ToTuple<Take<U3, Scanl<Plus, Z, Nats>>>, (Z, U0, U1));

// Foldl collapses a finite list strictly.
assert_type_eq_all!(Foldl<Plus, Z, Nil>, Z);
assert_type_eq_all!(Foldl<Plus, Z, Take<U5, Nats>>, UnaryOf<10>);

// Zip2 truncates to the shorter operand.
assert_type_eq_all!(
    ToTuple<Zip2<Take<U3, Nats>, Take<U5, Nats>>>,
    ((U0, U0), (U1, U1), (U2, U2))
);
assert_type_eq_all!(ToTuple<Zip2<Nil, Nats>>, ());
assert_type_eq_all!(ToTuple<Zip2<Nats, Nil>>, ());

// N-ary Zip: empty as soon as any operand is, and operands after the first
// empty one are never forced — the Drop below would not resolve if they
// were.
assert_type_eq_all!(
    ToTuple<Zip<(Take<U2, Nats>, Repeat<bool>, FromTuple<(u8, u16, u32)>)>>,
    ((U0, bool, u8), (U1, bool, u16))
);
assert_type_eq_all!(ToTuple<Zip<(Nats, Nil, Repeat<u8>)>>, ());
assert_type_eq_all!(ToTuple<Zip<(Nil, Drop<U1, Nil>)>>, ());

// GroupBy: maximal runs of consecutively equal elements, order preserved,
// and no groups at all for empty input.
type Grouped = GroupBy<NatEq, FromTuple<(U1, U1, U2, U2, U2, U3)>>;

assert_type_eq_all!(Length<Grouped>, U3);
assert_type_eq_all!(ToTuple<Head<Grouped>>, (U1, U1));
assert_type_eq_all!(ToTuple<Head<Tail<Grouped>>>, (U2, U2, U2));
assert_type_eq_all!(ToTuple<Head<Tail<Tail<Grouped>>>>, (U3,));
assert_type_eq_all!(ToTuple<GroupBy<NatEq, Nil>>, ());

// The candidate is compared against the run's most recent element, sitting
// in the second argument slot: with "last <= candidate" the ascending run
// 0, 1 stays together and the final 0 starts a new group.
type Ascending = GroupBy<NatLeq, FromTuple<(U0, U1, U0)>>;

assert_type_eq_all!(Length<Ascending>, U2);
assert_type_eq_all!(ToTuple<Head<Ascending>>, (U0, U1));
assert_type_eq_all!(ToTuple<Head<Tail<Ascending>>>, (U0,));

// Round trips between tuples and lists, in both directions.
assert_type_eq_all!(ToTuple<FromTuple<()>>, ());
assert_type_eq_all!(ToTuple<FromTuple<(u8, u16, u32)>>, (u8, u16, u32));
assert_type_eq_all!(ToTuple<FromTuple<ToTuple<TwoList>>>, ToTuple<TwoList>);

#[test]
fn folded_values() {
    assert_eq!(<Foldl<Plus, Z, Take<U5, Nats>> as Unary>::VALUE, 10);
    assert_eq!(<Length<Inits<TwoList>> as Unary>::VALUE, 3);
    assert_eq!(<Length<Grouped> as Unary>::VALUE, 3);
}
