#![recursion_limit = "1024"]

use apeiron::list::{Drop, Head, Take, ToTuple};
use apeiron::seq::{Fib, Nats, Primes};
use apeiron::unary::{Unary, UnaryOf};
use static_assertions::assert_type_eq_all;

type U0 = UnaryOf<0>;
type U1 = UnaryOf<1>;
type U2 = UnaryOf<2>;
type U3 = UnaryOf<3>;
type U5 = UnaryOf<5>;
type U7 = UnaryOf<7>;
type U8 = UnaryOf<8>;
type U11 = UnaryOf<11>;
type U13 = UnaryOf<13>;

// The naturals count up from zero by one.
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<5>, Nats>>,
    (U0, U1, U2, U3, UnaryOf<4>)
);

// The Fibonacci sequence, seeded (0, 1).
assert_type_eq_all!(
    ToTuple<Take<U8, Fib>>,
    (U0, U1, U1, U2, U3, U5, U8, U13)
);

// The primes, by trial division against everything found so far.
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<6>, Primes>>,
    (U2, U3, U5, U7, U11, U13)
);

#[test]
fn sequence_values() {
    assert_eq!(<Head<Nats> as Unary>::VALUE, 0);
    assert_eq!(<Head<Drop<UnaryOf<7>, Nats>> as Unary>::VALUE, 7);
    assert_eq!(<Head<Drop<U7, Fib>> as Unary>::VALUE, 13);
    assert_eq!(<Head<Primes> as Unary>::VALUE, 2);
    assert_eq!(<Head<Drop<U5, Primes>> as Unary>::VALUE, 13);
}
