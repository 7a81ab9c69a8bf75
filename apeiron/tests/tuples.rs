use apeiron::tuple::{Append, HasLength, List, Prepend, PushBack, Tuple};
use apeiron::unary::{Unary, UnaryOf};
use static_assertions::assert_type_eq_all;

// Flat tuples and inductive lists are two spellings of the same sequence.
assert_type_eq_all!(<() as Tuple>::AsList, ());
assert_type_eq_all!(<(u8,) as Tuple>::AsList, (u8, ()));
assert_type_eq_all!(<(u8, u16, u32) as Tuple>::AsList, (u8, (u16, (u32, ()))));
assert_type_eq_all!(<(u8, (u16, (u32, ()))) as List>::AsTuple, (u8, u16, u32));

// An eight-element round trip, to exercise a less trivial arity.
type Eight = (u8, u16, u32, u64, i8, i16, i32, i64);
assert_type_eq_all!(<<Eight as Tuple>::AsList as List>::AsTuple, Eight);

// Prepend and Append build new tuples; arity grows by one.
assert_type_eq_all!(Prepend<(), u8>, (u8,));
assert_type_eq_all!(Prepend<(u16, u32), u8>, (u8, u16, u32));
assert_type_eq_all!(Append<(), u8>, (u8,));
assert_type_eq_all!(Append<(u8, u16), u32>, (u8, u16, u32));

// Appending then prepending keeps everything in order.
assert_type_eq_all!(Append<Prepend<(u16,), u8>, u32>, (u8, u16, u32));

// PushBack is Append's inductive-side primitive.
assert_type_eq_all!(<() as PushBack<u8>>::Output, (u8, ()));
assert_type_eq_all!(
    <(u8, (u16, ())) as PushBack<u32>>::Output,
    (u8, (u16, (u32, ())))
);

assert_type_eq_all!(
    <<(u8, u16, u32) as Tuple>::AsList as HasLength>::Length,
    UnaryOf<3>
);

#[test]
fn lengths_as_values() {
    assert_eq!(<<<() as Tuple>::AsList as HasLength>::Length>::VALUE, 0);
    assert_eq!(
        <<<(u8, u16, u32) as Tuple>::AsList as HasLength>::Length>::VALUE,
        3
    );
    assert_eq!(<<<Eight as Tuple>::AsList as HasLength>::Length>::VALUE, 8);
}
