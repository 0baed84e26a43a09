use seams::Fake;

#[test]
fn starts_with_no_history_and_zero_answers() {
    let fake: Fake<(u8,), u32> = Fake::new();

    assert_eq!(fake.call_count(), 0);
    assert_eq!(fake.last_args(), None);
    assert_eq!(fake.call((1,)), 0);
}

#[test]
fn records_every_invocation_in_order() {
    let fake: Fake<(u8,), ()> = Fake::new();

    fake.call((1,));
    fake.call((2,));
    fake.call((3,));

    assert_eq!(fake.call_count(), 3);
    assert_eq!(fake.last_args(), Some((3,)));
    assert_eq!(fake.history(), vec![(1,), (2,), (3,)]);
}

#[test]
fn programmed_value_repeats_until_reprogrammed() {
    let fake: Fake<(), u32> = Fake::new();

    fake.when().then_return(7);
    assert_eq!(fake.call(()), 7);
    assert_eq!(fake.call(()), 7);

    fake.when().then_return(9);
    assert_eq!(fake.call(()), 9);
}

#[test]
fn programmed_implementation_sees_the_arguments() {
    let fake: Fake<(u32, u32), u32> = Fake::new();

    fake.when().then(|&(a, b)| a * b);

    assert_eq!(fake.call((6, 7)), 42);
}

#[test]
fn sequences_hand_out_values_front_to_back() {
    let fake: Fake<(), u32> = Fake::new();

    fake.when().then_return_seq(vec![1, 2, 3]);

    assert_eq!(fake.call(()), 1);
    assert_eq!(fake.call(()), 2);
    assert_eq!(fake.call(()), 3);
}

#[test]
#[should_panic]
fn drained_sequence_panics() {
    let fake: Fake<(), u32> = Fake::named("drained");
    fake.when().then_return_seq(vec![1]);

    fake.call(());
    fake.call(());
}

#[test]
fn once_values_need_no_clone() {
    #[derive(Debug, PartialEq, Default)]
    struct Handle(u32);

    let fake: Fake<(), Handle> = Fake::new();
    fake.when().then_return_once(Handle(7));

    assert_eq!(fake.call(()), Handle(7));
}

#[test]
#[should_panic]
fn second_call_on_a_once_value_panics() {
    let fake: Fake<(), u32> = Fake::named("once");
    fake.when().then_return_once(5);

    fake.call(());
    fake.call(());
}

#[test]
fn reset_restores_the_fresh_state() {
    let fake: Fake<(u8,), u32> = Fake::named("counter");
    fake.when().then_return(5);
    for i in 0..4 {
        fake.call((i,));
    }

    fake.reset();

    assert_eq!(fake.call_count(), 0);
    assert_eq!(fake.last_args(), None);
    assert_eq!(fake.call((9,)), 0); // back to the zero value
}

#[test]
fn reset_is_idempotent() {
    let fake: Fake<(), ()> = Fake::new();

    fake.reset();
    fake.reset();

    assert_eq!(fake.call_count(), 0);
}

#[test]
fn programming_does_not_disturb_the_history() {
    let fake: Fake<(u8,), u32> = Fake::new();
    fake.call((1,));

    fake.when().then_return(8);

    assert_eq!(fake.call_count(), 1);
    assert_eq!(fake.last_args(), Some((1,)));
}

#[test]
fn debug_shows_name_and_traffic() {
    let fake: Fake<(), u32> = Fake::named("status");
    fake.call(());

    let printed = format!("{:?}", fake);

    assert!(printed.contains("status"));
    assert!(printed.contains('1'));
}
