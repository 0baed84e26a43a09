use std::collections::VecDeque;

use crate::fake::{Answer, Fake};

/// Provides methods to program a fake's answer.
///
/// Created using [`Fake::when`].
///
/// Programming replaces the previous answer wholesale and lasts until
/// the fake is reprogrammed or [`reset`](Fake::reset). It does not
/// touch the recorded history.
pub struct When<'f, I, O> {
    fake: &'f Fake<I, O>,
}

impl<'f, I, O> When<'f, I, O> {
    pub(crate) fn new(fake: &'f Fake<I, O>) -> Self {
        When { fake }
    }

    /// Sets the value returned by every subsequent invocation.
    ///
    /// The value is cloned out on each call. For values that cannot
    /// be cloned, see [`then_return_once`](When::then_return_once).
    ///
    /// # Examples
    ///
    /// ```
    /// let fake: seams::Fake<(), u8> = seams::Fake::new();
    /// fake.when().then_return(3);
    ///
    /// assert_eq!(fake.call(()), 3);
    /// assert_eq!(fake.call(()), 3); // stays programmed
    /// ```
    pub fn then_return(self, value: O)
    where
        O: Clone + Send + 'static,
    {
        self.then(move |_| value.clone());
    }

    /// Sets the implementation run to answer subsequent invocations.
    ///
    /// The closure borrows the recorded argument tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// let fake: seams::Fake<(u8, u8), u8> = seams::Fake::new();
    /// fake.when().then(|&(a, b)| a + b);
    ///
    /// assert_eq!(fake.call((2, 3)), 5);
    /// ```
    pub fn then(self, answer: impl FnMut(&I) -> O + Send + 'static) {
        self.fake.program(Answer::Then(Box::new(answer)));
    }

    /// Sets one return value per subsequent invocation, first to
    /// last.
    ///
    /// # Examples
    ///
    /// ```
    /// let fake: seams::Fake<(), u8> = seams::Fake::new();
    /// fake.when().then_return_seq(vec![1, 2]);
    ///
    /// assert_eq!(fake.call(()), 1);
    /// assert_eq!(fake.call(()), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// Once the sequence is drained, further invocations of the fake
    /// panic:
    ///
    /// ```should_panic
    /// let fake: seams::Fake<(), u8> = seams::Fake::new();
    /// fake.when().then_return_seq(vec![1]);
    ///
    /// assert_eq!(fake.call(()), 1);
    /// fake.call(()); // nothing left to hand out
    /// ```
    pub fn then_return_seq(self, values: Vec<O>) {
        self.fake.program(Answer::Seq(VecDeque::from(values)));
    }

    /// Sets the value returned by the next invocation only.
    ///
    /// Unlike [`then_return`](When::then_return), the value does not
    /// need to be cloneable; it is moved out on the call. A second
    /// invocation without reprogramming panics.
    ///
    /// # Examples
    ///
    /// ```
    /// #[derive(Debug, PartialEq, Default)]
    /// struct Handle(u32); // deliberately not Clone
    ///
    /// let fake: seams::Fake<(), Handle> = seams::Fake::new();
    /// fake.when().then_return_once(Handle(7));
    ///
    /// assert_eq!(fake.call(()), Handle(7));
    /// ```
    pub fn then_return_once(self, value: O) {
        self.then_return_seq(vec![value]);
    }
}
