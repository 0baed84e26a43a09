mod answer;

use std::fmt::{self, Formatter};

use parking_lot::Mutex;

use crate::when::When;

pub(crate) use answer::Answer;

/// A recording stand-in for a single function.
///
/// `I` is the tuple of the function's argument types and `O` its
/// return type. Invocations go through [`call`](Fake::call), which
/// snapshots the arguments before producing the programmed answer.
/// Until programmed through [`when`](Fake::when), a fake answers with
/// the zero value of `O`.
///
/// Fakes are usually not built by hand but generated as fields of a
/// [`fakes!`](crate::fakes) fixture.
///
/// # Examples
///
/// ```
/// let fake: seams::Fake<(usize,), u64> = seams::Fake::new();
///
/// assert_eq!(fake.call((3,)), 0); // unprogrammed: the zero value
///
/// fake.when().then_return(7);
/// assert_eq!(fake.call((5,)), 7);
///
/// assert_eq!(fake.call_count(), 2);
/// assert_eq!(fake.last_args(), Some((5,)));
/// ```
pub struct Fake<I, O> {
    name: &'static str,
    state: Mutex<State<I, O>>,
}

struct State<I, O> {
    history: Vec<I>,
    answer: Answer<I, O>,
}

impl<I, O> Fake<I, O> {
    /// Creates an anonymous fake.
    pub fn new() -> Self {
        Self::named("<anonymous>")
    }

    /// Creates a fake that carries `name` in its `Debug` output and
    /// panic messages.
    pub fn named(name: &'static str) -> Self {
        Fake {
            name,
            state: Mutex::new(State {
                history: Vec::new(),
                answer: Answer::Zero,
            }),
        }
    }

    /// Returns the name given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Records an invocation and produces the programmed answer.
    ///
    /// The arguments are appended to the history before the answer
    /// runs, so an implementation programmed with
    /// [`then`](When::then) already observes the invocation it is
    /// answering.
    ///
    /// # Panics
    ///
    /// Panics if the programmed answer was a sequence or a single-use
    /// value that has already been drained.
    pub fn call(&self, args: I) -> O
    where
        O: Default,
    {
        let mut state = self.state.lock();
        let state = &mut *state;
        state.history.push(args);
        let args = state.history.last().expect("just recorded");
        state.answer.next(args, self.name)
    }

    /// Number of invocations recorded since construction or the last
    /// [`reset`](Fake::reset).
    pub fn call_count(&self) -> usize {
        self.state.lock().history.len()
    }

    /// Arguments of the most recent invocation, if any.
    pub fn last_args(&self) -> Option<I>
    where
        I: Clone,
    {
        self.state.lock().history.last().cloned()
    }

    /// Arguments of every recorded invocation, oldest first.
    pub fn history(&self) -> Vec<I>
    where
        I: Clone,
    {
        self.state.lock().history.clone()
    }

    /// Starts programming this fake's answer.
    pub fn when(&self) -> When<'_, I, O> {
        When::new(self)
    }

    /// Clears the recorded history and reverts the answer to the zero
    /// value.
    ///
    /// Idempotent. A freshly built fake starts out reset; this exists
    /// to reprogram a fake mid-test.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.history.clear();
        state.answer = Answer::Zero;
    }

    pub(crate) fn program(&self, answer: Answer<I, O>) {
        self.state.lock().answer = answer;
    }
}

impl<I, O> Default for Fake<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> fmt::Debug for Fake<I, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Fake")
            .field("name", &self.name)
            .field("calls", &state.history.len())
            .field("answer", &state.answer)
            .finish()
    }
}
