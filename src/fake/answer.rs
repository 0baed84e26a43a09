use std::{
    collections::VecDeque,
    fmt::{self, Formatter},
};

pub enum Answer<I, O> {
    /// Unprogrammed: hand out the zero value of `O`.
    Zero,
    /// Programmed values, handed out front to back.
    Seq(VecDeque<O>),
    /// Programmed implementation.
    Then(Box<dyn FnMut(&I) -> O + Send>),
}

impl<I, O> Answer<I, O> {
    pub fn next(&mut self, args: &I, name: &'static str) -> O
    where
        O: Default,
    {
        match self {
            Answer::Zero => O::default(),
            Answer::Seq(values) => match values.pop_front() {
                Some(value) => value,
                None => panic!("fake `{}` drained its programmed return values", name),
            },
            Answer::Then(answer) => answer(args),
        }
    }
}

impl<I, O> fmt::Debug for Answer<I, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Zero => f.write_str("zero"),
            Answer::Seq(values) => write!(f, "{} queued values", values.len()),
            Answer::Then(_) => f.write_str("programmed"),
        }
    }
}
