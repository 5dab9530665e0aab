//! Lazy arithmetic progressions over integers
//!
//! A [`Range`] is a restartable description; each call to [`Range::iter`]
//! walks `start, start + step, ...` from the beginning, yielding integer
//! values until the termination predicate fails.

use crate::error::{Result, RuntimeError};
use crate::Value;

/// How a range decides it has reached `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// Continue while `current < stop` for a positive step and while
    /// `current > stop` for a negative step.
    #[default]
    Directional,

    /// Continue while `current < stop`, whatever the step's sign.
    ///
    /// A negative step starting below `stop` only ends when the counter
    /// would overflow.
    Ascending,
}

/// An integer progression `start, start + step, ...` bounded by `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    stop: i64,
    step: i64,
    termination: Termination,
}

impl Range {
    /// Create a range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` if `step` is zero.
    pub fn new(start: i64, stop: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(RuntimeError::InvalidStep);
        }
        Ok(Self {
            start,
            stop,
            step,
            termination: Termination::default(),
        })
    }

    /// `range(stop)`: from 0 by 1
    pub fn to(stop: i64) -> Self {
        Self {
            start: 0,
            stop,
            step: 1,
            termination: Termination::default(),
        }
    }

    /// Build from one to three integer arguments, as `range(...)` is called.
    ///
    /// One argument is the stop; two are start and stop; three add the step.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for an argument that is neither an integer nor
    /// an integral float, `InvalidArgument` for the wrong number of
    /// arguments, and `InvalidStep` for a zero step.
    pub fn from_values(args: &[Value]) -> Result<Self> {
        match args {
            [stop] => Ok(Self::to(stop.as_index()?)),
            [start, stop] => Self::new(start.as_index()?, stop.as_index()?, 1),
            [start, stop, step] => {
                Self::new(start.as_index()?, stop.as_index()?, step.as_index()?)
            }
            _ => Err(RuntimeError::InvalidArgument(format!(
                "range expected 1 to 3 arguments, got {}",
                args.len()
            ))),
        }
    }

    /// Use a different termination predicate (builder pattern)
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// First value
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive bound
    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Increment between values
    pub fn step(&self) -> i64 {
        self.step
    }

    /// The termination predicate in effect
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Number of values produced, or `None` if the range only ends on
    /// counter overflow.
    pub fn len(&self) -> Option<usize> {
        remaining(self.start, self.stop, self.step, self.termination)
    }

    /// Whether the range produces no values
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Whether `n` is one of the produced values
    pub fn contains(&self, n: i64) -> bool {
        let (start, step) = (self.start as i128, self.step as i128);
        let offset = n as i128 - start;
        if offset % step != 0 || offset / step < 0 {
            return false;
        }
        match self.len() {
            Some(len) => ((offset / step) as u128) < len as u128,
            None => true,
        }
    }

    /// Walk the range from `start`
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            current: Some(self.start),
            stop: self.stop,
            step: self.step,
            termination: self.termination,
        }
    }

    /// Materialize the range as a new list value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a range that only ends on overflow.
    pub fn to_list(&self) -> Result<Value> {
        if self.len().is_none() {
            return Err(RuntimeError::InvalidArgument(format!(
                "range({}, {}, {}) does not terminate",
                self.start, self.stop, self.step
            )));
        }
        Ok(Value::list(self.iter().collect()))
    }
}

/// Count of values from `current` before termination.
fn remaining(current: i64, stop: i64, step: i64, termination: Termination) -> Option<usize> {
    let (current, stop, step) = (current as i128, stop as i128, step as i128);
    let count = if step > 0 {
        if current < stop {
            (stop - current + step - 1) / step
        } else {
            0
        }
    } else {
        match termination {
            Termination::Directional if current > stop => (current - stop - step - 1) / -step,
            Termination::Directional => 0,
            Termination::Ascending if current < stop => return None,
            Termination::Ascending => 0,
        }
    };
    Some(count as usize)
}

impl IntoIterator for Range {
    type Item = Value;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl IntoIterator for &Range {
    type Item = Value;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Iterator over a [`Range`], yielding `Value::Int`.
#[derive(Debug, Clone)]
pub struct RangeIter {
    current: Option<i64>,
    stop: i64,
    step: i64,
    termination: Termination,
}

impl RangeIter {
    fn continues(&self, current: i64) -> bool {
        match self.termination {
            Termination::Directional if self.step < 0 => current > self.stop,
            _ => current < self.stop,
        }
    }
}

impl Iterator for RangeIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let current = self.current?;
        if !self.continues(current) {
            self.current = None;
            return None;
        }
        // Overflow ends the sequence
        self.current = current.checked_add(self.step);
        Some(Value::Int(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            None => (0, Some(0)),
            Some(current) => match remaining(current, self.stop, self.step, self.termination) {
                Some(n) => (n, Some(n)),
                None => (0, None),
            },
        }
    }
}
