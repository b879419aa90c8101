use alloc::string::String;
use core::fmt;

/// Errors raised by the builtins and by the few typed operations with limits.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument had the wrong type.
    #[error("{function}() expects parameter {position} to be {expected}, {given} given")]
    InvalidArgument {
        function: &'static str,
        /// One-based argument position.
        position: usize,
        expected: &'static str,
        given: &'static str,
    },

    /// A builtin was called with the wrong number of arguments.
    #[error("{function}() expects {} arguments, {given} given", ArityRange(*.min, *.max))]
    Arity {
        function: &'static str,
        min: usize,
        max: usize,
        given: usize,
    },

    /// An append needed a fresh integer key but `i64::MAX` is already taken.
    #[error("cannot add element to the container as the next element is already occupied")]
    NextKeyOccupied,

    /// A pad would add more elements than one call may add.
    #[error("may only pad up to {limit} elements at a time, {requested} requested")]
    PadTooLarge { requested: u64, limit: usize },

    /// No builtin has this name.
    #[error("call to undefined builtin {0}()")]
    UnknownBuiltin(String),
}

pub type Result<T> = core::result::Result<T, Error>;

struct ArityRange(usize, usize);

impl fmt::Display for ArityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ArityRange(min, max) if min == max => write!(f, "exactly {min}"),
            ArityRange(min, usize::MAX) => write!(f, "at least {min}"),
            ArityRange(min, max) => write!(f, "{min} to {max}"),
        }
    }
}
