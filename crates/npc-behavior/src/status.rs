//! Behavior node outcome.

/// The outcome of one behavior-node execution.
///
/// `Status` is an ordinary return value, never an error signal: a failing
/// condition or action is normal control flow inside a tree.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        self == Status::Failure
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(ok: bool) -> Status {
        if ok { Status::Success } else { Status::Failure }
    }
}
