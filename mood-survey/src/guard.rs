//! Rollback for submissions whose future is dropped before it resolves.

/// Something with a submission that can be abandoned mid-flight.
pub(crate) trait Abandon {
    fn abandon(&mut self);
}

/// Holds the submitting value for the duration of one submission.
///
/// If the guard is dropped while still armed (the owning future was cancelled),
/// the submission is abandoned and the value returns to its editable state.
pub(crate) struct InFlight<'a, T: Abandon> {
    target: &'a mut T,
    armed: bool,
}

impl<'a, T: Abandon> InFlight<'a, T> {
    pub(crate) fn new(target: &'a mut T) -> Self {
        Self {
            target,
            armed: true,
        }
    }

    /// The submission resolved; dropping the guard no longer rolls back.
    pub(crate) fn disarm(&mut self) {
        self.armed = false;
    }

    pub(crate) fn target(&mut self) -> &mut T {
        self.target
    }
}

impl<T: Abandon> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.target.abandon();
        }
    }
}
