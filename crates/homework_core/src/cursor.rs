/// Lower bound (Unix seconds) sent as `from_date` with every fetch.
///
/// Created once at startup. The API's `current_date` is not fed back into it,
/// so every request covers the whole window since the process started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollCursor {
    from_date: i64,
}

impl PollCursor {
    pub fn starting_at(from_date: i64) -> Self {
        Self { from_date }
    }

    pub fn from_date(&self) -> i64 {
        self.from_date
    }
}
