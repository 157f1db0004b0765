//! Mutable generator state guarded by the generator's lock

/// Last issued millisecond and the sequence used within it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) last_timestamp_ms: i64,
    pub(crate) sequence: i64,
}

impl State {
    /// `last_timestamp_ms` before the first ID is issued
    pub(crate) const IDLE_TIMESTAMP: i64 = -1;

    #[inline(always)]
    pub(crate) const fn idle() -> Self {
        Self {
            last_timestamp_ms: Self::IDLE_TIMESTAMP,
            sequence: 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn is_idle(&self) -> bool {
        self.last_timestamp_ms == Self::IDLE_TIMESTAMP
    }

    /// Step the sequence within the current millisecond.
    ///
    /// Returns `true` when the sequence wrapped to 0, i.e. the millisecond is
    /// exhausted and the caller must move on to the next one.
    #[inline(always)]
    pub(crate) fn advance_sequence(&mut self, sequence_mask: i64) -> bool {
        self.sequence = (self.sequence + 1) & sequence_mask;
        self.sequence == 0
    }
}
