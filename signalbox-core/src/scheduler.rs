//! Round-robin scheduler cursor
//!
//! One persistent cursor walks the device chain, handing out exactly one
//! device index per scheduling round. Work per outer-loop iteration is
//! therefore bounded by a single device's tick, regardless of how many
//! devices are registered.
//!
//! The cursor is a plain index into the chain, kept valid by explicit
//! notifications whenever the chain mutates. Removal of the device the
//! cursor references advances the cursor to the next live device *before*
//! that device is destroyed, so a tick can never reach freed state.

/// Cursor over the device chain
///
/// Empty (`None`) means the next round starts again from the chain head.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopCursor {
    next: Option<usize>,
}

impl LoopCursor {
    /// Create an empty cursor
    pub const fn new() -> Self {
        Self { next: None }
    }

    /// Index the cursor currently references, if any
    pub fn peek(&self) -> Option<usize> {
        self.next
    }

    /// Take the index of the device to tick this round and advance
    ///
    /// An empty (or stale) cursor resets to the chain head. After the last
    /// chain member the cursor becomes empty, wrapping on the next call.
    /// Returns None only when the chain itself is empty.
    pub fn take_next(&mut self, chain_len: usize) -> Option<usize> {
        if chain_len == 0 {
            self.next = None;
            return None;
        }
        let current = match self.next {
            Some(i) if i < chain_len => i,
            _ => 0,
        };
        self.next = if current + 1 < chain_len {
            Some(current + 1)
        } else {
            None
        };
        Some(current)
    }

    /// Account for a device inserted at the chain head
    pub fn note_front_insert(&mut self) {
        if let Some(i) = self.next {
            self.next = Some(i + 1);
        }
    }

    /// Account for removal of the device at `index`
    ///
    /// Must be called before the chain entry is dropped. If the cursor
    /// references the removed device it is first advanced to the next
    /// live device; then the index is shifted for the removal.
    pub fn note_removed(&mut self, index: usize, chain_len: usize) {
        if self.next == Some(index) {
            self.next = if index + 1 < chain_len {
                Some(index + 1)
            } else {
                None
            };
        }
        if let Some(i) = self.next {
            if i > index {
                self.next = Some(i - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_yields_nothing() {
        let mut cursor = LoopCursor::new();
        assert_eq!(cursor.take_next(0), None);
        assert_eq!(cursor.take_next(0), None);
    }

    #[test]
    fn test_walks_chain_in_order_and_wraps() {
        let mut cursor = LoopCursor::new();
        assert_eq!(cursor.take_next(3), Some(0));
        assert_eq!(cursor.take_next(3), Some(1));
        assert_eq!(cursor.take_next(3), Some(2));
        // Wrap back to the head
        assert_eq!(cursor.take_next(3), Some(0));
    }

    #[test]
    fn test_front_insert_keeps_target() {
        let mut cursor = LoopCursor::new();
        assert_eq!(cursor.take_next(2), Some(0));
        // New device at the head pushes the pending target along
        cursor.note_front_insert();
        assert_eq!(cursor.take_next(3), Some(2));
        assert_eq!(cursor.take_next(3), Some(0));
    }

    #[test]
    fn test_removal_before_target_shifts() {
        let mut cursor = LoopCursor::new();
        cursor.take_next(3); // next = 1
        cursor.note_removed(0, 3);
        assert_eq!(cursor.take_next(2), Some(0));
    }

    #[test]
    fn test_removal_of_target_advances_first() {
        let mut cursor = LoopCursor::new();
        cursor.take_next(3); // next = 1
        // Removing the referenced device moves the cursor to its successor
        cursor.note_removed(1, 3);
        assert_eq!(cursor.take_next(2), Some(1));
    }

    #[test]
    fn test_removal_of_last_target_empties() {
        let mut cursor = LoopCursor::new();
        cursor.take_next(2); // next = 1
        cursor.note_removed(1, 2);
        assert_eq!(cursor.peek(), None);
        // Next round starts from the head again
        assert_eq!(cursor.take_next(1), Some(0));
    }

    #[test]
    fn test_stale_cursor_resets_to_head() {
        let mut cursor = LoopCursor::new();
        cursor.take_next(5);
        cursor.take_next(5); // next = 2
        // Chain shrank behind our back less than the cursor index
        assert_eq!(cursor.take_next(1), Some(0));
    }
}
