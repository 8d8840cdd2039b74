//! Slot partitioning for parallel for-each
//!
//! A slot is a contiguous half-open index range `[start, end)` into the
//! element sequence, assigned to one worker for one call. `partition`
//! splits `[0, len)` into at most `workers` slots: up to `workers - 1`
//! intermediate slots of a rounded uniform size, then one final slot
//! that absorbs the remainder.

/// A contiguous half-open index range `[start, end)` assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// First index, inclusive
    pub start: usize,

    /// Last index, exclusive
    pub end: usize,
}

impl Slot {
    /// Create a slot covering `[start, end)`
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "slot start must not exceed end");
        Slot { start, end }
    }

    /// Number of indices covered by this slot
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the slot covers no indices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl core::fmt::Display for Slot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}

/// Partition `[0, len)` into at most `workers` contiguous slots.
///
/// The intermediate slot size is the half-up rounded quotient
/// `len / workers`. Intermediate slots are issued only while they leave
/// at least one element for the final slot, which always runs through
/// `len` and absorbs the remainder.
///
/// Guarantees:
/// - `len == 0` produces no slots at all
/// - no slot is empty
/// - at most `min(len, workers)` slots
/// - slots are contiguous and cover `[0, len)` exactly
pub fn partition(len: usize, workers: usize) -> Vec<Slot> {
    debug_assert!(workers > 0, "partition requires at least one worker");
    if len == 0 {
        return Vec::new();
    }

    let slot_size = (len as f64 / workers as f64).round() as usize;
    let mut slots = Vec::with_capacity(workers);
    let mut start = 0;

    if slot_size > 0 {
        for _ in 0..workers.saturating_sub(1) {
            // Stop early rather than issue a slot that would leave the
            // final slot empty or run past the end.
            if start + slot_size >= len {
                break;
            }
            slots.push(Slot::new(start, start + slot_size));
            start += slot_size;
        }
    }

    slots.push(Slot::new(start, len));
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assert the partition invariants: contiguous, exact cover, no
    /// empty slots, bounded count.
    fn check_invariants(len: usize, workers: usize) -> Vec<Slot> {
        let slots = partition(len, workers);

        if len == 0 {
            assert!(slots.is_empty());
            return slots;
        }

        assert!(!slots.is_empty());
        assert!(slots.len() <= workers);
        assert!(slots.len() <= len);

        let mut expected_start = 0;
        for slot in &slots {
            assert_eq!(slot.start, expected_start, "gap or overlap at {}", slot);
            assert!(!slot.is_empty(), "empty slot {}", slot);
            assert!(slot.end <= len);
            expected_start = slot.end;
        }
        assert_eq!(expected_start, len, "slots do not reach the end");

        slots
    }

    #[test]
    fn test_empty_input_produces_no_slots() {
        assert!(partition(0, 4).is_empty());
        assert!(partition(0, 1).is_empty());
    }

    #[test]
    fn test_single_element() {
        let slots = check_invariants(1, 8);
        assert_eq!(slots, vec![Slot::new(0, 1)]);
    }

    #[test]
    fn test_single_worker_gets_everything() {
        let slots = check_invariants(100, 1);
        assert_eq!(slots, vec![Slot::new(0, 100)]);
    }

    #[test]
    fn test_even_split() {
        let slots = check_invariants(8, 4);
        assert_eq!(slots.len(), 4);
        assert!(slots.iter().all(|s| s.len() == 2));
    }

    #[test]
    fn test_remainder_goes_to_final_slot() {
        let slots = check_invariants(10, 3);
        assert_eq!(
            slots,
            vec![Slot::new(0, 3), Slot::new(3, 6), Slot::new(6, 10)]
        );
    }

    #[test]
    fn test_round_up_shrinks_slot_count() {
        // 10/4 rounds to 3, so three slots of 3 would leave only one
        // element; the planner still covers everything exactly.
        let slots = check_invariants(10, 4);
        assert_eq!(
            slots,
            vec![
                Slot::new(0, 3),
                Slot::new(3, 6),
                Slot::new(6, 9),
                Slot::new(9, 10)
            ]
        );
    }

    #[test]
    fn test_round_up_absorbs_exact_tail() {
        // 6/4 rounds to 2; after two intermediate slots the next one
        // would swallow the tail, so the final slot takes it instead.
        let slots = check_invariants(6, 4);
        assert_eq!(
            slots,
            vec![Slot::new(0, 2), Slot::new(2, 4), Slot::new(4, 6)]
        );
    }

    #[test]
    fn test_fewer_elements_than_workers() {
        // Rounded size 0: everything lands in the final slot.
        let slots = check_invariants(3, 8);
        assert_eq!(slots, vec![Slot::new(0, 3)]);

        // Rounded size 1: one slot per element, never more than len.
        let slots = check_invariants(5, 8);
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn test_invariants_hold_across_a_grid() {
        for len in 0..200 {
            for workers in 1..17 {
                check_invariants(len, workers);
            }
        }
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(format!("{}", Slot::new(2, 7)), "[2..7)");
    }
}
