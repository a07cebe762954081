//! Exhaustive enumeration of bit patterns with a fixed popcount parity.
//!
//! For any width `w`, [`all_even`] and [`all_odd`] jointly enumerate
//! `[0, 2^w)` exactly once: prepending a zero bit to a `(w-1)`-wide pattern
//! preserves its popcount parity, prepending a one bit flips it, so each
//! sequence is the same-parity sequence one width down followed by the
//! flipped-parity sequence with `2^(w-1)` added. The recursion bottoms out
//! in fixed tables for widths 0 through 2.
//!
//! Sequence length is exponential in `width`; the iterators are lazy and
//! do no work beyond what the consumer pulls, so requesting an affordable
//! prefix of an enormous width is fine.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::Parity;

/// Widths covered by the base tables.
const TABLE_WIDTH_LIMIT: usize = 3;

/// Even-popcount patterns for widths 0, 1 and 2, in traversal order.
const EVEN_TABLE: [&[u32]; TABLE_WIDTH_LIMIT] = [&[0], &[0], &[0, 3]];

/// Odd-popcount patterns for widths 0, 1 and 2. A zero-width pattern has
/// popcount zero, so the width-0 row is empty.
const ODD_TABLE: [&[u32]; TABLE_WIDTH_LIMIT] = [&[], &[1], &[1, 2]];

fn base_table(parity: Parity) -> &'static [&'static [u32]; TABLE_WIDTH_LIMIT] {
    match parity {
        Parity::Even => &EVEN_TABLE,
        Parity::Odd => &ODD_TABLE,
    }
}

/// All width-`width` patterns with even popcount.
#[must_use]
pub fn all_even(width: usize) -> ParityPatterns {
    ParityPatterns::new(width, Parity::Even)
}

/// All width-`width` patterns with odd popcount.
#[must_use]
pub fn all_odd(width: usize) -> ParityPatterns {
    ParityPatterns::new(width, Parity::Odd)
}

/// Number of patterns [`ParityPatterns::new`] yields for a width and
/// parity: `2^(width-1)` for `width >= 1`, and 1 or 0 at width 0.
#[must_use]
pub fn pattern_count(width: usize, parity: Parity) -> BigUint {
    match (width, parity) {
        (0, Parity::Even) => BigUint::one(),
        (0, Parity::Odd) => BigUint::zero(),
        _ => BigUint::one() << (width - 1),
    }
}

/// One unexpanded span of the construction: every `width`-bit pattern of
/// parity `parity`, shifted up by `offset`.
#[derive(Clone, Debug)]
struct Segment {
    width: usize,
    parity: Parity,
    offset: BigUint,
}

/// Base-table span currently being drained.
#[derive(Clone, Debug)]
struct TableCursor {
    entries: &'static [u32],
    next: usize,
    offset: BigUint,
}

/// Lazy sequence of all patterns of one width and popcount parity.
///
/// The original recursive construction is driven as an explicit state
/// machine: a LIFO stack of pending [`Segment`]s and at most one base-table
/// cursor. Expanding a segment of width 3 or more pushes its flipped-parity
/// upper half (offset raised by the leading one) beneath its same-parity
/// lower half; smaller segments drain straight from the tables. The
/// resulting order (lower half first, then the upper half with the leading
/// one added) is deterministic but is an artifact of the construction, not
/// a guarantee of this type.
#[derive(Clone, Debug)]
pub struct ParityPatterns {
    pending: SmallVec<[Segment; 8]>,
    active: Option<TableCursor>,
}

impl ParityPatterns {
    #[must_use]
    pub fn new(width: usize, parity: Parity) -> ParityPatterns {
        let mut pending = SmallVec::new();
        pending.push(Segment {
            width,
            parity,
            offset: BigUint::zero(),
        });
        ParityPatterns { pending, active: None }
    }
}

impl Iterator for ParityPatterns {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        loop {
            if let Some(cursor) = &mut self.active {
                if let Some(&entry) = cursor.entries.get(cursor.next) {
                    cursor.next += 1;
                    return Some(&cursor.offset + entry);
                }
                self.active = None;
            }
            let Segment { width, parity, offset } = self.pending.pop()?;
            if width < TABLE_WIDTH_LIMIT {
                self.active = Some(TableCursor {
                    entries: base_table(parity)[width],
                    next: 0,
                    offset,
                });
            } else {
                let leading_one = BigUint::one() << (width - 1);
                // LIFO: the same-parity lower half must drain first.
                self.pending.push(Segment {
                    width: width - 1,
                    parity: !parity,
                    offset: &offset + leading_one,
                });
                self.pending.push(Segment {
                    width: width - 1,
                    parity,
                    offset,
                });
            }
        }
    }
}
