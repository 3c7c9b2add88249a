//! Selection cursor over the displayed list and positional edits of the
//! pinned list.
//!
//! The displayed list is the pinned list followed by the unpinned list. The
//! cursor is a flat index into that concatenation; its [`Region`] tells
//! which half it falls in.

use tracing::trace;

use crate::error::{PinError, PinResult};

/// Which half of the displayed list holds the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Pinned,
    Unpinned,
}

impl Region {
    /// Region of `cursor` given the pinned list length.
    pub fn of(cursor: usize, pinned_len: usize) -> Self {
        if pinned_len == 0 || cursor >= pinned_len {
            Region::Unpinned
        } else {
            Region::Pinned
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorModel {
    index: usize,
    region: Region,
}

impl CursorModel {
    pub fn new(index: usize, pinned_len: usize) -> Self {
        Self {
            index,
            region: Region::of(index, pinned_len),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn recompute_region(&mut self, pinned_len: usize) {
        self.region = Region::of(self.index, pinned_len);
    }

    /// Move by `delta`, wrapping around both ends of a list of `total` entries.
    pub fn move_by(&mut self, delta: isize, total: usize, pinned_len: usize) {
        if total == 0 {
            return;
        }
        let next = (self.index as isize + delta).rem_euclid(total as isize);
        self.index = next as usize;
        self.recompute_region(pinned_len);
        trace!(cursor = self.index, "cursor moved");
    }

    /// Place the cursor on `index` unchanged, then recompute the region.
    pub fn set(&mut self, index: usize, pinned_len: usize) {
        self.index = index;
        self.recompute_region(pinned_len);
    }

    /// Pull the cursor back inside a list of `total` entries.
    ///
    /// A cursor past the end lands on the last entry; an empty list puts it
    /// at 0.
    pub fn clamp(&mut self, total: usize, pinned_len: usize) {
        if total == 0 {
            self.index = 0;
        } else if self.index >= total {
            self.index = total - 1;
        }
        self.recompute_region(pinned_len);
    }

    /// Exchange the selected pinned entry with `pinned[target]` and follow it.
    pub fn swap(&mut self, pinned: &mut [String], target: usize) {
        if self.region != Region::Pinned || target >= pinned.len() {
            return;
        }
        pinned.swap(self.index, target);
        self.index = target;
        self.recompute_region(pinned.len());
    }

    /// Move the selected pinned entry to `target`, shifting the entries in
    /// between by one, and follow it.
    pub fn reposition(&mut self, pinned: &mut [String], target: usize) {
        if self.region != Region::Pinned || target >= pinned.len() || target == self.index {
            return;
        }
        if self.index > target {
            pinned[target..=self.index].rotate_right(1);
        } else {
            pinned[self.index..=target].rotate_left(1);
        }
        self.index = target;
        self.recompute_region(pinned.len());
    }

    /// Name under the cursor.
    pub fn selected_name<'a>(
        &self,
        pinned: &'a [String],
        unpinned: &'a [String],
    ) -> PinResult<&'a str> {
        let found = match self.region {
            Region::Pinned => pinned.get(self.index),
            Region::Unpinned => self
                .index
                .checked_sub(pinned.len())
                .and_then(|i| unpinned.get(i)),
        };
        found.map(String::as_str).ok_or(PinError::IndexInvalid {
            cursor: self.index,
            total: pinned.len() + unpinned.len(),
        })
    }
}
