//! Reassembly of multi-part payload fragments.

use std::mem;

/// Accumulates base64 fragments for the single in-flight message.
///
/// The wire format carries no message id, so only one logical message can
/// be in flight at a time: a `part_index` of 1 discards any incomplete
/// prior accumulation (last-writer-wins).
#[derive(Debug, Default)]
pub struct FragmentAssembler {
    payload: String,
}

impl FragmentAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while no fragment of the current message has arrived.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Feed one fragment.
    ///
    /// Returns the complete concatenated payload when
    /// `part_index == part_count` and resets the internal state; returns
    /// `None` while parts are still pending. A fragment with
    /// `part_index == part_count == 1` starts and completes in one call.
    ///
    /// Parts are expected in increasing index order starting at 1.
    /// Out-of-order input is not validated and yields garbage payloads,
    /// matching the observed wire format.
    pub fn accumulate(
        &mut self,
        part_index: u32,
        part_count: u32,
        fragment: &str,
    ) -> Option<String> {
        if part_index == 1 {
            self.payload.clear();
        }
        self.payload.push_str(fragment);
        if part_index == part_count {
            Some(mem::take(&mut self.payload))
        } else {
            None
        }
    }
}
