//! Deterministic layout fingerprint for unsaved-change tracking.
//!
//! The hash runs over the JSON encoding of the rooms followed by the metadata
//! entries in key order, so it does not depend on metadata insertion order.

use xxhash_rust::xxh32::xxh32;

use crate::model::Layout;

const FINGERPRINT_SEED: u32 = 0x4C41_594F;

/// 32-bit fingerprint of `layout`.
pub fn layout_fingerprint(layout: &Layout) -> u32 {
    let mut bytes = serde_json::to_vec(&layout.rooms).unwrap_or_default();
    let mut meta: Vec<_> = layout.meta.iter().collect();
    meta.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in meta {
        bytes.push(0);
        bytes.extend_from_slice(key.as_bytes());
        bytes.push(b'=');
        bytes.extend_from_slice(value.to_string().as_bytes());
    }
    xxh32(&bytes, FINGERPRINT_SEED)
}
