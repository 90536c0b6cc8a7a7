//! Building the quality menu from raw provider streams

use crate::core::metadata::MediaVariant;
use std::collections::HashMap;

/// Build the ordered quality menu from the provider's stream list.
///
/// Variants without a resolution label never enter the menu. Among
/// variants sharing a resolution, the one with the highest frame rate
/// survives; on equal frame rates the first-seen entry is kept. The
/// result is sorted by byte size, largest first.
pub fn select_streams(variants: &[MediaVariant]) -> Vec<MediaVariant> {
    let mut by_resolution: HashMap<&str, &MediaVariant> = HashMap::new();

    for variant in variants {
        let Some(resolution) = variant.resolution.as_deref() else {
            continue;
        };
        let replace = match by_resolution.get(resolution) {
            None => true,
            Some(kept) => variant.fps.unwrap_or(0) > kept.fps.unwrap_or(0),
        };
        if replace {
            by_resolution.insert(resolution, variant);
        }
    }

    let mut menu: Vec<MediaVariant> = by_resolution.into_values().cloned().collect();
    menu.sort_by(|a, b| b.byte_size.cmp(&a.byte_size));
    menu
}
