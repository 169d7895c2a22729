// Fuzz target checking that every accepted ISO8601 string round-trips.
#![no_main]

use libfuzzer_sys::fuzz_target;
use skycast_core::convert::{epoch_to_iso8601, iso8601_to_epoch};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(epoch) = iso8601_to_epoch(text) {
        if let Ok(rendered) = epoch_to_iso8601(epoch) {
            assert_eq!(iso8601_to_epoch(&rendered).ok(), Some(epoch));
        }
    }
});
