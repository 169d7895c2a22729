// Fuzz target exploring dynamic time values decoded from arbitrary JSON.
#![no_main]

use libfuzzer_sys::fuzz_target;
use skycast_core::convert::{to_epoch, TimeValue};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    if let Ok(time_value) = TimeValue::from_json(&value) {
        let _ = to_epoch(time_value);
    }
});
