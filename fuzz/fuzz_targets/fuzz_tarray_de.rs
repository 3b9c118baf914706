#![no_main]

use libfuzzer_sys::fuzz_target;
use serde::Deserialize;
use tarray::TArray;

fuzz_target!(|data: &str| {
    if data.is_empty() {
        return;
    }
    let mut deserializer = serde_json::Deserializer::from_str(data);
    let _ = TArray::<i64>::deserialize(&mut deserializer);
});
