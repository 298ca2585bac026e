#![no_main]

use libfuzzer_sys::fuzz_target;
use pldcalc::timing::{compute_timing, TimingParams};

fuzz_target!(|data: &[u8]| {
    // 3 x f64 followed by a u64 step count
    if data.len() < 32 {
        return;
    }

    let word = |offset: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[offset..offset + 8]);
        bytes
    };
    let read = |offset: usize| f64::from_le_bytes(word(offset));

    let steps = u64::from_le_bytes(word(24)) as usize;
    let params = TimingParams::new(read(0), read(8), steps, read(16));

    // Must not panic; a schedule, when produced, always has step_count entries
    if let Ok(schedule) = compute_timing(&params) {
        assert_eq!(schedule.len(), params.step_count);
    }
});
