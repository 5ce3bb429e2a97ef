#![no_main]
use libfuzzer_sys::fuzz_target;
use zenoled::*;

fuzz_target!(|data: &[u8]| {
    // Header claims are unbounded; cap the page buffer so huge dimensions
    // fail with LimitExceeded instead of exhausting memory.
    let limits = Limits {
        max_width: Some(1 << 16),
        max_height: Some(1 << 16),
        max_pixels: Some(1 << 24),
        ..Limits::default()
    };

    // Any input, any options — must never panic
    for permissiveness in [Permissiveness::Lenient, Permissiveness::Strict] {
        for row_order in [RowOrder::AssumeBottomUp, RowOrder::FromHeaderSign] {
            let Ok(converted) = ConvertRequest::new(data)
                .with_limits(&limits)
                .with_permissiveness(permissiveness)
                .with_row_order(row_order)
                .convert(enough::Unstoppable)
            else {
                continue;
            };
            let _ = converted.literal(&LiteralOptions::default());
        }
    }
});
