#![no_main]
use libfuzzer_sys::fuzz_target;
use zenoled::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_width: Some(1 << 16),
        max_height: Some(1 << 16),
        max_pixels: Some(1 << 20),
        ..Limits::default()
    };
    let Ok(converted) = ConvertRequest::new(data)
        .with_limits(&limits)
        .convert(enough::Unstoppable)
    else {
        return;
    };
    let header = converted.header;
    let bitmap = converted.bitmap();
    let (w, h) = (header.width(), header.height());

    assert_eq!(bitmap.as_bytes().len(), w as usize * h.div_ceil(8) as usize);

    // Every set bit must trace back to a set bit in the stored rows
    let stride = header.row_stride().unwrap();
    let offset = header.pixel_data_offset as usize;
    for y in 0..h {
        let stored = (h - 1 - y) as usize;
        for x in 0..w {
            let byte_index = x as usize / 8;
            let source = byte_index < stride
                && offset
                    .checked_add(stored * stride + byte_index)
                    .and_then(|i| data.get(i))
                    .is_some_and(|b| b & (0x80 >> (x % 8)) != 0);
            assert_eq!(bitmap.pixel(x, y), source, "pixel ({x}, {y})");
        }
    }

    // Padding rows below the image are clear
    if let Some(last) = bitmap.pages().checked_sub(1).and_then(|p| bitmap.page(p)) {
        let used = h - (bitmap.pages() - 1) * PAGE_HEIGHT;
        let mask = !(0xffu8 >> (PAGE_HEIGHT - used));
        assert!(last.iter().all(|b| b & mask == 0));
    }
});
