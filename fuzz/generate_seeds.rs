#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn mono_bmp(width: i32, height: i32, info_size: u32, fill: u8) -> Vec<u8> {
    let stride = ((width as usize + 31) / 32) * 4;
    let rows = height.unsigned_abs() as usize;
    let offset = 14 + info_size as usize + 8;
    let file_size = offset + stride * rows;

    let mut bmp = vec![0u8; file_size];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(file_size as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&(offset as u32).to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&info_size.to_le_bytes()); // DIB header size
    if info_size == 12 {
        bmp[18..20].copy_from_slice(&(width as u16).to_le_bytes());
        bmp[20..22].copy_from_slice(&(height as u16).to_le_bytes());
        bmp[22..24].copy_from_slice(&1u16.to_le_bytes()); // planes
        bmp[24..26].copy_from_slice(&1u16.to_le_bytes()); // bpp
    } else {
        bmp[18..22].copy_from_slice(&width.to_le_bytes());
        bmp[22..26].copy_from_slice(&height.to_le_bytes());
        bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        bmp[28..30].copy_from_slice(&1u16.to_le_bytes()); // bpp
    }
    // Palette: black, white
    bmp[offset - 4..offset - 1].fill(0xff);
    bmp[offset..].fill(fill);
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_convert";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/white_8x8.bmp"), mono_bmp(8, 8, 40, 0xff)).unwrap();
    fs::write(format!("{dir}/stripes_13x10.bmp"), mono_bmp(13, 10, 40, 0xaa)).unwrap();
    fs::write(format!("{dir}/topdown_16x9.bmp"), mono_bmp(16, -9, 40, 0x55)).unwrap();
    fs::write(format!("{dir}/panel_128x64.bmp"), mono_bmp(128, 64, 124, 0x0f)).unwrap();
    fs::write(format!("{dir}/core_20x12.bmp"), mono_bmp(20, 12, 12, 0xf0)).unwrap();

    // Truncated/malformed seeds for edge coverage
    let mut short = mono_bmp(33, 17, 40, 0xff);
    short.truncate(short.len() - 10);
    fs::write(format!("{dir}/truncated_33x17.bmp"), short).unwrap();
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/not_bmp.bin"), b"P4\n8 8\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
