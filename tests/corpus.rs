//! Test corpus: size and pattern sweeps over the page layout invariants.

mod common;

use common::*;
use zenoled::*;

const WIDTHS: [usize; 12] = [1, 3, 7, 8, 9, 15, 17, 31, 32, 33, 100, 128];
const HEIGHTS: [usize; 10] = [1, 2, 5, 7, 8, 9, 15, 16, 33, 64];

fn check_layout(pixels: &Grid, bmp: &[u8]) {
    let h = pixels.len();
    let w = pixels.first().map_or(0, Vec::len);
    let bitmap = convert(bmp, Unstoppable).unwrap().into_bitmap();

    assert_eq!(bitmap.width() as usize, w);
    assert_eq!(bitmap.height() as usize, h);
    assert_eq!(bitmap.as_bytes().len(), w * h.div_ceil(8), "{w}x{h}");

    for (y, row) in pixels.iter().enumerate() {
        for (x, &set) in row.iter().enumerate() {
            assert_eq!(
                bitmap.pixel(x as u32, y as u32),
                set,
                "{w}x{h} pixel ({x}, {y})"
            );
        }
    }

    // Bits below the last row are always clear
    let last = bitmap.pages() - 1;
    let used_bits = h - last as usize * 8;
    let padding_mask = !(0xffu8.checked_shr(8 - used_bits as u32).unwrap_or(0));
    for &byte in bitmap.page(last).unwrap() {
        assert_eq!(byte & padding_mask, 0, "{w}x{h} padding bits");
    }
}

// ── Layout invariants ───────────────────────────────────────────────

#[test]
fn noise_round_trips_through_pages() {
    for (i, &w) in WIDTHS.iter().enumerate() {
        for (j, &h) in HEIGHTS.iter().enumerate() {
            let pixels = noise(w, h, (i * 31 + j) as u32 + 0xBEEF);
            check_layout(&pixels, &mono_bmp(&pixels, false));
        }
    }
}

#[test]
fn solid_images_round_trip() {
    for &w in &WIDTHS {
        for &h in &HEIGHTS {
            let pixels = grid(w, h, |_, _| true);
            check_layout(&pixels, &mono_bmp(&pixels, false));
        }
    }
}

#[test]
fn top_down_files_round_trip_when_sign_is_honored() {
    for &(w, h) in &[(8, 8), (13, 21), (128, 64)] {
        let pixels = noise(w, h, 0x5EED);
        let bottom_up = convert(&mono_bmp(&pixels, false), Unstoppable).unwrap();
        let top_down = ConvertRequest::new(&mono_bmp(&pixels, true))
            .with_row_order(RowOrder::FromHeaderSign)
            .convert(Unstoppable)
            .unwrap();
        assert_eq!(bottom_up.bitmap(), top_down.bitmap(), "{w}x{h}");
    }
}

#[test]
fn top_down_files_are_flipped_by_default() {
    let (w, h) = (16, 12);
    let pixels = noise(w, h, 42);
    let bitmap = convert(&mono_bmp(&pixels, true), Unstoppable)
        .unwrap()
        .into_bitmap();
    for (y, row) in pixels.iter().enumerate() {
        for (x, &set) in row.iter().enumerate() {
            assert_eq!(bitmap.pixel(x as u32, (h - 1 - y) as u32), set);
        }
    }
}

#[test]
fn conversion_is_deterministic() {
    let pixels = noise(100, 37, 7);
    let bmp = mono_bmp(&pixels, false);
    let options = LiteralOptions::default();

    let first = convert(&bmp, Unstoppable).unwrap();
    let second = convert(&bmp, Unstoppable).unwrap();
    assert_eq!(first.bitmap(), second.bitmap());
    assert_eq!(first.literal(&options), second.literal(&options));
}

#[test]
fn literal_lists_every_byte_in_order() {
    let pixels = noise(33, 17, 99);
    let converted = convert(&mono_bmp(&pixels, false), Unstoppable).unwrap();
    let literal = converted.literal(&LiteralOptions::default());

    let parsed: Vec<u8> = literal
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|tok| tok.strip_prefix("0x"))
        .map(|hex| u8::from_str_radix(hex, 16).unwrap())
        .collect();
    assert_eq!(parsed, converted.bitmap().as_bytes());
    assert!(literal.ends_with("#define MEME_WIDTH 33\n#define MEME_HEIGHT 17\n"));
}

// ── Truncation sweep ────────────────────────────────────────────────

#[test]
fn lenient_truncation_only_clears_missing_rows() {
    let (w, h) = (24, 16);
    let pixels = grid(w, h, |_, _| true);
    let stride = stride(w);
    for missing_rows in 0..=h {
        let bmp = truncated(mono_bmp(&pixels, false), missing_rows * stride);
        let bitmap = convert(&bmp, Unstoppable).unwrap().into_bitmap();
        assert_eq!(bitmap.as_bytes().len(), w * 2);
        // Stored rows are cut from the end, which is the top of the image
        for y in 0..h {
            let expected = y >= missing_rows;
            for x in 0..w {
                assert_eq!(bitmap.pixel(x as u32, y as u32), expected, "({x}, {y})");
            }
        }
    }
}

#[cfg(feature = "imgref")]
#[test]
fn imgvec_matches_pixels() {
    let pixels = checkerboard(10, 9);
    let bitmap = convert(&mono_bmp(&pixels, false), Unstoppable)
        .unwrap()
        .into_bitmap();
    let img = bitmap.to_imgvec();
    assert_eq!((img.width(), img.height()), (10, 9));
    for (y, row) in img.rows().enumerate() {
        for (x, &luma) in row.iter().enumerate() {
            assert_eq!(luma == 255, pixels[y][x]);
        }
    }
}
