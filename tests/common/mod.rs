//! 1-bit BMP builders shared by the integration tests.

#![allow(dead_code)]

/// Top-down pixel grid, `true` = set bit.
pub type Grid = Vec<Vec<bool>>;

pub fn grid(w: usize, h: usize, f: impl Fn(usize, usize) -> bool) -> Grid {
    (0..h).map(|y| (0..w).map(|x| f(x, y)).collect()).collect()
}

pub fn checkerboard(w: usize, h: usize) -> Grid {
    grid(w, h, |x, y| (x + y) % 2 == 0)
}

pub fn noise(w: usize, h: usize, seed: u32) -> Grid {
    let mut state = seed | 1;
    let mut rows = Vec::with_capacity(h);
    for _ in 0..h {
        let mut row = Vec::with_capacity(w);
        for _ in 0..w {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            row.push(state & 1 == 1);
        }
        rows.push(row);
    }
    rows
}

pub fn stride(w: usize) -> usize {
    w.div_ceil(32) * 4
}

/// Encode `pixels` as a 1-bit BITMAPINFOHEADER BMP with a two-entry
/// palette, rows stored bottom-up (or top-down with a negative height).
pub fn mono_bmp(pixels: &Grid, top_down: bool) -> Vec<u8> {
    let h = pixels.len();
    let w = pixels.first().map_or(0, Vec::len);
    let stride = stride(w);
    let offset = 14 + 40 + 8;
    let file_size = offset + stride * h;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(offset as u32).to_le_bytes());

    let height = if top_down { -(h as i32) } else { h as i32 };
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&1u16.to_le_bytes()); // bpp
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&((stride * h) as u32).to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    // Palette: black, white
    out.extend_from_slice(&[0, 0, 0, 0, 0xff, 0xff, 0xff, 0]);

    let stored: Vec<&Vec<bool>> = if top_down {
        pixels.iter().collect()
    } else {
        pixels.iter().rev().collect()
    };
    for row in stored {
        let mut bytes = vec![0u8; stride];
        for (x, &set) in row.iter().enumerate() {
            if set {
                bytes[x / 8] |= 0x80 >> (x % 8);
            }
        }
        out.extend_from_slice(&bytes);
    }
    out
}

/// The same image with the pixel data cut `missing` bytes short.
pub fn truncated(mut bmp: Vec<u8>, missing: usize) -> Vec<u8> {
    bmp.truncate(bmp.len().saturating_sub(missing));
    bmp
}
