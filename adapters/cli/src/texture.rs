//! Procedurally generated wall texture.
//!
//! Shipping a binary image asset is unnecessary for the default experience:
//! a mossy stone pattern is synthesized from a fixed seed, so every run
//! produces the same texels and `--texture` remains available for real
//! artwork.

use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

const TEXTURE_SEED: u64 = 0x5eed_57a7_e4a1_1ed0;

/// Side length of the generated square texture in texels.
pub(crate) const GENERATED_TEXTURE_SIZE: u32 = 64;

/// Texels per mortar seam: the pattern reads as 16x16 stone blocks.
const BLOCK_SIZE: u32 = 16;

/// Generates the RGBA8 texels of a mossy stone wall.
pub(crate) fn mossy_wall(width: u32, height: u32) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(TEXTURE_SEED);
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);

    for y in 0..height {
        for x in 0..width {
            let seam = x % BLOCK_SIZE == 0 || y % BLOCK_SIZE == 0;
            let base: i32 = if seam { 62 } else { 118 };
            let jitter: i32 = rng.gen_range(-16..=16);
            let moss: i32 = if !seam && rng.gen_ratio(1, 9) {
                rng.gen_range(18..=42)
            } else {
                0
            };

            let red = (base + jitter - moss / 2).clamp(0, 255) as u8;
            let green = (base + jitter + moss).clamp(0, 255) as u8;
            let blue = (base + jitter - moss).clamp(0, 255) as u8;
            pixels.extend_from_slice(&[red, green, blue, 255]);
        }
    }

    pixels
}
