// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Luminosity of a pixel, and the energy between a pair of
//! luminosities.
//!
//! Luminosity is a weighted grayscale, `0.21 R + 0.72 G + 0.07 B`,
//! truncated toward zero.  The energy of a pair is simply the
//! absolute difference of their luminosities.

use image::Pixel;

/// Pixel -> Luminosity
#[inline]
pub fn luminosity<P>(p: &P) -> u8
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let rgb = p.to_rgb();
    let c = rgb.channels();
    let (r, g, b) = (f64::from(c[0]), f64::from(c[1]), f64::from(c[2]));
    // Always within 0..=255, so truncation is exactly the floor.
    (0.21 * r + 0.72 * g + 0.07 * b) as u8
}

/// (Luminosity, Luminosity) -> Energy
#[inline]
pub fn energy_of_luma_pair(l1: u8, l2: u8) -> u32 {
    u32::from(if l1 > l2 { l1 - l2 } else { l2 - l1 })
}
