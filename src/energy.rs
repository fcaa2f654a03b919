// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the sum of two luminosity gradients: the
//! absolute difference from the pixel to its right, and from the
//! pixel to the one below it.  Pixels in the last column look left
//! instead, and pixels in the last row look up.  An image one pixel
//! wide (or tall) has nobody to look at along that axis, so that
//! axis contributes nothing.

use crate::cq;
use crate::pixelpairs::{energy_of_luma_pair, luminosity};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel};
use itertools::iproduct;

/// The energy field for an image, one `u32` per pixel.
pub type EnergyMap = TwoDimensionalMap<u32>;

// Everything about the border rules lives here.  `lum` answers the
// luminosity at any in-bounds coordinate.
#[inline]
fn gradient<F>(lum: F, (width, height): (u32, u32), (x, y): (u32, u32)) -> u32
where
    F: Fn(u32, u32) -> u8,
{
    let (mw, mh) = (width - 1, height - 1);
    let here = lum(x, y);
    let across = cq!(x < mw, lum(x + 1, y), cq!(x > 0, lum(x - 1, y), here));
    let down = cq!(y < mh, lum(x, y + 1), cq!(y > 0, lum(x, y - 1), here));
    energy_of_luma_pair(across, here) + energy_of_luma_pair(down, here)
}

/// Image -> Luminosity Map
pub fn luminosity_map<I, P>(image: &I) -> TwoDimensionalMap<u8>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = image.dimensions();
    let mut lmap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        lmap[(x, y)] = luminosity(&image.get_pixel(x, y));
    }
    lmap
}

/// The energy of a single pixel, computed straight from the image.
/// `(x, y)` must be in bounds.
pub fn energy_at<I, P>(image: &I, x: u32, y: u32) -> u32
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    gradient(
        |x, y| luminosity(&image.get_pixel(x, y)),
        image.dimensions(),
        (x, y),
    )
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  Luminosity is
/// computed once per pixel and reused by the (up to three) neighbors
/// that look at it.
pub fn calculate_energy<I, P>(image: &I) -> EnergyMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let lmap = luminosity_map(image);
    let (width, height) = (lmap.width, lmap.height);
    EnergyMap {
        width,
        height,
        data: fill_energy(&lmap),
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_energy(lmap: &TwoDimensionalMap<u8>) -> Vec<u32> {
    let dims = (lmap.width, lmap.height);
    iproduct!(0..lmap.height, 0..lmap.width)
        .map(|(y, x)| gradient(|x, y| lmap[(x, y)], dims, (x, y)))
        .collect()
}

// Every cell depends only on the luminosity map, so the target can be
// cut into bands of whole rows with chunks_mut and each band handed
// to its own thread.
#[cfg(feature = "threaded")]
fn fill_energy(lmap: &TwoDimensionalMap<u8>) -> Vec<u32> {
    let dims = (lmap.width, lmap.height);
    let width = lmap.width as usize;
    let mut energy = vec![0u32; width * lmap.height as usize];
    if energy.is_empty() {
        return energy;
    }

    let workers = num_cpus::get().max(1);
    let band = ((lmap.height as usize + workers - 1) / workers).max(1);
    let result = crossbeam::scope(|s| {
        for (i, chunk) in energy.chunks_mut(band * width).enumerate() {
            let top = i * band;
            s.spawn(move |_| {
                for (offset, cell) in chunk.iter_mut().enumerate() {
                    let (x, y) = (offset % width, top + offset / width);
                    *cell = gradient(|x, y| lmap[(x, y)], dims, (x as u32, y as u32));
                }
            });
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgba, RgbaImage};

    const IMAGE_DATA: [u8; 12] = [9, 9, 0, 9, 9, 1, 9, 8, 9, 9, 9, 0];
    const IMAGE_ENERGY: [u32; 12] = [0, 17, 18, 10, 8, 16, 1, 9, 0, 8, 9, 17];

    #[test]
    fn energy_generator_works() {
        // Gray 9, 0, 1, 8 keep their value as luminosity.
        let buf: GrayImage = ImageBuffer::from_raw(4, 3, IMAGE_DATA.to_vec()).unwrap();
        let energy = calculate_energy(&buf);
        assert_eq!(energy.as_slice(), &IMAGE_ENERGY[..]);
    }

    #[test]
    fn single_pixel_energy_matches_field() {
        let buf: GrayImage = ImageBuffer::from_raw(4, 3, IMAGE_DATA.to_vec()).unwrap();
        let energy = calculate_energy(&buf);
        for (y, x) in iproduct!(0..3, 0..4) {
            assert_eq!(energy_at(&buf, x, y), energy[(x, y)]);
        }
    }

    #[test]
    fn uniform_image_has_no_energy() {
        let buf: RgbaImage = ImageBuffer::from_pixel(5, 4, Rgba::from_channels(30, 60, 90, 255));
        assert!(calculate_energy(&buf).as_slice().iter().all(|e| *e == 0));
    }

    #[test]
    fn degenerate_shapes_stay_in_bounds() {
        // Grays of 0, 10, 20, 30, 40 have luminosities 0, 9, 19, 30, 39.
        let column: GrayImage = ImageBuffer::from_raw(1, 5, vec![0, 10, 20, 30, 40]).unwrap();
        let energy = calculate_energy(&column);
        // Only the vertical axis contributes; the last row looks up.
        assert_eq!(energy.as_slice(), &[9, 10, 11, 9, 9]);

        let row: GrayImage = ImageBuffer::from_raw(3, 1, vec![0, 5, 10]).unwrap();
        assert_eq!(calculate_energy(&row).as_slice(), &[4, 5, 5]);

        let dot: GrayImage = ImageBuffer::from_pixel(1, 1, Luma::from_channels(77, 0, 0, 0));
        assert_eq!(energy_at(&dot, 0, 0), 0);
    }

    #[test]
    fn luminosity_map_reads_every_pixel() {
        let buf: RgbaImage = ImageBuffer::from_fn(2, 2, |x, y| {
            Rgba::from_channels(0, (x * 100 + y * 10) as u8, 0, 255)
        });
        let lmap = luminosity_map(&buf);
        assert_eq!(lmap.as_slice(), &[0, 72, 7, 79]);
    }
}
