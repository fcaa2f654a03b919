// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of the intermediate products: the luminosity field, the
//! energy field, and the seam that would be carved next.

use crate::costtable::compute_seam;
use crate::energy::{luminosity_map, EnergyMap};
use crate::errors::SeamError;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Rgba, RgbaImage};
use num_traits::clamp;

/// Energy Map -> Grayscale image.  Energies run from 0 to 508 (twice the
/// brightest luminosity, 254); anything
/// above 255 saturates to white.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    ImageBuffer::from_fn(energy.width, energy.height, |x, y| {
        Luma::from_channels(clamp(energy[(x, y)], 0, 255) as u8, 0, 0, 0)
    })
}

/// The image rendered as its own luminosity.
pub fn luminosity_image<I, P>(image: &I) -> GrayImage
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let lmap = luminosity_map(image);
    ImageBuffer::from_fn(lmap.width, lmap.height, |x, y| {
        Luma::from_channels(lmap[(x, y)], 0, 0, 0)
    })
}

/// A copy of the image with the next seam to be carved painted red.
pub fn show_seam<I, P>(image: &I) -> Result<RgbaImage, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let seam = compute_seam(image)?;
    let red = Rgba::from_channels(255, 0, 0, 255);
    let (width, height) = image.dimensions();
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        if seam[y as usize] == x {
            red
        } else {
            image.get_pixel(x, y).to_rgba()
        }
    }))
}
