// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! Remove one seam, or many, from an image.  Every operation borrows
//! its input and builds a brand new image; nothing is carved in place.

use crate::costtable::LuminositySeams;
use crate::errors::SeamError;
use crate::seamfinder::SeamFinder;
use image::{GenericImageView, ImageBuffer, Pixel};
use log::debug;

/// What every carving operation hands back.
pub type Carved<P> = ImageBuffer<P, Vec<u8>>;

/// Build a new image one column narrower, dropping the pixel at
/// `seam[y]` from every row `y` and sliding the survivors left.
pub fn remove_vertical_seam<I, P>(image: &I, seam: &[u32]) -> Result<Carved<P>, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = image.dimensions();
    if width == 0 || seam.len() != height as usize || seam.iter().any(|x| *x >= width) {
        return Err(SeamError::InvalidSeam {
            length: seam.len(),
            width,
            height,
        });
    }

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for (y, cut) in (0..height).zip(seam.iter().cloned()) {
        for x in (0..width).filter(|x| *x != cut) {
            imgbuf.put_pixel(if x < cut { x } else { x - 1 }, y, image.get_pixel(x, y));
        }
    }
    Ok(imgbuf)
}

/// Find the cheapest seam and remove it.
pub fn carve<I, P>(image: &I) -> Result<Carved<P>, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let seam = LuminositySeams::new(image).find_vertical_seam()?;
    remove_vertical_seam(image, &seam)
}

/// Carve `seams` seams out of an image, one after another, each from
/// the previous result.  Asking for more seams than there are columns
/// fails without carving anything; asking for none returns a copy.
pub fn carve_many<I, P>(image: &I, seams: u32) -> Result<Carved<P>, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    SeamCarver::new(image).carve_many(seams)
}

// It isn't necessary at this point to be using a struct-based
// implementation, but it lays the groundwork for caching intermediate
// results between carves.

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    image: &'a I,
}

impl<'a, I, P> SeamCarver<'a, I, P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// The image one seam narrower.
    pub fn carve_once(&self) -> Result<Carved<P>, SeamError> {
        carve(self.image)
    }

    // The entire energy field and cost table are rebuilt for every
    // seam.  Only the columns next to the last seam actually change.

    /// Repeatedly carve seams out of the image until it is `seams`
    /// columns narrower.
    pub fn carve_many(&self, seams: u32) -> Result<Carved<P>, SeamError> {
        let (width, height) = self.image.dimensions();
        if seams > width {
            return Err(SeamError::InvalidSeamCount {
                requested: seams,
                width,
            });
        }

        // Never touches a pixel when the image is zero columns wide.
        let mut scratch = ImageBuffer::from_fn(width, height, |x, y| self.image.get_pixel(x, y));

        for count in 0..seams {
            scratch = carve(&scratch)?;
            debug!(
                "carved seam {} of {}: now {}x{}",
                count + 1,
                seams,
                scratch.width(),
                height
            );
        }
        Ok(scratch)
    }
}
