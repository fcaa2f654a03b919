// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways carving can go wrong.  The per-pixel math never fails;
//! everything here comes from the orchestration layer.

use failure::Fail;

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum SeamError {
    /// More seams were requested than the image has columns.
    #[fail(
        display = "Cannot call carveMany with argument {} on image of width {}",
        requested, width
    )]
    InvalidSeamCount { requested: u32, width: u32 },

    /// A seam search was attempted on an image with no pixels.
    #[fail(display = "Cannot find a seam in a {}x{} image", width, height)]
    DegenerateGrid { width: u32, height: u32 },

    /// A seam handed to the remover does not fit the image.
    #[fail(
        display = "Seam of length {} does not fit a {}x{} image",
        length, width, height
    )]
    InvalidSeam { length: usize, width: u32, height: u32 },
}
