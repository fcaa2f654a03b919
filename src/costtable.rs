// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam
//!
//! Given an energy field, build the cumulative cost table, with a
//! back pointer in every cell, and walk the back pointers up from the
//! cheapest cell of the bottom row.

use crate::cq;
use crate::energy::{calculate_energy, EnergyMap};
use crate::errors::SeamError;
use crate::seamfinder::{Seam, SeamFinder};
use crate::twodmap::{CostAndParent, TwoDimensionalMap};
use image::{GenericImageView, Pixel};
use log::trace;

/// The cost table: cumulative seam cost and parent column per pixel.
pub type CostTable = TwoDimensionalMap<CostAndParent>;

// Given the cheapest cost among the (up to three) cells above `x`,
// decide which of them we came from.  Straight up wins every tie;
// after that, left beats right.
fn parent_column(above: &[CostAndParent], x: u32, cheapest: u32) -> u32 {
    let maxwidth = above.len() as u32 - 1;
    if above[x as usize].cost == cheapest {
        x
    } else if x == 0 {
        x + 1
    } else if x == maxwidth {
        x - 1
    } else if above[x as usize - 1].cost == cheapest {
        x - 1
    } else {
        x + 1
    }
}

/// Energy Map -> Cost Table
///
/// The first row is the energy itself.  Every later cell is its own
/// energy plus the cheapest of the cells touching it in the row above,
/// and remembers which column that was.
pub fn fill_tables(energy: &EnergyMap) -> CostTable {
    let (width, height) = (energy.width, energy.height);
    let mut target = CostTable::new(width, height);
    if width == 0 || height == 0 {
        return target;
    }

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)] = CostAndParent {
            cost: energy[(x, 0)],
            parent: 0,
        };
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let cheapest = {
                let above = target.row(y - 1);
                let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
                range.map(|x| above[x as usize].cost).min().unwrap_or(0)
            };
            let parent = parent_column(target.row(y - 1), x, cheapest);
            target[(x, y)] = CostAndParent {
                cost: energy[(x, y)] + cheapest,
                parent,
            };
        }
    }
    target
}

/// Given a cost table, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.  The seam ends at the cheapest
/// cell of the bottom row, the leftmost one on a tie.
pub fn cost_table_to_seam(table: &CostTable) -> Result<Seam, SeamError> {
    let (width, height) = (table.width, table.height);
    if width == 0 || height == 0 {
        return Err(SeamError::DegenerateGrid { width, height });
    }

    let mut seam_col = (0..width)
        .min_by_key(|x| table[(*x, height - 1)].cost)
        .unwrap_or(0);

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    Ok((0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = table[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect())
}

/// Given an image, get back the cheapest top-to-bottom seam.
pub fn compute_seam<I, P>(image: &I) -> Result<Seam, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(SeamError::DegenerateGrid { width, height });
    }
    let seam = cost_table_to_seam(&fill_tables(&calculate_energy(image)))?;
    trace!("seam for {}x{}: {:?}", width, height, seam);
    Ok(seam)
}

/// The basic seam engine: just a simple image reference holder.
pub struct LuminositySeams<'a, I, P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    image: &'a I,
}

impl<'a, I, P> LuminositySeams<'a, I, P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        LuminositySeams { image }
    }
}

impl<'a, I, P> SeamFinder for LuminositySeams<'a, I, P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    fn find_vertical_seam(&self) -> Result<Seam, SeamError> {
        compute_seam(self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Rgba, RgbaImage};

    const ENERGY_DATA: [u32; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn energies() -> EnergyMap {
        EnergyMap::from_raw(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    fn is_connected(seam: &[u32], width: u32) -> bool {
        seam.iter().all(|x| *x < width)
            && seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1)
    }

    #[test]
    fn energy_grid_to_cost_table() {
        let table = fill_tables(&energies());
        let costs: Vec<u32> = table.as_slice().iter().map(|c| c.cost).collect();
        assert_eq!(
            costs,
            vec![9, 9, 0, 9, 9, 18, 1, 9, 8, 18, 10, 10, 10, 17, 8, 19, 19, 19, 8, 17]
        );
        let parents: Vec<u32> = table.as_slice().iter().map(|c| c.parent).collect();
        assert_eq!(
            parents,
            vec![0, 0, 0, 0, 0, 0, 2, 2, 2, 4, 1, 1, 1, 3, 3, 0, 1, 2, 4, 4]
        );
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let seam = cost_table_to_seam(&fill_tables(&energies())).unwrap();
        assert_eq!(seam, vec![2, 3, 4, 3]);
    }

    #[test]
    fn ties_prefer_straight_up_then_left() {
        // Columns 1 and 2 tie three ways above and go straight up.
        // Column 3 sits on the far edge under a dearer cell: left.
        let energy = EnergyMap::from_raw(4, 2, vec![5, 5, 5, 7, 0, 0, 0, 0]).unwrap();
        let table = fill_tables(&energy);
        assert_eq!(table[(1, 1)].parent, 1);
        assert_eq!(table[(2, 1)].parent, 2);
        assert_eq!(table[(3, 1)].parent, 2);
        assert_eq!(table[(0, 1)].parent, 0);

        // Left and right tie, the middle is dearer: left.
        let energy = EnergyMap::from_raw(3, 2, vec![4, 6, 4, 0, 0, 0]).unwrap();
        let table = fill_tables(&energy);
        assert_eq!(table[(1, 1)].parent, 0);
    }

    #[test]
    fn bottom_row_ties_pick_the_leftmost() {
        let energy = EnergyMap::from_raw(3, 2, vec![1, 1, 1, 2, 1, 1]).unwrap();
        assert_eq!(cost_table_to_seam(&fill_tables(&energy)).unwrap(), vec![1, 1]);
    }

    #[test]
    fn bright_center_is_avoided() {
        let dark = Rgba::from_channels(0, 0, 0, 255);
        let mut buf: RgbaImage = ImageBuffer::from_pixel(3, 3, dark);
        buf.put_pixel(1, 1, Rgba::from_channels(255, 255, 255, 255));
        let seam = compute_seam(&buf).unwrap();
        assert_eq!(seam.len(), 3);
        assert_ne!(seam[1], 1);
        assert!(is_connected(&seam, 3));
        assert_eq!(seam, vec![0, 0, 0]);
    }

    #[test]
    fn flat_image_gives_leftmost_column() {
        let buf: RgbaImage = ImageBuffer::from_pixel(6, 4, Rgba::from_channels(12, 34, 56, 255));
        assert_eq!(compute_seam(&buf).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn single_column_seam() {
        let buf: GrayImage = ImageBuffer::from_raw(1, 5, vec![3, 90, 7, 200, 1]).unwrap();
        assert_eq!(compute_seam(&buf).unwrap(), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn seams_are_connected() {
        let buf: GrayImage = ImageBuffer::from_fn(7, 6, |x, y| {
            image::Luma::from_channels(((x * 37 + y * 91) % 256) as u8, 0, 0, 0)
        });
        let seam = LuminositySeams::new(&buf).find_vertical_seam().unwrap();
        assert_eq!(seam.len(), 6);
        assert!(is_connected(&seam, 7));
    }

    #[test]
    fn empty_images_are_rejected() {
        let buf: GrayImage = ImageBuffer::new(0, 4);
        assert_eq!(
            compute_seam(&buf),
            Err(SeamError::DegenerateGrid { width: 0, height: 4 })
        );
        let buf: GrayImage = ImageBuffer::new(4, 0);
        assert!(compute_seam(&buf).is_err());
    }
}
