use crate::errors::SeamError;

/// A seam: one column index per row, top to bottom.  Adjacent
/// entries never differ by more than one.
pub type Seam = Vec<u32>;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple energy
/// functions as well as caching.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request the cheapest top-to-bottom seam.
    fn find_vertical_seam(&self) -> Result<Seam, SeamError>;
}
