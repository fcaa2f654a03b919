// #![deny(missing_docs)]

//! Content-aware image narrowing.  Find the top-to-bottom path of
//! pixels whose luminosity changes least, cut it out, and repeat.

extern crate image;

mod ternary;

pub mod costtable;
pub mod dump;
pub mod energy;
pub mod errors;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use costtable::{compute_seam, cost_table_to_seam, fill_tables, LuminositySeams};
pub use dump::{energy_to_image, luminosity_image, show_seam};
pub use energy::{calculate_energy, energy_at, luminosity_map};
pub use errors::SeamError;
pub use seamcarver::{carve, carve_many, remove_vertical_seam, SeamCarver};
pub use seamfinder::{Seam, SeamFinder};
pub use twodmap::{format_table, TwoDimensionalMap};
