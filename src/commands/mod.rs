//! Command implementations for the staylist CLI

mod inquiry;
mod lookup;
mod misc;
mod shortlist;

pub use inquiry::*;
pub use lookup::*;
pub use misc::*;
pub use shortlist::*;
