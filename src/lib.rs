pub mod assist;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod fetch;
pub mod inquiry;
pub mod links;
pub mod places;
pub mod present;
pub mod shortlist;
pub mod summarize;

pub use error::{Result, StaylistError};
