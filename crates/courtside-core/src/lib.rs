//! Pure data shaping for the courtside service: provider records, the public
//! views built from them, and the recent-game aggregation. No I/O lives here.

pub mod aggregate;
pub mod derive;
pub mod models;
pub mod views;
