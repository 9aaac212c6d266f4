pub mod balldontlie;

pub use balldontlie::{Endpoint, HttpTransport, StatsTransport, UpstreamClient};
