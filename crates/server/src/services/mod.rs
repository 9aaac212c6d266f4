pub mod games;
pub mod player_stats;
