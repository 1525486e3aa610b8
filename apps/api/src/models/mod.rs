pub mod candidate;
pub mod job;
pub mod ranking;
pub mod scores;
