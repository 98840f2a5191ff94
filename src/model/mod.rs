pub mod group;
pub mod participant;
pub mod profile;
pub mod stats;
