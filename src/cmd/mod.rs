pub mod accept;
pub mod group;
