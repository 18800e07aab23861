pub mod interface;
pub mod positions;
