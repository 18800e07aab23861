pub mod handlers;
pub mod models;
pub mod normalize;
pub mod requests;
pub mod responses;
pub mod seed;
