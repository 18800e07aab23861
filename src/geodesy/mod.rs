pub mod errors;
pub mod models;
pub mod projection;
#[cfg(test)]
mod tests;
