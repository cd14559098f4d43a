pub mod analysis;
pub mod proof;
