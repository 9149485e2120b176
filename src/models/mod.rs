pub mod reaction;
pub mod review;
