pub mod common;
pub mod moh363;
pub mod p3;
pub mod p3_simplified;
pub mod records;
pub mod status;
