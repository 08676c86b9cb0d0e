pub mod moh363;
pub mod p3_official;
pub mod p3_simplified;
