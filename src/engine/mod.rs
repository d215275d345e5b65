pub mod fingerprint;
pub mod seed;
