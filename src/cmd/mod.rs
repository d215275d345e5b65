pub mod checksum;
pub mod envelope;
pub mod generate;
