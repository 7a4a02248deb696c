pub mod checksum;
pub mod normalize;
pub mod links;
