mod normalize;

pub use normalize::{transform_name, ProductNameNormalizer};
