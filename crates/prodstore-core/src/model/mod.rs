pub mod product;
pub mod properties;

pub use product::{Product, ProductId};
pub use properties::{decode_properties, encode_properties, Properties};
