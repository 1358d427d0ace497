use serde::{Deserialize, Serialize};

use super::properties::Properties;

/// Store-assigned identifier of a product row
///
/// Issued by the database on insert and never reused afterwards. The inner
/// value is the SQLite rowid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw value as bound into SQL statements
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product - the payload submitted to `ProductRepository::create`
///
/// A plain value: built by the caller, written once, never mutated by the
/// store afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,

    /// EAN barcode, kept as text so leading zeros survive
    pub ean_code: String,

    /// Units in stock
    pub units: u32,

    pub price: f64,

    pub category: String,

    /// Optional property list, persisted comma-joined or as NULL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Product {
    /// Create a product without properties
    pub fn new(
        name: impl Into<String>,
        ean_code: impl Into<String>,
        units: u32,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ean_code: ean_code.into(),
            units,
            price,
            category: category.into(),
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_has_no_properties() {
        let product = Product::new("Gadget", "456", 5, 19.5, "tools");

        assert_eq!(product.name, "Gadget");
        assert_eq!(product.ean_code, "456");
        assert_eq!(product.units, 5);
        assert!(product.properties.is_none());
    }

    #[test]
    fn test_with_properties() {
        let props = Properties::new(vec!["red".to_string(), "small".to_string()]).unwrap();
        let product = Product::new("Widget", "123", 10, 9.99, "tools").with_properties(props);

        assert_eq!(
            product.properties.as_ref().map(|p| p.as_slice().len()),
            Some(2)
        );
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::new("Widget", "123", 10, 9.99, "tools")
            .with_properties(Properties::new(vec!["red".to_string()]).unwrap());

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["ean_code"], "123");
        assert_eq!(json["properties"], serde_json::json!(["red"]));

        let bare = serde_json::to_value(Product::new("Gadget", "456", 5, 19.5, "tools")).unwrap();
        assert!(bare.get("properties").is_none());
    }

    #[test]
    fn test_deserialize_rejects_comma_property() {
        let raw = r#"{"name":"W","ean_code":"1","units":1,"price":1.0,"category":"c","properties":["a,b"]}"#;
        let parsed: std::result::Result<Product, _> = serde_json::from_str(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_product_id_display_is_bare_integer() {
        let id = ProductId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.get(), 42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
