//! The fixed product catalog.

use serde::{Deserialize, Serialize};

use super::error::StorefrontError;
use super::types::Product;

/// Small, fixed list of products offered by the storefront.
///
/// Loaded once and never mutated; product ids are unique. Serialized as a
/// plain product list, and deserializing runs the same checks as
/// [`Catalog::new`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids, empty names and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, StorefrontError> {
        for (i, product) in products.iter().enumerate() {
            if product.id.trim().is_empty() {
                return Err(StorefrontError::Validation(format!(
                    "product #{} has an empty id",
                    i + 1
                )));
            }
            if product.name.trim().is_empty() {
                return Err(StorefrontError::Validation(format!(
                    "product '{}' has an empty name",
                    product.id
                )));
            }
            if product.unit_price.is_sign_negative() {
                return Err(StorefrontError::Validation(format!(
                    "product '{}' has a negative price",
                    product.id
                )));
            }
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(StorefrontError::Validation(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = StorefrontError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn find_by_id() {
        let catalog = Catalog::new(vec![
            Product::new("SKU-1", "Water purifier", dec!(12999)),
            Product::new("SKU-2", "Filter cartridge", dec!(899.50)),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("SKU-2").unwrap().unit_price, dec!(899.50));
        assert!(catalog.find("SKU-3").is_none());
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = Catalog::new(vec![
            Product::new("SKU-1", "A", dec!(1)),
            Product::new("SKU-1", "B", dec!(2)),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate product id 'SKU-1'"));
    }

    #[test]
    fn negative_price_rejected() {
        assert!(Catalog::new(vec![Product::new("SKU-1", "A", dec!(-1))]).is_err());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(Catalog::new(vec![Product::new("SKU-1", "  ", dec!(1))]).is_err());
    }

    #[test]
    fn deserialize_runs_checks() {
        let json = r#"[
            {"id":"SKU-1","name":"Water purifier","unit_price":"12999"},
            {"id":"SKU-1","name":"Filter cartridge","unit_price":"899.50"}
        ]"#;
        let err = serde_json::from_str::<Catalog>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate product id 'SKU-1'"));

        let json = r#"[{"id":"SKU-1","name":"Water purifier","unit_price":"-1"}]"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());

        let catalog: Catalog =
            serde_json::from_str(r#"[{"id":"SKU-2","name":"Filter cartridge","unit_price":"899.50"}]"#)
                .unwrap();
        assert_eq!(catalog.find("SKU-2").unwrap().unit_price, dec!(899.50));
        assert_eq!(serde_json::to_value(&catalog).unwrap()[0]["id"], "SKU-2");
    }
}
