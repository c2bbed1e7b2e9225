// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// state handling between the catalog page and its child components.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image shown when a product has no image URL of its own.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// Fixed delay of the simulated catalog fetch, in milliseconds.
pub const MOCK_LOAD_DELAY_MS: u64 = 1200;

/// A catalog entry held in the page's in-memory product list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: String,
}

/// A validated product record that has not been assigned an id yet
///
/// Produced by [`ProductDraft::validate`] and handed to the catalog page,
/// which owns id assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: String,
}

impl NewProduct {
    /// Attach the id assigned by the catalog page.
    pub fn with_id(self, id: u32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            image: self.image,
        }
    }
}

/// Raw, uncommitted form fields of the controlled product form
///
/// All fields are kept as the user typed them; normalization happens in
/// [`ProductDraft::validate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

/// Form validation failure, surfaced inline below the form header
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Preencha todos os campos obrigatórios (nome, preço e descrição).")]
    MissingFields,
    #[error("Preço inválido.")]
    InvalidPrice,
}

impl ProductDraft {
    /// Validate and normalize the draft into a [`NewProduct`]
    ///
    /// Name and description are trimmed and must be non-empty, the price
    /// must parse as a non-negative decimal, and a blank image URL falls
    /// back to [`PLACEHOLDER_IMAGE`]. On failure nothing is emitted and the
    /// caller shows the error message as-is.
    pub fn validate(&self) -> Result<NewProduct, ValidationError> {
        let name = self.name.trim();
        let price_raw = self.price.trim();
        let description = self.description.trim();

        if name.is_empty() || price_raw.is_empty() || description.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let price: Decimal = price_raw
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;
        if price < Decimal::ZERO {
            return Err(ValidationError::InvalidPrice);
        }

        let image = self.image.trim();
        Ok(NewProduct {
            name: name.to_string(),
            price,
            description: description.to_string(),
            image: if image.is_empty() {
                PLACEHOLDER_IMAGE.to_string()
            } else {
                image.to_string()
            },
        })
    }
}

/// Next free product id: one past the current maximum, 1 for an empty list
pub fn next_product_id(products: &[Product]) -> u32 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

/// The hard-coded catalog that stands in for a real API response
///
/// Seeded into the page state once the mock-load delay elapses.
pub fn mock_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Camiseta Básica".to_string(),
            price: Decimal::new(499, 1),
            description: "Camiseta 100% algodão, disponível em várias cores.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        },
        Product {
            id: 2,
            name: "Caneca de Cerâmica".to_string(),
            price: Decimal::new(299, 1),
            description: "Caneca 300ml, própria para micro-ondas e lava-louças.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, description: &str, image: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }

    #[test]
    fn test_valid_draft_is_normalized() {
        let result = draft("  Mug  ", "9.5", " Ceramic ", "").validate();

        let new_product = result.expect("draft should validate");
        assert_eq!(new_product.name, "Mug");
        assert_eq!(new_product.price, Decimal::new(95, 1));
        assert_eq!(new_product.description, "Ceramic");
        assert_eq!(new_product.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_blank_image_falls_back_to_placeholder() {
        let with_url = draft("Mug", "9.5", "Ceramic", "https://example.com/mug.png")
            .validate()
            .unwrap();
        assert_eq!(with_url.image, "https://example.com/mug.png");

        let blank = draft("Mug", "9.5", "Ceramic", "   ").validate().unwrap();
        assert_eq!(blank.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let cases = [
            draft("", "9.5", "Ceramic", ""),
            draft("Mug", "", "Ceramic", ""),
            draft("Mug", "9.5", "", ""),
            draft("   ", "9.5", "Ceramic", ""),
            draft("Mug", "9.5", "   ", ""),
        ];

        for case in cases {
            assert_eq!(
                case.validate(),
                Err(ValidationError::MissingFields),
                "draft {case:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_price_is_rejected() {
        assert_eq!(
            draft("Mug", "-1", "Ceramic", "").validate(),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            draft("Mug", "abc", "Ceramic", "").validate(),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            draft("Mug", "9,5", "Ceramic", "").validate(),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn test_zero_price_is_accepted() {
        let new_product = draft("Brinde", "0", "Amostra grátis", "").validate().unwrap();
        assert_eq!(new_product.price, Decimal::ZERO);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Preencha todos os campos obrigatórios (nome, preço e descrição)."
        );
        assert_eq!(ValidationError::InvalidPrice.to_string(), "Preço inválido.");
    }

    #[test]
    fn test_next_product_id_empty_list() {
        assert_eq!(next_product_id(&[]), 1);
    }

    #[test]
    fn test_next_product_id_is_max_plus_one() {
        let products = mock_products();
        assert_eq!(next_product_id(&products), 3);

        // Ids need not be contiguous; only the maximum matters
        let mut sparse = mock_products();
        sparse[1].id = 40;
        assert_eq!(next_product_id(&sparse), 41);
    }

    #[test]
    fn test_with_id_preserves_fields() {
        let new_product = draft("Mug", "9.5", "Ceramic", "").validate().unwrap();
        let product = new_product.clone().with_id(7);

        assert_eq!(product.id, 7);
        assert_eq!(product.name, new_product.name);
        assert_eq!(product.price, new_product.price);
        assert_eq!(product.description, new_product.description);
        assert_eq!(product.image, new_product.image);
    }

    #[test]
    fn test_mock_products_fixed_set() {
        let products = mock_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Camiseta Básica");
        assert_eq!(products[0].price, Decimal::new(499, 1));
        assert_eq!(products[1].id, 2);
        assert_eq!(products[1].name, "Caneca de Cerâmica");
        assert_eq!(products[1].price, Decimal::new(299, 1));

        // Seed data always uses the bundled placeholder
        assert!(products.iter().all(|p| p.image == PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_product_serialization_round_trip() {
        let product = mock_products().remove(0);

        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, product);
    }

    #[test]
    fn test_mock_load_delay_in_expected_range() {
        // The simulated fetch takes on the order of one second
        assert!((1000..=1500).contains(&MOCK_LOAD_DELAY_MS));
    }
}
