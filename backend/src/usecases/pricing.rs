use std::collections::HashMap;

use crates::domain::{
    entities::menus::MenuEntity,
    value_objects::{
        checkout::{CartLine, CheckoutLine},
        menus::MenuModel,
    },
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("Cart must contain at least one product")]
    EmptyCart,
    #[error("Quantity must be greater than 0")]
    InvalidQuantity,
    #[error("Product with ID {0} not found")]
    ProductNotFound(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedCart {
    pub lines: Vec<CheckoutLine>,
    pub total: f64,
}

/// Shape checks that need no catalog lookup.
pub fn validate_cart(cart: &[CartLine]) -> Result<(), PricingError> {
    if cart.is_empty() {
        return Err(PricingError::EmptyCart);
    }

    if cart.iter().any(|line| line.quantity <= 0) {
        return Err(PricingError::InvalidQuantity);
    }

    Ok(())
}

/// Prices every cart line from the catalog rows. Duplicate ids stay separate lines.
pub fn price_cart(cart: &[CartLine], menu_items: Vec<MenuEntity>) -> Result<PricedCart, PricingError> {
    validate_cart(cart)?;

    let catalog: HashMap<i32, MenuModel> = menu_items
        .into_iter()
        .map(|item| (item.id, MenuModel::from(item)))
        .collect();

    let mut lines = Vec::with_capacity(cart.len());
    for cart_line in cart {
        let product = catalog
            .get(&cart_line.id)
            .cloned()
            .ok_or(PricingError::ProductNotFound(cart_line.id))?;

        let subtotal = product.price * f64::from(cart_line.quantity);
        lines.push(CheckoutLine {
            product,
            quantity: cart_line.quantity,
            notes: cart_line.notes.clone(),
            subtotal,
        });
    }

    let total = lines.iter().map(|line| line.subtotal).sum();

    Ok(PricedCart { lines, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(id: i32, price: f64) -> MenuEntity {
        MenuEntity {
            id,
            name: format!("Menu {id}"),
            price,
            description: String::new(),
            category_id: 1,
            image_url: String::new(),
            rating: 4,
            is_available: true,
        }
    }

    fn line(id: i32, quantity: i32) -> CartLine {
        CartLine {
            id,
            quantity,
            notes: String::new(),
        }
    }

    #[test]
    fn total_uses_catalog_prices() {
        let priced = price_cart(
            &[line(1, 2), line(2, 1)],
            vec![menu(1, 25000.0), menu(2, 40000.0)],
        )
        .unwrap();

        assert_eq!(priced.total, 90000.0);
        assert_eq!(priced.lines[0].subtotal, 50000.0);
        assert_eq!(priced.lines[1].subtotal, 40000.0);
    }

    #[test]
    fn duplicate_ids_are_priced_independently() {
        let priced = price_cart(&[line(1, 1), line(1, 3)], vec![menu(1, 10000.0)]).unwrap();

        assert_eq!(priced.lines.len(), 2);
        assert_eq!(priced.lines[1].quantity, 3);
        assert_eq!(priced.total, 40000.0);
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        assert_eq!(validate_cart(&[line(1, 0)]), Err(PricingError::InvalidQuantity));
        assert_eq!(validate_cart(&[line(1, 2), line(2, -1)]), Err(PricingError::InvalidQuantity));
        assert_eq!(
            PricingError::InvalidQuantity.to_string(),
            "Quantity must be greater than 0"
        );
    }

    #[test]
    fn empty_cart_is_rejected() {
        assert_eq!(validate_cart(&[]), Err(PricingError::EmptyCart));
    }

    #[test]
    fn first_unresolved_id_is_reported() {
        let err = price_cart(&[line(1, 1), line(999, 1), line(998, 1)], vec![menu(1, 1.0)])
            .unwrap_err();

        assert_eq!(err, PricingError::ProductNotFound(999));
        assert_eq!(err.to_string(), "Product with ID 999 not found");
    }
}
