use crate::error::{Result, StockbookError};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// A single stock record.
///
/// Field names are the on-disk names. The `alias`es let snapshots written by
/// the older tool (`ItemId`, `Name`, ...) load without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "ItemId")]
    pub identifier: i64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Quantity")]
    pub quantity: u32,
    #[serde(alias = "Price")]
    pub price: Decimal,
}

impl Item {
    /// Build an item from raw field values, rejecting a negative quantity or price.
    pub fn new(
        identifier: i64,
        name: impl Into<String>,
        quantity: i64,
        price: Decimal,
    ) -> Result<Self> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(StockbookError::InvalidPrice(price));
        }
        Ok(Self {
            identifier,
            name: name.into(),
            quantity: checked_quantity(quantity)?,
            price,
        })
    }

    pub fn describe(&self) -> String {
        self.describe_in(DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn describe_in(&self, currency_symbol: &str) -> String {
        format!(
            "ID: {}, Name: {}, Quantity: {}, Price: {}",
            self.identifier,
            self.name,
            self.quantity,
            format_currency(self.price, currency_symbol)
        )
    }

    /// Replace the quantity. A negative value fails and leaves the item untouched.
    pub fn set_quantity(&mut self, new_quantity: i64) -> Result<()> {
        self.quantity = checked_quantity(new_quantity)?;
        Ok(())
    }

    /// quantity × price, exact. Fails instead of panicking when the product
    /// does not fit in a `Decimal`.
    pub fn value(&self) -> Result<Decimal> {
        Decimal::from(self.quantity)
            .checked_mul(self.price)
            .ok_or(StockbookError::ItemValueOverflow(self.identifier))
    }
}

fn checked_quantity(quantity: i64) -> Result<u32> {
    u32::try_from(quantity).map_err(|_| StockbookError::InvalidQuantity(quantity))
}

/// Render an amount with two decimal places, e.g. `$0.05`. Rounds half away from zero.
pub fn format_currency(amount: Decimal, currency_symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.2}", currency_symbol, rounded.abs())
    } else {
        format!("{}{:.2}", currency_symbol, rounded.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn describe_uses_fixed_format() {
        let item = Item::new(1, "Bolt", 100, dec!(0.05)).unwrap();
        assert_eq!(
            item.describe(),
            "ID: 1, Name: Bolt, Quantity: 100, Price: $0.05"
        );
    }

    #[test]
    fn describe_pads_price_to_cents() {
        let item = Item::new(7, "Washer", 3, dec!(2)).unwrap();
        assert_eq!(
            item.describe_in("€"),
            "ID: 7, Name: Washer, Quantity: 3, Price: €2.00"
        );
    }

    #[test]
    fn set_quantity_accepts_zero_and_positive() {
        let mut item = Item::new(1, "Bolt", 100, dec!(0.05)).unwrap();
        item.set_quantity(0).unwrap();
        assert_eq!(item.quantity, 0);
        item.set_quantity(42).unwrap();
        assert_eq!(item.quantity, 42);
    }

    #[test]
    fn set_quantity_rejects_negative_without_mutation() {
        let mut item = Item::new(1, "Bolt", 100, dec!(0.05)).unwrap();
        let err = item.set_quantity(-1).unwrap_err();
        assert!(matches!(err, StockbookError::InvalidQuantity(-1)));
        assert_eq!(item.quantity, 100);
    }

    #[test]
    fn new_rejects_negative_fields() {
        assert!(matches!(
            Item::new(1, "Bolt", -5, dec!(1)),
            Err(StockbookError::InvalidQuantity(-5))
        ));
        assert!(matches!(
            Item::new(1, "Bolt", 5, dec!(-0.01)),
            Err(StockbookError::InvalidPrice(_))
        ));
    }

    #[test]
    fn value_is_exact() {
        let item = Item::new(1, "Nut", 3, dec!(0.1)).unwrap();
        assert_eq!(item.value().unwrap(), dec!(0.3));
    }

    #[test]
    fn value_overflow_is_an_error() {
        let item = Item::new(8, "Big", 4_000_000_000, Decimal::MAX / dec!(2)).unwrap();
        assert!(matches!(
            item.value(),
            Err(StockbookError::ItemValueOverflow(8))
        ));
    }

    #[test]
    fn format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(10.005), "$"), "$10.01");
        assert_eq!(format_currency(dec!(0), "$"), "$0.00");
        assert_eq!(format_currency(dec!(-3.5), "$"), "-$3.50");
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let json = r#"{"ItemId":4,"Name":"Gear","Quantity":2,"Price":1.25}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item, Item::new(4, "Gear", 2, dec!(1.25)).unwrap());
    }
}
