//! Money formatting
//!
//! Amounts on the wire are plain numbers in the catalog's smallest display unit. These helpers
//! produce the display strings used by shop fronts and the operator CLI.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso;

use crate::pricing::round_to_cents;

/// Symbol shown in front of formatted prices.
pub fn currency_symbol() -> &'static str {
    iso::INR.symbol
}

/// ISO 4217 code of the catalog currency.
pub fn currency_code() -> &'static str {
    iso::INR.iso_alpha_code
}

/// Format a price as whole currency units, e.g. `₹1,23,457`.
///
/// The amount is first rounded to cents, then to whole units.
pub fn format_price(amount: Decimal) -> String {
    let whole = round_to_cents(amount)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };

    let units = whole.abs().to_u128().unwrap_or_default();

    format!("{sign}{}{}", currency_symbol(), group_indian(units))
}

/// Format a price with exactly two decimal places, e.g. `₹1,23,456.79`.
pub fn format_price_with_decimals(amount: Decimal) -> String {
    let rounded = round_to_cents(amount);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let magnitude = rounded.abs();
    let units = magnitude.trunc();
    let cents = ((magnitude - units) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();

    format!(
        "{sign}{}{}.{cents:02}",
        currency_symbol(),
        group_indian(units.to_u128().unwrap_or_default())
    )
}

/// Group digits the Indian way: the last three digits, then pairs.
fn group_indian(units: u128) -> String {
    let digits = units.to_string();

    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;

    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);

        groups.push(pair);
        rest = front;
    }

    groups.push(rest);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Serialise a [`Decimal`] amount as a JSON number.
///
/// Whole amounts are written as integers so `16598` stays `16598` rather than `16598.0`.
pub mod serde_amount {
    use num_traits::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer, ser::Error};

    /// Serialise an amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount cannot be represented as a JSON number.
    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let normalised = amount.normalize();

        if normalised.scale() == 0
            && let Some(whole) = normalised.to_i64()
        {
            return serializer.serialize_i64(whole);
        }

        let float = amount
            .to_f64()
            .ok_or_else(|| S::Error::custom("amount out of range"))?;

        serializer.serialize_f64(float)
    }

    /// Deserialise an amount from a JSON number or numeric string.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not numeric.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}
