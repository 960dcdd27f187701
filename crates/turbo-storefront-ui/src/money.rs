//! Currency formatting for displayed prices.
//!
//! Catalog prices arrive as decimals. They are converted to the currency's
//! minor unit before formatting so rounding happens exactly once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    BRL,
    MXN,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::BRL => "BRL",
            Currency::MXN => "MXN",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::BRL => "R$",
            Currency::MXN => "MX$",
        }
    }

    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary amount in the currency's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in minor units (e.g., cents).
    pub amount_minor: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Convert a decimal catalog price, rounding to the nearest minor unit.
    ///
    /// ```
    /// use turbo_storefront_ui::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_minor, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Format with symbol and grouped thousands (e.g., "$1,299.90").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount_minor.unsigned_abs();
        let whole = group_thousands(abs / divisor);
        let sign = if self.amount_minor < 0 { "-" } else { "" };

        if places == 0 {
            format!("{}{}{}", sign, self.currency.symbol(), whole)
        } else {
            let fraction = abs % divisor;
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency.symbol(),
                whole,
                fraction,
                width = places as usize
            )
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Turns a raw numeric price into display text.
///
/// The presenter hands prices over untouched and never inspects the result.
pub trait PriceFormatter {
    fn format(&self, value: f64) -> String;
}

impl<F> PriceFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// Default formatter backed by [`Money`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFormatter {
    currency: Currency,
}

impl CurrencyFormatter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn format(&self, value: f64) -> String {
        Money::from_decimal(value, self.currency).display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);

        let m = Money::from_decimal(100.0, Currency::JPY);
        assert_eq!(m.amount_minor, 100);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(129990, Currency::USD).display(), "$1,299.90");
        assert_eq!(Money::new(-505, Currency::USD).display(), "-$5.05");
        assert_eq!(Money::new(5, Currency::EUR).display(), "\u{20ac}0.05");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_currency_formatter() {
        let formatter = CurrencyFormatter::new(Currency::BRL);
        assert_eq!(formatter.format(80.0), "R$80.00");
    }

    #[test]
    fn test_closure_formatter() {
        let formatter = |v: f64| format!("{:.1} pts", v);
        assert_eq!(PriceFormatter::format(&formatter, 3.0), "3.0 pts");
    }
}
