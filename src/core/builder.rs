use super::types::*;

/// Builder for constructing input payloads.
///
/// ```
/// use b2b_eu_tax_pricing::core::*;
///
/// let input = InputBuilder::new()
///     .buyer(BuyerBuilder::b2b("DE")
///         .tax_exempt("true")
///         .vat_number("DE123456789")
///         .build())
///     .add_line(LineBuilder::new("gid://shopify/CartLine/1").cost("119.00", "EUR").build())
///     .vat_rates(r#"{"standard-rate":{"DE":19}}"#)
///     .build();
///
/// assert_eq!(input.lines().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InputBuilder {
    buyer: Option<BuyerIdentity>,
    lines: Vec<CartLine>,
    vat_rates: Option<String>,
    without_cart: bool,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buyer(mut self, buyer: BuyerIdentity) -> Self {
        self.buyer = Some(buyer);
        self
    }

    pub fn add_line(mut self, line: CartLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = CartLine>) -> Self {
        self.lines.extend(lines);
        self
    }

    /// Raw value of the shop's VAT-rate metafield.
    pub fn vat_rates(mut self, raw: impl Into<String>) -> Self {
        self.vat_rates = Some(raw.into());
        self
    }

    /// Omit the cart entirely (buyer and lines are ignored).
    pub fn without_cart(mut self) -> Self {
        self.without_cart = true;
        self
    }

    pub fn build(self) -> Input {
        let cart = (!self.without_cart).then(|| Cart {
            buyer_identity: self.buyer,
            lines: self.lines,
        });
        let shop = self.vat_rates.map(|raw| Shop {
            metafield: Some(Metafield::new(raw)),
        });
        Input { cart, shop }
    }
}

/// Builder for a buyer identity with a company location.
#[derive(Debug, Clone)]
pub struct BuyerBuilder {
    b2b: Option<bool>,
    with_customer: bool,
    with_location: bool,
    country_code: Option<String>,
    tax_exempt: Option<String>,
    vat_number: Option<String>,
}

impl BuyerBuilder {
    /// B2B customer with a company location in `country_code`.
    pub fn b2b(country_code: impl Into<String>) -> Self {
        Self {
            b2b: Some(true),
            with_customer: true,
            with_location: true,
            country_code: Some(country_code.into()),
            tax_exempt: None,
            vat_number: None,
        }
    }

    /// Consumer (non-B2B) customer with a company location in `country_code`.
    pub fn consumer(country_code: impl Into<String>) -> Self {
        Self {
            b2b: Some(false),
            ..Self::b2b(country_code)
        }
    }

    pub fn tax_exempt(mut self, value: impl Into<String>) -> Self {
        self.tax_exempt = Some(value.into());
        self
    }

    pub fn vat_number(mut self, value: impl Into<String>) -> Self {
        self.vat_number = Some(value.into());
        self
    }

    pub fn no_country(mut self) -> Self {
        self.country_code = None;
        self
    }

    pub fn no_customer(mut self) -> Self {
        self.with_customer = false;
        self
    }

    pub fn no_company_location(mut self) -> Self {
        self.with_location = false;
        self
    }

    pub fn build(self) -> BuyerIdentity {
        let customer = self.with_customer.then(|| Customer {
            is_b2b_customer: self.b2b,
            b2b: None,
        });
        let company_location = self.with_location.then(|| CompanyLocation {
            country_code: self.country_code,
            tax_exempt: self.tax_exempt.map(Metafield::new),
            vat_number: self.vat_number.map(Metafield::new),
        });
        BuyerIdentity {
            customer,
            company_location,
        }
    }
}

/// Builder for a cart line.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    id: String,
    amount: Option<String>,
    currency_code: Option<String>,
}

impl LineBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount: None,
            currency_code: None,
        }
    }

    /// Per-unit gross amount and currency.
    pub fn cost(mut self, amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self.currency_code = Some(currency_code.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn currency(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    pub fn build(self) -> CartLine {
        let cost = (self.amount.is_some() || self.currency_code.is_some()).then(|| CartLineCost {
            amount_per_quantity: Some(MoneyV2 {
                amount: self.amount,
                currency_code: self.currency_code,
            }),
        });
        CartLine { id: self.id, cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_builder_defaults() {
        let input = InputBuilder::new().build();
        assert!(input.cart.is_some());
        assert!(input.buyer_identity().is_none());
        assert!(input.lines().is_empty());
        assert!(input.shop.is_none());
    }

    #[test]
    fn without_cart_drops_lines() {
        let input = InputBuilder::new()
            .add_line(LineBuilder::new("1").cost("1.00", "EUR").build())
            .without_cart()
            .build();
        assert!(input.cart.is_none());
        assert!(input.lines().is_empty());
    }

    #[test]
    fn buyer_builder_shapes() {
        let buyer = BuyerBuilder::consumer("FR")
            .tax_exempt("1")
            .vat_number("FR12345678901")
            .build();
        assert!(!buyer.customer.as_ref().unwrap().is_b2b());
        let location = buyer.company_location.unwrap();
        assert_eq!(location.country(), Some("FR"));
        assert_eq!(location.tax_exempt_value(), Some("1"));

        let buyer = BuyerBuilder::b2b("FR").no_customer().no_company_location().build();
        assert!(buyer.customer.is_none());
        assert!(buyer.company_location.is_none());
    }

    #[test]
    fn line_without_cost() {
        let line = LineBuilder::new("1").build();
        assert!(line.cost.is_none());
        let line = LineBuilder::new("2").amount("5.00").build();
        assert_eq!(line.amount(), Some("5.00"));
        assert_eq!(line.currency_code(), None);
    }
}
