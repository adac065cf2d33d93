use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input payload
// ---------------------------------------------------------------------------

/// Top-level input handed to the transform by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Cart being checked out.
    #[serde(default)]
    pub cart: Option<Cart>,
    /// Shop-level configuration.
    #[serde(default)]
    pub shop: Option<Shop>,
}

impl Input {
    /// Buyer identity of the cart, if both are present.
    pub fn buyer_identity(&self) -> Option<&BuyerIdentity> {
        self.cart.as_ref()?.buyer_identity.as_ref()
    }

    /// Cart lines in their original order (empty when there is no cart).
    pub fn lines(&self) -> &[CartLine] {
        self.cart
            .as_ref()
            .map(|cart| cart.lines.as_slice())
            .unwrap_or_default()
    }

    /// Raw VAT-rate configuration stored on the shop metafield.
    pub fn vat_rate_config(&self) -> Option<&str> {
        self.shop.as_ref()?.metafield.as_ref()?.value.as_deref()
    }
}

/// Cart snapshot: buyer plus ordered lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub buyer_identity: Option<BuyerIdentity>,
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

/// Who is buying: an optional customer record and company location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerIdentity {
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub company_location: Option<CompanyLocation>,
}

/// Customer record attached to the buyer identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Business customer flag. Absent is treated as `false`.
    #[serde(default, rename = "isB2BCustomer")]
    pub is_b2b_customer: Option<bool>,
    /// Legacy name of the business customer flag; hosts may send either or both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b2b: Option<bool>,
}

impl Customer {
    /// True when either flag is set.
    pub fn is_b2b(&self) -> bool {
        self.is_b2b_customer == Some(true) || self.b2b == Some(true)
    }
}

/// Business location of a B2B buyer, carrying the tax-exemption attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLocation {
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default)]
    pub country_code: Option<String>,
    /// String-typed boolean (`"true"` / `"1"`).
    #[serde(default)]
    pub tax_exempt: Option<Metafield>,
    /// Free-form VAT number.
    #[serde(default)]
    pub vat_number: Option<Metafield>,
}

impl CompanyLocation {
    /// Country code, treating an empty string as absent.
    pub fn country(&self) -> Option<&str> {
        self.country_code.as_deref().filter(|code| !code.is_empty())
    }

    pub fn tax_exempt_value(&self) -> Option<&str> {
        self.tax_exempt.as_ref()?.value.as_deref()
    }

    pub fn vat_number_value(&self) -> Option<&str> {
        self.vat_number.as_ref()?.value.as_deref()
    }
}

/// Shop-level data exposed to the transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Metafield holding the JSON-encoded VAT-rate table.
    #[serde(default)]
    pub metafield: Option<Metafield>,
}

/// A string-valued metafield.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metafield {
    #[serde(default)]
    pub value: Option<String>,
}

impl Metafield {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

/// A single cart line with its per-unit cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Unique line identifier.
    pub id: String,
    #[serde(default)]
    pub cost: Option<CartLineCost>,
}

impl CartLine {
    /// Current per-unit amount, treating an empty string as absent.
    pub fn amount(&self) -> Option<&str> {
        self.unit_cost()?
            .amount
            .as_deref()
            .filter(|amount| !amount.is_empty())
    }

    /// Currency of the per-unit amount, treating an empty string as absent.
    pub fn currency_code(&self) -> Option<&str> {
        self.unit_cost()?
            .currency_code
            .as_deref()
            .filter(|code| !code.is_empty())
    }

    fn unit_cost(&self) -> Option<&MoneyV2> {
        self.cost.as_ref()?.amount_per_quantity.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineCost {
    #[serde(default)]
    pub amount_per_quantity: Option<MoneyV2>,
}

/// Money as delivered by the host: decimal string plus ISO 4217 code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

// ---------------------------------------------------------------------------
// Output payload
// ---------------------------------------------------------------------------

/// Output handed back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    pub operations: Vec<CartOperation>,
}

impl FunctionResult {
    /// Result with no operations (the no-op outcome).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}

impl From<Vec<CartOperation>> for FunctionResult {
    fn from(operations: Vec<CartOperation>) -> Self {
        Self { operations }
    }
}

/// A single cart transform operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CartOperation {
    /// Replace the per-unit price of one line.
    UpdateLinePrice(UpdateLinePrice),
}

impl CartOperation {
    /// Build an `updateLinePrice` operation with a fixed per-quantity price.
    pub fn update_line_price(
        line_id: impl Into<String>,
        amount: impl Into<String>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self::UpdateLinePrice(UpdateLinePrice {
            line_id: line_id.into(),
            price: LinePrice {
                adjustment: PriceAdjustment {
                    fixed_price_per_quantity: FixedPrice {
                        amount: amount.into(),
                        currency_code: currency_code.into(),
                    },
                },
            },
        })
    }

    /// Line targeted by this operation.
    pub fn line_id(&self) -> &str {
        match self {
            Self::UpdateLinePrice(update) => &update.line_id,
        }
    }

    /// Fixed price carried by this operation.
    pub fn fixed_price(&self) -> &FixedPrice {
        match self {
            Self::UpdateLinePrice(update) => &update.price.adjustment.fixed_price_per_quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinePrice {
    pub line_id: String,
    pub price: LinePrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePrice {
    pub adjustment: PriceAdjustment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAdjustment {
    pub fixed_price_per_quantity: FixedPrice,
}

/// Target per-unit amount and its (unchanged) currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPrice {
    pub amount: String,
    pub currency_code: String,
}
