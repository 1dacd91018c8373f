use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Core product entity.
///
/// Every field is optional on the wire: missing or `null` fields decode to
/// their zero value and zero values are left out when serializing. Keys are
/// matched without regard to ASCII case, so `ProductID` and `productid` both
/// land in `product_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Product {
    /// Lookup key for the path-based endpoints. Not unique.
    #[serde(rename = "productid", skip_serializing_if = "is_zero")]
    pub product_id: i64,
    #[serde(rename = "productname", skip_serializing_if = "String::is_empty")]
    pub product_name: String,
    #[serde(rename = "inventoryscanningid", skip_serializing_if = "is_zero")]
    pub inventory_scanning_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub size: String,
    #[serde(skip_serializing_if = "is_zero_price", serialize_with = "serialize_price")]
    pub price: f32,
    /// Free-text description, e.g. `Waist-14", Length-10"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dimensions: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub sku: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn is_zero_price(price: &f32) -> bool {
    *price == 0.0
}

/// Whole prices below 1e21 go out as plain integers (`30`,
/// `100000000000000000000`) using the shortest digits that round-trip through
/// `f32`. Everything else uses the shortest single-precision form (`39.99`).
///
/// Outside that range the exponent spelling differs from Go clients: `2e21`
/// rather than `2e+21`, and very small fractions may use exponent form where
/// Go writes plain decimals.
fn serialize_price<S>(price: &f32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() < 1e21 {
        // Display never uses an exponent for f32.
        if let Ok(whole) = price.to_string().parse::<i128>() {
            return match i64::try_from(whole) {
                Ok(small) => serializer.serialize_i64(small),
                Err(_) => serializer.serialize_i128(whole),
            };
        }
    }
    serializer.serialize_f32(*price)
}

// ── Deserialization ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Field {
    ProductId,
    ProductName,
    InventoryScanningId,
    Color,
    Size,
    Price,
    Dimensions,
    Sku,
    Unknown,
}

impl Field {
    const WIRE_NAMES: [(&'static str, Field); 8] = [
        ("productid", Field::ProductId),
        ("productname", Field::ProductName),
        ("inventoryscanningid", Field::InventoryScanningId),
        ("color", Field::Color),
        ("size", Field::Size),
        ("price", Field::Price),
        ("dimensions", Field::Dimensions),
        ("sku", Field::Sku),
    ];

    fn from_key(key: &str) -> Self {
        Self::WIRE_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map_or(Field::Unknown, |(_, field)| *field)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a product field name")
            }

            fn visit_str<E: de::Error>(self, key: &str) -> Result<Field, E> {
                Ok(Field::from_key(key))
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct ProductVisitor;

impl<'de> Visitor<'de> for ProductVisitor {
    type Value = Product;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a product object")
    }

    /// Later duplicates win; `null` leaves the field as it was.
    fn visit_map<A>(self, mut map: A) -> Result<Product, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut product = Product::default();
        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::ProductId => {
                    if let Some(v) = map.next_value::<Option<i64>>()? {
                        product.product_id = v;
                    }
                }
                Field::ProductName => {
                    if let Some(v) = map.next_value::<Option<String>>()? {
                        product.product_name = v;
                    }
                }
                Field::InventoryScanningId => {
                    if let Some(v) = map.next_value::<Option<i64>>()? {
                        product.inventory_scanning_id = v;
                    }
                }
                Field::Color => {
                    if let Some(v) = map.next_value::<Option<String>>()? {
                        product.color = v;
                    }
                }
                Field::Size => {
                    if let Some(v) = map.next_value::<Option<String>>()? {
                        product.size = v;
                    }
                }
                Field::Price => {
                    if let Some(v) = map.next_value::<Option<f32>>()? {
                        product.price = v;
                    }
                }
                Field::Dimensions => {
                    if let Some(v) = map.next_value::<Option<String>>()? {
                        product.dimensions = v;
                    }
                }
                Field::Sku => {
                    if let Some(v) = map.next_value::<Option<i64>>()? {
                        product.sku = v;
                    }
                }
                Field::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(product)
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ProductVisitor)
    }
}
