/// Reference currency all exchange rates are quoted against.
pub const REFERENCE_CURRENCY: &str = "EUR";

/// Display name for the uncategorized sentinel bucket.
pub const UNCATEGORIZED_CATEGORY_NAME: &str = "Uncategorized";

/// Decimal precision for percentage/ratio fields.
pub const RATIO_DECIMAL_PRECISION: u32 = 2;
