//! The static AI table the dictionary is compiled from.
//!
//! Each [`RawRow`] is one line of the table. A `code` ending in `n` is a
//! "decimal family" row and expands into ten concrete [`super::AiSpec`]
//! entries at dictionary-build time, one per `decimal_position` 0..=9.

use super::{DataType, DateFormat, PriorityClass};

pub(super) struct RawRow {
    pub code: &'static str,
    pub title: &'static str,
    /// `Some(len)` for fixed-length AIs; `None` for variable-length.
    pub fixed_length: Option<u8>,
    pub min_length: u8,
    pub max_length: u8,
    pub data_type: DataType,
    pub check_digit: bool,
    pub date_format: Option<DateFormat>,
    pub priority_class: PriorityClass,
    pub required_with: &'static [&'static str],
    pub exclusive_with: &'static [&'static str],
}

const fn fixed(
    code: &'static str,
    title: &'static str,
    len: u8,
    data_type: DataType,
    check_digit: bool,
    priority_class: PriorityClass,
) -> RawRow {
    RawRow {
        code,
        title,
        fixed_length: Some(len),
        min_length: len,
        max_length: len,
        data_type,
        check_digit,
        date_format: None,
        priority_class,
        required_with: &[],
        exclusive_with: &[],
    }
}

const fn date(
    code: &'static str,
    title: &'static str,
    format: DateFormat,
    priority_class: PriorityClass,
) -> RawRow {
    RawRow {
        code,
        title,
        fixed_length: Some(6),
        min_length: 6,
        max_length: 6,
        data_type: DataType::Numeric,
        check_digit: false,
        date_format: Some(format),
        priority_class,
        required_with: &[],
        exclusive_with: &[],
    }
}

const fn variable(
    code: &'static str,
    title: &'static str,
    min_length: u8,
    max_length: u8,
    data_type: DataType,
    priority_class: PriorityClass,
) -> RawRow {
    RawRow {
        code,
        title,
        fixed_length: None,
        min_length,
        max_length,
        data_type,
        check_digit: false,
        date_format: None,
        priority_class,
        required_with: &[],
        exclusive_with: &[],
    }
}

/// Decimal-position ("measurement") family base codes: AI `{code}n`, title,
/// metric-or-other unit. These expand to ten entries each, one per
/// `decimal_position` 0..=9. Values are fixed-length 6-digit numeric,
/// consistent with the GS1 General Specifications' `N3(1..6)` encoding for
/// these AIs. This is a representative subset of the full standardized
/// family; not every 3-series AI in the standard is included.
pub(super) const DECIMAL_FAMILY: &[(&str, &str)] = &[
    ("310", "Net weight, kilograms"),
    ("311", "Length or first dimension, metres"),
    ("312", "Width, diameter, or second dimension, metres"),
    ("313", "Depth, thickness, height, or third dimension, metres"),
    ("314", "Area, square metres"),
    ("315", "Net volume, litres"),
    ("316", "Net volume, cubic metres"),
    ("320", "Net weight, pounds"),
    ("321", "Length or first dimension, inches"),
    ("322", "Length or first dimension, feet"),
    ("323", "Length or first dimension, yards"),
    ("324", "Width, diameter, or second dimension, inches"),
    ("325", "Width, diameter, or second dimension, feet"),
    ("326", "Width, diameter, or second dimension, yards"),
    ("327", "Depth, thickness, height, or third dimension, inches"),
    ("328", "Depth, thickness, height, or third dimension, feet"),
    ("329", "Depth, thickness, height, or third dimension, yards"),
    ("330", "Logistic weight, kilograms"),
    ("331", "Length or first dimension, logistic, metres"),
    ("332", "Width, diameter, or second dimension, logistic, metres"),
    (
        "333",
        "Depth, thickness, height, or third dimension, logistic, metres",
    ),
    ("334", "Area, logistic, square metres"),
    ("335", "Logistic volume, litres"),
    ("336", "Logistic volume, cubic metres"),
];

/// The fixed, hand-enumerated rows of the table.
pub(super) fn raw_rows() -> Vec<RawRow> {
    vec![
        // --- Identification (Core) ---
        fixed(
            "00",
            "Serial Shipping Container Code (SSCC)",
            18,
            DataType::Numeric,
            true,
            PriorityClass::Core,
        ),
        fixed(
            "01",
            "Global Trade Item Number (GTIN)",
            14,
            DataType::Numeric,
            true,
            PriorityClass::Core,
        ),
        fixed(
            "02",
            "GTIN of contained trade items",
            14,
            DataType::Numeric,
            true,
            PriorityClass::Core,
        ),
        variable(
            "10",
            "Batch or lot number",
            1,
            20,
            DataType::Alphanumeric,
            PriorityClass::Core,
        ),
        variable(
            "21",
            "Serial number",
            1,
            20,
            DataType::Alphanumeric,
            PriorityClass::Core,
        ),
        variable(
            "22",
            "Consumer product variant",
            1,
            20,
            DataType::Alphanumeric,
            PriorityClass::Core,
        ),
        // --- Dates (Core) ---
        // AIs 11/13/15/17 all share YYMMD0 (day 00 permitted as a
        // month-level expiry granularity, common in legacy healthcare data).
        date(
            "11",
            "Production date",
            DateFormat::YyMmD0,
            PriorityClass::Core,
        ),
        date(
            "12",
            "Due date",
            DateFormat::YyMmD0,
            PriorityClass::Core,
        ),
        date(
            "13",
            "Packaging date",
            DateFormat::YyMmD0,
            PriorityClass::Core,
        ),
        date(
            "15",
            "Best before date",
            DateFormat::YyMmD0,
            PriorityClass::Core,
        ),
        date(
            "16",
            "Sell by date",
            DateFormat::YyMmD0,
            PriorityClass::Core,
        ),
        date(
            "17",
            "Expiration date",
            DateFormat::YyMmD0,
            PriorityClass::Core,
        ),
        RawRow {
            code: "7003",
            title: "Expiration date and time",
            fixed_length: Some(8),
            min_length: 8,
            max_length: 8,
            data_type: DataType::Numeric,
            check_digit: false,
            date_format: Some(DateFormat::YyMmDdHh),
            priority_class: PriorityClass::General,
            required_with: &[],
            exclusive_with: &[],
        },
        // --- General / secondary identification ---
        variable(
            "240",
            "Additional product identification",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "241",
            "Customer part number",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "242",
            "Made-to-order variation number",
            1,
            6,
            DataType::Numeric,
            PriorityClass::General,
        ),
        variable(
            "250",
            "Secondary serial number",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "251",
            "Reference to source entity",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "253",
            "Global Document Type Identifier",
            13,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "254",
            "GLN extension component",
            1,
            20,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "255",
            "Global Coupon Number",
            13,
            25,
            DataType::Numeric,
            PriorityClass::General,
        ),
        variable(
            "30",
            "Variable count of items",
            1,
            8,
            DataType::Numeric,
            PriorityClass::General,
        ),
        variable(
            "37",
            "Count of trade items contained",
            1,
            8,
            DataType::Numeric,
            PriorityClass::General,
        ),
        // --- Shipping / logistics (General) ---
        variable(
            "400",
            "Customer purchase order number",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "401",
            "Global Identification Number for Consignment",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        fixed(
            "402",
            "Global Shipment Identification Number",
            17,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        variable(
            "403",
            "Routing code",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        fixed(
            "410",
            "Ship to / Deliver to Global Location Number",
            13,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        fixed(
            "411",
            "Bill to / Invoice to Global Location Number",
            13,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        fixed(
            "412",
            "Purchased from Global Location Number",
            13,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        fixed(
            "413",
            "Ship for / Deliver for Global Location Number",
            13,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        fixed(
            "414",
            "Identification of a physical location Global Location Number",
            13,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        fixed(
            "415",
            "Global Location Number of the invoicing party",
            13,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        fixed(
            "416",
            "GLN of the production or service location",
            13,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        fixed(
            "417",
            "Party Global Location Number",
            13,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        variable(
            "420",
            "Ship to / Deliver to postal code within a single postal authority",
            1,
            20,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "421",
            "Ship to / Deliver to postal code with ISO country code",
            4,
            12,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "422",
            "Country of origin of a trade item",
            3,
            3,
            DataType::Numeric,
            PriorityClass::General,
        ),
        variable(
            "423",
            "Country of initial processing",
            3,
            15,
            DataType::Numeric,
            PriorityClass::General,
        ),
        variable(
            "426",
            "Country of full process chain",
            3,
            3,
            DataType::Numeric,
            PriorityClass::General,
        ),
        // --- Component/part identifiers (General) ---
        variable(
            "8003",
            "Global Returnable Asset Identifier",
            14,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "8004",
            "Global Individual Asset Identifier",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        fixed(
            "8006",
            "Identification of the components of a trade item",
            18,
            DataType::Numeric,
            false,
            PriorityClass::General,
        ),
        variable(
            "8010",
            "Component / Part Identifier",
            1,
            30,
            DataType::Alphanumeric,
            PriorityClass::General,
        ),
        variable(
            "8011",
            "Component / Part Serial Number",
            1,
            12,
            DataType::Numeric,
            PriorityClass::General,
        ),
        fixed(
            "8017",
            "Global Service Relation Number, provider",
            18,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        fixed(
            "8018",
            "Global Service Relation Number, recipient",
            18,
            DataType::Numeric,
            true,
            PriorityClass::General,
        ),
        variable(
            "8019",
            "Service Relation Instance Number",
            1,
            10,
            DataType::Numeric,
            PriorityClass::General,
        ),
    ]
}

/// AIs 90..=99, reserved by GS1 for company-internal use.
pub(super) fn internal_rows() -> Vec<RawRow> {
    (90..=99)
        .map(|n| RawRow {
            code: match n {
                90 => "90",
                91 => "91",
                92 => "92",
                93 => "93",
                94 => "94",
                95 => "95",
                96 => "96",
                97 => "97",
                98 => "98",
                99 => "99",
                _ => unreachable!(),
            },
            title: "Information mutually agreed between trading partners",
            fixed_length: None,
            min_length: 1,
            max_length: 90,
            data_type: DataType::Alphanumeric,
            check_digit: false,
            date_format: None,
            priority_class: PriorityClass::Internal,
            required_with: &[],
            exclusive_with: &[],
        })
        .collect()
}
