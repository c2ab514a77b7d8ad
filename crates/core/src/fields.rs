//! Google Analytics measurement-protocol field names and classification
//! of device-identifier fields for collection gating.

use crate::tracker::Params;

pub const SCREEN_NAME: &str = "&cd";
pub const EVENT_CATEGORY: &str = "&ec";
pub const EVENT_ACTION: &str = "&ea";
pub const EVENT_LABEL: &str = "&el";
pub const EVENT_VALUE: &str = "&ev";
pub const CLIENT_ID: &str = "&cid";
pub const USER_ID: &str = "&uid";
pub const IDFA: &str = "&idfa";
pub const ADID: &str = "&adid";

/// Fields carrying device-advertising identifiers. Covers the GA wire
/// names and the plain aliases SDK callers commonly use.
pub const DEVICE_IDENTIFIER_FIELDS: &[&str] = &[
    IDFA,
    ADID,
    "&did",
    "idfa",
    "adid",
    "advertising_id",
    "device_id",
];

/// Whether a parameter name carries a device identifier. Matching is
/// case-insensitive.
pub fn is_device_identifier(parameter: &str) -> bool {
    DEVICE_IDENTIFIER_FIELDS
        .iter()
        .any(|field| field.eq_ignore_ascii_case(parameter))
}

/// Copy of `params` with all device-identifier fields removed.
pub fn strip_device_identifiers(params: &Params) -> Params {
    params
        .iter()
        .filter(|(key, _)| !is_device_identifier(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
