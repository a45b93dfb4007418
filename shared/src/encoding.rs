//! Category encoding for form inputs
//!
//! Maps submitted crop and location names to the integer codes the model was
//! trained on. Unknown names map to [`INVALID_CODE`].

use crate::models::{Category, Crop, Location};

/// Code returned for a name outside the lookup table
pub const INVALID_CODE: i32 = -1;

/// Encode `name` against the table of category `C`
pub fn encode<C: Category>(name: &str) -> i32 {
    C::from_name(name).map(C::code).unwrap_or(INVALID_CODE)
}

pub fn encode_crop(name: &str) -> i32 {
    encode::<Crop>(name)
}

pub fn encode_location(name: &str) -> i32 {
    encode::<Location>(name)
}

/// Both categories resolved to valid codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedSelection {
    pub crop: Crop,
    pub location: Location,
}

/// Resolve a crop/location pair, or `None` if either is unknown
pub fn encode_selection(crop: &str, location: &str) -> Option<EncodedSelection> {
    let crop_code = encode_crop(crop);
    let location_code = encode_location(location);

    if crop_code == INVALID_CODE || location_code == INVALID_CODE {
        return None;
    }

    Some(EncodedSelection {
        crop: Crop::from_code(crop_code)?,
        location: Location::from_code(location_code)?,
    })
}
