use crate::domain::constants::{DEVICE_ID, DEVICE_NAME, DEVICE_TYPE};
use crate::domain::models::DeviceDetails;

/// Static snapshot of the device identity. Pure; same value on every call.
pub fn device_details() -> DeviceDetails {
    DeviceDetails::from([
        ("id".to_string(), DEVICE_ID.to_string()),
        ("name".to_string(), DEVICE_NAME.to_string()),
        ("type".to_string(), DEVICE_TYPE.to_string()),
    ])
}
