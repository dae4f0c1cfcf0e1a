use serde::{Deserialize, Serialize};

/// The driver assigned to a trip, with their vehicle details.
///
/// `user_name` is the driver's display name as reported by the rider
/// profile attached to the vehicle record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Driver {
    pub id: Option<i64>,
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub user_name: Option<String>,
}
