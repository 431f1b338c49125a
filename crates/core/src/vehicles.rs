use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle categories tracked in the lot mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Sedan,
    Suv,
    Pickup,
    Truck,
}

impl VehicleKind {
    /// All categories, in display order
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Sedan,
        VehicleKind::Suv,
        VehicleKind::Pickup,
        VehicleKind::Truck,
    ];
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleKind::Sedan => "Sedan",
            VehicleKind::Suv => "SUV",
            VehicleKind::Pickup => "Pickup",
            VehicleKind::Truck => "Truck",
        };
        write!(f, "{name}")
    }
}

/// Fuel vs electric counts for one vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleMix {
    pub kind: VehicleKind,
    /// Count of combustion vehicles
    pub fuel: u32,
    /// Count of electric vehicles
    pub electric: u32,
}

impl VehicleMix {
    pub fn new(kind: VehicleKind, fuel: u32, electric: u32) -> Self {
        Self {
            kind,
            fuel,
            electric,
        }
    }

    /// Total vehicles of this category
    pub fn total(&self) -> u32 {
        self.fuel + self.electric
    }
}
