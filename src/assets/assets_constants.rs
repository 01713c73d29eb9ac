/// Default useful life in years by asset category, used by the factory
/// constructors.
pub const DEFAULT_USEFUL_LIFE_MACHINERY_YEARS: u32 = 10;
pub const DEFAULT_USEFUL_LIFE_VEHICLE_YEARS: u32 = 5;
pub const DEFAULT_USEFUL_LIFE_FIXTURE_YEARS: u32 = 5;
pub const DEFAULT_USEFUL_LIFE_BUILDING_YEARS: u32 = 50;
pub const DEFAULT_USEFUL_LIFE_SOFTWARE_YEARS: u32 = 3;

/// Fallback account group for categories without a dedicated code.
pub const DEFAULT_ACCOUNT_GROUP: &str = "256";
