pub const DEFAULT_API_URL: &str = "https://api.mealweek.example/v1";

pub const MIN_JOIN_STEP: u8 = 1;
pub const MAX_JOIN_STEP: u8 = 4;

pub const MIN_PASSWORD_LEN: usize = 8;
