/// Success message after creating an entry
pub const INVESTMENT_ADDED_MESSAGE: &str = "Investment added";

/// Success message after editing an entry
pub const INVESTMENT_UPDATED_MESSAGE: &str = "Investment updated";
