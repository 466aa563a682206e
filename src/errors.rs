use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoinError {
    #[error("insufficient coins: tried to spend {requested}, balance is {balance}")]
    InsufficientBalance { requested: u64, balance: u64 },
    #[error("no active session")]
    NoSession,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DraftError {
    #[error("company details incomplete")]
    CompanyIncomplete,
    #[error("no interest categories selected")]
    NoInterestsSelected,
    #[error("invalid e-mail address")]
    InvalidEmail,
    #[error("password shorter than {min} characters")]
    PasswordTooShort { min: usize },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
}
