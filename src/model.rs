use thiserror::Error;

mod time_period;
pub use time_period::TimePeriod;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("time period token is empty")]
    EmptyPeriodToken,
    #[error("unknown time period token: {0}")]
    UnknownPeriodToken(String),
    #[error("refusing to redirect to malformed path: {0:?}")]
    MalformedRedirect(String),
}
