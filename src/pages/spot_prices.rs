use std::convert::Infallible;

use axum::extract::State;
use axum_extra::routing::TypedPath;
use tracing::instrument;

use crate::{
    model::TimePeriod,
    pages::{Outcome, RedirectKind},
    Result,
};

pub mod period;
pub mod yearly;

#[derive(TypedPath, Debug)]
#[typed_path("/spotPrices")]
pub struct Path;

#[instrument(skip_all)]
pub async fn get(_: Path, State(kind): State<RedirectKind>) -> Result<Outcome<Infallible>> {
    Ok(Outcome::redirect(period::Path::new(TimePeriod::Hourly), kind)?)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn index_redirects_to_hourly() {
        let outcome = get(Path, State(RedirectKind::SeeOther)).await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Redirect {
                target: "/spotPrices/PT1H".into(),
                status: StatusCode::SEE_OTHER,
            }
        );
    }
}
