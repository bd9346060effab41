use std::convert::Infallible;

use axum::extract::State;
use axum_extra::routing::TypedPath;
use tracing::instrument;

use crate::{
    model::TimePeriod,
    pages::{Outcome, RedirectKind},
    Result,
};

#[derive(TypedPath, Debug)]
#[typed_path("/spotPrices/yearly")]
pub struct Path;

#[instrument(skip_all)]
pub async fn get(_: Path, State(kind): State<RedirectKind>) -> Result<Outcome<Infallible>> {
    Ok(Outcome::redirect(super::period::Path::new(TimePeriod::Yearly), kind)?)
}
