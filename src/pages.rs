use std::{convert::Infallible, fmt};

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::routing::TypedPath;
use serde::Deserialize;
use tracing::instrument;

use crate::{model, Result};

pub mod spot_prices;

/// What a page handler decided to do with a request.
#[derive(Debug, PartialEq)]
pub enum Outcome<B> {
    Render(B),
    Redirect { target: String, status: StatusCode },
}

impl<B> Outcome<B> {
    /// Builds a redirect, refusing targets that would send the client to a
    /// broken path.
    pub fn redirect(target: impl fmt::Display, kind: RedirectKind) -> Result<Self, model::Error> {
        let target = target.to_string();
        let well_formed = target.starts_with('/')
            && (target == "/" || target[1..].split('/').all(|segment| !segment.is_empty()))
            && target.bytes().all(|b| b.is_ascii_graphic());
        if !well_formed {
            return Err(model::Error::MalformedRedirect(target));
        }
        Ok(Self::Redirect {
            target,
            status: kind.status(),
        })
    }
}

impl<B: IntoResponse> IntoResponse for Outcome<B> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Render(body) => body.into_response(),
            Outcome::Redirect { target, status } => (status, [(LOCATION, target)]).into_response(),
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RedirectKind {
    SeeOther,
    #[default]
    Temporary,
    Permanent,
}

impl RedirectKind {
    pub fn status(self) -> StatusCode {
        match self {
            RedirectKind::SeeOther => StatusCode::SEE_OTHER,
            RedirectKind::Temporary => StatusCode::TEMPORARY_REDIRECT,
            RedirectKind::Permanent => StatusCode::PERMANENT_REDIRECT,
        }
    }
}

#[derive(TypedPath, Debug)]
#[typed_path("/")]
pub struct Path;

#[instrument(skip_all)]
pub async fn get(_: Path, State(kind): State<RedirectKind>) -> Result<Outcome<Infallible>> {
    let target = spot_prices::period::Path::new(model::TimePeriod::Hourly);
    Ok(Outcome::redirect(target, kind)?)
}
