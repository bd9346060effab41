use askama::Template;
use axum_extra::routing::TypedPath;
use serde::Deserialize;
use tracing::instrument;

use crate::{model::TimePeriod, pages::Outcome};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/spotPrices/:period")]
pub struct Path {
    pub period: TimePeriod,
}

impl Path {
    pub fn new(period: TimePeriod) -> Self {
        Self { period }
    }
}

#[derive(Template)]
#[template(path = "spot-prices.html")]
pub struct Tmpl {
    pub period: TimePeriod,
    pub links: Vec<Link>,
}

pub struct Link {
    pub href: String,
    pub label: &'static str,
    pub current: bool,
}

impl Tmpl {
    pub fn new(period: TimePeriod) -> Self {
        let links = TimePeriod::ALL
            .into_iter()
            .map(|other| Link {
                href: Path::new(other).to_string(),
                label: other.label(),
                current: other == period,
            })
            .collect();
        Self { period, links }
    }
}

#[instrument]
pub async fn get(Path { period }: Path) -> Outcome<Tmpl> {
    Outcome::Render(Tmpl::new(period))
}
