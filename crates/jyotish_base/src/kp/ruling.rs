//! Ruling planets at a moment.

use serde::Serialize;

use crate::chart::Chart;
use crate::graha::Graha;
use crate::panchang::vaar_lord;

use super::lords::resolve_lord_chain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RulingPlanets {
    pub day_lord: Graha,
    pub moon_star_lord: Graha,
    pub moon_sign_lord: Graha,
    pub lagna_star_lord: Graha,
    pub lagna_sign_lord: Graha,
}

/// Ruling planets of a chart; `weekday` is 0 = Sunday .. 6 = Saturday.
///
/// `None` when the Moon is unavailable in the chart.
pub fn ruling_planets(chart: &Chart, weekday: u8) -> Option<RulingPlanets> {
    let moon = resolve_lord_chain(chart.body(Graha::Chandra)?.longitude());
    let lagna = resolve_lord_chain(chart.ascendant.longitude_deg);
    Some(RulingPlanets {
        day_lord: vaar_lord(weekday),
        moon_star_lord: moon.star_lord,
        moon_sign_lord: moon.sign_lord,
        lagna_star_lord: lagna.star_lord,
        lagna_sign_lord: lagna.sign_lord,
    })
}
