//! Lord chains by nested proportional subdivision.
//!
//! A nakshatra arc is split into 9 sub-arcs whose widths are proportional
//! to the Vimshottari years, starting the cycle at the nakshatra's own star
//! lord. The matched sub-arc is split again the same way, starting at the
//! sub-lord, and so on to any depth.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_from_longitude};
use crate::rashi::rashi_from_longitude;
use crate::util::normalize_360;
use crate::vimshottari::{VIMSHOTTARI_TOTAL_YEARS, cycle_from, vimshottari_years};

/// Sign, star, sub and sub-sub lords of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LordChain {
    pub sign_lord: Graha,
    pub star_lord: Graha,
    pub sub_lord: Graha,
    pub sub_sub_lord: Graha,
}

/// A matched sub-arc, relative to the start of its parent arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubArc {
    pub lord: Graha,
    pub start: f64,
    pub width: f64,
}

/// Find the sub-arc containing `position` within a parent arc of `span`
/// degrees whose cycle starts at `first_lord`.
///
/// The last lord is a catch-all: its arc runs to the end of the parent
/// span, absorbing accumulated rounding, so the scan always matches.
pub fn subdivide(first_lord: Graha, span: f64, position: f64) -> SubArc {
    let mut start = 0.0;
    let mut last = SubArc {
        lord: first_lord,
        start,
        width: span,
    };
    for (i, lord) in cycle_from(first_lord).enumerate() {
        let width = if i == 8 {
            span - start
        } else {
            vimshottari_years(lord) / VIMSHOTTARI_TOTAL_YEARS * span
        };
        last = SubArc { lord, start, width };
        if position < start + width {
            return last;
        }
        start += width;
    }
    last
}

/// Lords of `longitude` down to `depth` levels: sign, star, sub, sub-sub, ...
///
/// `depth == 0` yields an empty chain.
pub fn kp_lords(longitude: f64, depth: usize) -> Vec<Graha> {
    let lon = normalize_360(longitude);
    let mut lords = Vec::with_capacity(depth);
    if depth == 0 {
        return lords;
    }
    lords.push(rashi_lord(rashi_from_longitude(lon).rashi));
    if depth == 1 {
        return lords;
    }
    let nak = nakshatra_from_longitude(lon);
    let mut lord = nak.lord;
    let mut span = NAKSHATRA_SPAN_27;
    let mut position = nak.degrees_in_nakshatra;
    lords.push(lord);
    while lords.len() < depth {
        let arc = subdivide(lord, span, position);
        lord = arc.lord;
        position -= arc.start;
        span = arc.width;
        lords.push(lord);
    }
    lords
}

/// Resolve the four-level chain. Total over all longitudes.
pub fn resolve_lord_chain(longitude: f64) -> LordChain {
    let lon = normalize_360(longitude);
    let nak = nakshatra_from_longitude(lon);
    let sub = subdivide(nak.lord, NAKSHATRA_SPAN_27, nak.degrees_in_nakshatra);
    let sub_sub = subdivide(sub.lord, sub.width, nak.degrees_in_nakshatra - sub.start);
    LordChain {
        sign_lord: rashi_lord(rashi_from_longitude(lon).rashi),
        star_lord: nak.lord,
        sub_lord: sub.lord,
        sub_sub_lord: sub_sub.lord,
    }
}
