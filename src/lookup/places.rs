//! Ortssuche rund um eine Koordinate über die Wikipedia-GeoSearch-API.

use anyhow::Context;
use serde::Deserialize;

use crate::core::GeoPos;

use super::{API_URL, HTTP_TIMEOUT, USER_AGENT};

/// Maximale Trefferzahl einer GeoSearch-Abfrage.
const GEOSEARCH_LIMIT: u32 = 20;

/// Ein Ort in der Umgebung eines Markers.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPlace {
    /// Anzeigename des Ortes.
    pub name: String,
    /// Entfernung zum Abfragezentrum in Metern, falls gemeldet.
    pub distance_m: Option<f64>,
}

/// Liefert Orte in der Umgebung einer Koordinate.
pub trait PlacesLookup {
    fn nearby(&self, center: GeoPos, radius_m: u32) -> anyhow::Result<Vec<NearbyPlace>>;
}

/// GeoSearch-Anbindung der Wikipedia-API.
pub struct WikipediaGeoSearch {
    agent: ureq::Agent,
}

impl WikipediaGeoSearch {
    pub fn new() -> Self {
        let agent = ureq::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Default for WikipediaGeoSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacesLookup for WikipediaGeoSearch {
    fn nearby(&self, center: GeoPos, radius_m: u32) -> anyhow::Result<Vec<NearbyPlace>> {
        let coord = format!("{}|{}", center.lat, center.lng);
        let body = self
            .agent
            .get(API_URL)
            .query("action", "query")
            .query("list", "geosearch")
            .query("gscoord", &coord)
            .query("gsradius", &radius_m.to_string())
            .query("gslimit", &GEOSEARCH_LIMIT.to_string())
            .query("format", "json")
            .call()
            .context("GeoSearch-Abfrage fehlgeschlagen")?
            .into_string()
            .context("GeoSearch-Antwort nicht lesbar")?;
        parse_geosearch(&body)
    }
}

#[derive(Debug, Deserialize)]
struct GeoSearchResponse {
    query: Option<GeoSearchQuery>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchQuery {
    geosearch: Vec<GeoSearchHit>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchHit {
    title: String,
    dist: Option<f64>,
}

/// Wandelt den GeoSearch-Antwortkörper in die Ortsliste um.
///
/// Eine Antwort ohne `query`-Block ist eine leere Trefferliste, kein Fehler.
fn parse_geosearch(body: &str) -> anyhow::Result<Vec<NearbyPlace>> {
    let response: GeoSearchResponse =
        serde_json::from_str(body).context("GeoSearch-Antwort ist kein gültiges JSON")?;
    let hits = response.query.map(|q| q.geosearch).unwrap_or_default();
    Ok(hits
        .into_iter()
        .map(|hit| NearbyPlace {
            name: hit.title,
            distance_m: hit.dist,
        })
        .collect())
}
