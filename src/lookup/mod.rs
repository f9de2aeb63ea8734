//! Umgebungsanalyse über die Wikipedia-API.
//!
//! [`places`] findet Orte rund um eine Koordinate, [`wiki`] sucht Artikel
//! zu einem Ortsnamen, [`aggregator`] führt beides pro Detailansicht
//! zusammen und verwaltet Fristen und Abbruch.

use std::time::Duration;

pub mod aggregator;
pub mod places;
pub mod wiki;

pub use aggregator::{
    AreaInfoItem, AreaLookupSession, ItemStatus, LookupEvent, LookupPhase, LookupServices,
};
pub use places::{NearbyPlace, PlacesLookup, WikipediaGeoSearch};
pub use wiki::{RelatedLink, RelatedLinksLookup, WikipediaOpenSearch};

/// Basis-URL der Wikipedia-API.
const API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// User-Agent für alle API-Aufrufe, wie von Wikimedia gefordert.
const USER_AGENT: &str = "Map-Marker-Editor/1.2 (+https://github.com/mro68/map_marker_editor)";

/// Socket-Timeout der HTTP-Aufrufe. Die logische Frist der Anzeige wird
/// separat über die Optionen gesteuert und ist kürzer.
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);
