//! Zusammenführung der Umgebungsanalyse für einen Marker.
//!
//! Eine [`AreaLookupSession`] gehört zu genau einer geöffneten Detailansicht.
//! Die Ortssuche und die Artikelsuchen laufen auf Hintergrund-Threads und
//! melden sich über einen Kanal zurück; der UI-Thread zieht die Ergebnisse
//! pro Frame ab. Jede Sitzung trägt eine Generationsnummer, damit Antworten
//! einer bereits geschlossenen Ansicht wirkungslos verpuffen.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use crate::core::{GeoPos, MarkerId};
use crate::shared::AppOptions;

use super::places::{NearbyPlace, PlacesLookup, WikipediaGeoSearch};
use super::wiki::{RelatedLink, RelatedLinksLookup, WikipediaOpenSearch};

/// Laufende Nummer zur Entwertung später Antworten.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Dienste der Umgebungsanalyse, für Tests austauschbar.
#[derive(Clone)]
pub struct LookupServices {
    pub places: Arc<dyn PlacesLookup + Send + Sync>,
    pub links: Arc<dyn RelatedLinksLookup + Send + Sync>,
}

impl LookupServices {
    /// Dienste mit der echten Wikipedia-Anbindung.
    pub fn live() -> Self {
        Self {
            places: Arc::new(WikipediaGeoSearch::new()),
            links: Arc::new(WikipediaOpenSearch::new()),
        }
    }
}

/// Rückmeldung eines Hintergrund-Threads.
#[derive(Debug, Clone)]
pub enum LookupEvent {
    /// Ergebnis der Ortssuche.
    PlacesResolved {
        generation: u64,
        result: Result<Vec<NearbyPlace>, String>,
    },
    /// Ergebnis einer Artikelsuche für den Ort an `place_index`.
    LinksResolved {
        generation: u64,
        place_index: usize,
        result: Result<Vec<RelatedLink>, String>,
    },
}

/// Zustand eines einzelnen Ortes innerhalb der Analyse.
#[derive(Debug, Clone)]
pub enum ItemStatus {
    /// Artikelsuche läuft noch; nach Ablauf der Frist gilt sie als gescheitert.
    Pending { deadline: Instant },
    /// Artikelsuche abgeschlossen, Liste bereits gekappt.
    Resolved { links: Vec<RelatedLink> },
    /// Artikelsuche gescheitert oder Frist überschritten.
    Failed,
}

/// Ein Ort mit dem Stand seiner Artikelsuche.
#[derive(Debug, Clone)]
pub struct AreaInfoItem {
    pub place: NearbyPlace,
    pub status: ItemStatus,
    /// Google-Suche als immer verfügbarer Ausweichlink.
    pub fallback_url: String,
}

/// Gesamtzustand einer Analyse-Sitzung.
#[derive(Debug, Clone)]
pub enum LookupPhase {
    /// Ortssuche läuft noch.
    SearchingPlaces,
    /// Keine Orte im Radius gefunden oder Ortssuche gescheitert.
    NoPlaces,
    /// Orte bekannt, Artikelsuchen laufen oder sind abgeschlossen.
    Ready { items: Vec<AreaInfoItem> },
}

/// Laufende Umgebungsanalyse für einen Marker.
///
/// Mit dem Drop der Sitzung schließt der Kanal; noch laufende Threads
/// senden ins Leere und beeinflussen keine spätere Sitzung.
pub struct AreaLookupSession {
    marker_id: MarkerId,
    generation: u64,
    phase: LookupPhase,
    tx: Sender<LookupEvent>,
    rx: Receiver<LookupEvent>,
}

impl AreaLookupSession {
    /// Startet die Analyse und stößt die Ortssuche an.
    pub fn start(
        marker_id: MarkerId,
        center: GeoPos,
        services: &LookupServices,
        options: &AppOptions,
    ) -> Self {
        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::channel();
        let radius_m = options.clamped_places_radius_m();

        let places = Arc::clone(&services.places);
        let worker_tx = tx.clone();
        std::thread::spawn(move || {
            let result = places.nearby(center, radius_m).map_err(|e| format!("{e:#}"));
            let _ = worker_tx.send(LookupEvent::PlacesResolved { generation, result });
        });

        log::info!(
            "Umgebungsanalyse für Marker {marker_id} gestartet (Radius {radius_m} m, Generation {generation})"
        );

        Self {
            marker_id,
            generation,
            phase: LookupPhase::SearchingPlaces,
            tx,
            rx,
        }
    }

    pub fn marker_id(&self) -> MarkerId {
        self.marker_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> &LookupPhase {
        &self.phase
    }

    /// True sobald kein Teilergebnis mehr aussteht.
    pub fn is_settled(&self) -> bool {
        match &self.phase {
            LookupPhase::SearchingPlaces => false,
            LookupPhase::NoPlaces => true,
            LookupPhase::Ready { items } => items
                .iter()
                .all(|item| !matches!(item.status, ItemStatus::Pending { .. })),
        }
    }

    /// Zieht eingegangene Ergebnisse ab und prüft die Fristen.
    ///
    /// Gibt true zurück, wenn sich der sichtbare Zustand geändert hat.
    pub fn pump(&mut self, services: &LookupServices, options: &AppOptions) -> bool {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }

        let mut changed = false;
        for event in events {
            changed |= self.apply_event(event, services, options);
        }
        changed |= self.sweep_deadlines(Instant::now());
        changed
    }

    /// Verarbeitet eine einzelne Rückmeldung.
    ///
    /// Antworten fremder Generationen und Antworten auf bereits
    /// abgeschlossene Orte werden verworfen; jeder Ort wird höchstens
    /// einmal aufgelöst.
    pub fn apply_event(
        &mut self,
        event: LookupEvent,
        services: &LookupServices,
        options: &AppOptions,
    ) -> bool {
        match event {
            LookupEvent::PlacesResolved { generation, result } => {
                if generation != self.generation {
                    log::debug!("Veraltete Ortsantwort verworfen (Generation {generation})");
                    return false;
                }
                if !matches!(self.phase, LookupPhase::SearchingPlaces) {
                    return false;
                }
                match result {
                    Ok(places) if places.is_empty() => {
                        log::info!("Keine Orte im Radius gefunden");
                        self.phase = LookupPhase::NoPlaces;
                    }
                    Ok(places) => {
                        let deadline = Instant::now() + options.lookup_timeout();
                        let items = places
                            .iter()
                            .map(|place| AreaInfoItem {
                                place: place.clone(),
                                status: ItemStatus::Pending { deadline },
                                fallback_url: google_search_url(&place.name),
                            })
                            .collect();
                        for (place_index, place) in places.iter().enumerate() {
                            self.spawn_link_worker(place_index, place.name.clone(), services);
                        }
                        log::info!("{} Orte gefunden, Artikelsuche läuft", places.len());
                        self.phase = LookupPhase::Ready { items };
                    }
                    Err(message) => {
                        log::warn!("Ortssuche fehlgeschlagen: {message}");
                        self.phase = LookupPhase::NoPlaces;
                    }
                }
                true
            }
            LookupEvent::LinksResolved {
                generation,
                place_index,
                result,
            } => {
                if generation != self.generation {
                    log::debug!("Veraltete Artikelantwort verworfen (Generation {generation})");
                    return false;
                }
                let LookupPhase::Ready { items } = &mut self.phase else {
                    return false;
                };
                let Some(item) = items.get_mut(place_index) else {
                    return false;
                };
                if !matches!(item.status, ItemStatus::Pending { .. }) {
                    return false;
                }
                item.status = match result {
                    Ok(mut links) => {
                        links.truncate(options.wiki_link_cap);
                        ItemStatus::Resolved { links }
                    }
                    Err(message) => {
                        log::warn!(
                            "Artikelsuche für '{}' fehlgeschlagen: {message}",
                            item.place.name
                        );
                        ItemStatus::Failed
                    }
                };
                true
            }
        }
    }

    /// Markiert alle Orte als gescheitert, deren Frist vor `now` lag.
    pub fn sweep_deadlines(&mut self, now: Instant) -> bool {
        let LookupPhase::Ready { items } = &mut self.phase else {
            return false;
        };
        let mut changed = false;
        for item in items.iter_mut() {
            if let ItemStatus::Pending { deadline } = item.status {
                if now >= deadline {
                    log::warn!(
                        "Artikelsuche für '{}' hat die Frist überschritten",
                        item.place.name
                    );
                    item.status = ItemStatus::Failed;
                    changed = true;
                }
            }
        }
        changed
    }

    fn spawn_link_worker(&self, place_index: usize, place_name: String, services: &LookupServices) {
        let links = Arc::clone(&services.links);
        let tx = self.tx.clone();
        let generation = self.generation;
        std::thread::spawn(move || {
            let result = links.related(&place_name).map_err(|e| format!("{e:#}"));
            let _ = tx.send(LookupEvent::LinksResolved {
                generation,
                place_index,
                result,
            });
        });
    }
}

fn google_search_url(place_name: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        place_name.replace(' ', "+")
    )
}
