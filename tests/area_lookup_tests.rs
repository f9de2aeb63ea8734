use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use map_marker_editor::app::handlers;
use map_marker_editor::lookup::{
    ItemStatus, LookupPhase, LookupServices, NearbyPlace, PlacesLookup, RelatedLink,
    RelatedLinksLookup,
};
use map_marker_editor::{
    AppCommand, AppController, AppIntent, AppState, GeoPos, MarkerId, MemoryStore,
};

/// Obergrenze für alle Warteschleifen in diesen Tests.
const TEST_DEADLINE: Duration = Duration::from_secs(5);

struct FixedPlaces {
    places: Vec<NearbyPlace>,
}

impl PlacesLookup for FixedPlaces {
    fn nearby(&self, _center: GeoPos, _radius_m: u32) -> anyhow::Result<Vec<NearbyPlace>> {
        Ok(self.places.clone())
    }
}

struct FailingPlaces;

impl PlacesLookup for FailingPlaces {
    fn nearby(&self, _center: GeoPos, _radius_m: u32) -> anyhow::Result<Vec<NearbyPlace>> {
        anyhow::bail!("HTTP 503")
    }
}

/// Blockiert die Ortssuche, bis der Sender des Gates fallen gelassen wird.
struct GatedPlaces {
    gate: Mutex<Receiver<()>>,
    places: Vec<NearbyPlace>,
}

impl PlacesLookup for GatedPlaces {
    fn nearby(&self, _center: GeoPos, _radius_m: u32) -> anyhow::Result<Vec<NearbyPlace>> {
        let gate = self
            .gate
            .lock()
            .map_err(|_| anyhow::anyhow!("Gate vergiftet"))?;
        let _ = gate.recv_timeout(TEST_DEADLINE);
        Ok(self.places.clone())
    }
}

/// Liefert pro Ort zwei Links; "Old Mill" schlägt fehl.
struct ScriptedLinks;

impl RelatedLinksLookup for ScriptedLinks {
    fn related(&self, place_name: &str) -> anyhow::Result<Vec<RelatedLink>> {
        if place_name == "Old Mill" {
            anyhow::bail!("HTTP 503");
        }
        Ok(vec![
            RelatedLink {
                title: format!("{place_name} History"),
                url: format!(
                    "https://en.wikipedia.org/wiki/{}_History",
                    place_name.replace(' ', "_")
                ),
            },
            RelatedLink {
                title: place_name.to_string(),
                url: format!(
                    "https://en.wikipedia.org/wiki/{}",
                    place_name.replace(' ', "_")
                ),
            },
        ])
    }
}

struct ManyLinks {
    count: usize,
}

impl RelatedLinksLookup for ManyLinks {
    fn related(&self, place_name: &str) -> anyhow::Result<Vec<RelatedLink>> {
        Ok((0..self.count)
            .map(|i| RelatedLink {
                title: format!("{place_name} {i}"),
                url: format!("https://en.wikipedia.org/wiki/{i}"),
            })
            .collect())
    }
}

/// Blockiert jede Artikelsuche, bis der Sender des Gates fallen gelassen wird.
struct GatedLinks {
    gate: Mutex<Receiver<()>>,
}

impl RelatedLinksLookup for GatedLinks {
    fn related(&self, _place_name: &str) -> anyhow::Result<Vec<RelatedLink>> {
        let gate = self
            .gate
            .lock()
            .map_err(|_| anyhow::anyhow!("Gate vergiftet"))?;
        let _ = gate.recv_timeout(TEST_DEADLINE);
        Ok(vec![RelatedLink {
            title: "Spätestens jetzt".to_string(),
            url: "https://en.wikipedia.org/wiki/Late".to_string(),
        }])
    }
}

fn place(name: &str, distance_m: Option<f64>) -> NearbyPlace {
    NearbyPlace {
        name: name.to_string(),
        distance_m,
    }
}

fn state_with_services(services: LookupServices) -> AppState {
    AppState::with_parts(Box::new(MemoryStore::new()), services)
}

fn add_and_select(controller: &mut AppController, state: &mut AppState) -> MarkerId {
    controller
        .handle_command(
            state,
            AppCommand::AddMarker {
                position: GeoPos::new(40.7, -74.0),
                title: "Testpunkt".to_string(),
            },
        )
        .expect("AddMarker sollte ohne Fehler durchlaufen");
    let id = state
        .registry
        .id_at(state.registry.len() - 1)
        .expect("Marker sollte existieren");

    controller
        .handle_intent(state, AppIntent::MarkerClicked { id })
        .expect("MarkerClicked sollte ohne Fehler durchlaufen");
    id
}

/// Pumpt die Analyse, bis die Bedingung erfüllt ist oder die Frist abläuft.
fn pump_until(state: &mut AppState, mut done: impl FnMut(&AppState) -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < TEST_DEADLINE {
        handlers::lookup::pump(state);
        if done(state) {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    false
}

fn session_settled(state: &AppState) -> bool {
    state
        .overlay
        .area_lookup
        .as_ref()
        .is_some_and(|session| session.is_settled())
}

fn session_phase(state: &AppState) -> &LookupPhase {
    state
        .overlay
        .area_lookup
        .as_ref()
        .expect("Analyse sollte laufen")
        .phase()
}

#[test]
fn test_analysis_resolves_places_and_links_end_to_end() {
    let services = LookupServices {
        places: Arc::new(FixedPlaces {
            places: vec![
                place("Harbor Bridge", Some(120.5)),
                place("Old Mill", None),
            ],
        }),
        links: Arc::new(ScriptedLinks),
    };
    let mut controller = AppController::new();
    let mut state = state_with_services(services);

    add_and_select(&mut controller, &mut state);

    assert!(
        pump_until(&mut state, session_settled),
        "Analyse sollte innerhalb der Frist abschließen"
    );

    let LookupPhase::Ready { items } = session_phase(&state) else {
        panic!("Analyse sollte Orte gefunden haben");
    };
    assert_eq!(items.len(), 2);

    match &items[0].status {
        ItemStatus::Resolved { links } => {
            assert_eq!(links.len(), 2);
            assert_eq!(links[0].title, "Harbor Bridge History");
        }
        other => panic!("Unerwarteter Status für items[0]: {other:?}"),
    }
    assert!(matches!(items[1].status, ItemStatus::Failed));

    assert_eq!(
        items[0].fallback_url,
        "https://www.google.com/search?q=Harbor+Bridge"
    );
    assert_eq!(
        items[1].fallback_url,
        "https://www.google.com/search?q=Old+Mill"
    );
}

#[test]
fn test_analysis_without_nearby_places_settles_to_no_places() {
    let services = LookupServices {
        places: Arc::new(FixedPlaces { places: Vec::new() }),
        links: Arc::new(ScriptedLinks),
    };
    let mut controller = AppController::new();
    let mut state = state_with_services(services);

    add_and_select(&mut controller, &mut state);

    assert!(pump_until(&mut state, session_settled));
    assert!(matches!(session_phase(&state), LookupPhase::NoPlaces));
}

#[test]
fn test_failed_place_search_settles_to_no_places() {
    let services = LookupServices {
        places: Arc::new(FailingPlaces),
        links: Arc::new(ScriptedLinks),
    };
    let mut controller = AppController::new();
    let mut state = state_with_services(services);

    add_and_select(&mut controller, &mut state);

    assert!(pump_until(&mut state, session_settled));
    assert!(matches!(session_phase(&state), LookupPhase::NoPlaces));
}

#[test]
fn test_closing_detail_discards_running_session() {
    let (gate_tx, gate_rx): (Sender<()>, Receiver<()>) = mpsc::channel();
    let services = LookupServices {
        places: Arc::new(GatedPlaces {
            gate: Mutex::new(gate_rx),
            places: vec![place("Harbor Bridge", Some(50.0))],
        }),
        links: Arc::new(ScriptedLinks),
    };
    let mut controller = AppController::new();
    let mut state = state_with_services(services);

    add_and_select(&mut controller, &mut state);

    let first_generation = state
        .overlay
        .area_lookup
        .as_ref()
        .expect("Analyse sollte laufen")
        .generation();
    assert!(matches!(
        session_phase(&state),
        LookupPhase::SearchingPlaces
    ));

    controller
        .handle_intent(&mut state, AppIntent::OverlayDismissRequested)
        .expect("OverlayDismissRequested sollte ohne Fehler durchlaufen");
    assert!(state.overlay.area_lookup.is_none());

    // Gate öffnen: der hängende Worker sendet in den toten Kanal
    drop(gate_tx);

    let id = state.registry.id_at(0).expect("Marker sollte existieren");
    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { id })
        .expect("MarkerClicked sollte ohne Fehler durchlaufen");

    let second_generation = state
        .overlay
        .area_lookup
        .as_ref()
        .expect("Analyse sollte erneut laufen")
        .generation();
    assert!(second_generation > first_generation);

    assert!(pump_until(&mut state, session_settled));
    let LookupPhase::Ready { items } = session_phase(&state) else {
        panic!("Zweite Analyse sollte Orte gefunden haben");
    };
    assert_eq!(items.len(), 1);
}

#[test]
fn test_reopening_analysis_targets_new_marker() {
    let services = LookupServices {
        places: Arc::new(FixedPlaces {
            places: vec![place("Harbor Bridge", Some(50.0))],
        }),
        links: Arc::new(ScriptedLinks),
    };
    let mut controller = AppController::new();
    let mut state = state_with_services(services);

    let first = add_and_select(&mut controller, &mut state);
    let first_generation = state
        .overlay
        .area_lookup
        .as_ref()
        .expect("Analyse sollte laufen")
        .generation();

    let second = add_and_select(&mut controller, &mut state);
    assert_ne!(first, second);

    let session = state
        .overlay
        .area_lookup
        .as_ref()
        .expect("Analyse sollte laufen");
    assert_eq!(session.marker_id(), second);
    assert!(session.generation() > first_generation);

    assert!(pump_until(&mut state, session_settled));
}

#[test]
fn test_link_cap_limits_resolved_links() {
    let services = LookupServices {
        places: Arc::new(FixedPlaces {
            places: vec![place("Harbor Bridge", Some(50.0))],
        }),
        links: Arc::new(ManyLinks { count: 12 }),
    };
    let mut controller = AppController::new();
    let mut state = state_with_services(services);
    state.options.wiki_link_cap = 3;

    add_and_select(&mut controller, &mut state);

    assert!(pump_until(&mut state, session_settled));
    let LookupPhase::Ready { items } = session_phase(&state) else {
        panic!("Analyse sollte Orte gefunden haben");
    };
    match &items[0].status {
        ItemStatus::Resolved { links } => assert_eq!(links.len(), 3),
        other => panic!("Unerwarteter Status: {other:?}"),
    }
}

#[test]
fn test_deadline_expiry_marks_item_failed_and_discards_late_reply() {
    let (gate_tx, gate_rx): (Sender<()>, Receiver<()>) = mpsc::channel();
    let services = LookupServices {
        places: Arc::new(FixedPlaces {
            places: vec![place("Harbor Bridge", Some(50.0))],
        }),
        links: Arc::new(GatedLinks {
            gate: Mutex::new(gate_rx),
        }),
    };
    let mut controller = AppController::new();
    let mut state = state_with_services(services);
    state.options.lookup_timeout_secs = 1;

    add_and_select(&mut controller, &mut state);

    // Frist von einer Sekunde läuft ab, während der Worker hängt
    let failed = pump_until(&mut state, |state| {
        matches!(
            state.overlay.area_lookup.as_ref().map(|s| s.phase()),
            Some(LookupPhase::Ready { items })
                if matches!(items[0].status, ItemStatus::Failed)
        )
    });
    assert!(failed, "Fristablauf sollte den Ort als gescheitert markieren");

    // Verspätete Antwort darf das Ergebnis nicht mehr ändern
    drop(gate_tx);
    thread::sleep(Duration::from_millis(100));
    handlers::lookup::pump(&mut state);

    let LookupPhase::Ready { items } = session_phase(&state) else {
        panic!("Analyse sollte Orte gefunden haben");
    };
    assert!(matches!(items[0].status, ItemStatus::Failed));
}
