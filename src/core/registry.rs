//! Zentrale Marker-Registry: kanonische Reihenfolge plus Listen-Projektion.
//!
//! Die Registry ist die einzige Quelle für Marker-Daten. Jede Mutation
//! aktualisiert Marker und Listen-Projektion im selben Schritt, damit beide
//! Sichten nie auseinanderlaufen.

use indexmap::IndexMap;

use super::{GeoPos, Marker, MarkerId, MarkerRecord};

/// Eintrag der Listen-Projektion für das Seitenpanel.
///
/// `original_index` ist die Position des Markers in der kanonischen
/// Reihenfolge und bleibt auch in gefilterten Teilmengen gültig.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Anzeigename (identisch zum Marker-Titel)
    pub title: String,
    /// Sichtbarkeit (identisch zum Marker)
    pub visible: bool,
    /// Index in der kanonischen Reihenfolge
    pub original_index: usize,
}

/// Typisierter Registry-Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Die angefragte Marker-ID existiert nicht (mehr).
    #[error("Marker {0} nicht gefunden")]
    NotFound(MarkerId),
}

/// Geordnete Sammlung aller Marker einer Sitzung.
///
/// Kanonische Reihenfolge = Einfüge-Reihenfolge; nur `remove` verschiebt
/// nachfolgende Indizes. Die Projektion wird bei jeder Mutation gepatcht,
/// nicht neu aufgebaut.
pub struct MarkerRegistry {
    markers: IndexMap<MarkerId, Marker>,
    entries: Vec<ListEntry>,
    next_id: u64,
}

impl MarkerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            markers: IndexMap::new(),
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Fügt einen Marker am Ende der kanonischen Reihenfolge hinzu.
    /// Neue Marker sind immer sichtbar.
    pub fn add(&mut self, position: GeoPos, title: impl Into<String>) -> MarkerId {
        let id = MarkerId::from_raw(self.next_id);
        self.next_id += 1;

        let title = title.into();
        self.markers.insert(
            id,
            Marker {
                id,
                position,
                title: title.clone(),
                visible: true,
            },
        );
        self.entries.push(ListEntry {
            title,
            visible: true,
            original_index: self.markers.len() - 1,
        });

        id
    }

    /// Benennt einen Marker um und patcht die Projektion.
    pub fn rename(&mut self, id: MarkerId, title: impl Into<String>) -> Result<(), RegistryError> {
        let index = self
            .markers
            .get_index_of(&id)
            .ok_or(RegistryError::NotFound(id))?;
        let title = title.into();

        self.markers[index].title = title.clone();
        self.entries[index].title = title;
        Ok(())
    }

    /// Setzt die Sichtbarkeit eines Markers und patcht die Projektion.
    /// Berührt den persistenten Store nicht.
    pub fn set_visibility(&mut self, id: MarkerId, visible: bool) -> Result<(), RegistryError> {
        let index = self
            .markers
            .get_index_of(&id)
            .ok_or(RegistryError::NotFound(id))?;

        self.markers[index].visible = visible;
        self.entries[index].visible = visible;
        Ok(())
    }

    /// Entfernt einen Marker unter Erhalt der Reihenfolge aller übrigen.
    ///
    /// Alle nachfolgenden Projektions-Einträge rücken um eine Position auf,
    /// ihr `original_index` sinkt also um eins.
    pub fn remove(&mut self, id: MarkerId) -> Result<Marker, RegistryError> {
        let index = self
            .markers
            .get_index_of(&id)
            .ok_or(RegistryError::NotFound(id))?;

        // shift_remove erhält die Reihenfolge, swap_remove würde sie zerstören
        let (_, removed) = self
            .markers
            .shift_remove_index(index)
            .ok_or(RegistryError::NotFound(id))?;
        self.entries.remove(index);
        for entry in self.entries.iter_mut().skip(index) {
            entry.original_index -= 1;
        }

        Ok(removed)
    }

    /// Ersetzt den gesamten Bestand durch gespeicherte Records.
    /// Wiederhergestellte Marker sind sichtbar; IDs werden neu vergeben.
    pub fn replace_from_records(&mut self, records: Vec<MarkerRecord>) {
        self.markers.clear();
        self.entries.clear();
        for record in records {
            self.add(record.position, record.title);
        }
    }

    /// Persistente Projektion in kanonischer Reihenfolge.
    pub fn records(&self) -> Vec<MarkerRecord> {
        self.markers
            .values()
            .map(|marker| MarkerRecord {
                position: marker.position,
                title: marker.title.clone(),
            })
            .collect()
    }

    /// Gibt einen Marker per ID zurück.
    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    /// Gibt die Marker-ID zum kanonischen Index zurück.
    pub fn id_at(&self, original_index: usize) -> Option<MarkerId> {
        self.markers
            .get_index(original_index)
            .map(|(id, _)| *id)
    }

    /// Iteriert über alle Marker in kanonischer Reihenfolge.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Listen-Projektion in kanonischer Reihenfolge.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Anzahl aller Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Anzahl der aktuell sichtbaren Marker.
    pub fn visible_len(&self) -> usize {
        self.markers.values().filter(|m| m.visible).count()
    }

    /// Findet den nächsten sichtbaren Marker im Umkreis der Weltposition.
    ///
    /// Linear-Scan über alle Marker; `max_distance` in Welt-Einheiten (Grad).
    pub fn nearest_visible_within(
        &self,
        world_pos: glam::DVec2,
        max_distance: f64,
    ) -> Option<MarkerId> {
        let mut best: Option<(MarkerId, f64)> = None;
        for marker in self.markers.values().filter(|m| m.visible) {
            let dist = (marker.position.to_world() - world_pos).length();
            if dist <= max_distance && best.is_none_or(|(_, d)| dist < d) {
                best = Some((marker.id, dist));
            }
        }
        best.map(|(id, _)| id)
    }
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lat: f64, lng: f64) -> GeoPos {
        GeoPos::new(lat, lng)
    }

    #[test]
    fn test_add_extends_projection_in_lockstep() {
        let mut registry = MarkerRegistry::new();
        let a = registry.add(pos(1.0, 1.0), "A");
        let b = registry.add(pos(2.0, 2.0), "B");

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries().len(), 2);
        assert_eq!(registry.entries()[0].title, "A");
        assert_eq!(registry.entries()[1].title, "B");
        assert_eq!(registry.entries()[0].original_index, 0);
        assert_eq!(registry.entries()[1].original_index, 1);
        assert!(registry.entries().iter().all(|e| e.visible));
    }

    #[test]
    fn test_rename_patches_marker_and_projection() {
        let mut registry = MarkerRegistry::new();
        let id = registry.add(pos(1.0, 1.0), "Old");

        registry
            .rename(id, "New")
            .expect("Rename sollte funktionieren");

        assert_eq!(registry.get(id).map(|m| m.title.as_str()), Some("New"));
        assert_eq!(registry.entries()[0].title, "New");
    }

    #[test]
    fn test_rename_unknown_id_is_typed_not_found() {
        let mut registry = MarkerRegistry::new();
        let id = registry.add(pos(1.0, 1.0), "A");
        registry.remove(id).expect("Remove sollte funktionieren");

        let err = registry.rename(id, "B").expect_err("ID existiert nicht mehr");
        assert_eq!(err, RegistryError::NotFound(id));
    }

    #[test]
    fn test_set_visibility_patches_projection() {
        let mut registry = MarkerRegistry::new();
        let id = registry.add(pos(1.0, 1.0), "A");

        registry
            .set_visibility(id, false)
            .expect("Sichtbarkeit sollte setzbar sein");

        assert!(!registry.get(id).map(|m| m.visible).unwrap_or(true));
        assert!(!registry.entries()[0].visible);
        assert_eq!(registry.visible_len(), 0);
    }

    #[test]
    fn test_remove_renumbers_following_entries() {
        let mut registry = MarkerRegistry::new();
        let _a = registry.add(pos(1.0, 1.0), "A");
        let b = registry.add(pos(2.0, 2.0), "B");
        let _c = registry.add(pos(3.0, 3.0), "C");

        let removed = registry.remove(b).expect("Remove sollte funktionieren");
        assert_eq!(removed.title, "B");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].title, "A");
        assert_eq!(registry.entries()[0].original_index, 0);
        assert_eq!(registry.entries()[1].title, "C");
        assert_eq!(registry.entries()[1].original_index, 1);

        // id_at folgt der neuen Nummerierung
        let title_at_1 = registry
            .id_at(1)
            .and_then(|id| registry.get(id))
            .map(|m| m.title.as_str());
        assert_eq!(title_at_1, Some("C"));
    }

    #[test]
    fn test_ids_are_never_reused_after_remove() {
        let mut registry = MarkerRegistry::new();
        let a = registry.add(pos(1.0, 1.0), "A");
        registry.remove(a).expect("Remove sollte funktionieren");
        let b = registry.add(pos(2.0, 2.0), "B");

        assert_ne!(a, b);
    }

    #[test]
    fn test_records_contain_only_position_and_title() {
        let mut registry = MarkerRegistry::new();
        registry.add(pos(1.0, 1.0), "A");
        let id = registry.add(pos(2.0, 2.0), "B");
        registry
            .set_visibility(id, false)
            .expect("Sichtbarkeit sollte setzbar sein");

        let records = registry.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "A");
        assert_eq!(records[1].title, "B");
        assert_eq!(records[1].position, pos(2.0, 2.0));
    }

    #[test]
    fn test_replace_from_records_restores_visible_markers() {
        let mut registry = MarkerRegistry::new();
        let old = registry.add(pos(9.0, 9.0), "Alt");
        registry
            .set_visibility(old, false)
            .expect("Sichtbarkeit sollte setzbar sein");

        registry.replace_from_records(vec![
            MarkerRecord {
                position: pos(1.0, 1.0),
                title: "A".into(),
            },
            MarkerRecord {
                position: pos(2.0, 2.0),
                title: "B".into(),
            },
        ]);

        assert_eq!(registry.len(), 2);
        assert!(registry.markers().all(|m| m.visible));
        assert_eq!(registry.entries()[0].title, "A");
        assert_eq!(registry.entries()[1].original_index, 1);
    }

    #[test]
    fn test_nearest_visible_within_ignores_hidden_markers() {
        let mut registry = MarkerRegistry::new();
        let near = registry.add(pos(0.0, 0.0), "Near");
        let far = registry.add(pos(0.5, 0.5), "Far");

        let world = glam::DVec2::new(0.01, 0.01);
        assert_eq!(registry.nearest_visible_within(world, 0.1), Some(near));

        registry
            .set_visibility(near, false)
            .expect("Sichtbarkeit sollte setzbar sein");
        assert_eq!(registry.nearest_visible_within(world, 0.1), None);
        assert_eq!(registry.nearest_visible_within(world, 2.0), Some(far));
    }
}
