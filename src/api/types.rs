//! Data types for PokeAPI responses
//!
//! These structs mirror the subset of PokeAPI the explorer reads. Some fields
//! are not displayed but are kept so the models match the upstream shapes.

use serde::Deserialize;

/// A name plus the URL to fetch the full resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// == Location area listing ==

/// One page of the `/location-area` listing
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

// == Single location area ==

/// Detail of one location area from `/location-area/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub game_index: u32,
    pub location: Option<NamedResource>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub encounter_method_rates: Vec<EncounterMethodRate>,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// Localised name of a resource
#[derive(Debug, Clone, Deserialize)]
pub struct Name {
    pub name: String,
    pub language: NamedResource,
}

/// How often an encounter method occurs, per game version
#[derive(Debug, Clone, Deserialize)]
pub struct EncounterMethodRate {
    pub encounter_method: NamedResource,
    #[serde(default)]
    pub version_details: Vec<EncounterVersionDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncounterVersionDetails {
    pub rate: u32,
    pub version: NamedResource,
}

/// A creature that can be encountered in a location area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionEncounterDetail {
    pub version: NamedResource,
    pub max_chance: u32,
    #[serde(default)]
    pub encounter_details: Vec<Encounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub min_level: u32,
    pub max_level: u32,
    pub chance: u32,
    pub method: NamedResource,
    #[serde(default)]
    pub condition_values: Vec<NamedResource>,
}

// == Pokemon ==

/// The fields of `/pokemon/{name}` the explorer uses
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Null upstream for some creatures
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_area_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_area_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "location": {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
            "names": [{"name": "", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}}],
            "encounter_method_rates": [{
                "encounter_method": {"name": "old-rod", "url": "https://pokeapi.co/api/v2/encounter-method/2/"},
                "version_details": [{"rate": 25, "version": {"name": "diamond", "url": "https://pokeapi.co/api/v2/version/12/"}}]
            }],
            "pokemon_encounters": [{
                "pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"},
                "version_details": [{
                    "version": {"name": "diamond", "url": "https://pokeapi.co/api/v2/version/12/"},
                    "max_chance": 60,
                    "encounter_details": [{
                        "min_level": 20, "max_level": 30, "chance": 60,
                        "method": {"name": "surf", "url": "https://pokeapi.co/api/v2/encounter-method/5/"},
                        "condition_values": []
                    }]
                }]
            }]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.name, "canalave-city-area");
        assert_eq!(area.pokemon_encounters.len(), 1);
        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");
        assert_eq!(
            area.pokemon_encounters[0].version_details[0].encounter_details[0].chance,
            60
        );
        assert_eq!(area.encounter_method_rates[0].version_details[0].rate, 25);
    }

    #[test]
    fn test_location_area_missing_collections_default() {
        let json = r#"{"id": 7, "name": "empty-area", "location": null}"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert!(area.pokemon_encounters.is_empty());
        assert!(area.names.is_empty());
    }

    #[test]
    fn test_pokemon_null_base_experience() {
        let json = r#"{"id": 10001, "name": "deoxys-attack", "base_experience": null, "height": 17, "weight": 608}"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "deoxys-attack");
        assert!(pokemon.base_experience.is_none());
    }
}
