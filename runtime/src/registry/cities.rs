//! Dutch cities served by `/steden/{city}` and their priority tiers.

/// A city with a location page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub slug: &'static str,
    pub province: &'static str,
    pub population: u32,
}

pub static CITIES: &[City] = &[
    City { name: "Amsterdam", slug: "amsterdam", province: "Noord-Holland", population: 872_680 },
    City { name: "Rotterdam", slug: "rotterdam", province: "Zuid-Holland", population: 651_446 },
    City { name: "Utrecht", slug: "utrecht", province: "Utrecht", population: 361_924 },
    City { name: "Den Haag", slug: "den-haag", province: "Zuid-Holland", population: 548_320 },
    City { name: "Eindhoven", slug: "eindhoven", province: "Noord-Brabant", population: 238_326 },
    City { name: "Tilburg", slug: "tilburg", province: "Noord-Brabant", population: 223_578 },
    City { name: "Groningen", slug: "groningen", province: "Groningen", population: 235_287 },
    City { name: "Almere", slug: "almere", province: "Flevoland", population: 218_096 },
    City { name: "Breda", slug: "breda", province: "Noord-Brabant", population: 184_403 },
    City { name: "Nijmegen", slug: "nijmegen", province: "Gelderland", population: 179_073 },
    City { name: "Haarlem", slug: "haarlem", province: "Noord-Holland", population: 162_543 },
    City { name: "Arnhem", slug: "arnhem", province: "Gelderland", population: 161_368 },
    City { name: "Amersfoort", slug: "amersfoort", province: "Utrecht", population: 159_896 },
    City { name: "Zaanstad", slug: "zaanstad", province: "Noord-Holland", population: 156_711 },
    City { name: "Den Bosch", slug: "den-bosch", province: "Noord-Brabant", population: 157_486 },
    City { name: "Zwolle", slug: "zwolle", province: "Overijssel", population: 130_668 },
];

/// Cities strictly above this population get [`METRO_PRIORITY`].
pub const METRO_POPULATION: u32 = 500_000;
/// Cities strictly above this population get [`LARGE_CITY_PRIORITY`].
pub const LARGE_CITY_POPULATION: u32 = 200_000;
/// Cities strictly above this population get [`MID_CITY_PRIORITY`].
pub const MID_CITY_POPULATION: u32 = 150_000;

pub const METRO_PRIORITY: f64 = 0.8;
pub const LARGE_CITY_PRIORITY: f64 = 0.7;
pub const MID_CITY_PRIORITY: f64 = 0.65;
pub const BASE_CITY_PRIORITY: f64 = 0.6;

/// How many of the largest cities get per-service combination pages.
pub const COMBINATION_CITY_COUNT: usize = 10;

/// Combination pages rank this far below their city page.
pub const COMBINATION_PRIORITY_STEP: f64 = 0.1;
pub const COMBINATION_PRIORITY_FLOOR: f64 = 0.5;

pub const LOCATION_LOCALES: &[&str] = &["nl-NL"];

/// Sitemap priority for a city page. Thresholds are exclusive.
pub fn city_priority(population: u32) -> f64 {
    if population > METRO_POPULATION {
        METRO_PRIORITY
    } else if population > LARGE_CITY_POPULATION {
        LARGE_CITY_PRIORITY
    } else if population > MID_CITY_POPULATION {
        MID_CITY_PRIORITY
    } else {
        BASE_CITY_PRIORITY
    }
}

/// Sitemap priority for a `/steden/{city}/{service}` page.
pub fn combination_priority(population: u32) -> f64 {
    let raw = city_priority(population) - COMBINATION_PRIORITY_STEP;
    // Round to hundredths so 0.8 - 0.1 renders as 0.7.
    ((raw * 100.0).round() / 100.0).max(COMBINATION_PRIORITY_FLOOR)
}

/// The `n` most populous cities, largest first. Ties keep table order.
pub fn largest_cities(n: usize) -> Vec<&'static City> {
    let mut sorted: Vec<&'static City> = CITIES.iter().collect();
    sorted.sort_by(|a, b| b.population.cmp(&a.population));
    sorted.truncate(n);
    sorted
}

pub fn city(slug: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.slug == slug)
}
