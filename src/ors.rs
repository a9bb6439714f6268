//! OpenRouteService HTTP adapter for distances and route geometry.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::route::RoutePath;
use crate::traits::{DistanceProvider, DistanceUnavailable, RouteEstimate};

const MILES_PER_KM: f64 = 0.621371;

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url: String,
    /// Injected per deployment; never baked into the crate.
    pub api_key: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openrouteservice.org".to_string(),
            api_key: String::new(),
            profile: "driving-car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Error)]
pub enum OrsError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(&'static str),
}

/// A fetched driving route: resolved estimate plus decoded geometry.
#[derive(Debug, Clone)]
pub struct OrsRoute {
    pub estimate: RouteEstimate,
    pub path: RoutePath,
    /// First named road from the turn-by-turn steps, if any.
    pub primary_road: Option<String>,
}

/// A reverse-geocoded place.
#[derive(Debug, Clone, Default)]
pub struct GeocodedPlace {
    pub name: Option<String>,
    pub label: Option<String>,
    pub street: Option<String>,
    pub locality: Option<String>,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Fetches the driving route between two (lat, lng) pairs.
    pub fn directions(&self, from: (f64, f64), to: (f64, f64)) -> Result<OrsRoute, OrsError> {
        let url = format!(
            "{}/v2/directions/{}?api_key={}&start={:.6},{:.6}&end={:.6},{:.6}",
            self.config.base_url, self.config.profile, self.config.api_key, from.1, from.0, to.1,
            to.0
        );

        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<DirectionsResponse>()?;

        let route = route_from_response(body)?;
        debug!(
            miles = route.estimate.miles,
            duration = %route.estimate.duration_label,
            points = route.path.points().len(),
            "fetched directions"
        );
        Ok(route)
    }

    /// Reverse geocodes a (lat, lng) pair to a named place.
    pub fn reverse_geocode(&self, point: (f64, f64)) -> Result<GeocodedPlace, OrsError> {
        let url = format!(
            "{}/geocode/reverse?api_key={}&point.lat={:.6}&point.lon={:.6}",
            self.config.base_url, self.config.api_key, point.0, point.1
        );

        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<GeocodeResponse>()?;

        let feature = body
            .features
            .into_iter()
            .next()
            .ok_or(OrsError::Malformed("no geocode features"))?;

        Ok(GeocodedPlace {
            name: feature.properties.name,
            label: feature.properties.label,
            street: feature.properties.street,
            locality: feature.properties.locality,
        })
    }
}

impl DistanceProvider for OrsClient {
    fn resolve(
        &self,
        from: (f64, f64),
        to: (f64, f64),
    ) -> Result<RouteEstimate, DistanceUnavailable> {
        self.directions(from, to)
            .map(|route| route.estimate)
            .map_err(|err| DistanceUnavailable::new(err.to_string()))
    }
}

fn route_from_response(body: DirectionsResponse) -> Result<OrsRoute, OrsError> {
    let feature = body
        .features
        .into_iter()
        .next()
        .ok_or(OrsError::Malformed("no route features"))?;

    let summary = feature
        .properties
        .summary
        .ok_or(OrsError::Malformed("no route summary"))?;

    let miles = round2(summary.distance / 1_000.0 * MILES_PER_KM);

    // Coordinates arrive as [lng, lat], possibly with extra dimensions.
    let points = feature
        .geometry
        .map(|geometry| geometry.coordinates)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|coord| match (coord.first(), coord.get(1)) {
            (Some(&lng), Some(&lat)) => Some((lat, lng)),
            _ => None,
        })
        .collect();

    let primary_road = feature
        .properties
        .segments
        .iter()
        .flat_map(|segment| &segment.steps)
        .find_map(|step| {
            step.name
                .as_deref()
                .filter(|name| !name.is_empty() && *name != "-")
                .map(str::to_string)
        });

    Ok(OrsRoute {
        estimate: RouteEstimate {
            miles,
            duration_label: duration_label(summary.duration),
        },
        path: RoutePath::new(points),
        primary_road,
    })
}

fn duration_label(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}h {}m", total / 3600, (total % 3600) / 60)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    features: Vec<DirectionsFeature>,
}

#[derive(Debug, Deserialize)]
struct DirectionsFeature {
    #[serde(default)]
    properties: DirectionsProperties,
    geometry: Option<DirectionsGeometry>,
}

#[derive(Debug, Default, Deserialize)]
struct DirectionsProperties {
    summary: Option<DirectionsSummary>,
    #[serde(default)]
    segments: Vec<DirectionsSegment>,
}

/// Distance in meters, duration in seconds.
#[derive(Debug, Deserialize)]
struct DirectionsSummary {
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct DirectionsSegment {
    #[serde(default)]
    steps: Vec<DirectionsStep>,
}

#[derive(Debug, Deserialize)]
struct DirectionsStep {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectionsGeometry {
    #[serde(default)]
    coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    #[serde(default)]
    properties: GeocodeProperties,
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeProperties {
    name: Option<String>,
    label: Option<String>,
    street: Option<String>,
    locality: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIONS_BODY: &str = r#"{
        "features": [{
            "geometry": {
                "coordinates": [
                    [-87.6298, 41.8781],
                    [-101.8313, 35.2220],
                    [-115.1398, 36.1699],
                    [-118.2437, 34.0522]
                ]
            },
            "properties": {
                "summary": { "distance": 3379879.0, "duration": 110460.0 },
                "segments": [{
                    "steps": [
                        { "name": "-" },
                        { "name": "Interstate 55" },
                        { "name": "Interstate 40" }
                    ]
                }]
            }
        }]
    }"#;

    #[test]
    fn parses_directions_response() {
        let body: DirectionsResponse = serde_json::from_str(DIRECTIONS_BODY).unwrap();
        let route = route_from_response(body).unwrap();

        // 3,379,879 m -> 3,379.879 km -> 2,100.16 miles (2 decimals).
        assert_eq!(route.estimate.miles, 2_100.16);
        assert_eq!(route.estimate.duration_label, "30h 41m");
        assert_eq!(route.primary_road.as_deref(), Some("Interstate 55"));

        // [lng, lat] pairs come back as (lat, lng).
        assert_eq!(route.path.points()[0], (41.8781, -87.6298));
        assert_eq!(route.path.interior().len(), 2);
    }

    #[test]
    fn missing_features_is_malformed() {
        let body: DirectionsResponse = serde_json::from_str(r#"{"features": []}"#).unwrap();
        assert!(matches!(
            route_from_response(body),
            Err(OrsError::Malformed("no route features"))
        ));
    }

    #[test]
    fn missing_summary_is_malformed() {
        let body: DirectionsResponse =
            serde_json::from_str(r#"{"features": [{"properties": {}}]}"#).unwrap();
        assert!(matches!(
            route_from_response(body),
            Err(OrsError::Malformed("no route summary"))
        ));
    }

    #[test]
    fn parses_geocode_properties() {
        let body: GeocodeResponse = serde_json::from_str(
            r#"{
                "features": [{
                    "properties": {
                        "name": "Petro Travel Center",
                        "label": "Petro Travel Center, Amarillo, TX, USA",
                        "street": "Interstate 40 Frontage Rd",
                        "locality": "Amarillo"
                    }
                }]
            }"#,
        )
        .unwrap();

        let feature = body.features.into_iter().next().unwrap();
        assert_eq!(feature.properties.street.as_deref(), Some("Interstate 40 Frontage Rd"));
        assert_eq!(feature.properties.locality.as_deref(), Some("Amarillo"));
    }

    #[test]
    fn duration_label_formats_hours_and_minutes() {
        assert_eq!(duration_label(5_430.0), "1h 30m");
        assert_eq!(duration_label(59.0), "0h 0m");
    }
}
