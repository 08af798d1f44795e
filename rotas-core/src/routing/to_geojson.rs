use geo::{Coord, LineString};
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::Route;
use crate::{Error, RoutingNetwork};

impl Route {
    /// Converts the route to a `GeoJSON` `LineString` feature in network coordinates.
    ///
    /// # Errors
    ///
    /// Fails if a vertex of the route is missing from `network`.
    pub fn to_geojson(&self, network: &RoutingNetwork) -> Result<Feature, Error> {
        let coords = self
            .vertices()
            .iter()
            .map(|&id| {
                network.vertex(id).map(|vertex| Coord {
                    x: f64::from(vertex.x()),
                    y: f64::from(vertex.y()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "origin": self.origin(),
                "destination": self.destination(),
                "vertices": self.vertices(),
                "distance_m": self.distance(),
                "streets": self.streets(network),
            }
        });

        serde_json::from_value::<Feature>(value)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self, network: &RoutingNetwork) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
