use serde::{Deserialize, Serialize};

/// Географическая точка (магазин, офис)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Directions link; the map itself is rendered by the external map service.
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={:.6},{:.6}",
            self.lat, self.lng
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_url() {
        let p = GeoPoint::new(24.7136, 46.6753);
        assert_eq!(
            p.map_url(),
            "https://www.google.com/maps/search/?api=1&query=24.713600,46.675300"
        );
    }
}
