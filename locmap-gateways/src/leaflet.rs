use askama::{filters::escape, Html, Template};
use locmap_core::{
    gateways::render::MapRenderer,
    usecases::{LayerMode, MapModel},
};
use serde::Serialize;
use thiserror::Error;

const DEFAULT_TITLE: &str = "Company Locations";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] askama::Error),
}

/// Renders a standalone HTML document with a Leaflet map.
///
/// Leaflet and the marker cluster plugin are loaded from a CDN
/// when the document is opened.
#[derive(Debug, Clone)]
pub struct LeafletRenderer {
    title: String,
}

impl Default for LeafletRenderer {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl LeafletRenderer {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn render(&self, map: &MapModel) -> Result<String, RenderError> {
        let legend: Vec<_> = map
            .legend
            .iter()
            .enumerate()
            .map(|(index, entry)| LegendItem {
                index,
                company_name: &entry.company_name,
                color: entry.color.to_string(),
            })
            .collect();
        let company_index = |name: &str| {
            map.legend
                .iter()
                .position(|e| e.company_name == name)
                .unwrap_or_default()
        };
        let markers = map
            .markers
            .iter()
            .map(|m| -> askama::Result<_> {
                let (lat, lng) = m.pos.to_lat_lng_deg();
                Ok(MarkerData {
                    lat,
                    lng,
                    color: m.color.to_string(),
                    company: company_index(&m.company_name),
                    popup: popup_html(&m.company_name, &m.address)?,
                })
            })
            .collect::<askama::Result<Vec<_>>>()?;
        // Layer control labels are interpreted as HTML
        let companies = map
            .legend
            .iter()
            .map(|e| escape(Html, &e.company_name).map(|escaped| escaped.to_string()))
            .collect::<askama::Result<Vec<_>>>()?;
        let (center_lat, center_lng) = map.center.to_lat_lng_deg();
        let template = LeafletMapTemplate {
            title: &self.title,
            center_lat,
            center_lng,
            zoom: map.zoom,
            clustered: map.layer_mode == LayerMode::Clustered,
            legend,
            companies,
            markers,
        };
        Ok(template.render()?)
    }
}

impl MapRenderer for LeafletRenderer {
    fn render_map(&self, map: &MapModel) -> anyhow::Result<String> {
        Ok(self.render(map)?)
    }
}

#[derive(Template)]
#[template(path = "leaflet_map.html")]
struct LeafletMapTemplate<'a> {
    title: &'a str,
    center_lat: f64,
    center_lng: f64,
    zoom: u8,
    clustered: bool,
    legend: Vec<LegendItem<'a>>,
    /// Embedded as JSON
    companies: Vec<String>,
    /// Embedded as JSON
    markers: Vec<MarkerData>,
}

struct LegendItem<'a> {
    index: usize,
    company_name: &'a str,
    color: String,
}

#[derive(Serialize)]
struct MarkerData {
    lat: f64,
    lng: f64,
    color: String,
    company: usize,
    popup: String,
}

#[derive(Template)]
#[template(source = "<b>{{ company_name }}</b><br>{{ address }}", ext = "html")]
struct PopupTemplate<'a> {
    company_name: &'a str,
    address: &'a str,
}

fn popup_html(company_name: &str, address: &str) -> askama::Result<String> {
    PopupTemplate {
        company_name,
        address,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use locmap_core::{
        entities::*,
        usecases::{LegendEntry, Marker},
    };

    fn map_model(layer_mode: LayerMode) -> MapModel {
        let red = Color::rgb(0xFF, 0, 0);
        let blue = Color::rgb(0, 0, 0xFF);
        MapModel {
            center: MapPoint::from_lat_lng_deg(40.0, -90.0),
            zoom: 5,
            layer_mode,
            markers: vec![
                Marker {
                    pos: MapPoint::from_lat_lng_deg(40.5, -89.5),
                    company_name: "Bar & Co".into(),
                    address: "Main St 1".into(),
                    color: red,
                },
                Marker {
                    pos: MapPoint::from_lat_lng_deg(39.5, -90.5),
                    company_name: "<script>alert(1)</script>".into(),
                    address: "Elm St 2".into(),
                    color: blue,
                },
            ],
            legend: vec![
                LegendEntry {
                    company_name: "<script>alert(1)</script>".into(),
                    color: blue,
                },
                LegendEntry {
                    company_name: "Bar & Co".into(),
                    color: red,
                },
            ],
        }
    }

    #[test]
    fn render_per_company_layers() {
        let html = LeafletRenderer::default()
            .render(&map_model(LayerMode::PerCompany))
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("setView([40, -90], 5)"));
        assert!(html.contains("L.control.layers"));
        assert!(!html.contains("markerClusterGroup"));
        assert!(html.contains("radius: 6"));
        assert!(html.contains("background:#FF0000;"));
        assert!(html.contains("background:#0000FF;"));
    }

    #[test]
    fn render_clustered_markers() {
        let html = LeafletRenderer::default()
            .render(&map_model(LayerMode::Clustered))
            .unwrap();
        assert!(html.contains("L.markerClusterGroup()"));
        assert!(html.contains("leaflet.markercluster.js"));
        assert!(!html.contains("L.control.layers"));
    }

    #[test]
    fn escape_user_text() {
        let html = LeafletRenderer::default()
            .render(&map_model(LayerMode::PerCompany))
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
    }

    #[test]
    fn markers_reference_their_legend_entry() {
        let html = LeafletRenderer::default()
            .render(&map_model(LayerMode::PerCompany))
            .unwrap();
        let start = html.find("const markers = ").unwrap() + "const markers = ".len();
        let end = start + html[start..].find(";\n").unwrap();
        let markers: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(Some(1), markers[0]["company"].as_u64());
        assert_eq!(Some("#FF0000"), markers[0]["color"].as_str());
        assert_eq!(Some(40.5), markers[0]["lat"].as_f64());
        assert_eq!(Some(0), markers[1]["company"].as_u64());
        assert_eq!(Some(-90.5), markers[1]["lng"].as_f64());
    }

    #[test]
    fn popup_content() {
        assert_eq!(
            "<b>Bar &amp; Co</b><br>O&#x27;Hare Rd &lt;1&gt;",
            popup_html("Bar & Co", "O'Hare Rd <1>").unwrap()
        );
    }

    #[test]
    fn script_data_cannot_close_the_script_element() {
        let mut map = map_model(LayerMode::PerCompany);
        map.markers[0].address = "</script><script>alert(2)</script>".into();
        let html = LeafletRenderer::default().render(&map).unwrap();
        assert!(!html.contains("</script><script>alert(2)"));
        assert_eq!(2, html.matches("</script>").count());
    }

    #[test]
    fn render_empty_map() {
        let map = MapModel {
            center: MapPoint::from_lat_lng_deg(39.8283, -98.5795),
            zoom: 5,
            layer_mode: LayerMode::PerCompany,
            markers: vec![],
            legend: vec![],
        };
        let html = LeafletRenderer::with_title("Empty")
            .render_map(&map)
            .unwrap();
        assert!(html.contains("<title>Empty</title>"));
        assert!(html.contains("const markers = [];"));
        assert!(html.contains("const companies = [];"));
    }
}
