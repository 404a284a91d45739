use crate::usecases::{assign_colors, mappable, prelude::*};

/// Center of the contiguous United States.
pub const DEFAULT_MAP_CENTER: (f64, f64) = (39.8283, -98.5795);
pub const DEFAULT_MAP_ZOOM: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerMode {
    /// One toggleable layer per company.
    #[default]
    PerCompany,
    /// All markers in one clustered layer.
    Clustered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub zoom: u8,
    pub layer_mode: LayerMode,
    pub palette: Palette,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_MAP_ZOOM,
            layer_mode: LayerMode::default(),
            palette: Palette::default(),
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos          : MapPoint,
    pub company_name : String,
    pub address      : String,
    pub color        : Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub company_name: String,
    pub color: Color,
}

/// Everything a renderer needs to draw the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapModel {
    pub center: MapPoint,
    pub zoom: u8,
    pub layer_mode: LayerMode,
    /// Markers in dataset order.
    pub markers: Vec<Marker>,
    /// Sorted by company name.
    pub legend: Vec<LegendEntry>,
}

impl MapModel {
    /// Legend entries that have at least one marker.
    pub fn companies_on_map(&self) -> impl Iterator<Item = &LegendEntry> {
        self.legend
            .iter()
            .filter(|e| self.markers.iter().any(|m| m.company_name == e.company_name))
    }
}

/// Builds the map of a dataset.
///
/// Records without a position are left out. The legend lists
/// every company of the dataset, including those whose addresses
/// could not be resolved.
pub fn prepare_map(dataset: &Dataset, options: &MapOptions) -> MapModel {
    let colors = assign_colors(dataset.companies(), &options.palette);
    let markers: Vec<_> = mappable(dataset)
        .into_iter()
        .filter_map(|record| {
            let pos = record.position?;
            let color = *colors.get(&record.company_name)?;
            Some(Marker {
                pos,
                company_name: record.company_name.clone(),
                address: record.address.clone(),
                color,
            })
        })
        .collect();
    let center = center_of(&markers);
    let legend = colors
        .into_iter()
        .map(|(company_name, color)| LegendEntry {
            company_name,
            color,
        })
        .collect();
    MapModel {
        center,
        zoom: options.zoom,
        layer_mode: options.layer_mode,
        markers,
        legend,
    }
}

fn center_of(markers: &[Marker]) -> MapPoint {
    let (lat_sum, lng_sum) = markers.iter().fold((0.0, 0.0), |(lat, lng), m| {
        let (m_lat, m_lng) = m.pos.to_lat_lng_deg();
        (lat + m_lat, lng + m_lng)
    });
    let n = markers.len() as f64;
    let (lat, lng) = if markers.is_empty() {
        DEFAULT_MAP_CENTER
    } else {
        (lat_sum / n, lng_sum / n)
    };
    MapPoint::try_from_lat_lng_deg(lat, lng).unwrap_or_else(|| {
        let (lat, lng) = DEFAULT_MAP_CENTER;
        MapPoint::from_lat_lng_deg(lat, lng)
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    #[test]
    fn leave_out_records_without_position() {
        let dataset = dataset_with_rows(&[
            ("Foo", "Main St 1", Some((10.0, 20.0))),
            ("Bar", "Nowhere", None),
            ("Foo", "Main St 3", Some((20.0, 40.0))),
        ]);
        let map = prepare_map(&dataset, &MapOptions::default());
        assert_eq!(2, map.markers.len());
        assert_eq!("Main St 1", map.markers[0].address);
        assert_eq!("Main St 3", map.markers[1].address);
        assert_eq!(MapPoint::from_lat_lng_deg(15.0, 30.0), map.center);
        assert_eq!(2, map.legend.len());
        assert_eq!(1, map.companies_on_map().count());
    }

    #[test]
    fn default_center_without_markers() {
        let dataset = dataset_with_rows(&[("Foo", "Nowhere", None)]);
        let map = prepare_map(&dataset, &MapOptions::default());
        assert!(map.markers.is_empty());
        assert_eq!((39.8283, -98.5795), map.center.to_lat_lng_deg());
        assert_eq!(DEFAULT_MAP_ZOOM, map.zoom);
    }

    #[test]
    fn markers_share_the_color_of_their_company() {
        let dataset = dataset_with_rows(&[
            ("Foo", "a", Some((1.0, 1.0))),
            ("Bar", "b", Some((2.0, 2.0))),
            ("Foo", "c", Some((3.0, 3.0))),
        ]);
        let map = prepare_map(&dataset, &MapOptions::default());
        assert_eq!(map.markers[0].color, map.markers[2].color);
        assert_ne!(map.markers[0].color, map.markers[1].color);
        let legend_foo = map
            .legend
            .iter()
            .find(|e| e.company_name == "Foo")
            .unwrap();
        assert_eq!(legend_foo.color, map.markers[0].color);
        assert_eq!("Bar", map.legend[0].company_name);
    }

    #[test]
    fn colors_do_not_depend_on_row_order() {
        let a = dataset_with_rows(&[
            ("Foo", "a", Some((1.0, 1.0))),
            ("Bar", "b", Some((2.0, 2.0))),
        ]);
        let b = dataset_with_rows(&[
            ("Bar", "b", Some((2.0, 2.0))),
            ("Foo", "a", Some((1.0, 1.0))),
        ]);
        let options = MapOptions::default();
        assert_eq!(
            prepare_map(&a, &options).legend,
            prepare_map(&b, &options).legend
        );
    }
}
