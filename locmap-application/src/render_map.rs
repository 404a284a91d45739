use super::*;
use crate::{error::AppError, gateways::render::MapRenderer, usecases::MapOptions, Document};

pub const MAP_MIME_TYPE: &str = "text/html";
pub const MAP_FILE_NAME: &str = "interactive_map.html";

/// Renders the rows of the session that have coordinates.
pub fn render_map(
    session: &Session,
    options: &MapOptions,
    renderer: &dyn MapRenderer,
) -> Result<Document> {
    let map = usecases::prepare_map(session.dataset(), options);
    let skipped = session.dataset().len() - map.markers.len();
    if skipped > 0 {
        warn!("{skipped} row(s) without coordinates are not shown on the map");
    }
    let html = renderer.render_map(&map).map_err(AppError::Render)?;
    info!(
        "Rendered map with {} marker(s) of {} company(ies)",
        map.markers.len(),
        map.companies_on_map().count()
    );
    Ok(Document {
        bytes: html.into_bytes(),
        mime_type: MAP_MIME_TYPE,
        file_name: MAP_FILE_NAME.to_string(),
    })
}
