use crate::usecases::MapModel;

pub trait MapRenderer {
    /// Renders a standalone document that can be opened in a browser.
    fn render_map(&self, map: &MapModel) -> anyhow::Result<String>;
}
