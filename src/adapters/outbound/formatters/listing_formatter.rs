use crate::application::dto::OutputFormat;
use crate::application::read_models::InventoryReadModel;
use crate::inventory::services::CoordinateRenderer;
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;

/// ListingFormatter adapter for the rendered dependency listing
///
/// Most notations are one entry per line. `package-json` and `pyproject`
/// entries are fragments, so they get wrapped in a minimal document.
pub struct ListingFormatter {
    format: OutputFormat,
}

impl ListingFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn wrap(header: &str, entries: &[String], footer: &str) -> String {
        let mut document = String::from(header);
        if !entries.is_empty() {
            document.push_str(&entries.join(",\n"));
            document.push('\n');
        }
        document.push_str(footer);
        document
    }
}

impl InventoryFormatter for ListingFormatter {
    fn format(&self, model: &InventoryReadModel) -> Result<String> {
        let entries: Vec<String> = model
            .coordinates
            .iter()
            .map(|coordinate| CoordinateRenderer::render(coordinate, self.format))
            .collect();

        let document = match self.format {
            OutputFormat::PackageJson => {
                Self::wrap("{\n  \"dependencies\": {\n", &entries, "  }\n}\n")
            }
            OutputFormat::Pyproject => {
                Self::wrap("[project]\ndependencies = [\n", &entries, "]\n")
            }
            _ => entries.iter().map(|entry| format!("{}\n", entry)).collect(),
        };
        Ok(document)
    }
}
