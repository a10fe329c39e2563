use crate::application::read_models::InventoryReadModel;
use crate::inventory::domain::Ecosystem;
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use anyhow::Context;

/// CsvStatisticsFormatter adapter for the per-version download statistics
pub struct CsvStatisticsFormatter;

impl CsvStatisticsFormatter {
    pub fn new() -> Self {
        Self
    }

    fn header(ecosystem: Ecosystem) -> &'static [&'static str] {
        match ecosystem {
            Ecosystem::Maven => &[
                "groupId",
                "artifactId",
                "version",
                "package_version",
                "last_downloaded",
                "download_count",
            ],
            Ecosystem::Npm | Ecosystem::PyPi => &[
                "package",
                "version",
                "package_version",
                "last_downloaded",
                "download_count",
            ],
        }
    }
}

impl Default for CsvStatisticsFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for CsvStatisticsFormatter {
    fn format(&self, model: &InventoryReadModel) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(Self::header(model.ecosystem))?;

        for row in &model.statistics {
            let mut record = row.namespace.clone();
            record.push(row.version.clone());
            record.push(row.package_version.clone());
            record.push(row.last_downloaded.clone());
            record.push(row.download_count.to_string());
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}
