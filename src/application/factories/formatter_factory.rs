use crate::adapters::outbound::formatters::{CsvStatisticsFormatter, ListingFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::InventoryFormatter;

/// Formatter type enumeration for factory pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    /// Rendered dependency listing in the given notation
    Listing(OutputFormat),
    /// Download statistics CSV
    StatisticsCsv,
}

/// Factory for creating inventory formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use cache_inventory::application::dto::OutputFormat;
    /// use cache_inventory::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter = FormatterFactory::create(FormatterType::Listing(OutputFormat::Simple));
    /// ```
    pub fn create(formatter_type: FormatterType) -> Box<dyn InventoryFormatter> {
        match formatter_type {
            FormatterType::Listing(format) => Box::new(ListingFormatter::new(format)),
            FormatterType::StatisticsCsv => Box::new(CsvStatisticsFormatter::new()),
        }
    }

    /// Returns the progress message for the specified formatter type
    ///
    /// # Examples
    /// ```
    /// use cache_inventory::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let message = FormatterFactory::progress_message(FormatterType::StatisticsCsv);
    /// assert_eq!(message, "📝 Writing download statistics CSV...");
    /// ```
    pub fn progress_message(formatter_type: FormatterType) -> &'static str {
        match formatter_type {
            FormatterType::Listing(_) => "📝 Rendering package listing...",
            FormatterType::StatisticsCsv => "📝 Writing download statistics CSV...",
        }
    }
}
