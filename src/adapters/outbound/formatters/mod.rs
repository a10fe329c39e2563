/// Formatter adapters for the inventory output documents
mod csv_formatter;
mod listing_formatter;

pub use csv_formatter::CsvStatisticsFormatter;
pub use listing_formatter::ListingFormatter;
