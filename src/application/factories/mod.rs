mod extractor_factory;
mod formatter_factory;

pub use extractor_factory::ExtractorFactory;
pub use formatter_factory::{FormatterFactory, FormatterType};
