/// ProgressReporter port for reporting progress during an inventory run
///
/// This port abstracts progress reporting (e.g., to stderr) so that stdout
/// carries nothing but the rendered output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the listing
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Items in the listing
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
