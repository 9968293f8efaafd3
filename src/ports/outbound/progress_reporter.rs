/// ProgressReporter port for reporting progress during an analysis
///
/// Everything reported here goes to a diagnostics stream, never mixed
/// with the report itself.
pub trait ProgressReporter {
    /// Reports a step message (shown only in verbose mode by console adapters)
    fn report(&self, message: &str);

    /// Reports progress over a known number of steps
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem; the analysis continues
    fn report_warning(&self, message: &str);

    /// Reports a failure that ends the analysis
    fn report_error(&self, message: &str);

    /// Reports completion of the analysis
    fn report_completion(&self, message: &str);
}
