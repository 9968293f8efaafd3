use crate::application::read_models::RotReadModel;
use crate::shared::Result;

/// RotFormatter port for rendering the analysis
///
/// Implementations exist for the machine-readable JSON document and the
/// human-readable table view.
pub trait RotFormatter {
    /// Renders the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &RotReadModel) -> Result<String>;
}
