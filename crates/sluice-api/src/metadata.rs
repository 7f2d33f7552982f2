//! Optional capabilities for describing a component's configuration UI.

use crate::document::Document;

/// Implemented by components that provide dynamic metadata.
pub trait DynamicMetadataProvider {
    /// Returns the JSON schema of the component's meta model, given the
    /// configuration collected so far.
    fn meta_model(&self, configuration: &Document) -> Document;
}

/// Implemented by components that populate select boxes dynamically.
///
/// The configuration may carry the credentials needed to fetch the
/// options from the target service. The returned document maps option
/// keys to human-readable labels:
///
/// ```json
/// {
///     "de": "Germany",
///     "us": "United States",
///     "uk": "United Kingdom"
/// }
/// ```
pub trait SelectModelProvider {
    fn select_model(&self, configuration: &Document) -> Document;
}
