use crate::domain::model::OutputFormat;

/// A source of run settings. Each layer answers only what it knows; the
/// first layer with an answer wins during resolution.
pub trait ConfigProvider {
    fn amount(&self) -> Option<f64>;
    fn currency(&self) -> Option<&str>;
    fn output_format(&self) -> Option<OutputFormat>;
}
