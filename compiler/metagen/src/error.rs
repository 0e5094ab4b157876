use meta_filter::ModuleError;

/// Errors surfaced by the driver.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Module(#[from] ModuleError),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value `{value}` for `{option}`")]
    InvalidValue { option: &'static str, value: String },
}
