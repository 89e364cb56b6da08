use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsHostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported bundle signature: {0:?}")]
    UnsupportedSignature(String),

    #[error("Malformed bundle header: {0}")]
    MalformedHeader(&'static str),

    #[error("Object introspection is not available without a live asset runtime")]
    NoRuntime,
}
