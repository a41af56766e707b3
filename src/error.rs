use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("octaves must be at least 1, got {octaves}")]
    InvalidOctaves { octaves: u32 },
    #[error("unsupported smoothstep order: {0}")]
    UnsupportedOrder(String),
    #[error("{field} has {found} components, expected {expected}")]
    AxisCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid noise config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NoiseError>;
