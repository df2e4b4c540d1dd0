use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    /// Bin number outside `0..count`
    #[error("bin {number} is out of range, the wheel has {count} bins")]
    BinOutOfRange { number: usize, count: usize },
}
