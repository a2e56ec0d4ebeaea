pub mod snapshot;
pub mod traits;

pub use snapshot::JsonSnapshot;
pub use traits::ReportSource;
