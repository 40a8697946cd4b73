mod admission;
pub use admission::*;
mod benchmarker;
pub use benchmarker::*;
mod config;
pub use config::*;
mod sink;
pub use sink::*;
mod source;
pub use source::*;
mod summary;
pub use summary::*;
