mod backend;
mod backends;
mod info;
mod registry;
mod result;

pub use backend::DetectorBackend;
pub use backends::StubBackend;
pub use info::ImageInfo;
pub use registry::BackendRegistry;
pub use result::DetectionResult;
