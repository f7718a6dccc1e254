pub mod cv;
pub mod request;
pub mod role;
pub mod validation;

pub use cv::OptimizedCv;
pub use request::{OptimizeRequest, OptimizeResponse};
pub use role::RoleType;
pub use validation::ValidationError;
