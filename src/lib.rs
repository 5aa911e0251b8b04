pub mod console;
pub mod error;
pub mod quadrature;
pub mod special;

pub use error::{Error, Result};
pub use quadrature::{Integrand, QuadratureConfig, QuadratureResult};
pub use special::Sinc;
