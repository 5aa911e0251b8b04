pub mod sinc;

pub use sinc::Sinc;
