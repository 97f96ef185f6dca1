/// Transport interface shared by every resource facade
pub mod transport;

pub use transport::*;
