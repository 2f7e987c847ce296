//! STOMP Header Multimap.
mod map;
mod iter;
mod error;

pub use map::Header;
pub use iter::{GetAll, Iter};
pub use error::InvalidContentLength;

#[cfg(test)]
mod test;
