//! Arbitrary-precision addition over linked chains of decimal digits
//! ("Add Two Numbers").

mod add;
mod chain;

pub use add::add;
pub use chain::{DigitChain, Iter};
