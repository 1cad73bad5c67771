pub mod chain;
pub mod codec;
pub mod tokens;

pub use chain::HashChain;
pub use codec::{compress, decompress};
pub use tokens::Token;
