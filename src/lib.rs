pub mod components;
pub mod demangle;
pub mod error;
pub mod frame;
pub mod parser;

pub use components::{ClassMethodPair, QualifiedName};
pub use demangle::{DemangleError, Demangler, FnDemangler, SymbolDemangler};
pub use error::{ParseError, Result};
pub use frame::TokenizedFrame;
pub use parser::CallStackParser;
