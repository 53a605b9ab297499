use cpp_demangle::{DemangleOptions, Symbol as CppSymbol};
use rustc_demangle::try_demangle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemangleError {
    #[error("symbol '{0}' is not in a recognized mangling scheme")]
    UnrecognizedFormat(String),

    #[error("demangler rejected symbol: {0}")]
    Rejected(String),
}

/// Opaque demangling capability consumed by the parsing pipeline.
///
/// Failure is an expected outcome: plain C and system-runtime frames carry
/// no mangling, and the pipeline reports those frames as unparsable rather
/// than guessing at a descriptor.
pub trait Demangler {
    fn demangle(&self, mangled: &str) -> Result<String, DemangleError>;
}

/// Demangle Rust (legacy and v0) and Itanium C++ symbols.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolDemangler;

impl Demangler for SymbolDemangler {
    fn demangle(&self, mangled: &str) -> Result<String, DemangleError> {
        // Try Rust demangling first
        if let Ok(demangled) = try_demangle(mangled) {
            return Ok(demangled.to_string());
        }

        // Try C++ (Itanium ABI) demangling
        if let Ok(symbol) = CppSymbol::new(mangled) {
            if let Ok(demangled) = symbol.demangle(&DemangleOptions::default()) {
                return Ok(demangled);
            }
        }

        Err(DemangleError::UnrecognizedFormat(mangled.to_string()))
    }
}

/// Adapts a plain function into a [`Demangler`], mainly for deterministic
/// test doubles and for runtimes whose demangler lives outside this crate.
pub struct FnDemangler<F>(pub F);

impl<F> Demangler for FnDemangler<F>
where
    F: Fn(&str) -> Result<String, DemangleError>,
{
    fn demangle(&self, mangled: &str) -> Result<String, DemangleError> {
        (self.0)(mangled)
    }
}
