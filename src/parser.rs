use tracing::trace;

use crate::components::{ClassMethodPair, QualifiedName};
use crate::demangle::{Demangler, SymbolDemangler};
use crate::error::{ParseError, Result};
use crate::frame::TokenizedFrame;

/// Frame index for the caller-in-scope query: skips the query's own frame
/// and its immediate caller, landing on that caller's caller.
const CALLER_FRAME_INDEX: usize = 2;

/// Frame index for the self-in-scope query: the immediate caller of the
/// query, i.e. the function asking for its own class and method.
const SELF_FRAME_INDEX: usize = 1;

/// Parses captured stack-frame lines into [`ClassMethodPair`]s.
///
/// Purely functional: holds no state between calls, never blocks, and is
/// safe to share across threads whenever the demangler is. The frame
/// sequence is always supplied by the caller, so the pipeline stays
/// deterministic under test without a real call stack.
pub struct CallStackParser<D = SymbolDemangler> {
    demangler: D,
}

impl CallStackParser {
    /// Parser backed by the bundled Rust/C++ demangler.
    pub fn new() -> Self {
        Self { demangler: SymbolDemangler }
    }
}

impl Default for CallStackParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Demangler> CallStackParser<D> {
    /// Parser backed by an injected demangling capability.
    pub fn with_demangler(demangler: D) -> Self {
        Self { demangler }
    }

    /// Parse one raw frame line into the class and method it describes.
    ///
    /// Returns `None` for any frame the pipeline cannot interpret; there
    /// are no partial results. Set `include_parent` to report inner-type
    /// call sites as `Outer.Inner`.
    pub fn class_and_method(&self, frame: &str, include_parent: bool) -> Option<ClassMethodPair> {
        discard_reason(self.try_class_and_method(frame, include_parent))
    }

    /// [`Self::class_and_method`] with the rejection reason.
    pub fn try_class_and_method(&self, frame: &str, include_parent: bool) -> Result<ClassMethodPair> {
        let tokenized = TokenizedFrame::tokenize(frame)?;
        let descriptor = self.demangler.demangle(tokenized.mangled_symbol())?;
        let name = QualifiedName::extract(&descriptor)?;
        Ok(name.select_names(include_parent))
    }

    /// Class and method of the caller's caller, given a frame sequence
    /// captured inside the function that wants to know who called it.
    /// Requires at least 3 frames.
    pub fn caller_class_and_method<S: AsRef<str>>(
        &self,
        frames: &[S],
        include_parent: bool,
    ) -> Option<ClassMethodPair> {
        discard_reason(self.try_caller_class_and_method(frames, include_parent))
    }

    /// [`Self::caller_class_and_method`] with the rejection reason.
    pub fn try_caller_class_and_method<S: AsRef<str>>(
        &self,
        frames: &[S],
        include_parent: bool,
    ) -> Result<ClassMethodPair> {
        self.try_at_frame(frames, CALLER_FRAME_INDEX, include_parent)
    }

    /// Class and method of the function that captured the frame sequence.
    /// Requires at least 2 frames.
    pub fn self_class_and_method<S: AsRef<str>>(
        &self,
        frames: &[S],
        include_parent: bool,
    ) -> Option<ClassMethodPair> {
        discard_reason(self.try_self_class_and_method(frames, include_parent))
    }

    /// [`Self::self_class_and_method`] with the rejection reason.
    pub fn try_self_class_and_method<S: AsRef<str>>(
        &self,
        frames: &[S],
        include_parent: bool,
    ) -> Result<ClassMethodPair> {
        self.try_at_frame(frames, SELF_FRAME_INDEX, include_parent)
    }

    fn try_at_frame<S: AsRef<str>>(
        &self,
        frames: &[S],
        index: usize,
        include_parent: bool,
    ) -> Result<ClassMethodPair> {
        let required = index + 1;
        if frames.len() < required {
            return Err(ParseError::InsufficientFrameDepth {
                required,
                found: frames.len(),
            });
        }
        self.try_class_and_method(frames[index].as_ref(), include_parent)
    }
}

fn discard_reason(result: Result<ClassMethodPair>) -> Option<ClassMethodPair> {
    match result {
        Ok(pair) => Some(pair),
        Err(err) => {
            trace!(%err, "frame not parsable");
            None
        }
    }
}
