//! Share code generation.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;
use rand::distr::Alphanumeric;

/// Source of candidate share codes.
///
/// Candidates need not be unique; the store rejects a code that is already
/// active and the caller asks for another.
pub trait CodeGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Produce a candidate of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Uniformly random `[A-Za-z0-9]` codes from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

/// Hands out a fixed sequence of codes, then falls back to random ones.
///
/// Used to force collisions and rotations deterministically.
#[derive(Debug, Default)]
pub struct ScriptedCodeGenerator {
    queue: Mutex<VecDeque<String>>,
    fallback: RandomCodeGenerator,
}

impl ScriptedCodeGenerator {
    /// Create a generator that will return `codes` in order.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: Mutex::new(codes.into_iter().map(Into::into).collect()),
            fallback: RandomCodeGenerator,
        }
    }

    /// Append more codes to the script.
    pub fn push(&self, code: impl Into<String>) {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(code.into());
    }

    /// Codes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl CodeGenerator for ScriptedCodeGenerator {
    fn generate(&self, length: usize) -> String {
        let next = self
            .queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        next.unwrap_or_else(|| self.fallback.generate(length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_codes_are_alphanumeric_and_sized() {
        let generator = RandomCodeGenerator;
        for length in [6, 8, 12] {
            let code = generator.generate(length);
            assert_eq!(code.len(), length);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_random_codes_vary() {
        let generator = RandomCodeGenerator;
        let a = generator.generate(8);
        let b = generator.generate(8);
        let c = generator.generate(8);
        assert!(a != b || b != c);
    }

    #[test]
    fn test_scripted_then_random() {
        let generator = ScriptedCodeGenerator::new(["AAAA1111", "BBBB2222"]);
        assert_eq!(generator.generate(8), "AAAA1111");
        generator.push("CCCC3333");
        assert_eq!(generator.generate(8), "BBBB2222");
        assert_eq!(generator.generate(8), "CCCC3333");
        assert_eq!(generator.remaining(), 0);
        assert_eq!(generator.generate(8).len(), 8);
    }
}
