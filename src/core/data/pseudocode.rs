use serde::Serialize;

/// One line of an algorithm's pseudocode listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PseudocodeLine {
    pub text: &'static str,
    pub indent: u8,
}

impl PseudocodeLine {
    #[must_use]
    pub const fn new(text: &'static str, indent: u8) -> Self {
        Self { text, indent }
    }
}

/// Static description shown next to a visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub title: &'static str,
    pub complexity: &'static str,
    pub pseudocode: &'static [PseudocodeLine],
}

impl AlgorithmInfo {
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&PseudocodeLine> {
        self.pseudocode.get(index)
    }
}
