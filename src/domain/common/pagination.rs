/// Rows per page for every list endpoint.
pub const PAGE_SIZE: u32 = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    /// `None` for page 0.
    pub fn new(number: u32) -> Option<Self> {
        (number >= 1).then_some(Self(number))
    }

    pub fn first() -> Self {
        Self(1)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn limit(&self) -> u32 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.0 - 1) * u64::from(PAGE_SIZE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}
