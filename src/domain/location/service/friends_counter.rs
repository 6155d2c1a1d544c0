use rand::Rng;

/// Exclusive upper bound of the "friends nearby" figure.
pub const FRIENDS_UPPER_BOUND: u8 = 9;

/// Source of the per-row "friends nearby" figure.
pub trait FriendsCounter: Send + Sync {
    /// A value in `0..FRIENDS_UPPER_BOUND`.
    fn friends_nearby(&self) -> u8;
}

/// Unseeded draw from the thread-local RNG, one per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomFriendsCounter;

impl FriendsCounter for RandomFriendsCounter {
    fn friends_nearby(&self) -> u8 {
        rand::thread_rng().gen_range(0..FRIENDS_UPPER_BOUND)
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedFriendsCounter(pub u8);

impl FriendsCounter for FixedFriendsCounter {
    fn friends_nearby(&self) -> u8 {
        self.0
    }
}
