/// Bytes Anchor prepends to every account for its type discriminator.
pub const ANCHOR_DISCRIMINATOR: usize = 8;
