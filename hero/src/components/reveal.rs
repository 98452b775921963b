//! Applies an entrance timeline entry to a block.

use crate::capabilities::VisibilityLatch;
use crate::timeline::{entrance, Block};

/// Reactive inline style for `block`: its pre pose until `visibility`
/// fires, the settled pose afterwards. Use as `style=reveal(block, latch)`.
pub fn reveal(
    block: Block,
    visibility: VisibilityLatch,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || entrance(block).style(visibility.is_visible())
}
