//! Board geometry.
//!
//! - [`offset`]: row/column displacements and the fixed step sets (king steps, knight jumps).
//! - [`position`]: 1-indexed squares and compass directions. Derived squares may fall off the
//!   board; nothing here checks that for you.

pub mod offset;
pub mod position;
