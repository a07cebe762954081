pub mod bitwise;
pub use bitwise::{BitIterator, Bitwise, BitwiseMut, IntoBitIterator, support_iterator};

pub mod ops;
pub use ops::{cleared_highest_set_bit, cleared_lowest_set_bit, concat, mask};

pub mod render;
pub use render::{format_bits, visualize_horizontal, visualize_vertical};
