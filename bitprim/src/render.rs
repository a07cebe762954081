use num_bigint::BigUint;

/// `width` characters of `0`/`1`, least-significant bit first.
#[must_use]
pub fn format_bits(pattern: &BigUint, width: u64) -> String {
    (0..width).map(|index| if pattern.bit(index) { '1' } else { '0' }).collect()
}

/// Row of cells separated by `+` posts: set bits render as open cells,
/// clear bits as `...`-filled cells. Ends with a newline.
#[must_use]
pub fn visualize_vertical(pattern: &BigUint, width: u64) -> String {
    let mut diagram = String::new();
    for index in 0..width {
        diagram.push('+');
        diagram.push_str(if pattern.bit(index) { "   " } else { "..." });
    }
    diagram.push('+');
    diagram.push('\n');
    diagram
}

/// Row of cells separated by `|` walls: set bits open the wall to their
/// right, clear bits keep it. Ends with a newline.
#[must_use]
pub fn visualize_horizontal(pattern: &BigUint, width: u64) -> String {
    let mut diagram = String::from("|");
    for index in 0..width {
        diagram.push_str("   ");
        diagram.push_str(if pattern.bit(index) { " " } else { "|" });
    }
    diagram.push('\n');
    diagram
}
