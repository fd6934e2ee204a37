/// Side(s) that receive padding in [`pad_trim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadMode {
    #[default]
    Left,
    Right,
    /// Left side gets the smaller half when the padding is odd.
    Both,
}

/// Pads `input` with repetitions of `pad` up to `length` characters, then
/// truncates to exactly `length` characters.
///
/// `pad_trim(7, "0", 3, PadMode::Left)` gives `"007"`; `pad_trim("12345", "0", 3, ..)` gives `"123"`.
pub fn pad_trim(input: impl ToString, pad: &str, length: usize, mode: PadMode) -> String {
    let input = input.to_string();
    let missing = length.saturating_sub(input.chars().count());

    let padded = if missing == 0 || pad.is_empty() {
        input
    } else {
        let (left, right) = match mode {
            PadMode::Left => (missing, 0),
            PadMode::Right => (0, missing),
            PadMode::Both => (missing / 2, missing - missing / 2),
        };
        format!("{}{}{}", repeat_to(pad, left), input, repeat_to(pad, right))
    };

    padded.chars().take(length).collect()
}

fn repeat_to(pad: &str, count: usize) -> String {
    pad.chars().cycle().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_each_side() {
        assert_eq!(pad_trim("Test", "0", 7, PadMode::Left), "000Test");
        assert_eq!(pad_trim("Test", "0", 7, PadMode::Right), "Test000");
        assert_eq!(pad_trim("Test", "0", 7, PadMode::Both), "0Test00");
    }

    #[test]
    fn trims_long_input_and_accepts_numbers() {
        assert_eq!(pad_trim(7, "0", 3, PadMode::Left), "007");
        assert_eq!(pad_trim("12345", "0", 3, PadMode::Left), "123");
        assert_eq!(pad_trim("ab", "xy", 5, PadMode::Left), "xyxab");
    }
}
