//! Column letters
//!
//! Bijective base-26 numbering used to display grid columns the way
//! spreadsheets do: `1 → A`, `26 → Z`, `27 → AA`.

const LETTERS: u32 = 26;

/// Convert a column number into uppercase letters (`0` gives an empty string)
pub fn int_to_alphabet(value: u32) -> String {
    let mut letters = Vec::new();
    let mut rest = value;
    while rest > 0 {
        let rem = (rest - 1) % LETTERS;
        letters.push(char::from(b'A' + rem as u8));
        rest = (rest - 1) / LETTERS;
    }
    letters.iter().rev().collect()
}

/// Convert uppercase letters back into a column number
///
/// Returns `None` for any character outside `A..=Z`, or on overflow.
pub fn alphabet_to_int(letters: &str) -> Option<u32> {
    letters.chars().try_fold(0u32, |acc, c| {
        if !c.is_ascii_uppercase() {
            return None;
        }
        let digit = c as u32 - 'A' as u32 + 1;
        acc.checked_mul(LETTERS)?.checked_add(digit)
    })
}
