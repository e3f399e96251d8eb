//! Roman numeral conversion

/// Sentinel returned for inputs outside `1..=3999`
///
/// Callers detect invalid input by comparing against this exact string.
pub const INVALID_INPUT: &str = "Invalid Input";

/// Subtractive-pair table, scanned greedily from the largest value down
const ROMAN_TABLE: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert an integer to its canonical Roman numeral
///
/// Valid for `1..=3999`; anything else returns [`INVALID_INPUT`].
///
/// # Example
/// ```
/// use looplab_core::text::int_to_roman;
///
/// assert_eq!(int_to_roman(1994), "MCMXCIV");
/// assert_eq!(int_to_roman(0), "Invalid Input");
/// ```
pub fn int_to_roman(number: i32) -> String {
    if !(1..=3999).contains(&number) {
        return INVALID_INPUT.to_string();
    }

    let mut remaining = number;
    let mut result = String::new();
    for (value, symbol) in ROMAN_TABLE {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }
    result
}
