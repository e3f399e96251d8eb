//! FizzBuzz

/// Classic FizzBuzz: "Fizz" for multiples of 3, "Buzz" for multiples of 5,
/// "FizzBuzz" for both, the decimal string otherwise
pub fn fizzbuzz(n: i32) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(fizzbuzz(1), "1");
        assert_eq!(fizzbuzz(2), "2");
        assert_eq!(fizzbuzz(7), "7");
    }

    #[test]
    fn test_various_cases() {
        let cases = [
            (1, "1"),
            (2, "2"),
            (3, "Fizz"),
            (5, "Buzz"),
            (6, "Fizz"),
            (9, "Fizz"),
            (10, "Buzz"),
            (15, "FizzBuzz"),
            (30, "FizzBuzz"),
        ];
        for (input, expected) in cases {
            assert_eq!(fizzbuzz(input), expected, "fizzbuzz({input})");
        }
    }
}
