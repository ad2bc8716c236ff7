use crate::core::grouper::group_digits;
use crate::utils::error::ConversionError;

/// Words for every value that is spelled with a single word.
pub const NUMS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const HUNDRED: &str = "hundred";

/// Scale word for a group, indexed by its position counting from the right.
pub const MAGNITUDES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

pub const LARGEST_ATOMIC_VALUE: u64 = 19;

/// Spells out a non-negative integer, e.g. `210033` becomes
/// "two hundred ten thousand thirty three".
pub fn number_to_words(x: u64) -> Result<String, ConversionError> {
    if x <= LARGEST_ATOMIC_VALUE {
        return Ok(NUMS[x as usize].to_string());
    }

    let chunks = group_digits(x, group_to_words)?;
    let count = chunks.len();

    // an all-zero group drops out together with its scale word
    let words: Vec<String> = chunks
        .into_iter()
        .enumerate()
        .filter(|(_, chunk)| !chunk.is_empty())
        .map(|(i, chunk)| match MAGNITUDES[count - 1 - i] {
            "" => chunk,
            magnitude => format!("{} {}", chunk, magnitude),
        })
        .collect();

    Ok(words.join(" "))
}

/// Renders one group of one to three digits, most significant first.
///
/// A three digit group whose tens and ones are both zero renders without a
/// trailing word, and `[0, 0, 0]` renders as the empty string.
pub fn group_to_words(digits: &[u8]) -> Result<String, ConversionError> {
    if let Some(&digit) = digits.iter().find(|&&d| d > 9) {
        return Err(ConversionError::InvalidDigit { digit });
    }

    match *digits {
        [ones] => Ok(NUMS[ones as usize].to_string()),
        [tens, ones] => Ok(tens_to_words(tens, ones)),
        [hundreds, tens, ones] => {
            let mut words = Vec::with_capacity(2);
            if hundreds > 0 {
                words.push(format!("{} {}", NUMS[hundreds as usize], HUNDRED));
            }
            if tens > 0 || ones > 0 {
                words.push(tens_to_words(tens, ones));
            }
            Ok(words.join(" "))
        }
        _ => Err(ConversionError::MalformedGroup { len: digits.len() }),
    }
}

fn tens_to_words(tens: u8, ones: u8) -> String {
    let combined = u64::from(tens * 10 + ones);
    if combined <= LARGEST_ATOMIC_VALUE {
        NUMS[combined as usize].to_string()
    } else if ones > 0 {
        format!("{} {}", TENS[tens as usize], NUMS[ones as usize])
    } else {
        TENS[tens as usize].to_string()
    }
}
