// fixtures.rs — provides commonly used numbers and patterns

/// Well-known Luhn-valid test numbers
pub fn valid_numbers() -> Vec<&'static str> {
    vec![
        "4111111111111111",
        "5555555555554444",
        "378282246310005",
        "6011111111111117",
        "4012888888881881",
        "79927398713",
    ]
}

/// Same numbers with the final digit bumped by one
pub fn invalid_numbers() -> Vec<String> {
    valid_numbers()
        .into_iter()
        .map(|n| {
            let (body, last) = n.split_at(n.len() - 1);
            let bumped = (last.parse::<u8>().unwrap() + 1) % 10;
            format!("{}{}", body, bumped)
        })
        .collect()
}

pub fn sample_bin() -> &'static str {
    "483318"
}

pub fn sample_quad() -> &'static str {
    "483318|12|25|123"
}

pub fn sample_wildcard_pattern() -> &'static str {
    "483318xxxxxxxxxx"
}

pub fn sample_short_wildcard_pattern() -> &'static str {
    "439383xxxxxx"
}
