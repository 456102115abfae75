use crate::contract::PredictionRequest;

/// Raw text of the prediction form, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub room: String,
    pub living_room: String,
    pub area: String,
    pub floor: String,
    pub age: String,
    pub district: String,
    pub neighborhood: String,
}

impl FormInput {
    /// Build the request body. Numeric fields are parsed leniently and never
    /// validated; anything unparseable is sent as `null`.
    pub fn to_request(&self) -> PredictionRequest {
        let request = PredictionRequest {
            room: parse_int(&self.room),
            living_room: parse_int(&self.living_room),
            area: parse_int(&self.area),
            floor: parse_int(&self.floor),
            age: parse_int(&self.age),
            district: self.district.clone(),
            neighborhood: self.neighborhood.clone(),
        };
        tracing::debug!("Assembled prediction request: {:?}", request);
        request
    }
}

/// Integer parsing with browser `parseInt` rules: leading whitespace is
/// skipped, an optional sign and `0x` prefix are honoured, and the longest
/// run of digits is taken. Trailing text is ignored.
///
/// Returns `None` where `parseInt` would yield `NaN`, and also when the
/// digits overflow an `i64`.
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> FormInput {
        FormInput {
            room: "3".to_string(),
            living_room: "1".to_string(),
            area: "120".to_string(),
            floor: "2".to_string(),
            age: "10".to_string(),
            district: "Kadıköy".to_string(),
            neighborhood: "Moda".to_string(),
        }
    }

    #[test]
    fn test_parse_int_plain() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+5"), Some(5));
    }

    #[test]
    fn test_parse_int_lenient_prefix() {
        assert_eq!(parse_int("  42px"), Some(42));
        assert_eq!(parse_int("\t\n12"), Some(12));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int("1e3"), Some(1));
        assert_eq!(parse_int("120 m2"), Some(120));
    }

    #[test]
    fn test_parse_int_hex_prefix() {
        assert_eq!(parse_int("0x1A"), Some(26));
        assert_eq!(parse_int("0Xff"), Some(255));
        assert_eq!(parse_int("-0x10"), Some(-16));
        assert_eq!(parse_int("0x"), None);
    }

    #[test]
    fn test_parse_int_not_a_number() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("--1"), None);
        assert_eq!(parse_int(".5"), None);
    }

    #[test]
    fn test_parse_int_overflow() {
        assert_eq!(parse_int("99999999999999999999999"), None);
    }

    #[test]
    fn test_to_request() {
        let request = sample_input().to_request();

        assert_eq!(request.room, Some(3));
        assert_eq!(request.living_room, Some(1));
        assert_eq!(request.area, Some(120));
        assert_eq!(request.floor, Some(2));
        assert_eq!(request.age, Some(10));
        assert_eq!(request.district, "Kadıköy");
        assert_eq!(request.neighborhood, "Moda");
    }

    #[test]
    fn test_to_request_sends_unparsed_area() {
        let input = FormInput {
            area: "yüz yirmi".to_string(),
            ..sample_input()
        };

        let request = input.to_request();
        assert_eq!(request.area, None);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["area"].is_null());
        assert_eq!(json["room"], 3);
    }

    #[test]
    fn test_to_request_keeps_empty_selection() {
        let input = FormInput {
            district: String::new(),
            neighborhood: String::new(),
            ..sample_input()
        };

        let request = input.to_request();
        assert_eq!(request.district, "");
        assert_eq!(request.neighborhood, "");
    }
}
