use dateonly_calendar::{BinaryDecodeError, Date, DateError};

fn samples() -> Vec<Date> {
    vec![
        Date::ZERO,
        Date::new(0, 1, 1),
        Date::new(1970, 1, 1),
        Date::new(2000, 2, 29),
        Date::new(2038, 1, 19),
        Date::new(9999, 12, 31),
    ]
}

#[test]
fn text_roundtrip() {
    for date in samples() {
        let text = date.marshal_text().unwrap();
        let mut back = Date::default();
        back.unmarshal_text(&text).unwrap();
        assert_eq!(back, date);
        assert_eq!(String::from_utf8(text).unwrap(), date.to_string());
    }
}

#[test]
fn json_roundtrip() {
    for date in samples() {
        let json = date.marshal_json().unwrap();
        let mut back = Date::new(1234, 5, 6);
        back.unmarshal_json(&json).unwrap();
        assert_eq!(back, date);
        assert_eq!(serde_json::to_vec(&date).unwrap(), json);
        assert_eq!(serde_json::from_slice::<Date>(&json).unwrap(), date);
    }
}

#[test]
fn binary_roundtrip() {
    for date in samples().into_iter().chain([Date::MIN, Date::MAX]) {
        let bytes = date.marshal_binary();
        assert_eq!(bytes.len(), 15);
        let mut back = Date::default();
        back.unmarshal_binary(&bytes).unwrap();
        assert_eq!(back, date);
    }
}

#[test]
fn json_null_and_garbage() {
    let mut date = Date::new(2000, 1, 1);
    date.unmarshal_json(b"null").unwrap();
    assert_eq!(date, Date::new(2000, 1, 1));

    let mut date = Date::default();
    assert!(matches!(
        date.unmarshal_json(br#""ala ma kota""#),
        Err(DateError::Parse { .. })
    ));
    assert!(date.is_zero());

    assert!(matches!(
        date.unmarshal_json(b"{}"),
        Err(DateError::MalformedJson { .. })
    ));
}

#[test]
fn text_forms_outside_four_digit_years() {
    for date in [Date::new(-1, 12, 31), Date::new(10000, 1, 1), Date::MIN, Date::MAX] {
        let year = date.year();
        assert_eq!(date.marshal_text(), Err(DateError::FormatRange { year }));
        assert_eq!(date.marshal_json(), Err(DateError::FormatRange { year }));
        // The binary form still works.
        assert_eq!(Date::from_binary(&date.marshal_binary()), Ok(date));
    }
}

#[test]
fn binary_errors_are_reported() {
    assert_eq!(
        Date::from_binary(&[]),
        Err(DateError::BinaryDecode(BinaryDecodeError::Empty))
    );
    let err = Date::from_binary(&[7; 15]).unwrap_err();
    assert_eq!(err.to_string(), "binary date: unsupported version 7");
}

#[test]
fn layout_format_and_parse() {
    let date = Date::new(2000, 3, 5);
    let text = date.format("%d %b %Y").unwrap();
    assert_eq!(text, "05 Mar 2000");
    assert_eq!(Date::parse("%d %b %Y", &text), Ok(date));
    assert_eq!(Date::parse(dateonly_calendar::DATE_ONLY, "2000-03-05"), Ok(date));
}
