#![forbid(unsafe_code)]

use serde_json::Value;

// Host form/query payloads carry numbers either as JSON numbers or as the
// string form fields arrive in. Absent and malformed are distinct outcomes.
pub(crate) fn post_id_field(value: Option<&Value>) -> Result<Option<i64>, ()> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw {
        Value::Number(number) => number.as_i64().map(Some).ok_or(()),
        Value::String(text) => text.trim().parse::<i64>().map(Some).map_err(|_| ()),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::post_id_field;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let payload = json!({ "a": 7, "b": " 42 " });
        assert_eq!(post_id_field(payload.get("a")), Ok(Some(7)));
        assert_eq!(post_id_field(payload.get("b")), Ok(Some(42)));
    }

    #[test]
    fn distinguishes_absent_from_malformed() {
        let payload = json!({ "bad": "seven", "worse": [1] });
        assert_eq!(post_id_field(payload.get("missing")), Ok(None));
        assert_eq!(post_id_field(payload.get("bad")), Err(()));
        assert_eq!(post_id_field(payload.get("worse")), Err(()));
    }
}
