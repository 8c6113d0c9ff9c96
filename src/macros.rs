#[macro_export]
macro_rules! sample {
    // Handle null
    (null) => {
        $crate::JsonValue::Null
    };

    // Handle the undefined sentinel (no JSON spelling; programmatic only)
    (undefined) => {
        $crate::JsonValue::Undefined
    };

    // Handle true
    (true) => {
        $crate::JsonValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::JsonValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::JsonValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonValue::Array(vec![$($crate::sample!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::JsonValue::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::sample!($value));
        )*
        $crate::JsonValue::Object(object)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::JsonValue::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{JsonMap, JsonValue, Number};

    #[test]
    fn test_sample_macro_primitives() {
        assert_eq!(sample!(null), JsonValue::Null);
        assert_eq!(sample!(undefined), JsonValue::Undefined);
        assert_eq!(sample!(true), JsonValue::Bool(true));
        assert_eq!(sample!(false), JsonValue::Bool(false));
        assert_eq!(sample!(42), JsonValue::Number(Number::Integer(42)));
        assert_eq!(sample!(3.5), JsonValue::Number(Number::Float(3.5)));
        assert_eq!(sample!("hello"), JsonValue::String("hello".to_string()));
    }

    #[test]
    fn test_sample_macro_arrays() {
        assert_eq!(sample!([]), JsonValue::Array(vec![]));

        let arr = sample!([1, 2, 3]);
        match arr {
            JsonValue::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], JsonValue::Number(Number::Integer(1)));
                assert_eq!(vec[1], JsonValue::Number(Number::Integer(2)));
                assert_eq!(vec[2], JsonValue::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_sample_macro_objects() {
        assert_eq!(sample!({}), JsonValue::Object(JsonMap::new()));

        let obj = sample!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            JsonValue::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(
                    map.get("name"),
                    Some(&JsonValue::String("Alice".to_string()))
                );
                assert_eq!(map.get("age"), Some(&JsonValue::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_sample_macro_nested() {
        let obj = sample!({
            "user": {"id": 1, "missing": undefined},
            "tags": ["a", "b"]
        });

        let map = match obj {
            JsonValue::Object(map) => map,
            _ => panic!("Expected object"),
        };
        let user = map.get("user").and_then(JsonValue::as_object).unwrap();
        assert_eq!(user.get("missing"), Some(&JsonValue::Undefined));
    }
}
