// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Dictionary;
use crate::{ConfigError, Value};

impl TryFrom<Value> for String {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(ConfigError::TypeError {
                message: format!("Expected text, got {}", value.type_name()),
                hint: Some("Use a [[text]] value in your config".into()),
                code: Some(401),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(ConfigError::TypeError {
                message: format!("Expected integer, got {}", value.type_name()),
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

macro_rules! narrow_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = ConfigError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| ConfigError::TypeError {
                        message: format!("Integer {} out of range for {}", n, stringify!($ty)),
                        hint: Some(format!(
                            "Value must be between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some(403),
                    })
                }
            }
        )*
    };
}

narrow_integer!(u8, u16, u32, u64, usize, i32);

impl TryFrom<Value> for Dictionary {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Dictionary(entries) => Ok(entries),
            _ => Err(ConfigError::TypeError {
                message: format!("Expected dictionary, got {}", value.type_name()),
                hint: Some("Use a `{ key => value }` block in your config".into()),
                code: Some(404),
            }),
        }
    }
}
