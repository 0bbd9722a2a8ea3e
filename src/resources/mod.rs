//! Typed services for the school REST resources.
//!
//! Every resource follows `GET/POST/PUT/DELETE {base}/{resource}[/{id}]` with
//! camelCase JSON bodies and query-string filters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Integer-coded enum as the API sends it (`"gender": 1`).
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(into = "u8", try_from = "u8")]
        pub enum $name {
            $($variant = $value),+
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!("unknown {} value {}", stringify!($name), other)),
                }
            }
        }
    };
}

pub mod class;
pub mod exam;
pub mod promotion;
pub mod staff;
pub mod student;
pub mod subject;
pub mod timetable;

pub use class::ClassService;
pub use exam::ExamService;
pub use promotion::PromotionService;
pub use staff::StaffService;
pub use student::StudentService;
pub use subject::SubjectService;
pub use timetable::TimetableService;

/// `{ "id": ... }` answer of create endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    wire_enum!(Shade { Light = 0, Dark = 1 });

    #[test]
    fn wire_enums_are_numbers() {
        assert_eq!(serde_json::to_value(Shade::Dark).unwrap(), json!(1));
        assert_eq!(serde_json::from_value::<Shade>(json!(0)).unwrap(), Shade::Light);
        assert!(serde_json::from_value::<Shade>(json!(7)).is_err());
    }
}
