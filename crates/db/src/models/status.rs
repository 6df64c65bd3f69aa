//! Status helper enums mapping to SMALLINT columns.
//!
//! Each enum variant's discriminant matches the 1-based values the schema
//! defaults assume (see `db/migrations/0001_init.sql`).

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        Active = 1,
        Completed = 2,
        OnHold = 3,
    }
}

define_status_enum! {
    /// Task lifecycle status.
    TaskStatus {
        Todo = 1,
        InProgress = 2,
        Done = 3,
    }
}
