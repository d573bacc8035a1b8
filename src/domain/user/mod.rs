// User domain module
// Value objects validated at the edge before anything is persisted

pub mod value_objects;

pub use value_objects::{Email, Password, Username};
