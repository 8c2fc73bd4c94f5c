// Entity Models
//
// Each entity has:
// - Stable identity (UUID) that NEVER changes
// - Values that may change (customer name) or only grow (statement)

pub mod customer;
pub mod operation;

pub use customer::{Customer, CustomerRegistry};
pub use operation::{Operation, OperationType};
