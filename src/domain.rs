pub mod contact;
pub mod phonebook;
pub mod validation;

use crate::errors::{AppError, ConstraintError, ValidationError};
use crate::store::ContactStore;
