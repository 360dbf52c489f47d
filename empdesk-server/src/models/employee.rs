//! Employee record and the typed form input that builds it

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Store-assigned employee identity
pub type EmployeeId = i64;

/// A persisted employee row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub gender: String,
    pub address: String,
    pub phone: i64,
    pub salary: i64,
    pub department: String,
}

impl Employee {
    /// Build a record from an id and its field values.
    pub fn from_fields(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            gender: fields.gender,
            address: fields.address,
            phone: fields.phone,
            salary: fields.salary,
            department: fields.department,
        }
    }

    /// The editable part of the record.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            gender: self.gender.clone(),
            address: self.address.clone(),
            phone: self.phone,
            salary: self.salary,
            department: self.department.clone(),
        }
    }
}

/// Everything but the id: the payload of insert and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub gender: String,
    pub address: String,
    pub phone: i64,
    pub salary: i64,
    pub department: String,
}

/// Raw `application/x-www-form-urlencoded` body of the add and edit forms.
///
/// Every field is optional here so that a missing field surfaces as a
/// [`ValidationError`] instead of an opaque deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeForm {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub salary: Option<String>,
    pub department: Option<String>,
}

impl TryFrom<EmployeeForm> for EmployeeFields {
    type Error = ValidationError;

    /// Text fields pass through as submitted (empty is fine); `phone` and
    /// `salary` are coerced to integers.
    fn try_from(form: EmployeeForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", form.name)?,
            gender: required("gender", form.gender)?,
            address: required("address", form.address)?,
            phone: integer("phone", required("phone", form.phone)?)?,
            salary: integer("salary", required("salary", form.salary)?)?,
            department: required("department", form.department)?,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

fn integer(field: &'static str, value: String) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber { field, value })
}
