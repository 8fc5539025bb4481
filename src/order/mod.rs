//! Order form domain: topping catalog, validation schema, change events, and
//! the stateful form that ties them together.

pub mod catalog;
pub mod confirmation;
pub mod event;
pub mod form;
pub mod schema;

pub use catalog::{ToppingCatalog, ToppingOption, CATALOG_SIZE};
pub use confirmation::{size_phrase, success_message, topping_phrase};
pub use event::{FieldEvent, InputKind};
pub use form::{FormData, FormErrors, FormStatus, OrderForm, PizzaSize};
pub use schema::{
    trimmed_len, FieldName, FieldRule, FieldSchema, OrderSchema, ValidationError,
};
