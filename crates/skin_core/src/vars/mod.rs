//! Typed, observable state cells and the manager that names them.

use std::{any::Any, sync::Arc};

pub mod boolean;
pub mod list;
pub mod manager;
pub mod percent;
pub mod text;
pub mod time;

pub use boolean::{VarBool, VarBoolAndBool, VarBoolImpl, VarBoolOrBool, VarNotBool};
pub use list::{ListChange, ListElem, VarList};
pub use manager::VarManager;
pub use percent::VarPercent;
pub use text::{VarString, VarText};
pub use time::StreamTime;

/// A typed state cell. The type tag is fixed for the lifetime of the value.
pub trait Variable: Any + Send + Sync {
    fn var_type(&self) -> &'static str;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

pub type VariablePtr = Arc<dyn Variable>;

/// Recovers the concrete variable behind a shared handle.
pub fn downcast_var<T: Variable>(var: VariablePtr) -> Option<Arc<T>> {
    var.into_any().downcast::<T>().ok()
}

macro_rules! impl_variable {
    ($name:ident, $tag:literal) => {
        impl $name {
            pub const TYPE: &'static str = $tag;
        }

        impl $crate::vars::Variable for $name {
            fn var_type(&self) -> &'static str {
                $tag
            }

            fn into_any(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::sync::Arc<dyn ::std::any::Any + Send + Sync> {
                self
            }
        }
    };
}

pub(crate) use impl_variable;
