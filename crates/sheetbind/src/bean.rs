//! Record property assignment
//!
//! A record ("bean") receives one `(key, value)` pair per mapped cell. Records
//! either implement [`Bean`] themselves, usually through [`impl_bean!`], or
//! are filled by any other [`PropertySetter`].

use std::collections::{BTreeMap, HashMap};

use crate::error::PropertyError;
use crate::value::DecodedValue;

/// A record whose properties can be assigned by header key
pub trait Bean {
    /// Assign `value` to the property named `key`
    fn set_property(&mut self, key: &str, value: DecodedValue) -> Result<(), PropertyError>;
}

impl Bean for HashMap<String, DecodedValue> {
    fn set_property(&mut self, key: &str, value: DecodedValue) -> Result<(), PropertyError> {
        self.insert(key.to_string(), value);
        Ok(())
    }
}

impl Bean for BTreeMap<String, DecodedValue> {
    fn set_property(&mut self, key: &str, value: DecodedValue) -> Result<(), PropertyError> {
        self.insert(key.to_string(), value);
        Ok(())
    }
}

/// Assigns properties on records of type `R`
pub trait PropertySetter<R> {
    /// Assign `value` to the property named `key` of `record`
    fn set_property(
        &mut self,
        record: &mut R,
        key: &str,
        value: DecodedValue,
    ) -> Result<(), PropertyError>;
}

impl<R, P: PropertySetter<R> + ?Sized> PropertySetter<R> for &mut P {
    fn set_property(
        &mut self,
        record: &mut R,
        key: &str,
        value: DecodedValue,
    ) -> Result<(), PropertyError> {
        (**self).set_property(record, key, value)
    }
}

/// Setter forwarding to the record's own [`Bean`] implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct BeanSetter;

impl<R: Bean> PropertySetter<R> for BeanSetter {
    fn set_property(
        &mut self,
        record: &mut R,
        key: &str,
        value: DecodedValue,
    ) -> Result<(), PropertyError> {
        record.set_property(key, value)
    }
}

/// A closure used as a [`PropertySetter`]
///
/// ```
/// use sheetbind::{DecodedValue, FnSetter, PropertyError, PropertySetter};
///
/// let mut setter = FnSetter::new(|names: &mut Vec<String>, _key: &str, value: DecodedValue| {
///     names.push(value.to_string());
///     Ok::<(), PropertyError>(())
/// });
///
/// let mut names = Vec::new();
/// setter.set_property(&mut names, "name", DecodedValue::from("Alice")).unwrap();
/// assert_eq!(names, vec!["Alice".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct FnSetter<F>(F);

impl<F> FnSetter<F> {
    /// Wrap a closure taking `(record, key, value)`
    pub fn new<R>(f: F) -> Self
    where
        F: FnMut(&mut R, &str, DecodedValue) -> Result<(), PropertyError>,
    {
        FnSetter(f)
    }
}

impl<R, F> PropertySetter<R> for FnSetter<F>
where
    F: FnMut(&mut R, &str, DecodedValue) -> Result<(), PropertyError>,
{
    fn set_property(
        &mut self,
        record: &mut R,
        key: &str,
        value: DecodedValue,
    ) -> Result<(), PropertyError> {
        (self.0)(record, key, value)
    }
}

/// Implement [`Bean`] for a struct from a list of its fields
///
/// Each field is matched by name against the normalized header key and filled
/// through [`FromDecoded`](crate::FromDecoded). Any other key is rejected as
/// an unknown property.
///
/// ```
/// use sheetbind::{impl_bean, Bean, DecodedValue};
///
/// #[derive(Debug, Default)]
/// struct Person {
///     id: u32,
///     first_name: String,
///     nickname: Option<String>,
/// }
///
/// impl_bean!(Person { id, first_name, nickname });
///
/// let mut person = Person::default();
/// person.set_property("id", DecodedValue::from("7")).unwrap();
/// person.set_property("first_name", DecodedValue::from("Alice")).unwrap();
/// person.set_property("nickname", DecodedValue::Null).unwrap();
/// assert_eq!(person.id, 7);
/// assert_eq!(person.nickname, None);
/// assert!(person.set_property("age", DecodedValue::from("3")).is_err());
/// ```
#[macro_export]
macro_rules! impl_bean {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Bean for $ty {
            fn set_property(
                &mut self,
                key: &str,
                value: $crate::DecodedValue,
            ) -> ::std::result::Result<(), $crate::PropertyError> {
                match key {
                    $(
                        stringify!($field) => {
                            self.$field = value.convert(key)?;
                            Ok(())
                        }
                    )*
                    _ => {
                        let _ = value;
                        Err($crate::PropertyError::UnknownProperty(key.to_string()))
                    }
                }
            }
        }
    };
}
