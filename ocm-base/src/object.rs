//! Traits shared by API objects, their attributes and their builders.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors produced while building an object from its builder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A builder marked as a link has neither an identifier nor an href
    #[error("`{kind}` is marked as a link but has neither an identifier nor an href")]
    LinkWithoutTarget {
        /// Kind of the object being built
        kind: &'static str,
    },

    /// A list item failed to build
    #[error("item {index} of `{kind}`: {source}")]
    ListItem {
        /// Kind of the list being built
        kind: &'static str,
        /// Position of the failing item
        index: usize,
        /// The item's own build error
        #[source]
        source: Box<BuildError>,
    },
}

/// Naming information of an object type.
///
/// The kind strings are written to and read from the `kind` member of the
/// JSON representation.
pub trait ObjectType {
    /// Kind of a full object, e.g. `Account`
    const KIND: &'static str;
    /// Kind of a link to an object, e.g. `AccountLink`; `None` for types
    /// that cannot be links
    const LINK_KIND: Option<&'static str>;
    /// Kind of a list of objects, e.g. `AccountList`
    const LIST_KIND: &'static str;
    /// Kind of a link to a list of objects, e.g. `AccountListLink`
    const LIST_LINK_KIND: &'static str;
}

/// A value that can be stored in an optional field of an object.
pub trait Attribute: Clone + Default + PartialEq + fmt::Debug {
    /// Borrowed view returned by field accessors
    type Ref<'a>
    where
        Self: 'a;

    /// Borrow the value as returned from accessors.
    fn as_attribute(&self) -> Self::Ref<'_>;

    /// True for collections with nothing in them. Blank collections are
    /// not written even when their presence bit is set.
    fn is_blank(&self) -> bool {
        false
    }
}

/// A value that is staged in a builder before it becomes an attribute.
///
/// Scalars are their own builders. Objects and lists use dedicated builder
/// types whose `build` may fail.
pub trait Buildable: Attribute {
    /// Staging type stored in builders
    type Builder: Clone + Default + fmt::Debug;

    /// Produce the immutable value from its builder.
    fn build_from(builder: &Self::Builder) -> Result<Self, BuildError>;

    /// Create a builder mirroring this value.
    fn to_builder(&self) -> Self::Builder;
}

impl Attribute for String {
    type Ref<'a> = &'a str;

    fn as_attribute(&self) -> Self::Ref<'_> {
        self.as_str()
    }
}

impl Attribute for DateTime<Utc> {
    type Ref<'a> = DateTime<Utc>;

    fn as_attribute(&self) -> Self::Ref<'_> {
        *self
    }
}

macro_rules! copy_attribute {
    ($($ty:ty),*) => {
        $(
            impl Attribute for $ty {
                type Ref<'a> = $ty;

                fn as_attribute(&self) -> Self::Ref<'_> {
                    *self
                }
            }
        )*
    };
}

copy_attribute!(bool, i32, i64, f64);

// Scalars are staged as themselves.
macro_rules! scalar_buildable {
    ($($ty:ty),*) => {
        $(
            impl Buildable for $ty {
                type Builder = $ty;

                fn build_from(builder: &Self::Builder) -> Result<Self, BuildError> {
                    Ok(builder.clone())
                }

                fn to_builder(&self) -> Self::Builder {
                    self.clone()
                }
            }
        )*
    };
}

scalar_buildable!(String, bool, i32, i64, f64, DateTime<Utc>, HashMap<String, String>);

impl<T: Attribute> Attribute for Vec<T> {
    type Ref<'a>
        = &'a [T]
    where
        Self: 'a;

    fn as_attribute(&self) -> Self::Ref<'_> {
        self.as_slice()
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Attribute> Buildable for Vec<T> {
    type Builder = Vec<T>;

    fn build_from(builder: &Self::Builder) -> Result<Self, BuildError> {
        Ok(builder.clone())
    }

    fn to_builder(&self) -> Self::Builder {
        self.clone()
    }
}

impl Attribute for HashMap<String, String> {
    type Ref<'a> = &'a HashMap<String, String>;

    fn as_attribute(&self) -> Self::Ref<'_> {
        self
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}
