//! Ordered collections of API objects.
//!
//! A [`List`] is either a plain sequence of items, written as a JSON array,
//! or a link to a collection that lives elsewhere, written as an object
//! carrying `kind`, `href` and optionally `items`. Both forms are accepted
//! when reading.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::object::{Attribute, BuildError, Buildable, ObjectType};

/// A list of values of an object type
#[derive(Clone, PartialEq)]
pub struct List<T> {
    href: Option<String>,
    link: bool,
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            href: None,
            link: false,
            items: Vec::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("List");
        if let Some(href) = &self.href {
            d.field("href", href);
        }
        if self.link {
            d.field("link", &self.link);
        }
        d.field("items", &self.items).finish()
    }
}

impl<T> List<T> {
    /// Create a list holding the given items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            href: None,
            link: false,
            items,
        }
    }

    /// True if this list is a link to a collection rather than its content.
    pub fn link(&self) -> bool {
        self.link
    }

    /// Link to the list, empty if it has none.
    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }

    /// Link to the list, if it has one.
    pub fn get_href(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.is_empty())
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Borrow the items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copy the items into a new vector that can be modified without
    /// affecting the list.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Run `f` for each item in order, stopping as soon as it returns `false`.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in &self.items {
            if !f(item) {
                break;
            }
        }
    }

    /// Run `f` for each index and item in order, stopping as soon as it
    /// returns `false`.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (index, item) in self.items.iter().enumerate() {
            if !f(index, item) {
                break;
            }
        }
    }

    /// Consume the list and return its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: ObjectType> List<T> {
    /// Kind of the list, e.g. `AccountList` or `AccountListLink`.
    pub fn kind(&self) -> &'static str {
        if self.link {
            T::LIST_LINK_KIND
        } else {
            T::LIST_KIND
        }
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Clone + PartialEq + fmt::Debug> Attribute for List<T> {
    type Ref<'a>
        = &'a List<T>
    where
        Self: 'a;

    fn as_attribute(&self) -> Self::Ref<'_> {
        self
    }

    fn is_blank(&self) -> bool {
        self.items.is_empty() && !self.link && self.href.is_none()
    }
}

impl<T> Buildable for List<T>
where
    T: Buildable + ObjectType,
{
    type Builder = ListBuilder<T>;

    fn build_from(builder: &Self::Builder) -> Result<Self, BuildError> {
        builder.build()
    }

    fn to_builder(&self) -> Self::Builder {
        ListBuilder::new().copy(self)
    }
}

/// Builder for [`List`]
pub struct ListBuilder<T: Buildable> {
    href: Option<String>,
    link: bool,
    items: Vec<T::Builder>,
}

// Derives would put bounds on `T` itself rather than on its builder.
impl<T: Buildable> Clone for ListBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            href: self.href.clone(),
            link: self.link,
            items: self.items.clone(),
        }
    }
}

impl<T: Buildable> Default for ListBuilder<T> {
    fn default() -> Self {
        Self {
            href: None,
            link: false,
            items: Vec::new(),
        }
    }
}

impl<T: Buildable> fmt::Debug for ListBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBuilder")
            .field("href", &self.href)
            .field("link", &self.link)
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Buildable + ObjectType> ListBuilder<T> {
    /// Create an empty list builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the list as a link to a collection
    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    /// Set the link to the list
    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = Some(value.into());
        self
    }

    /// Replace the items of the list
    pub fn items(mut self, items: impl IntoIterator<Item = T::Builder>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Append one item
    pub fn push(mut self, item: T::Builder) -> Self {
        self.items.push(item);
        self
    }

    /// True if the builder has no items and is not a link
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.link && self.href.is_none()
    }

    /// Reset the builder to mirror the given list
    pub fn copy(self, list: &List<T>) -> Self {
        Self {
            href: list.href.clone(),
            link: list.link,
            items: list.items.iter().map(T::to_builder).collect(),
        }
    }

    /// Build the list, stopping at the first item that fails
    pub fn build(&self) -> Result<List<T>, BuildError> {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::build_from(item).map_err(|source| BuildError::ListItem {
                    kind: T::LIST_KIND,
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(List {
            href: self.href.clone(),
            link: self.link,
            items,
        })
    }
}

impl<T: Buildable + ObjectType> FromIterator<T::Builder> for ListBuilder<T> {
    fn from_iter<I: IntoIterator<Item = T::Builder>>(iter: I) -> Self {
        Self::new().items(iter)
    }
}

impl<T> Serialize for List<T>
where
    T: Serialize + ObjectType,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.link && self.href.is_none() {
            let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
            for item in &self.items {
                seq.serialize_element(item)?;
            }
            return seq.end();
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", self.kind())?;
        if let Some(href) = &self.href {
            map.serialize_entry("href", href)?;
        }
        if !self.items.is_empty() {
            map.serialize_entry("items", &self.items)?;
        }
        map.end()
    }
}

impl<'de, T> Deserialize<'de> for List<T>
where
    T: Deserialize<'de> + ObjectType,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for ListVisitor<T>
        where
            T: Deserialize<'de> + ObjectType,
        {
            type Value = List<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an array or a `{}` object", T::LIST_KIND)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(List::new(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut list = List::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "kind" => {
                            let kind: Option<String> = map.next_value()?;
                            list.link = kind.as_deref() == Some(T::LIST_LINK_KIND);
                        }
                        "href" => list.href = map.next_value()?,
                        "items" => {
                            let items: Option<Vec<T>> = map.next_value()?;
                            list.items = items.unwrap_or_default();
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(list)
            }
        }

        deserializer.deserialize_any(ListVisitor(PhantomData))
    }
}
